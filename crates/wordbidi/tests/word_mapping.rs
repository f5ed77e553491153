//! Word mapping against the bundled unicode-bidi engine
//!
//! Covers the documented scenarios plus properties that must hold for any
//! input: pass-through for undirected paragraphs, no duplicated slots,
//! identity for Latin text in LTR paragraphs, and determinism.

#![cfg(feature = "unicode")]

use std::sync::Arc;

use proptest::prelude::*;
use wordbidi::prelude::*;
use wordbidi::{map_words, UnicodeBidiEngine};

fn pairs(mapped: &[WordCorrespondence]) -> Vec<(&str, usize)> {
    mapped
        .iter()
        .map(|c| (c.text.as_str(), c.visual_index))
        .collect()
}

#[test]
fn test_hello_world_ltr() {
    let mapped = map_words(&["hello", "world"], Direction::Ltr, true).unwrap();
    assert_eq!(pairs(&mapped), vec![("hello", 0), ("world", 1)]);
}

#[test]
fn test_two_rtl_words_swap_visual_order() {
    let mapped = map_words(&["שלום", "עולם"], "RTL", true).unwrap();
    assert_eq!(pairs(&mapped), vec![("םולש", 1), ("םלוע", 0)]);
    assert_eq!(mapped[0].logical_index, 0);
    assert_eq!(mapped[1].logical_index, 1);
}

#[test]
fn test_arabic_sentence_with_number() {
    let words: Vec<&str> = "الرياض هو فريق كرة قدم عربي يضم 123 لاعبًا باهظ الثمن"
        .split_whitespace()
        .collect();
    let mapped = map_words(&words, "rtl", true).unwrap();
    assert_eq!(mapped.len(), words.len());
    for (idx, c) in mapped.iter().enumerate() {
        assert_eq!(c.logical_index, idx);
        assert_eq!(c.visual_index, words.len() - 1 - idx);
    }
    assert_eq!(mapped[7].text, "123");
}

#[test]
fn test_hebrew_inside_ltr_paragraph() {
    let mapped = map_words(&["hello", "שלום", "עולם", "bye"], "ltr", true).unwrap();
    assert_eq!(
        pairs(&mapped),
        vec![("hello", 0), ("םולש", 2), ("םלוע", 1), ("bye", 3)]
    );
}

#[test]
fn test_mark_only_word_is_dropped() {
    let mapped = map_words(&["hello", "\u{200F}", "world"], "LTR", true).unwrap();
    let slots: Vec<(usize, usize)> = mapped
        .iter()
        .map(|c| (c.logical_index, c.visual_index))
        .collect();
    assert_eq!(slots, vec![(0, 0), (2, 1)]);
}

#[test]
fn test_mark_only_word_fails_under_error_policy() {
    let mapper = WordMapper::new(Arc::new(UnicodeBidiEngine::new()))
        .with_policy(UnmatchedWordPolicy::Error);
    let err = mapper
        .map_words(&["hello", "\u{200F}", "world"], "LTR", true)
        .unwrap_err();
    assert!(matches!(err, WordBidiError::UnmatchedWord { index: 1, .. }));
}

#[test]
fn test_uncleaned_mark_keeps_its_slot() {
    let mapped = map_words(&["hello", "\u{200F}", "world"], "LTR", false).unwrap();
    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped[1].text, "\u{200F}");
}

#[test]
fn test_empty_words_fail() {
    let empty: Vec<String> = Vec::new();
    let err = map_words(&empty, "RTL", true).unwrap_err();
    assert!(matches!(err, WordBidiError::InvalidArgument(_)));
}

#[test]
fn test_paragraph_separator_inside_word_fails() {
    let err = map_words(&["ab\u{1C}cd", "אב"], "RTL", true).unwrap_err();
    assert!(matches!(err, WordBidiError::InvalidArgument(_)));
}

#[test]
fn test_unknown_direction_fails() {
    let err = map_words(&["hello"], "rll", true).unwrap_err();
    assert!(matches!(err, WordBidiError::InvalidDirection { .. }));
}

#[test]
fn test_natural_passes_through() {
    let words = ["שלום", "hello", "עולם"];
    for dir in [Direction::Natural, Direction::WeakLtr, Direction::WeakRtl] {
        let mapped = map_words(&words, dir, true).unwrap();
        let expected: Vec<(&str, usize)> =
            words.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        assert_eq!(pairs(&mapped), expected);
    }
}

#[test]
fn test_mapper_from_config() {
    let config = Config {
        on_unmatched: UnmatchedWordPolicy::Error,
        ..Config::default()
    };
    let mapper = WordMapper::from_config(Arc::new(UnicodeBidiEngine::new()), &config);
    assert_eq!(mapper.policy(), UnmatchedWordPolicy::Error);
    let mapped = mapper.map_words(&["abc", "(שלום)"], config.direction, config.clean).unwrap();
    assert_eq!(mapped.len(), 2);
}

fn word_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Zא-ת0-9]{1,8}", 1..12)
}

proptest! {
    #[test]
    fn prop_cardinality_bound(words in word_strategy(), rtl in any::<bool>()) {
        let dir = if rtl { Direction::Rtl } else { Direction::Ltr };
        let mapped = map_words(&words, dir, true).unwrap();
        prop_assert!(mapped.len() <= words.len());
        let mut slots: Vec<usize> = mapped.iter().map(|c| c.logical_index).collect();
        let before = slots.len();
        slots.dedup();
        prop_assert_eq!(slots.len(), before);
    }

    #[test]
    fn prop_ltr_latin_identity(words in prop::collection::vec("[a-zA-Z]{1,10}", 1..12)) {
        let mapped = map_words(&words, Direction::Ltr, true).unwrap();
        prop_assert_eq!(mapped.len(), words.len());
        for (idx, c) in mapped.iter().enumerate() {
            prop_assert_eq!(c.visual_index, idx);
            prop_assert_eq!(&c.text, &words[idx]);
        }
    }

    #[test]
    fn prop_natural_pass_through(words in word_strategy()) {
        let mapped = map_words(&words, Direction::Natural, true).unwrap();
        for (idx, c) in mapped.iter().enumerate() {
            prop_assert_eq!(c.visual_index, idx);
            prop_assert_eq!(&c.text, &words[idx]);
        }
    }

    #[test]
    fn prop_deterministic(words in word_strategy(), rtl in any::<bool>()) {
        let dir = if rtl { "RTL" } else { "LTR" };
        prop_assert_eq!(
            map_words(&words, dir, true).unwrap(),
            map_words(&words, dir, true).unwrap()
        );
    }

    #[test]
    fn prop_pure_hebrew_rtl_reverses(words in prop::collection::vec("[א-ת]{1,6}", 1..10)) {
        let mapped = map_words(&words, Direction::Rtl, true).unwrap();
        prop_assert_eq!(mapped.len(), words.len());
        for (idx, c) in mapped.iter().enumerate() {
            prop_assert_eq!(c.visual_index, words.len() - 1 - idx);
            prop_assert_eq!(c.text.chars().rev().collect::<String>(), words[idx].clone());
        }
    }
}
