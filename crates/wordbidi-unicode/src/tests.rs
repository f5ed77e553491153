// this_file: crates/wordbidi-unicode/src/tests.rs

use super::*;

const HELLO_SHALOM: &str = "hello - שלום";

fn visual(text: &str, direction: Direction) -> String {
    UnicodeBidiEngine::new()
        .reorder(text, direction, &ReorderOptions::default())
        .unwrap()
        .visual
}

#[test]
fn test_empty_text() {
    let engine = UnicodeBidiEngine::new();
    let options = ReorderOptions::default().with_all_maps();
    let result = engine.reorder("", Direction::Rtl, &options).unwrap();
    assert_eq!(result.visual, "");
    assert_eq!(result.base, Direction::Rtl);
    assert_eq!(result.v2l, Some(Vec::new()));
    assert_eq!(result.l2v, Some(Vec::new()));
    assert_eq!(result.levels, Some(Vec::new()));
}

#[test]
fn test_big_string() {
    // No size limits: a long single-script run reads the same both ways.
    let big = "א".repeat(256 * 1024);
    assert_eq!(visual(&big, Direction::Rtl), big);
}

#[test]
fn test_as_rtl() {
    assert_eq!(visual(HELLO_SHALOM, Direction::Rtl), "םולש - hello");
}

#[test]
fn test_as_ltr() {
    assert_eq!(visual(HELLO_SHALOM, Direction::Ltr), "hello - םולש");
}

#[test]
fn test_natural_ltr() {
    assert_eq!(visual(HELLO_SHALOM, Direction::Natural), "hello - םולש");
}

#[test]
fn test_natural_rtl() {
    assert_eq!(visual("שלום - hello", Direction::Natural), "hello - םולש");
}

#[test]
fn test_weak_directions_fall_back_on_neutral_text() {
    let engine = UnicodeBidiEngine::new();
    let options = ReorderOptions::default();

    let weak_rtl = engine.reorder("123 !", Direction::WeakRtl, &options).unwrap();
    assert_eq!(weak_rtl.base, Direction::Rtl);

    let weak_ltr = engine.reorder("123 !", Direction::WeakLtr, &options).unwrap();
    assert_eq!(weak_ltr.base, Direction::Ltr);

    let strong_wins = engine.reorder("abc", Direction::WeakRtl, &options).unwrap();
    assert_eq!(strong_wins.base, Direction::Ltr);
}

#[test]
fn test_reorder_non_spacing_marks() {
    let logical = "\u{05D7}\u{05B7}\u{05D9}\u{05B0}\u{05E4}\u{05B7}\u{05D0}";
    assert_eq!(
        visual(logical, Direction::Rtl),
        "\u{05D0}\u{05E4}\u{05B7}\u{05D9}\u{05B0}\u{05D7}\u{05B7}"
    );
}

#[test]
fn test_no_reorder_non_spacing_marks() {
    let logical = "\u{05D7}\u{05B7}\u{05D9}\u{05B0}\u{05E4}\u{05B7}\u{05D0}";
    let engine = UnicodeBidiEngine::new();
    let options = ReorderOptions::default().reorder_nsm(false);
    let result = engine.reorder(logical, Direction::Rtl, &options).unwrap();
    assert_eq!(
        result.visual,
        "\u{05D0}\u{05B7}\u{05E4}\u{05B0}\u{05D9}\u{05B7}\u{05D7}"
    );
}

#[test]
fn test_clean_removes_marks_and_compacts_maps() {
    let engine = UnicodeBidiEngine::new();
    let text = "a\u{200F}b";

    let cleaned = engine
        .reorder(text, Direction::Ltr, &ReorderOptions::default().with_all_maps())
        .unwrap();
    assert_eq!(cleaned.visual, "ab");
    assert_eq!(cleaned.v2l, Some(vec![0, 2]));
    assert_eq!(cleaned.l2v, Some(vec![Some(0), None, Some(1)]));
    assert_eq!(cleaned.levels.map(|levels| levels.len()), Some(3));

    let raw = engine
        .reorder(
            text,
            Direction::Ltr,
            &ReorderOptions::default().clean(false).with_v2l(),
        )
        .unwrap();
    assert_eq!(raw.visual, text);
    assert_eq!(raw.v2l, Some(vec![0, 1, 2]));
}

#[test]
fn test_bidi_marks() {
    assert!(is_bidi_mark('\u{200E}'));
    assert!(is_bidi_mark('\u{202B}'));
    assert!(is_bidi_mark('\u{2067}'));
    assert!(!is_bidi_mark('a'));
    assert!(!is_bidi_mark('ש'));
}

#[test]
fn test_mirroring_in_rtl_runs() {
    let engine = UnicodeBidiEngine::new();

    let mirrored = engine
        .reorder("(ש)", Direction::Rtl, &ReorderOptions::default())
        .unwrap();
    assert_eq!(mirrored.visual, "(ש)");

    let plain = engine
        .reorder("(ש)", Direction::Rtl, &ReorderOptions::default().mirror(false))
        .unwrap();
    assert_eq!(plain.visual, ")ש(");
}

#[test]
fn test_math_operators_mirror_in_rtl_runs() {
    let engine = UnicodeBidiEngine::new();
    let options = ReorderOptions::default();

    let element = engine.reorder("א\u{2208}ב", Direction::Rtl, &options).unwrap();
    assert_eq!(element.visual, "ב\u{220B}א");

    let much_less = engine.reorder("א\u{226A}ב", Direction::Rtl, &options).unwrap();
    assert_eq!(much_less.visual, "ב\u{226B}א");

    // Left-to-right runs keep the original glyph
    let ltr = engine.reorder("a\u{2208}b", Direction::Ltr, &options).unwrap();
    assert_eq!(ltr.visual, "a\u{2208}b");
}

#[test]
fn test_levels_and_maps_for_mixed_line() {
    let engine = UnicodeBidiEngine::new();
    let result = engine
        .reorder(
            "abc אבג",
            Direction::Ltr,
            &ReorderOptions::default().with_all_maps(),
        )
        .unwrap();
    assert_eq!(result.visual, "abc גבא");
    assert_eq!(result.v2l, Some(vec![0, 1, 2, 3, 6, 5, 4]));
    assert_eq!(
        result.l2v,
        Some(vec![Some(0), Some(1), Some(2), Some(3), Some(6), Some(5), Some(4)])
    );
    assert_eq!(result.levels, Some(vec![0, 0, 0, 0, 1, 1, 1]));
}

#[test]
fn test_paragraphs_keep_logical_order() {
    let engine = UnicodeBidiEngine::new();
    let result = engine
        .reorder(
            "abc\nאבג",
            Direction::Natural,
            &ReorderOptions::default().with_v2l(),
        )
        .unwrap();
    assert_eq!(result.visual, "abc\nגבא");
    assert_eq!(result.base, Direction::Ltr);
    assert_eq!(result.v2l, Some(vec![0, 1, 2, 3, 6, 5, 4]));
}

#[test]
fn test_unrequested_maps_stay_empty() {
    let result = UnicodeBidiEngine::new()
        .reorder(HELLO_SHALOM, Direction::Rtl, &ReorderOptions::default())
        .unwrap();
    assert!(result.v2l.is_none());
    assert!(result.l2v.is_none());
    assert!(result.levels.is_none());
}

#[test]
fn test_capabilities() {
    let engine = UnicodeBidiEngine::new();
    let caps = engine.capabilities();
    assert_eq!(caps.engine, "unicode-bidi");
    assert_eq!(engine.name(), "unicode-bidi");
    assert!(Direction::ALL.iter().all(|&dir| caps.supports(dir)));
    assert!(!caps.unicode_version.is_empty());
}
