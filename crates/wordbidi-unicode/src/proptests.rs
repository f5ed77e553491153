use super::*;
use proptest::prelude::*;

fn reorder_all_maps(text: &str, direction: Direction, clean: bool) -> Reordered {
    UnicodeBidiEngine::new()
        .reorder(
            text,
            direction,
            &ReorderOptions::default().clean(clean).with_all_maps(),
        )
        .unwrap()
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

// Property: without cleaning, V2L is a permutation of the logical indices
proptest! {
    #[test]
    fn prop_v2l_is_permutation(s in "[a-zA-Z א-ת0-9().,-]{0,50}", dir in any_direction()) {
        let result = reorder_all_maps(&s, dir, false);
        let mut v2l = result.v2l.unwrap();
        v2l.sort_unstable();
        prop_assert_eq!(v2l, (0..s.chars().count()).collect::<Vec<_>>());
    }
}

// Property: L2V and V2L are inverse of each other, with or without cleaning
proptest! {
    #[test]
    fn prop_maps_are_inverse(s in "[a-z א-ת\u{200E}\u{200F}\u{202B}\u{202C}]{0,40}", clean in any::<bool>()) {
        let result = reorder_all_maps(&s, Direction::Rtl, clean);
        let v2l = result.v2l.unwrap();
        let l2v = result.l2v.unwrap();
        prop_assert_eq!(l2v.len(), s.chars().count());
        prop_assert_eq!(v2l.len(), result.visual.chars().count());
        for (v, &l) in v2l.iter().enumerate() {
            prop_assert_eq!(l2v[l], Some(v));
        }
        prop_assert_eq!(l2v.iter().flatten().count(), v2l.len());
    }
}

// Property: cleaned output never carries bidi marks
proptest! {
    #[test]
    fn prop_clean_output_has_no_marks(s in "[a-z א-ת\u{200E}\u{200F}\u{202A}-\u{202E}\u{2066}-\u{2069}]{0,40}") {
        let result = reorder_all_maps(&s, Direction::Natural, true);
        prop_assert!(!result.visual.chars().any(is_bidi_mark));
    }
}

// Property: pure Latin text in an LTR paragraph is left alone
proptest! {
    #[test]
    fn prop_ltr_latin_identity(s in "[a-zA-Z ]{0,60}") {
        let result = reorder_all_maps(&s, Direction::Ltr, true);
        prop_assert_eq!(&result.visual, &s);
        prop_assert_eq!(result.v2l.unwrap(), (0..s.chars().count()).collect::<Vec<_>>());
    }
}

// Property: reordering is deterministic
proptest! {
    #[test]
    fn prop_reorder_deterministic(s in "\\PC{0,50}", dir in any_direction()) {
        let first = reorder_all_maps(&s, dir, true);
        let second = reorder_all_maps(&s, dir, true);
        prop_assert_eq!(first, second);
    }
}
