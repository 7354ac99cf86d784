//! Property-based tests for `transliterate`.

use proptest::prelude::*;

use super::{is_cyrillic, transliterate, CharacterMap};

fn arb_mixed_text() -> impl Strategy<Value = String> {
    let table: Vec<char> = CharacterMap::global().iter().map(|(c, _)| c).collect();
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(table),
            1 => any::<char>(),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn identity_without_cyrillic_or_space(s in "[^\u{0400}-\u{04FF} ]*") {
        prop_assert_eq!(transliterate(&s), s);
    }

    #[test]
    fn second_pass_is_noop(s in arb_mixed_text()) {
        let once = transliterate(&s);
        prop_assert_eq!(transliterate(&once), once.clone());
    }

    #[test]
    fn output_has_no_table_chars(s in arb_mixed_text()) {
        let map = CharacterMap::global();
        let out = transliterate(&s);
        prop_assert!(out.chars().all(|c| !map.contains(c)));
    }

    #[test]
    fn per_char_expansion_is_bounded(s in arb_mixed_text()) {
        let out = transliterate(&s);
        prop_assert!(out.chars().count() <= 3 * s.chars().count());
    }

    #[test]
    fn concatenation_distributes(a in arb_mixed_text(), b in arb_mixed_text()) {
        let joined = format!("{a}{b}");
        prop_assert_eq!(transliterate(&joined), transliterate(&a) + &transliterate(&b));
    }

    #[test]
    fn spaces_become_underscores(n in 0usize..64) {
        prop_assert_eq!(transliterate(&" ".repeat(n)), "_".repeat(n));
    }

    #[test]
    fn cyrillic_outside_table_is_kept(cp in 0x0400u32..=0x04FF) {
        let c = char::from_u32(cp).unwrap();
        prop_assume!(is_cyrillic(c) && !CharacterMap::global().contains(c));
        prop_assert_eq!(transliterate(&c.to_string()), c.to_string());
    }
}
