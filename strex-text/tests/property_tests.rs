//! Property tests for the text helpers

use proptest::prelude::*;
use strex_text::{FrequencyMap, SortOrder, StrExt};

proptest! {
    #[test]
    fn left_and_right_complement(s in "\\PC{1,40}", cut in 0usize..64) {
        let len = s.chars().count();
        let n = cut.min(len);
        let left = s.left(n as isize).unwrap();
        let right = s.right((len - n) as isize).unwrap();
        prop_assert_eq!(format!("{left}{right}"), s);
    }

    #[test]
    fn reverse_is_an_involution(s in "[a-zA-Z \\t]{1,40}") {
        let by_chars = s.reverse(false).unwrap();
        prop_assert_eq!(by_chars.reverse(false).unwrap(), s.clone());

        let by_words = s.reverse(true).unwrap();
        prop_assert_eq!(by_words.reverse(true).unwrap(), s);
    }

    #[test]
    fn palindrome_matches_reversal(s in "[a-cA-CİiıIßΣσς]{1,12}") {
        let reversed = s.reverse(false).unwrap();
        prop_assert_eq!(s.is_palindrome(), reversed.to_lowercase() == s.to_lowercase());
    }

    #[test]
    fn palindrome_matches_reversal_for_any_text(s in "\\PC{1,16}") {
        let reversed = s.reverse(false).unwrap();
        prop_assert_eq!(s.is_palindrome(), reversed.to_lowercase() == s.to_lowercase());
    }

    #[test]
    fn mirrored_strings_are_palindromes(half in "[a-zA-Z]{1,10}") {
        let mirrored = format!("{half}{}", half.reverse(false).unwrap().to_uppercase());
        prop_assert!(mirrored.is_palindrome());
    }

    #[test]
    fn frequency_map_lookup_agrees_with_entries(
        keys in prop::collection::vec("[a-f]{1,3}", 0..200),
    ) {
        let map = FrequencyMap::from_keys(keys.iter().map(String::as_str))
            .sorted(SortOrder::Descending);
        let total: usize = map.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, keys.len());
        for (key, count) in map.iter() {
            prop_assert_eq!(map.get(key), Some(count));
        }
    }
}
