//! Character classification
//!
//! Each class is a single-character regular expression. Note that
//! [`CharClass::Consonant`] matches any ASCII letter, vowels included; this
//! mirrors the established behaviour of the helpers and is kept as is.

use crate::config::defaults;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

static CLASS_PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();

/// Character class recognised by the extraction helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `a e i o u`, either case
    Vowel,
    /// Neither a vowel nor whitespace
    NonVowel,
    /// Any ASCII letter (vowels included)
    Consonant,
    /// ASCII digit
    Digit,
    /// Neither ASCII alphanumeric nor whitespace
    Special,
}

impl CharClass {
    /// All classes
    pub const ALL: [CharClass; 5] = [
        CharClass::Vowel,
        CharClass::NonVowel,
        CharClass::Consonant,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Regular expression source for this class
    pub fn pattern(self) -> &'static str {
        match self {
            CharClass::Vowel => defaults::VOWEL_PATTERN,
            CharClass::NonVowel => defaults::NON_VOWEL_PATTERN,
            CharClass::Consonant => defaults::CONSONANT_PATTERN,
            CharClass::Digit => defaults::DIGIT_PATTERN,
            CharClass::Special => defaults::SPECIAL_PATTERN,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Compiled pattern, shared across calls
    pub fn regex(self) -> &'static Regex {
        let patterns = CLASS_PATTERNS.get_or_init(|| {
            CharClass::ALL.map(|class| {
                Regex::new(class.pattern()).expect("Character class patterns must compile")
            })
        });
        &patterns[self.index()]
    }

    /// Whether `ch` belongs to this class
    pub fn matches(self, ch: char) -> bool {
        let mut buffer = [0u8; 4];
        self.regex().is_match(ch.encode_utf8(&mut buffer))
    }
}

/// Chars of `s` in `class`, in order, optionally de-duplicated
///
/// Returns `None` when `s` is empty or nothing matches.
pub fn extract_class(s: &str, class: CharClass, unique: bool) -> Option<Vec<char>> {
    let mut found: Vec<char> = class
        .regex()
        .find_iter(s)
        .filter_map(|m| m.as_str().chars().next())
        .collect();
    if found.is_empty() {
        return None;
    }

    if unique {
        let mut seen = HashSet::new();
        found.retain(|ch| seen.insert(*ch));
    }
    Some(found)
}

/// Number of chars of `s` in `class`
pub fn count_class(s: &str, class: CharClass, unique: bool) -> usize {
    extract_class(s, class, unique).map_or(0, |found| found.len())
}

/// Vowels of `s`
pub fn vowels(s: &str, unique: bool) -> Option<Vec<char>> {
    extract_class(s, CharClass::Vowel, unique)
}

/// Number of vowels in `s`
pub fn vowel_count(s: &str, unique: bool) -> usize {
    count_class(s, CharClass::Vowel, unique)
}

/// Non-whitespace chars of `s` that are not vowels
pub fn non_vowels(s: &str, unique: bool) -> Option<Vec<char>> {
    extract_class(s, CharClass::NonVowel, unique)
}

/// Number of non-vowels in `s`
pub fn non_vowel_count(s: &str, unique: bool) -> usize {
    count_class(s, CharClass::NonVowel, unique)
}

/// Letters of `s`
///
/// Vowels are included; see [`CharClass::Consonant`].
pub fn consonants(s: &str, unique: bool) -> Option<Vec<char>> {
    extract_class(s, CharClass::Consonant, unique)
}

/// Number of letters in `s`
pub fn consonant_count(s: &str, unique: bool) -> usize {
    count_class(s, CharClass::Consonant, unique)
}

/// Digits of `s`
pub fn digits(s: &str, unique: bool) -> Option<Vec<char>> {
    extract_class(s, CharClass::Digit, unique)
}

/// Number of digits in `s`
pub fn digit_count(s: &str, unique: bool) -> usize {
    count_class(s, CharClass::Digit, unique)
}

/// Punctuation, symbols and other non-alphanumeric, non-whitespace chars
pub fn special_chars(s: &str, unique: bool) -> Option<Vec<char>> {
    extract_class(s, CharClass::Special, unique)
}

/// Number of special chars in `s`
pub fn special_char_count(s: &str, unique: bool) -> usize {
    count_class(s, CharClass::Special, unique)
}

/// Whether `s` reads the same reversed, ignoring case
///
/// The empty string is not a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let reversed: String = s.chars().rev().collect();
    reversed.to_lowercase() == s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        assert_eq!(vowels("Education", false), Some(vec!['E', 'u', 'a', 'i', 'o']));
        assert_eq!(vowel_count("banana", false), 3);
        assert_eq!(vowel_count("banana", true), 1);
        assert_eq!(vowels("rhythm", false), None);
    }

    #[test]
    fn test_non_vowels_skip_whitespace() {
        assert_eq!(non_vowels("a b-1", false), Some(vec!['b', '-', '1']));
    }

    #[test]
    fn test_consonants_match_any_letter() {
        assert_eq!(consonants("ab1", false), Some(vec!['a', 'b']));
        assert_eq!(consonant_count("Aa e", true), 3);
    }

    #[test]
    fn test_digits_and_specials() {
        assert_eq!(digits("r2d2", true), Some(vec!['2']));
        assert_eq!(digit_count("r2d2", false), 2);
        assert_eq!(special_chars("hi! (you)", false), Some(vec!['!', '(', ')']));
        assert_eq!(special_char_count("", false), 0);
    }

    #[test]
    fn test_class_matches() {
        assert!(CharClass::Vowel.matches('U'));
        assert!(!CharClass::Vowel.matches('y'));
        assert!(CharClass::Special.matches('é'));
        assert!(CharClass::Consonant.matches('e'));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("Racecar"));
        assert!(is_palindrome("x"));
        assert!(!is_palindrome("palindrome"));
        assert!(!is_palindrome(""));
    }

    #[test]
    fn test_palindrome_with_expanding_lowercase() {
        // 'İ' lowercases to 'i' followed by a combining dot
        assert!(is_palindrome("İ"));
        assert!(is_palindrome("aİa"));
        assert!(!is_palindrome("aİb"));
    }
}
