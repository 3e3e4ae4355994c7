//! String helpers for extraction, tokenization and transformation
//!
//! This crate is a flat set of pure functions over `&str`, grouped by
//! concern and mirrored as methods on `str` through [`StrExt`]:
//!
//! - [`extract`]: left/right by count or marker, between positions or
//!   markers, around the midpoint
//! - [`words`]: words, sentences, word frequency, positional lookup
//! - [`classify`]: vowel, consonant, digit and special-character extraction,
//!   palindromes
//! - [`transform`]: reversal, truncation, targeted replacement, tag stripping
//! - [`patterns`]: pattern counting, regex-driven splitting, URL, phone
//!   number and SSN extraction
//!
//! Degenerate input (an empty string, an empty marker, an empty list) gives
//! an absent result, never an error. The only error is a malformed
//! caller-supplied pattern, reported as [`TextError::Pattern`].
//!
//! # Example
//!
//! ```rust
//! use strex_text::{MarkerOptions, StrExt};
//!
//! let text = "This is a sample string";
//!
//! assert_eq!(text.left(4).as_deref(), Some("This"));
//! assert_eq!(text.left(-4).as_deref(), Some("ring"));
//! assert_eq!(
//!     text.left_of("sample", &MarkerOptions::default()).as_deref(),
//!     Some("This is a ")
//! );
//! assert_eq!(
//!     text.left_of("sample", &MarkerOptions::inclusive()).as_deref(),
//!     Some("This is a sample")
//! );
//! assert_eq!("".left_of("sample", &MarkerOptions::default()), None);
//! ```

#![warn(missing_docs)]

mod chars;
pub mod classify;
pub mod config;
pub mod error;
pub mod ext;
pub mod extract;
pub mod frequency;
pub mod pattern_set;
pub mod patterns;
pub mod transform;
pub mod words;

pub use classify::CharClass;
pub use config::{FrequencyOptions, MarkerOptions, NthWordOptions, TruncateEnds};
pub use error::{Result, TextError};
pub use ext::StrExt;
pub use frequency::{FrequencyMap, SortOrder};
pub use pattern_set::{default_patterns, CompiledPatterns, PatternSet, PatternSetBuilder};
pub use patterns::PatternKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_are_complementary() {
        let text = "This is a sample string";
        let len = text.chars().count() as isize;
        for n in 0..=len {
            let joined = format!("{}{}", text.left(n).unwrap(), text.right(len - n).unwrap());
            assert_eq!(joined, text, "split at {n}");
        }
    }

    #[test]
    fn test_module_exports() {
        let _options: MarkerOptions = MarkerOptions::default();
        let _map: FrequencyMap = FrequencyMap::new();
        let _kind = PatternKind::default();
        let _class = CharClass::ALL[0];
        assert!(default_patterns().url.is_match("https://example.com"));
    }
}
