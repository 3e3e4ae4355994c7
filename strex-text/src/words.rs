//! Word and sentence tokenization
//!
//! Words are maximal runs of non-whitespace. Sentences are the pieces between
//! periods; there is no abbreviation handling, so `"Dr. Smith"` splits in
//! two.

use crate::config::{FrequencyOptions, NthWordOptions};
use crate::frequency::FrequencyMap;
use std::collections::HashSet;

/// Whitespace-separated words, optionally de-duplicated
///
/// De-duplication is case-sensitive and keeps first occurrences. Returns
/// `None` for empty or whitespace-only input.
pub fn words(s: &str, unique: bool) -> Option<Vec<&str>> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    if unique {
        let mut seen = HashSet::new();
        tokens.retain(|word| seen.insert(*word));
    }
    Some(tokens)
}

/// Number of words, `0` for empty input
pub fn word_count(s: &str, unique: bool) -> usize {
    words(s, unique).map_or(0, |tokens| tokens.len())
}

/// Occurrence count of every word
///
/// ```rust
/// use strex_text::{FrequencyOptions, SortOrder};
/// use strex_text::words::word_frequency;
///
/// let options = FrequencyOptions::sorted(SortOrder::Descending).ignore_case(true);
/// let counts = word_frequency("the cat saw The dog", &options).unwrap();
/// assert_eq!(counts.iter().next(), Some(("the", 2)));
/// ```
pub fn word_frequency(s: &str, options: &FrequencyOptions) -> Option<FrequencyMap> {
    let tokens = words(s, false)?;
    let map: FrequencyMap = if options.ignore_case {
        tokens.into_iter().map(str::to_lowercase).collect()
    } else {
        tokens.into_iter().collect()
    };
    Some(map.sorted(options.sort))
}

/// The `|n|`-th word, counting from one
///
/// `n == 0` has no word. Past the end, the last word is returned when
/// `last_if_overflow` is set and `None` otherwise.
pub fn nth_word<'a>(s: &'a str, n: isize, options: &NthWordOptions) -> Option<&'a str> {
    let position = n.unsigned_abs();
    if position == 0 {
        return None;
    }

    let tokens = words(s, options.unique)?;
    match tokens.get(position - 1) {
        Some(word) => Some(*word),
        None if options.last_if_overflow => {
            log::trace!(
                "word {position} requested from {} words, using the last",
                tokens.len()
            );
            tokens.last().copied()
        }
        None => None,
    }
}

/// Pieces between periods, trimmed, with empty pieces dropped
pub fn sentences(s: &str) -> Option<Vec<&str>> {
    let pieces: Vec<&str> = s
        .split('.')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();
    if pieces.is_empty() {
        None
    } else {
        Some(pieces)
    }
}

/// Number of sentences, `0` for empty input
pub fn sentence_count(s: &str) -> usize {
    sentences(s).map_or(0, |pieces| pieces.len())
}
