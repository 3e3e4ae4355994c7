//! Option structures for the text helpers
//!
//! Operations with optional knobs take one of these structures instead of a
//! list of trailing flags. `Default` gives the documented behaviour.

use crate::frequency::SortOrder;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Line ending produced by [`br_to_newlines`](crate::transform::br_to_newlines)
    #[cfg(windows)]
    pub const LINE_ENDING: &str = "\r\n";

    /// Line ending produced by [`br_to_newlines`](crate::transform::br_to_newlines)
    #[cfg(not(windows))]
    pub const LINE_ENDING: &str = "\n";

    /// Vowels, either case
    pub const VOWEL_PATTERN: &str = "[aeiouAEIOU]";

    /// Anything that is neither a vowel nor whitespace
    pub const NON_VOWEL_PATTERN: &str = r"[^aeiouAEIOU\s]";

    /// Any ASCII letter. Vowels match too.
    pub const CONSONANT_PATTERN: &str = "[a-zA-Z]";

    /// ASCII digits
    pub const DIGIT_PATTERN: &str = "[0-9]";

    /// Anything that is neither ASCII alphanumeric nor whitespace
    pub const SPECIAL_PATTERN: &str = r"[^a-zA-Z0-9\s]";
}

/// Options for marker-bounded extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOptions {
    /// Keep the marker text in the result
    pub include_marker: bool,
    /// Match the marker without regard to case
    pub ignore_case: bool,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            include_marker: false,
            ignore_case: true,
        }
    }
}

impl MarkerOptions {
    /// Default options with the marker kept in the result
    pub fn inclusive() -> Self {
        Self {
            include_marker: true,
            ..Self::default()
        }
    }

    /// Set whether the marker is kept in the result
    pub fn include_marker(mut self, include: bool) -> Self {
        self.include_marker = include;
        self
    }

    /// Set whether marker matching ignores case
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }
}

/// Options for word frequency analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyOptions {
    /// Group words without regard to case; keys are lower-cased
    pub ignore_case: bool,
    /// Ordering of the resulting map
    pub sort: SortOrder,
}

impl FrequencyOptions {
    /// Create options with the given ordering
    pub fn sorted(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Set whether grouping ignores case
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Set the ordering
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Options for positional word lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NthWordOptions {
    /// Look up in the de-duplicated word list
    pub unique: bool,
    /// Return the last word when the position is past the end
    pub last_if_overflow: bool,
}

impl Default for NthWordOptions {
    fn default() -> Self {
        Self {
            unique: false,
            last_if_overflow: true,
        }
    }
}

impl NthWordOptions {
    /// Set whether the unique word list is used
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the behaviour for positions past the end
    pub fn last_if_overflow(mut self, fallback: bool) -> Self {
        self.last_if_overflow = fallback;
        self
    }
}

/// Truncation applied to both ends of a string
///
/// The right side is truncated first, then the left side of the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateEnds {
    /// Characters removed from the right
    pub right: usize,
    /// Characters removed from the left
    pub left: usize,
    /// Text put in place of the right-hand cut
    pub right_replacement: String,
    /// Text put in place of the left-hand cut
    pub left_replacement: String,
}

impl TruncateEnds {
    /// Cut `left` and `right` characters, marking both cuts with `replacement`
    pub fn new(left: usize, right: usize, replacement: impl Into<String>) -> Self {
        let replacement = replacement.into();
        Self {
            right,
            left,
            right_replacement: replacement.clone(),
            left_replacement: replacement,
        }
    }

    /// Set the right-hand cut
    pub fn right(mut self, count: usize, replacement: impl Into<String>) -> Self {
        self.right = count;
        self.right_replacement = replacement.into();
        self
    }

    /// Set the left-hand cut
    pub fn left(mut self, count: usize, replacement: impl Into<String>) -> Self {
        self.left = count;
        self.left_replacement = replacement.into();
        self
    }
}
