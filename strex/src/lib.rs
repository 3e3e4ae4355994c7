//! Extension methods for slices and strings
//!
//! This crate provides a single entry point to the two helper libraries:
//!
//! - [`seq`]: skip/take from either end of a slice and index-based selection
//! - [`text`]: marker extraction, tokenization, frequency counting,
//!   character classification, pattern extraction and text transforms
//!
//! Importing the [`prelude`] brings both extension traits into scope.
//!
//! # Example
//!
//! ```rust
//! use strex::prelude::*;
//!
//! let numbers = [10, 20, 30, 40];
//! assert_eq!(numbers.take_last(-2), Some(&[10, 20][..]));
//! assert_eq!(numbers.take_at_indices(Some(&[])), None);
//!
//! let text = "Contact: ops@example.com, https://example.com/status";
//! assert_eq!(
//!     text.right_of("contact:", &MarkerOptions::default()).as_deref(),
//!     Some(" ops@example.com, https://example.com/status")
//! );
//! assert_eq!(
//!     text.extract_urls(None).unwrap(),
//!     Some(vec!["https://example.com/status".to_string()])
//! );
//! ```

#![warn(missing_docs)]

pub use strex_seq as seq;
pub use strex_text as text;

// Re-export key types
pub use strex_seq::SliceExt;
pub use strex_text::{
    CharClass, FrequencyMap, FrequencyOptions, MarkerOptions, NthWordOptions, PatternKind,
    PatternSet, Result, SortOrder, StrExt, TextError, TruncateEnds,
};

/// Extension traits and the option types their methods take
pub mod prelude {
    pub use strex_seq::SliceExt;
    pub use strex_text::{
        FrequencyOptions, MarkerOptions, NthWordOptions, PatternKind, SortOrder, StrExt,
        TruncateEnds,
    };
}
