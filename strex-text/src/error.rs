//! Error types for the text helpers
//!
//! Degenerate input never produces an error; it yields an absent or empty
//! result instead. Errors are reserved for patterns and pattern tables that
//! cannot be compiled or parsed.

use thiserror::Error;

/// Text helper errors
#[derive(Error, Debug)]
pub enum TextError {
    /// A caller-supplied regular expression failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern text
        pattern: String,
        /// The underlying compilation error
        #[source]
        source: regex::Error,
    },

    /// Pattern table is incomplete or inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// Pattern table is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for text helper operations
pub type Result<T> = std::result::Result<T, TextError>;
