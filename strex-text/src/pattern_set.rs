//! Default regular expressions and their TOML table
//!
//! The defaults live in `configs/patterns.toml`, which is embedded at build
//! time and compiled once on first use. Callers can load another table with
//! [`PatternSet::from_toml_str`]; entries it leaves out keep their defaults.

use crate::error::{Result, TextError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::OnceLock;

const EMBEDDED_TABLE: &str = include_str!("../configs/patterns.toml");

static DEFAULT_SET: OnceLock<PatternSet> = OnceLock::new();
static DEFAULT_COMPILED: OnceLock<CompiledPatterns> = OnceLock::new();

/// Regular expressions used by the extraction helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    /// URLs
    pub url: String,
    /// North American phone numbers
    pub phone: String,
    /// US social security numbers
    pub ssn: String,
    /// Any HTML tag
    pub html_tag: String,
    /// HTML line-break tags
    pub line_break: String,
}

/// Table layout of a pattern file
#[derive(Debug, Deserialize)]
struct PatternTable {
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default)]
    patterns: PatternOverrides,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct PatternOverrides {
    url: Option<String>,
    phone: Option<String>,
    ssn: Option<String>,
    html_tag: Option<String>,
    line_break: Option<String>,
}

impl PatternOverrides {
    fn apply(self, base: &mut PatternSet) {
        let PatternOverrides {
            url,
            phone,
            ssn,
            html_tag,
            line_break,
        } = self;

        for (slot, value) in [
            (&mut base.url, url),
            (&mut base.phone, phone),
            (&mut base.ssn, ssn),
            (&mut base.html_tag, html_tag),
            (&mut base.line_break, line_break),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    fn into_complete(self) -> Result<PatternSet> {
        fn require(value: Option<String>, key: &str) -> Result<String> {
            value.ok_or_else(|| TextError::Config(format!("missing pattern '{key}'")))
        }

        Ok(PatternSet {
            url: require(self.url, "url")?,
            phone: require(self.phone, "phone")?,
            ssn: require(self.ssn, "ssn")?,
            html_tag: require(self.html_tag, "html_tag")?,
            line_break: require(self.line_break, "line_break")?,
        })
    }
}

fn load_embedded() -> Result<PatternSet> {
    let table: PatternTable = toml::from_str(EMBEDDED_TABLE)?;
    if let Some(metadata) = &table.metadata {
        log::debug!("loading embedded pattern table '{}'", metadata.name);
    }
    let set = table.patterns.into_complete()?;
    set.validate()?;
    Ok(set)
}

impl Default for PatternSet {
    fn default() -> Self {
        DEFAULT_SET
            .get_or_init(|| load_embedded().expect("Failed to load embedded pattern table"))
            .clone()
    }
}

impl PatternSet {
    /// Load a pattern table, filling missing entries from the defaults
    ///
    /// ```rust
    /// use strex_text::PatternSet;
    ///
    /// let set = PatternSet::from_toml_str("[patterns]\nssn = '[0-9]{9}'").unwrap();
    /// assert_eq!(set.ssn, "[0-9]{9}");
    /// assert_eq!(set.url, PatternSet::default().url);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: PatternTable = toml::from_str(content)?;
        if let Some(metadata) = &table.metadata {
            log::debug!("loading pattern table '{}'", metadata.name);
        }

        let mut set = Self::default();
        table.patterns.apply(&mut set);
        set.validate()?;
        Ok(set)
    }

    /// Create a builder starting from the defaults
    pub fn builder() -> PatternSetBuilder {
        PatternSetBuilder::default()
    }

    /// Check that every pattern is present and compiles
    pub fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }

    /// Compile every pattern
    pub fn compile(&self) -> Result<CompiledPatterns> {
        for (key, pattern) in self.entries() {
            if pattern.is_empty() {
                return Err(TextError::Config(format!("pattern '{key}' is empty")));
            }
        }

        Ok(CompiledPatterns {
            url: compile(&self.url)?,
            phone: compile(&self.phone)?,
            ssn: compile(&self.ssn)?,
            html_tag: compile(&self.html_tag)?,
            line_break: compile(&self.line_break)?,
        })
    }

    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("url", self.url.as_str()),
            ("phone", self.phone.as_str()),
            ("ssn", self.ssn.as_str()),
            ("html_tag", self.html_tag.as_str()),
            ("line_break", self.line_break.as_str()),
        ]
    }
}

/// Fluent builder for [`PatternSet`]
#[derive(Debug, Default)]
pub struct PatternSetBuilder {
    overrides: PatternOverrides,
}

impl PatternSetBuilder {
    /// Override the URL pattern
    pub fn url(mut self, pattern: impl Into<String>) -> Self {
        self.overrides.url = Some(pattern.into());
        self
    }

    /// Override the phone number pattern
    pub fn phone(mut self, pattern: impl Into<String>) -> Self {
        self.overrides.phone = Some(pattern.into());
        self
    }

    /// Override the SSN pattern
    pub fn ssn(mut self, pattern: impl Into<String>) -> Self {
        self.overrides.ssn = Some(pattern.into());
        self
    }

    /// Override the HTML tag pattern
    pub fn html_tag(mut self, pattern: impl Into<String>) -> Self {
        self.overrides.html_tag = Some(pattern.into());
        self
    }

    /// Override the line-break tag pattern
    pub fn line_break(mut self, pattern: impl Into<String>) -> Self {
        self.overrides.line_break = Some(pattern.into());
        self
    }

    /// Build and validate the pattern set
    pub fn build(self) -> Result<PatternSet> {
        let mut set = PatternSet::default();
        self.overrides.apply(&mut set);
        set.validate()?;
        Ok(set)
    }
}

/// Compiled form of a [`PatternSet`]
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// URLs
    pub url: Regex,
    /// Phone numbers
    pub phone: Regex,
    /// Social security numbers
    pub ssn: Regex,
    /// HTML tags
    pub html_tag: Regex,
    /// Line-break tags
    pub line_break: Regex,
}

/// Compiled default patterns, shared across calls
pub fn default_patterns() -> &'static CompiledPatterns {
    DEFAULT_COMPILED.get_or_init(|| {
        PatternSet::default()
            .compile()
            .expect("Embedded patterns must compile")
    })
}

/// Compile a caller-supplied pattern
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    log::debug!("compiling pattern {pattern:?}");
    Regex::new(pattern).map_err(|source| TextError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Use `custom` when given, otherwise the shared default
pub(crate) fn resolve<'a>(custom: Option<&str>, default: &'a Regex) -> Result<Cow<'a, Regex>> {
    match custom {
        Some(pattern) => compile(pattern).map(Cow::Owned),
        None => Ok(Cow::Borrowed(default)),
    }
}
