//! Pattern counting, regex-driven splitting and value extraction

use crate::error::Result;
use crate::pattern_set::{compile, default_patterns, resolve};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How [`pattern_frequency`] interprets its pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Plain substring
    #[default]
    Literal,
    /// Regular expression
    Regex,
}

/// Number of non-overlapping occurrences of `pattern` in `s`
///
/// An empty source or an empty literal counts as zero.
pub fn pattern_frequency(s: &str, pattern: &str, kind: PatternKind) -> Result<usize> {
    if s.is_empty() {
        return Ok(0);
    }

    match kind {
        PatternKind::Literal if pattern.is_empty() => Ok(0),
        PatternKind::Literal => Ok(s.matches(pattern).count()),
        PatternKind::Regex => Ok(compile(pattern)?.find_iter(s).count()),
    }
}

/// Split `s` on the text matched by `pattern`
///
/// The distinct matched substrings become literal delimiters, longest
/// first, and every occurrence of any of them splits the string. Empty
/// pieces are kept. Returns `None` when the pattern matches nothing.
///
/// ```rust
/// use strex_text::patterns::split_by_regex;
///
/// let pieces = split_by_regex("a1b22c", "[0-9]+").unwrap().unwrap();
/// assert_eq!(pieces, ["a", "b", "c"]);
/// ```
pub fn split_by_regex(s: &str, pattern: &str) -> Result<Option<Vec<String>>> {
    let matcher = compile(pattern)?;

    let mut delimiters: Vec<&str> = Vec::new();
    for found in matcher.find_iter(s) {
        if !found.as_str().is_empty() && !delimiters.contains(&found.as_str()) {
            delimiters.push(found.as_str());
        }
    }
    if delimiters.is_empty() {
        return Ok(None);
    }

    delimiters.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = delimiters
        .iter()
        .map(|delimiter| regex::escape(delimiter))
        .collect::<Vec<_>>()
        .join("|");
    let splitter = compile(&alternation)?;

    Ok(Some(splitter.split(s).map(str::to_string).collect()))
}

/// Distinct non-empty matches of `regex` in first-occurrence order
pub fn extract_distinct(s: &str, regex: &Regex) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let matches: Vec<String> = regex
        .find_iter(s)
        .map(|found| found.as_str())
        .filter(|found| !found.is_empty() && seen.insert(*found))
        .map(str::to_string)
        .collect();

    if matches.is_empty() {
        None
    } else {
        Some(matches)
    }
}

fn extract_with(s: &str, custom: Option<&str>, default: &Regex) -> Result<Option<Vec<String>>> {
    if s.is_empty() {
        return Ok(None);
    }
    let regex = resolve(custom, default)?;
    Ok(extract_distinct(s, &regex))
}

/// Distinct URLs in `s`; `pattern` overrides the default expression
pub fn extract_urls(s: &str, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
    extract_with(s, pattern, &default_patterns().url)
}

/// Distinct phone numbers in `s`; `pattern` overrides the default expression
pub fn extract_phone_numbers(s: &str, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
    extract_with(s, pattern, &default_patterns().phone)
}

/// Distinct social security numbers in `s`; `pattern` overrides the default
/// expression
pub fn extract_ssns(s: &str, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
    extract_with(s, pattern, &default_patterns().ssn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextError;

    #[test]
    fn test_literal_frequency() {
        assert_eq!(pattern_frequency("banana", "an", PatternKind::Literal).unwrap(), 2);
        assert_eq!(pattern_frequency("aaaa", "aa", PatternKind::Literal).unwrap(), 2);
        assert_eq!(pattern_frequency("banana", "", PatternKind::Literal).unwrap(), 0);
        assert_eq!(pattern_frequency("", "a", PatternKind::Regex).unwrap(), 0);
    }

    #[test]
    fn test_regex_frequency() {
        let count = pattern_frequency("a1 b22 c333", r"\d+", PatternKind::Regex).unwrap();
        assert_eq!(count, 3);
        assert!(matches!(
            pattern_frequency("abc", "(", PatternKind::Regex),
            Err(TextError::Pattern { .. })
        ));
    }

    #[test]
    fn test_split_by_regex() {
        let pieces = split_by_regex("one, two;three", "[,;] ?").unwrap().unwrap();
        assert_eq!(pieces, ["one", "two", "three"]);

        let kept_empty = split_by_regex("a--b", "-").unwrap().unwrap();
        assert_eq!(kept_empty, ["a", "", "b"]);

        assert_eq!(split_by_regex("abc", "[0-9]").unwrap(), None);
    }

    #[test]
    fn test_split_uses_matched_text_literally() {
        // Only the leading "x" matches, but every "x" becomes a delimiter
        let pieces = split_by_regex("xaxb", "^x").unwrap().unwrap();
        assert_eq!(pieces, ["", "a", "b"]);
    }

    #[test]
    fn test_extract_urls() {
        let text = "Docs at https://example.com/a and http://test.org again https://example.com/a";
        let urls = extract_urls(text, None).unwrap().unwrap();
        assert_eq!(urls, ["https://example.com/a", "http://test.org"]);
        assert_eq!(extract_urls("no links here", None).unwrap(), None);
    }

    #[test]
    fn test_extract_phone_numbers() {
        let text = "Call (555) 123-4567 or 555.987.6543.";
        let phones = extract_phone_numbers(text, None).unwrap().unwrap();
        assert_eq!(phones, ["(555) 123-4567", "555.987.6543"]);
    }

    #[test]
    fn test_extract_ssns_with_override() {
        let text = "ids 078-05-1120 and 078051120";
        assert_eq!(
            extract_ssns(text, None).unwrap(),
            Some(vec!["078-05-1120".to_string()])
        );
        assert_eq!(
            extract_ssns(text, Some(r"\b\d{9}\b")).unwrap(),
            Some(vec!["078051120".to_string()])
        );
    }

    #[test]
    fn test_extract_skips_empty_matches() {
        let optional = Regex::new("a*").unwrap();
        assert_eq!(extract_distinct("baaab", &optional), Some(vec!["aaa".to_string()]));
        assert_eq!(extract_distinct("xyz", &optional), None);
        assert_eq!(extract_urls("go", Some("z*")).unwrap(), None);
    }
}
