//! Text transforms: reversal, truncation, targeted replacement and tag
//! stripping

use crate::chars::{self, char_len, char_position};
use crate::config::{defaults, TruncateEnds};
use crate::error::Result;
use crate::extract::middle_range;
use crate::pattern_set::{default_patterns, resolve};
use regex::NoExpand;

/// Alternating runs of whitespace and non-whitespace
fn runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (offset, ch) in s.char_indices() {
        let blank = ch.is_whitespace();
        if previous.is_some_and(|was_blank| was_blank != blank) {
            runs.push(&s[start..offset]);
            start = offset;
        }
        previous = Some(blank);
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }
    runs
}

/// Reverse the chars of `s`, or with `by_words` the order of its words
///
/// Word reversal keeps every word intact and moves the whitespace between
/// words along with them, so reversing twice gives back the input.
///
/// ```rust
/// use strex_text::transform::reverse;
///
/// assert_eq!(reverse("abc def", false).as_deref(), Some("fed cba"));
/// assert_eq!(reverse("abc def", true).as_deref(), Some("def abc"));
/// ```
pub fn reverse(s: &str, by_words: bool) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    if by_words {
        Some(runs(s).into_iter().rev().collect())
    } else {
        Some(s.chars().rev().collect())
    }
}

/// Replace `count` chars at one end of `s` with `replacement`
fn cut(s: &str, count: usize, from_right: bool, replacement: &str) -> String {
    if count == 0 {
        return s.to_string();
    }

    let kept = char_len(s).saturating_sub(count);
    if from_right {
        format!("{}{replacement}", chars::head(s, kept))
    } else {
        format!("{replacement}{}", chars::tail(s, kept))
    }
}

/// Remove `n` chars from the right (`n < 0`: from the left) and put
/// `replacement` in their place
///
/// `n == 0` leaves the source unchanged. Cutting the whole string leaves
/// just the replacement.
pub fn truncate(s: &str, n: isize, replacement: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    Some(cut(s, n.unsigned_abs(), n >= 0, replacement))
}

/// Replace the chars around the midpoint with `replacement`
///
/// The removed segment is the one [`middle`](crate::extract::middle)
/// returns for the same counts. An empty segment leaves the source
/// unchanged.
pub fn truncate_middle(
    s: &str,
    left_count: isize,
    right_count: isize,
    replacement: &str,
) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    let range = middle_range(s, left_count, right_count);
    if range.is_empty() {
        return Some(s.to_string());
    }
    Some(format!("{}{replacement}{}", &s[..range.start], &s[range.end..]))
}

/// Truncate the right side, then the left side of the result
pub fn truncate_ends(s: &str, ends: &TruncateEnds) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    let trimmed = cut(s, ends.right, true, &ends.right_replacement);
    Some(cut(&trimmed, ends.left, false, &ends.left_replacement))
}

/// Replace only the `|n|`-th occurrence of `target`
///
/// Occurrences are literal and non-overlapping. When `|n|` is past the last
/// occurrence the last one is replaced; when there is none the source comes
/// back unchanged. `n == 0` or an empty target gives `None`.
///
/// ```rust
/// use strex_text::transform::replace_nth;
///
/// let replaced = replace_nth("a-b-c-d", "-", "+", 2);
/// assert_eq!(replaced.as_deref(), Some("a-b+c-d"));
/// ```
pub fn replace_nth(s: &str, target: &str, replacement: &str, n: isize) -> Option<String> {
    if s.is_empty() || target.is_empty() || n == 0 {
        return None;
    }

    let occurrences: Vec<usize> = s.match_indices(target).map(|(at, _)| at).collect();
    let Some(&last) = occurrences.last() else {
        return Some(s.to_string());
    };

    let position = n.unsigned_abs();
    let at = occurrences.get(position - 1).copied().unwrap_or_else(|| {
        log::trace!(
            "occurrence {position} of {target:?} requested, {} found; replacing the last",
            occurrences.len()
        );
        last
    });

    let mut result = String::with_capacity(s.len() + replacement.len());
    result.push_str(&s[..at]);
    result.push_str(replacement);
    result.push_str(&s[at + target.len()..]);
    Some(result)
}

/// Replace each target with the replacement at the same position
///
/// Pairs are applied in order, each to the output of the previous one, so
/// an earlier replacement can create or destroy matches for a later one.
/// Empty lists or lists of different lengths give `None`. Empty targets are
/// skipped.
pub fn replace_many(s: &str, targets: &[&str], replacements: &[&str]) -> Option<String> {
    if s.is_empty() || targets.is_empty() {
        return None;
    }
    if targets.len() != replacements.len() {
        log::trace!(
            "{} targets paired with {} replacements",
            targets.len(),
            replacements.len()
        );
        return None;
    }

    let result = targets
        .iter()
        .zip(replacements)
        .filter(|(target, _)| !target.is_empty())
        .fold(s.to_string(), |text, (target, replacement)| {
            text.replace(target, replacement)
        });
    Some(result)
}

/// Char position of the `|n|`-th occurrence of `pattern`
///
/// Past the last occurrence, the position of the last one is returned.
/// `None` means not found: no occurrence, `n == 0`, or empty input.
pub fn nth_index_of(s: &str, pattern: &str, n: isize) -> Option<usize> {
    if s.is_empty() || pattern.is_empty() || n == 0 {
        return None;
    }

    let occurrences: Vec<usize> = s.match_indices(pattern).map(|(at, _)| at).collect();
    let position = n.unsigned_abs().min(occurrences.len());
    let at = *occurrences.get(position.checked_sub(1)?)?;
    Some(char_position(s, at))
}

/// Remove every HTML tag
///
/// `pattern` replaces the default tag expression. A malformed pattern is an
/// error.
pub fn strip_html_tags(s: &str, pattern: Option<&str>) -> Result<Option<String>> {
    if s.is_empty() {
        return Ok(None);
    }

    let regex = resolve(pattern, &default_patterns().html_tag)?;
    Ok(Some(regex.replace_all(s, "").into_owned()))
}

/// Turn `<br>`, `<br/>` and `<br />` into line endings
pub fn br_to_newlines(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    let converted = default_patterns()
        .line_break
        .replace_all(s, NoExpand(defaults::LINE_ENDING));
    Some(converted.into_owned())
}
