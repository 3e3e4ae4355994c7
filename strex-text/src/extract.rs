//! Substring extraction by count, by position and by marker
//!
//! All functions return `None` for an empty source. Counts and positions are
//! measured in chars.

use crate::chars::{self, byte_offset, char_len, find_first, find_last};
use crate::config::MarkerOptions;
use std::ops::Range;

/// First `n` chars; negative `n` takes `|n|` chars from the end instead
///
/// ```rust
/// use strex_text::extract::left;
///
/// assert_eq!(left("This is a sample string", 4).as_deref(), Some("This"));
/// assert_eq!(left("This is a sample string", -4).as_deref(), Some("ring"));
/// ```
pub fn left(s: &str, n: isize) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    if n < 0 {
        return Some(chars::tail(s, n.unsigned_abs()).to_string());
    }
    Some(chars::head(s, n.unsigned_abs()).to_string())
}

/// Last `n` chars; negative `n` takes `|n|` chars from the start instead
pub fn right(s: &str, n: isize) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    if n < 0 {
        return Some(chars::head(s, n.unsigned_abs()).to_string());
    }
    Some(chars::tail(s, n.unsigned_abs()).to_string())
}

/// Everything before the first occurrence of `marker`
///
/// Returns `Some("")` when the marker does not occur and `None` when either
/// the source or the marker is empty.
pub fn left_of(s: &str, marker: &str, options: &MarkerOptions) -> Option<String> {
    if s.is_empty() || marker.is_empty() {
        return None;
    }

    let Some(found) = find_first(s, marker, options.ignore_case) else {
        return Some(String::new());
    };
    let end = if options.include_marker {
        found.end
    } else {
        found.start
    };
    Some(s[..end].to_string())
}

/// Everything after the last occurrence of `marker`
///
/// Same absent and not-found rules as [`left_of`].
pub fn right_of(s: &str, marker: &str, options: &MarkerOptions) -> Option<String> {
    if s.is_empty() || marker.is_empty() {
        return None;
    }

    let Some(found) = find_last(s, marker, options.ignore_case) else {
        return Some(String::new());
    };
    let start = if options.include_marker {
        found.start
    } else {
        found.end
    };
    Some(s[start..].to_string())
}

/// Chars between two positions
///
/// Positions are taken as absolute values and swapped when reversed. The end
/// position is clamped to the last char. Without `inclusive` both endpoints
/// are excluded.
pub fn between_indices(s: &str, start: isize, end: isize, inclusive: bool) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    let (mut first, mut last) = (start.unsigned_abs(), end.unsigned_abs());
    if first > last {
        std::mem::swap(&mut first, &mut last);
    }
    let last = last.min(char_len(s) - 1);

    let window = if inclusive {
        first..last.saturating_add(1)
    } else {
        first.saturating_add(1)..last
    };
    if window.start >= window.end {
        return Some(String::new());
    }

    let range = chars::byte_range(s, window.start, window.end);
    Some(s[range].to_string())
}

/// Text between the first `start_marker` and the last `end_marker`
///
/// Returns `None` when either marker is empty or missing, or when the start
/// marker does not begin strictly before the end marker. Overlapping
/// markers leave nothing between them and yield `Some("")` unless the
/// markers themselves are included.
pub fn between_markers(
    s: &str,
    start_marker: &str,
    end_marker: &str,
    options: &MarkerOptions,
) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    let opening = find_first(s, start_marker, options.ignore_case)?;
    let closing = find_last(s, end_marker, options.ignore_case)?;
    if opening.start >= closing.start {
        return None;
    }

    if options.include_marker {
        let end = closing.end.max(opening.end);
        return Some(s[opening.start..end].to_string());
    }
    if opening.end > closing.start {
        return Some(String::new());
    }
    Some(s[opening.end..closing.start].to_string())
}

/// Byte range of the chars around the midpoint of `s`
pub(crate) fn middle_range(s: &str, left_count: isize, right_count: isize) -> Range<usize> {
    let len = char_len(s);
    let mid = len / 2;
    let before = left_count.unsigned_abs().min(mid);
    let after = right_count.unsigned_abs().min(len - mid);
    byte_offset(s, mid - before)..byte_offset(s, mid + after)
}

/// Chars around the midpoint
///
/// Takes up to `|left_count|` chars immediately before the midpoint
/// (`len / 2`) and up to `|right_count|` chars from it onward, each side
/// clamped to what is available.
///
/// ```rust
/// use strex_text::extract::middle;
///
/// assert_eq!(middle("abcdefgh", 2, 1).as_deref(), Some("cde"));
/// ```
pub fn middle(s: &str, left_count: isize, right_count: isize) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    Some(s[middle_range(s, left_count, right_count)].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "This is a sample string";

    #[test]
    fn test_left_by_count() {
        assert_eq!(left(SAMPLE, 4).as_deref(), Some("This"));
        assert_eq!(left(SAMPLE, -4).as_deref(), Some("ring"));
        assert_eq!(left(SAMPLE, 0).as_deref(), Some(""));
        assert_eq!(left(SAMPLE, 1000).as_deref(), Some(SAMPLE));
        assert_eq!(left("", 3), None);
    }

    #[test]
    fn test_right_by_count() {
        assert_eq!(right(SAMPLE, 6).as_deref(), Some("string"));
        assert_eq!(right(SAMPLE, -4).as_deref(), Some("This"));
        assert_eq!(right(SAMPLE, 0).as_deref(), Some(""));
        assert_eq!(right(SAMPLE, isize::MIN).as_deref(), Some(SAMPLE));
    }

    #[test]
    fn test_left_of_marker() {
        let plain = MarkerOptions::default();
        assert_eq!(left_of(SAMPLE, "sample", &plain).as_deref(), Some("This is a "));
        assert_eq!(
            left_of(SAMPLE, "sample", &MarkerOptions::inclusive()).as_deref(),
            Some("This is a sample")
        );
        assert_eq!(left_of(SAMPLE, "random", &plain).as_deref(), Some(""));
        assert_eq!(left_of("", "sample", &plain), None);
        assert_eq!(left_of(SAMPLE, "", &plain), None);
    }

    #[test]
    fn test_left_of_ignores_case_by_default() {
        let plain = MarkerOptions::default();
        assert_eq!(left_of(SAMPLE, "SAMPLE", &plain).as_deref(), Some("This is a "));

        let strict = plain.ignore_case(false);
        assert_eq!(left_of(SAMPLE, "SAMPLE", &strict).as_deref(), Some(""));
    }

    #[test]
    fn test_right_of_uses_last_occurrence() {
        let text = "key=a; key=b";
        assert_eq!(
            right_of(text, "KEY=", &MarkerOptions::default()).as_deref(),
            Some("b")
        );
        assert_eq!(
            right_of(text, "key=", &MarkerOptions::inclusive()).as_deref(),
            Some("key=b")
        );
    }

    #[test]
    fn test_between_indices() {
        assert_eq!(between_indices("abcdef", 1, 4, false).as_deref(), Some("cd"));
        assert_eq!(between_indices("abcdef", 1, 4, true).as_deref(), Some("bcde"));
        assert_eq!(between_indices("abcdef", -4, 1, false).as_deref(), Some("cd"));
        assert_eq!(between_indices("abcdef", 2, 99, false).as_deref(), Some("de"));
        assert_eq!(between_indices("abcdef", 2, 99, true).as_deref(), Some("cdef"));
        assert_eq!(between_indices("abcdef", 2, 3, false).as_deref(), Some(""));
        assert_eq!(between_indices("abcdef", 10, 12, true).as_deref(), Some(""));
    }

    #[test]
    fn test_between_markers() {
        let text = "[first] and [second]";
        let options = MarkerOptions::default();
        assert_eq!(
            between_markers(text, "[", "]", &options).as_deref(),
            Some("first] and [second")
        );
        assert_eq!(
            between_markers(text, "[", "]", &MarkerOptions::inclusive()).as_deref(),
            Some(text)
        );
        assert_eq!(between_markers(text, "<", "]", &options), None);
        assert_eq!(between_markers(text, "second", "first", &options), None);
    }

    #[test]
    fn test_between_overlapping_markers() {
        let options = MarkerOptions::default();
        assert_eq!(between_markers("abc", "ab", "bc", &options).as_deref(), Some(""));
        assert_eq!(
            between_markers("abc", "ab", "bc", &MarkerOptions::inclusive()).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_middle() {
        assert_eq!(middle("abcdefgh", 2, 1).as_deref(), Some("cde"));
        assert_eq!(middle("abcdefgh", -10, 10).as_deref(), Some("abcdefgh"));
        assert_eq!(middle("abcde", 0, 1).as_deref(), Some("c"));
        assert_eq!(middle("abc", 0, 0).as_deref(), Some(""));
        assert_eq!(middle("", 1, 1), None);
    }
}
