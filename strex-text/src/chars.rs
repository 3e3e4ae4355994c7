//! Character-indexed helpers shared by the text modules
//!
//! Counts and positions in this crate are in `char`s. These helpers convert
//! between char positions and byte offsets and locate markers.

use std::ops::Range;

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `index`, or `s.len()` past the end
pub(crate) fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Char position of a byte offset on a char boundary
pub(crate) fn char_position(s: &str, offset: usize) -> usize {
    s[..offset].chars().count()
}

/// Byte range covering chars `start..end`
pub(crate) fn byte_range(s: &str, start: usize, end: usize) -> Range<usize> {
    byte_offset(s, start)..byte_offset(s, end)
}

/// First `count` chars
pub(crate) fn head(s: &str, count: usize) -> &str {
    &s[..byte_offset(s, count)]
}

/// Last `count` chars
pub(crate) fn tail(s: &str, count: usize) -> &str {
    let len = char_len(s);
    &s[byte_offset(s, len.saturating_sub(count))..]
}

fn chars_match(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

/// Byte range of a match of `needle` starting at byte `start`, if any
fn match_at(haystack: &str, start: usize, needle: &str, ignore_case: bool) -> Option<Range<usize>> {
    let mut rest = haystack[start..].char_indices();
    let mut end = start;
    for expected in needle.chars() {
        let (offset, actual) = rest.next()?;
        if !chars_match(actual, expected, ignore_case) {
            return None;
        }
        end = start + offset + actual.len_utf8();
    }
    Some(start..end)
}

/// Every match of `needle`, overlapping ones included, in order
pub(crate) fn find_all<'a>(
    haystack: &'a str,
    needle: &'a str,
    ignore_case: bool,
) -> impl Iterator<Item = Range<usize>> + 'a {
    haystack
        .char_indices()
        .filter_map(move |(start, _)| match_at(haystack, start, needle, ignore_case))
}

pub(crate) fn find_first(haystack: &str, needle: &str, ignore_case: bool) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    find_all(haystack, needle, ignore_case).next()
}

pub(crate) fn find_last(haystack: &str, needle: &str, ignore_case: bool) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .rev()
        .find_map(|(start, _)| match_at(haystack, start, needle, ignore_case))
}
