//! Extension methods on `str`
//!
//! Every method delegates to the free function of the same name; see the
//! function for the exact rules. [`StrExt::truncate_with`] is the method form
//! of [`transform::truncate`], renamed so it does not collide with
//! `String::truncate`.

use crate::config::{FrequencyOptions, MarkerOptions, NthWordOptions, TruncateEnds};
use crate::error::Result;
use crate::frequency::FrequencyMap;
use crate::patterns::PatternKind;
use crate::{classify, extract, patterns, transform, words};

/// Text helpers as methods
pub trait StrExt {
    /// See [`extract::left`]
    fn left(&self, n: isize) -> Option<String>;
    /// See [`extract::right`]
    fn right(&self, n: isize) -> Option<String>;
    /// See [`extract::left_of`]
    fn left_of(&self, marker: &str, options: &MarkerOptions) -> Option<String>;
    /// See [`extract::right_of`]
    fn right_of(&self, marker: &str, options: &MarkerOptions) -> Option<String>;
    /// See [`extract::between_indices`]
    fn between_indices(&self, start: isize, end: isize, inclusive: bool) -> Option<String>;
    /// See [`extract::between_markers`]
    fn between_markers(
        &self,
        start_marker: &str,
        end_marker: &str,
        options: &MarkerOptions,
    ) -> Option<String>;
    /// See [`extract::middle`]
    fn middle(&self, left_count: isize, right_count: isize) -> Option<String>;

    /// See [`words::words`]
    fn words(&self, unique: bool) -> Option<Vec<&str>>;
    /// See [`words::word_count`]
    fn word_count(&self, unique: bool) -> usize;
    /// See [`words::word_frequency`]
    fn word_frequency(&self, options: &FrequencyOptions) -> Option<FrequencyMap>;
    /// See [`words::nth_word`]
    fn nth_word(&self, n: isize, options: &NthWordOptions) -> Option<&str>;
    /// See [`words::sentences`]
    fn sentences(&self) -> Option<Vec<&str>>;
    /// See [`words::sentence_count`]
    fn sentence_count(&self) -> usize;

    /// See [`classify::vowels`]
    fn vowels(&self, unique: bool) -> Option<Vec<char>>;
    /// See [`classify::vowel_count`]
    fn vowel_count(&self, unique: bool) -> usize;
    /// See [`classify::non_vowels`]
    fn non_vowels(&self, unique: bool) -> Option<Vec<char>>;
    /// See [`classify::non_vowel_count`]
    fn non_vowel_count(&self, unique: bool) -> usize;
    /// See [`classify::consonants`]
    fn consonants(&self, unique: bool) -> Option<Vec<char>>;
    /// See [`classify::consonant_count`]
    fn consonant_count(&self, unique: bool) -> usize;
    /// See [`classify::digits`]
    fn digits(&self, unique: bool) -> Option<Vec<char>>;
    /// See [`classify::digit_count`]
    fn digit_count(&self, unique: bool) -> usize;
    /// See [`classify::special_chars`]
    fn special_chars(&self, unique: bool) -> Option<Vec<char>>;
    /// See [`classify::special_char_count`]
    fn special_char_count(&self, unique: bool) -> usize;
    /// See [`classify::is_palindrome`]
    fn is_palindrome(&self) -> bool;

    /// See [`transform::reverse`]
    fn reverse(&self, by_words: bool) -> Option<String>;
    /// See [`transform::truncate`]
    fn truncate_with(&self, n: isize, replacement: &str) -> Option<String>;
    /// See [`transform::truncate_middle`]
    fn truncate_middle(
        &self,
        left_count: isize,
        right_count: isize,
        replacement: &str,
    ) -> Option<String>;
    /// See [`transform::truncate_ends`]
    fn truncate_ends(&self, ends: &TruncateEnds) -> Option<String>;
    /// See [`transform::replace_nth`]
    fn replace_nth(&self, target: &str, replacement: &str, n: isize) -> Option<String>;
    /// See [`transform::replace_many`]
    fn replace_many(&self, targets: &[&str], replacements: &[&str]) -> Option<String>;
    /// See [`transform::nth_index_of`]
    fn nth_index_of(&self, pattern: &str, n: isize) -> Option<usize>;
    /// See [`transform::strip_html_tags`]
    fn strip_html_tags(&self, pattern: Option<&str>) -> Result<Option<String>>;
    /// See [`transform::br_to_newlines`]
    fn br_to_newlines(&self) -> Option<String>;

    /// See [`patterns::pattern_frequency`]
    fn pattern_frequency(&self, pattern: &str, kind: PatternKind) -> Result<usize>;
    /// See [`patterns::split_by_regex`]
    fn split_by_regex(&self, pattern: &str) -> Result<Option<Vec<String>>>;
    /// See [`patterns::extract_urls`]
    fn extract_urls(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>>;
    /// See [`patterns::extract_phone_numbers`]
    fn extract_phone_numbers(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>>;
    /// See [`patterns::extract_ssns`]
    fn extract_ssns(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>>;
}

impl StrExt for str {
    fn left(&self, n: isize) -> Option<String> {
        extract::left(self, n)
    }

    fn right(&self, n: isize) -> Option<String> {
        extract::right(self, n)
    }

    fn left_of(&self, marker: &str, options: &MarkerOptions) -> Option<String> {
        extract::left_of(self, marker, options)
    }

    fn right_of(&self, marker: &str, options: &MarkerOptions) -> Option<String> {
        extract::right_of(self, marker, options)
    }

    fn between_indices(&self, start: isize, end: isize, inclusive: bool) -> Option<String> {
        extract::between_indices(self, start, end, inclusive)
    }

    fn between_markers(
        &self,
        start_marker: &str,
        end_marker: &str,
        options: &MarkerOptions,
    ) -> Option<String> {
        extract::between_markers(self, start_marker, end_marker, options)
    }

    fn middle(&self, left_count: isize, right_count: isize) -> Option<String> {
        extract::middle(self, left_count, right_count)
    }

    fn words(&self, unique: bool) -> Option<Vec<&str>> {
        words::words(self, unique)
    }

    fn word_count(&self, unique: bool) -> usize {
        words::word_count(self, unique)
    }

    fn word_frequency(&self, options: &FrequencyOptions) -> Option<FrequencyMap> {
        words::word_frequency(self, options)
    }

    fn nth_word(&self, n: isize, options: &NthWordOptions) -> Option<&str> {
        words::nth_word(self, n, options)
    }

    fn sentences(&self) -> Option<Vec<&str>> {
        words::sentences(self)
    }

    fn sentence_count(&self) -> usize {
        words::sentence_count(self)
    }

    fn vowels(&self, unique: bool) -> Option<Vec<char>> {
        classify::vowels(self, unique)
    }

    fn vowel_count(&self, unique: bool) -> usize {
        classify::vowel_count(self, unique)
    }

    fn non_vowels(&self, unique: bool) -> Option<Vec<char>> {
        classify::non_vowels(self, unique)
    }

    fn non_vowel_count(&self, unique: bool) -> usize {
        classify::non_vowel_count(self, unique)
    }

    fn consonants(&self, unique: bool) -> Option<Vec<char>> {
        classify::consonants(self, unique)
    }

    fn consonant_count(&self, unique: bool) -> usize {
        classify::consonant_count(self, unique)
    }

    fn digits(&self, unique: bool) -> Option<Vec<char>> {
        classify::digits(self, unique)
    }

    fn digit_count(&self, unique: bool) -> usize {
        classify::digit_count(self, unique)
    }

    fn special_chars(&self, unique: bool) -> Option<Vec<char>> {
        classify::special_chars(self, unique)
    }

    fn special_char_count(&self, unique: bool) -> usize {
        classify::special_char_count(self, unique)
    }

    fn is_palindrome(&self) -> bool {
        classify::is_palindrome(self)
    }

    fn reverse(&self, by_words: bool) -> Option<String> {
        transform::reverse(self, by_words)
    }

    fn truncate_with(&self, n: isize, replacement: &str) -> Option<String> {
        transform::truncate(self, n, replacement)
    }

    fn truncate_middle(
        &self,
        left_count: isize,
        right_count: isize,
        replacement: &str,
    ) -> Option<String> {
        transform::truncate_middle(self, left_count, right_count, replacement)
    }

    fn truncate_ends(&self, ends: &TruncateEnds) -> Option<String> {
        transform::truncate_ends(self, ends)
    }

    fn replace_nth(&self, target: &str, replacement: &str, n: isize) -> Option<String> {
        transform::replace_nth(self, target, replacement, n)
    }

    fn replace_many(&self, targets: &[&str], replacements: &[&str]) -> Option<String> {
        transform::replace_many(self, targets, replacements)
    }

    fn nth_index_of(&self, pattern: &str, n: isize) -> Option<usize> {
        transform::nth_index_of(self, pattern, n)
    }

    fn strip_html_tags(&self, pattern: Option<&str>) -> Result<Option<String>> {
        transform::strip_html_tags(self, pattern)
    }

    fn br_to_newlines(&self) -> Option<String> {
        transform::br_to_newlines(self)
    }

    fn pattern_frequency(&self, pattern: &str, kind: PatternKind) -> Result<usize> {
        patterns::pattern_frequency(self, pattern, kind)
    }

    fn split_by_regex(&self, pattern: &str) -> Result<Option<Vec<String>>> {
        patterns::split_by_regex(self, pattern)
    }

    fn extract_urls(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
        patterns::extract_urls(self, pattern)
    }

    fn extract_phone_numbers(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
        patterns::extract_phone_numbers(self, pattern)
    }

    fn extract_ssns(&self, pattern: Option<&str>) -> Result<Option<Vec<String>>> {
        patterns::extract_ssns(self, pattern)
    }
}
