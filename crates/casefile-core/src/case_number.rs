//! Docket number extraction (`2026카단500796`, `2024가합1234`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::head_chars;

/// Size of the head window, in characters.
pub const HEAD_CHARS: usize = 500;

static CASE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}[가-힣]{1,3}[0-9]+").expect("case number pattern is valid")
});

/// Year, case-type code and serial, concatenated as printed.
pub fn find_case_number(text: &str) -> Option<String> {
    CASE_NUMBER_RE.find(text).map(|m| m.as_str().to_string())
}

/// Case number from the first [`HEAD_CHARS`] characters, if any.
pub fn extract_case_number(text: &str) -> Option<String> {
    find_case_number(head_chars(text, HEAD_CHARS))
}
