pub mod author;
pub mod case_number;
pub mod date;
pub mod filename;
pub mod metadata;
pub mod title;

pub use author::extract_author;
pub use case_number::extract_case_number;
pub use date::extract_date;
pub use filename::{compose_filename, sanitize_filename};
pub use metadata::{ExtractedMetadata, Parties};
pub use title::extract_title;

/// Last `n` characters of `text` (the whole string if it is shorter).
pub(crate) fn tail_chars(text: &str, n: usize) -> &str {
    let count = text.chars().count();
    if count <= n {
        return text;
    }
    let start = text
        .char_indices()
        .nth(count - n)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &text[start..]
}

/// First `n` characters of `text` (the whole string if it is shorter).
pub(crate) fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
