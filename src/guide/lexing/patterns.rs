//! Shared line patterns
//!
//!     Used by both the lexer (to classify) and the preparser (to extract), so the two
//!     stages can never disagree on what a question prefix looks like.

use once_cell::sync::Lazy;
use regex::Regex;

/// A numbered (`12.`) or bulleted (`*`, `-`) list item prefix followed by whitespace.
pub static LIST_ITEM_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.|\*|-)\s+").expect("list item prefix pattern is valid")
});

/// Separates a question prompt from its answer. Only the first occurrence splits.
pub const ANSWER_DELIMITER: &str = " - ";
pub const COLON_DELIMITER: char = ':';
/// A header needs at least two colons, hence three parts.
pub const MIN_HEADER_PARTS: usize = 3;
pub const COMMENT_PREFIX: &str = "#";
pub const PASSAGE_PREFIX: &str = "passage:";
pub const PASSAGE_HEADING_PREFIXES: [&str; 2] = ["### ", "#### "];
pub const LEARN_MORE_PREFIX: &str = "learn more:";
pub const FIRST_LINE_NUMBER: usize = 1;

/// Byte offset just past `keyword`, matched ASCII case-insensitively anywhere in `text`.
///
/// ASCII lowercasing keeps byte offsets aligned with the original string.
pub fn find_after_keyword(text: &str, keyword: &str) -> Option<usize> {
    text.to_ascii_lowercase()
        .find(keyword)
        .map(|index| index + keyword.len())
}

/// `text` without an ASCII case-insensitive `prefix`, if present.
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
