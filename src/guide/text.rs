//! Text normalization
//!
//!     Guides are typed by hand and pasted from word processors, so lines routinely carry
//!     zero-width spaces, byte order marks, non-breaking spaces and directional marks. All
//!     classification and extraction work on the cleaned form of a line, while tokens keep
//!     the raw text for error reporting.
//!
//!     Cleaning trims surrounding whitespace and drops every character in the Unicode
//!     general categories Cf (format) and Zs (space separator), except the plain ASCII
//!     space. Surrogates (Cs) cannot occur in a Rust `str`, so there is nothing to do
//!     for them.

/// Inclusive ranges of Unicode general category Cf.
const FORMAT_RANGES: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// Inclusive ranges of Unicode general category Zs.
const SPACE_SEPARATOR_RANGES: &[(u32, u32)] = &[
    (0x0020, 0x0020),
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

fn in_ranges(ranges: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    ranges.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

/// True for characters that cleaning removes.
pub fn is_invisible(c: char) -> bool {
    c != ' ' && (in_ranges(FORMAT_RANGES, c) || in_ranges(SPACE_SEPARATOR_RANGES, c))
}

/// Trim and strip invisible characters, preserving case.
///
/// A second trim runs after stripping so that a line like `"\u{200B} x"` ends up as
/// `"x"` rather than `" x"`; this keeps `clean` idempotent.
pub fn clean(text: &str) -> String {
    let stripped: String = text.trim().chars().filter(|c| !is_invisible(*c)).collect();
    match stripped.trim() {
        trimmed if trimmed.len() == stripped.len() => stripped,
        trimmed => trimmed.to_string(),
    }
}

/// [`clean`] followed by lowercasing.
pub fn clean_lower(text: &str) -> String {
    clean(text).to_lowercase()
}

/// Whitespace-only check. Invisible format characters do not count as blank.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive prefix check on the cleaned forms of both strings.
pub fn has_prefix_ignore_case(text: &str, prefix: &str) -> bool {
    clean_lower(text).starts_with(&clean_lower(prefix))
}

/// Split a whole document into lines, accepting `\n` and `\r\n` terminators.
///
/// A single trailing terminator does not produce an extra empty line.
pub fn split_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
