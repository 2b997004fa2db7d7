//! Line tokens
//!
//!     A guide is line based: every raw input line becomes exactly one token, and the
//!     token's type is all the later stages need to know about its shape. Tokens are
//!     immutable once the lexer emits them.
//!
//! Token Types
//!
//!         - FileHeader: the document title, line 1 only
//!         - Header: a colon-separated topic path, e.g. `Science: Biology: Cells`
//!         - Question: a list item with an answer, e.g. `1. What is X? - Y`
//!         - Comment: a line starting with a single `#`
//!         - Passage: `Passage: <title>`, optionally under `###` or `####`
//!         - LearnMore: `Learn More: <text>` attached to a question
//!         - Content: any other text, the body of a passage
//!         - Empty: whitespace only
//!         - Binary: contains control characters
//!
//!     See [Lexer](crate::guide::lexing::Lexer) for the classification order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::text;

/// One raw input line, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number a sequence of raw strings starting at 1.
    pub fn numbered<I, S>(texts: I) -> Vec<Line>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Line::new(index + 1, text))
            .collect()
    }

    /// Split and number a whole document.
    pub fn from_source(source: &str) -> Vec<Line> {
        Self::numbered(text::split_lines(source))
    }
}

/// The classification of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    FileHeader,
    Header,
    Question,
    Comment,
    Passage,
    LearnMore,
    Content,
    Empty,
    Binary,
}

impl TokenType {
    pub const ALL: [TokenType; 9] = [
        TokenType::FileHeader,
        TokenType::Header,
        TokenType::Question,
        TokenType::Comment,
        TokenType::Passage,
        TokenType::LearnMore,
        TokenType::Content,
        TokenType::Empty,
        TokenType::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::FileHeader => "file_header",
            TokenType::Header => "header",
            TokenType::Question => "question",
            TokenType::Comment => "comment",
            TokenType::Passage => "passage",
            TokenType::LearnMore => "learn_more",
            TokenType::Content => "content",
            TokenType::Empty => "empty",
            TokenType::Binary => "binary",
        }
    }

    /// Kinds the parser drops without attaching them anywhere.
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            TokenType::Comment | TokenType::Empty | TokenType::Binary
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a serialized token type name is not one of the nine known kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line type: {0}")]
pub struct UnknownTokenType(pub String);

impl FromStr for TokenType {
    type Err = UnknownTokenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTokenType(s.to_string()))
    }
}

/// A classified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub number: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Token {
    pub fn new(number: usize, text: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            number,
            text: text.into(),
            token_type,
        }
    }

    /// The normalized text used for classification and extraction.
    pub fn clean(&self) -> String {
        text::clean(&self.text)
    }

    pub fn source(&self) -> SourceLine {
        SourceLine::new(self.number, &self.text)
    }
}

/// Line number and raw text carried by line-scoped errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

impl From<&Line> for SourceLine {
    fn from(line: &Line) -> Self {
        SourceLine::new(line.number, &line.text)
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, text: {}", self.number, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_names_round_trip() {
        for kind in TokenType::ALL {
            assert_eq!(kind.as_str().parse::<TokenType>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_token_type_is_rejected() {
        let err = "heading".parse::<TokenType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown line type: heading");
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&TokenType::LearnMore).unwrap();
        assert_eq!(json, "\"learn_more\"");
        let token = Token::new(3, "# note", TokenType::Comment);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["type"], "comment");
        assert_eq!(json["number"], 3);
    }

    #[test]
    fn lines_are_numbered_from_one() {
        let lines = Line::from_source("Title\r\n\nScience: Biology: Cells");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new(1, "Title"));
        assert_eq!(lines[1], Line::new(2, ""));
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn token_keeps_raw_text_and_cleans_on_demand() {
        let token = Token::new(1, "  \u{FEFF}Biology Guide ", TokenType::FileHeader);
        assert_eq!(token.text, "  \u{FEFF}Biology Guide ");
        assert_eq!(token.clean(), "Biology Guide");
    }

    #[test]
    fn skipped_kinds() {
        let skipped: Vec<_> = TokenType::ALL
            .into_iter()
            .filter(|kind| kind.is_skipped())
            .collect();
        assert_eq!(
            skipped,
            vec![TokenType::Comment, TokenType::Empty, TokenType::Binary]
        );
    }
}
