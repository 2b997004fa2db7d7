//! Preparser
//!
//!     Turns each classified token into a typed [ParsedValue]: the prompt and answer of
//!     a question, the parts of a header, the title of a passage and so on. Like the
//!     lexer it works line by line, with no knowledge of structure.
//!
//!     Extraction is an exhaustive match on [TokenType], so a new token kind cannot be
//!     added without deciding how to extract it. Tokens that arrive from outside the
//!     crate with a type name (see [Preparser::parse_record]) can still carry an unknown
//!     kind, which is reported as [PreparseError::UnknownLineType].

pub mod extractors;

use serde::{Deserialize, Serialize};

use crate::guide::lexing::ErrorMode;
use crate::guide::token::{SourceLine, Token, TokenType};

/// The typed value extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedValue {
    FileHeader {
        title: String,
    },
    Header {
        parts: Vec<String>,
    },
    Question {
        question_text: String,
        answer_text: String,
    },
    Passage {
        text: String,
    },
    LearnMore {
        text: String,
    },
    Content {
        text: String,
    },
    Comment {
        text: String,
    },
    Empty {},
    Binary {
        raw_text: String,
    },
}

impl ParsedValue {
    /// The token kind this value belongs to.
    pub fn kind(&self) -> TokenType {
        match self {
            ParsedValue::FileHeader { .. } => TokenType::FileHeader,
            ParsedValue::Header { .. } => TokenType::Header,
            ParsedValue::Question { .. } => TokenType::Question,
            ParsedValue::Passage { .. } => TokenType::Passage,
            ParsedValue::LearnMore { .. } => TokenType::LearnMore,
            ParsedValue::Content { .. } => TokenType::Content,
            ParsedValue::Comment { .. } => TokenType::Comment,
            ParsedValue::Empty {} => TokenType::Empty,
            ParsedValue::Binary { .. } => TokenType::Binary,
        }
    }

    /// Single-text payload of passages, learn-more lines, content and comments.
    pub fn text(&self) -> Option<&str> {
        match self {
            ParsedValue::Passage { text }
            | ParsedValue::LearnMore { text }
            | ParsedValue::Content { text }
            | ParsedValue::Comment { text } => Some(text),
            ParsedValue::FileHeader { title } => Some(title),
            _ => None,
        }
    }
}

/// A token together with its extracted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub number: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: ParsedValue,
}

impl ParsedLine {
    pub fn source(&self) -> SourceLine {
        SourceLine::new(self.number, &self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreparseError {
    #[error("{message} ({line})")]
    Validation {
        message: &'static str,
        line: SourceLine,
    },

    #[error("unknown line type: {name} ({line})")]
    UnknownLineType { name: String, line: SourceLine },
}

impl PreparseError {
    pub fn code(&self) -> &'static str {
        match self {
            PreparseError::Validation { .. } | PreparseError::UnknownLineType { .. } => {
                "VALIDATION"
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            PreparseError::Validation { message, .. } => message.to_string(),
            PreparseError::UnknownLineType { name, .. } => format!("unknown line type: {name}"),
        }
    }

    pub fn line(&self) -> &SourceLine {
        match self {
            PreparseError::Validation { line, .. }
            | PreparseError::UnknownLineType { line, .. } => line,
        }
    }
}

/// Parsed lines and the validation errors found while producing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparserOutput {
    pub lines: Vec<ParsedLine>,
    pub errors: Vec<PreparseError>,
}

impl PreparserOutput {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<ParsedLine>, Vec<PreparseError>> {
        if self.errors.is_empty() {
            Ok(self.lines)
        } else {
            Err(self.errors)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Preparser {
    error_mode: ErrorMode,
}

impl Preparser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Extract the value of a single token.
    pub fn parse_token(&self, token: &Token) -> Result<ParsedLine, PreparseError> {
        let cleaned = token.clean();
        let extracted = match token.token_type {
            TokenType::Question => extractors::question(&cleaned),
            TokenType::Header => extractors::header(&cleaned),
            TokenType::FileHeader => extractors::file_header(token, &cleaned),
            TokenType::Passage => extractors::passage(&cleaned),
            TokenType::LearnMore => extractors::learn_more(&cleaned),
            TokenType::Content => extractors::content(&cleaned),
            TokenType::Comment => extractors::comment(&cleaned),
            TokenType::Empty => extractors::empty(&cleaned),
            TokenType::Binary => extractors::binary(token),
        };
        let value = extracted.map_err(|message| PreparseError::Validation {
            message,
            line: token.source(),
        })?;
        Ok(ParsedLine {
            number: token.number,
            text: token.text.clone(),
            token_type: token.token_type,
            value,
        })
    }

    /// Extract the value of a line whose type arrives as a name, e.g. from a
    /// serialized token stream.
    pub fn parse_record(
        &self,
        number: usize,
        text: &str,
        type_name: &str,
    ) -> Result<ParsedLine, PreparseError> {
        let token_type = type_name
            .parse::<TokenType>()
            .map_err(|err| PreparseError::UnknownLineType {
                name: err.0,
                line: SourceLine::new(number, text),
            })?;
        self.parse_token(&Token::new(number, text, token_type))
    }

    pub fn parse(&self, tokens: &[Token]) -> PreparserOutput {
        let mut output = PreparserOutput::default();
        for token in tokens {
            match self.parse_token(token) {
                Ok(line) => output.lines.push(line),
                Err(error) => {
                    tracing::trace!(line = token.number, %error, "preparse failure");
                    output.errors.push(error);
                    if self.error_mode == ErrorMode::FailFast {
                        break;
                    }
                }
            }
        }
        tracing::debug!(
            tokens = tokens.len(),
            parsed = output.lines.len(),
            errors = output.errors.len(),
            "preparsed tokens"
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        let tokens = vec![
            Token::new(1, "Biology Guide", TokenType::FileHeader),
            Token::new(2, "Science: Biology: Cells", TokenType::Header),
            Token::new(3, "1. What is a cell? - Unit of life", TokenType::Question),
            Token::new(4, "Learn More: Chapter 1", TokenType::LearnMore),
            Token::new(5, "", TokenType::Empty),
        ];
        let output = Preparser::new().parse(&tokens);
        assert!(output.is_success());
        let values: Vec<_> = output.lines.iter().map(|l| l.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                ParsedValue::FileHeader {
                    title: "Biology Guide".into()
                },
                ParsedValue::Header {
                    parts: vec!["Science".into(), "Biology".into(), "Cells".into()]
                },
                ParsedValue::Question {
                    question_text: "What is a cell?".into(),
                    answer_text: "Unit of life".into()
                },
                ParsedValue::LearnMore {
                    text: "Chapter 1".into()
                },
                ParsedValue::Empty {},
            ]
        );
        assert!(values.iter().zip(&tokens).all(|(v, t)| v.kind() == t.token_type));
    }

    #[test]
    fn accumulates_validation_errors() {
        let tokens = vec![
            Token::new(1, "Guide", TokenType::FileHeader),
            Token::new(2, "Science: Biology", TokenType::Header),
            Token::new(3, "Passage:", TokenType::Passage),
        ];
        let output = Preparser::new().parse(&tokens);
        assert_eq!(output.lines.len(), 1);
        let messages: Vec<_> = output.errors.iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            vec![
                "header must contain at least two colons",
                "passage must contain text after 'Passage:'"
            ]
        );
    }

    #[test]
    fn fail_fast_stops_after_first_error() {
        let tokens = vec![
            Token::new(1, "Science: Biology", TokenType::Header),
            Token::new(2, "Passage:", TokenType::Passage),
        ];
        let output = Preparser::new()
            .with_error_mode(ErrorMode::FailFast)
            .parse(&tokens);
        assert_eq!(output.errors.len(), 1);
    }

    #[test]
    fn unknown_type_names_are_validation_errors() {
        let err = Preparser::new()
            .parse_record(7, "whatever", "spacer")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
        assert_eq!(
            err.to_string(),
            "unknown line type: spacer (line: 7, text: whatever)"
        );
        let ok = Preparser::new()
            .parse_record(7, "# hi", "comment")
            .unwrap();
        assert_eq!(ok.value, ParsedValue::Comment { text: "hi".into() });
    }

    #[test]
    fn values_serialize_externally_tagged() {
        let value = ParsedValue::Question {
            question_text: "Q".into(),
            answer_text: "A".into(),
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["question"]["question_text"], "Q");
        let empty = serde_json::to_value(ParsedValue::Empty {}).unwrap();
        assert_eq!(empty["empty"], serde_json::json!({}));
    }
}
