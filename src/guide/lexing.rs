//! Lexer
//!
//!     The lexer gives every input line exactly one [TokenType]. It never looks at
//!     neighbouring lines: structure is the parser's job. Classification runs on the
//!     cleaned text (see [text::clean](crate::guide::text::clean)) while the emitted token
//!     keeps the raw line, so errors can point at what the author actually wrote.
//!
//!     Some lines are claimed with an error attached: a question without an answer
//!     delimiter is still a question, and an empty first line is still empty. The error
//!     is reported next to the token, and whether lexing keeps going after it is decided
//!     by the [ErrorMode].
//!
//!     The classifier chain and its ordering live in [line_classification].

pub mod line_classification;
pub mod patterns;

use serde::{Deserialize, Serialize};

use crate::guide::text;
use crate::guide::token::{Line, SourceLine, Token, TokenType};
use line_classification::{Finding, NamedClassifier, STANDARD_CLASSIFIERS};

/// How a line-oriented stage reacts to its first error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Keep going and report every line error at the end.
    #[default]
    Accumulate,
    /// Stop at the first line error.
    FailFast,
}

/// Errors raised while classifying a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("contains binary or non-printable characters ({line})")]
    BinaryContent { line: SourceLine },

    #[error("first line cannot be empty ({line})")]
    FirstLineEmpty { line: SourceLine },

    #[error("first line must be a file header, not a regular header ({line})")]
    FirstLineIsHeader { line: SourceLine },

    #[error("missing answer delimiter ' - ' ({line})")]
    MissingAnswerDelimiter { line: SourceLine },
}

impl LexError {
    fn from_finding(finding: Finding, line: SourceLine) -> Self {
        match finding {
            Finding::BinaryContent => LexError::BinaryContent { line },
            Finding::FirstLineEmpty => LexError::FirstLineEmpty { line },
            Finding::FirstLineIsHeader => LexError::FirstLineIsHeader { line },
            Finding::MissingAnswerDelimiter => LexError::MissingAnswerDelimiter { line },
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            LexError::BinaryContent { .. } => "BINARY_CONTENT",
            LexError::FirstLineEmpty { .. } | LexError::FirstLineIsHeader { .. } => {
                "MISSING_FILE_HEADER"
            }
            LexError::MissingAnswerDelimiter { .. } => "MISSING_ANSWER_DELIMITER",
        }
    }

    /// The message without the line suffix.
    pub fn message(&self) -> &'static str {
        match self {
            LexError::BinaryContent { .. } => "contains binary or non-printable characters",
            LexError::FirstLineEmpty { .. } => "first line cannot be empty",
            LexError::FirstLineIsHeader { .. } => {
                "first line must be a file header, not a regular header"
            }
            LexError::MissingAnswerDelimiter { .. } => "missing answer delimiter ' - '",
        }
    }

    pub fn line(&self) -> &SourceLine {
        match self {
            LexError::BinaryContent { line }
            | LexError::FirstLineEmpty { line }
            | LexError::FirstLineIsHeader { line }
            | LexError::MissingAnswerDelimiter { line } => line,
        }
    }
}

/// Tokens and the line errors found while producing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexerOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexerOutput {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Line classifier driving an ordered chain of [NamedClassifier]s.
#[derive(Clone)]
pub struct Lexer {
    classifiers: Vec<NamedClassifier>,
    error_mode: ErrorMode,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            classifiers: STANDARD_CLASSIFIERS.to_vec(),
            error_mode: ErrorMode::default(),
        }
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// Classifier names in the order they are tried.
    pub fn classifier_names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|c| c.name).collect()
    }

    /// Classify one raw line. The first classifier to claim the line decides its type.
    pub fn classify(&self, raw: &str, number: usize) -> (TokenType, Option<LexError>) {
        let cleaned = text::clean(raw);
        for classifier in &self.classifiers {
            if let Some(classification) = (classifier.classify)(&cleaned, number) {
                tracing::trace!(
                    line = number,
                    classifier = classifier.name,
                    token_type = %classification.token_type,
                    "classified line"
                );
                let error = classification
                    .finding
                    .map(|finding| LexError::from_finding(finding, SourceLine::new(number, raw)));
                return (classification.token_type, error);
            }
        }
        (TokenType::Content, None)
    }

    pub fn lex_line(&self, line: &Line) -> (Token, Option<LexError>) {
        let (token_type, error) = self.classify(&line.text, line.number);
        (Token::new(line.number, &line.text, token_type), error)
    }

    /// Lex a whole document.
    ///
    /// In [ErrorMode::FailFast] the output stops at the first offending line (which is
    /// still included in `tokens`).
    pub fn lex(&self, lines: &[Line]) -> LexerOutput {
        let mut output = LexerOutput::default();
        for line in lines {
            let (token, error) = self.lex_line(line);
            output.tokens.push(token);
            if let Some(error) = error {
                output.errors.push(error);
                if self.error_mode == ErrorMode::FailFast {
                    break;
                }
            }
        }
        tracing::debug!(
            lines = lines.len(),
            tokens = output.tokens.len(),
            errors = output.errors.len(),
            "lexed document"
        );
        output
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
