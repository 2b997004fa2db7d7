//! Parser
//!
//!     Builds the line-structural [SyntaxTree] from parsed lines: which passage a
//!     content line belongs to, which question owns a learn-more line, and so on.
//!     Headers are not merged here; that happens when the domain tree is built.
//!
//!     See [parser] for the placement rules and [syntax_tree] for the arena.

pub mod parser;
pub mod syntax_tree;

pub use parser::Parser;
pub use syntax_tree::{NodeId, SyntaxNode, SyntaxTree};

use crate::guide::token::{SourceLine, TokenType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no lines to parse")]
    NoLines,

    #[error("first line must be a file header ({line})")]
    MissingFileHeader { line: SourceLine },

    #[error("passage without parent header ({line})")]
    PassageWithoutHeader { line: SourceLine },

    #[error("question without valid parent ({line})")]
    QuestionWithoutParent { line: SourceLine },

    #[error("unexpected {found} under {under} ({line})")]
    Unexpected {
        found: TokenType,
        under: TokenType,
        line: SourceLine,
    },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        "VALIDATION"
    }

    pub fn message(&self) -> String {
        match self {
            ParseError::NoLines => "no lines to parse".to_string(),
            ParseError::MissingFileHeader { .. } => "first line must be a file header".to_string(),
            ParseError::PassageWithoutHeader { .. } => "passage without parent header".to_string(),
            ParseError::QuestionWithoutParent { .. } => "question without valid parent".to_string(),
            ParseError::Unexpected { found, under, .. } => {
                format!("unexpected {found} under {under}")
            }
        }
    }

    /// The offending line; `None` for document-level errors.
    pub fn line(&self) -> Option<&SourceLine> {
        match self {
            ParseError::NoLines => None,
            ParseError::MissingFileHeader { line }
            | ParseError::PassageWithoutHeader { line }
            | ParseError::QuestionWithoutParent { line }
            | ParseError::Unexpected { line, .. } => Some(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::lexing::Lexer;
    use crate::guide::metadata::Metadata;
    use crate::guide::preparsing::{ParsedValue, Preparser};
    use crate::guide::token::Line;

    fn parse(lines: &[&str]) -> Result<SyntaxTree, ParseError> {
        let tokens = Lexer::new()
            .lex(&Line::numbered(lines.iter().copied()))
            .into_result()
            .expect("lexes");
        let parsed = Preparser::new().parse(&tokens).into_result().expect("preparses");
        Parser::new()
            .with_clock(|| "2024-05-01T12:00:00Z".to_string())
            .parse(&parsed, Metadata::new("study_guide"))
    }

    fn shape(tree: &SyntaxTree) -> Vec<(TokenType, usize)> {
        tree.walk()
            .map(|(id, depth)| (tree.node(id).kind, depth))
            .collect()
    }

    #[test]
    fn places_nodes_by_rules() {
        let tree = parse(&[
            "Guide",
            "Science: Biology: Cells",
            "1. Q1? - A1",
            "Learn More: more",
            "Passage: Theory",
            "Line one",
            "Line two",
            "2. Q2? - A2",
            "Science: Biology: Genetics",
            "3. Q3? - A3",
        ])
        .unwrap();
        assert_eq!(
            shape(&tree),
            vec![
                (TokenType::FileHeader, 0),
                (TokenType::Header, 1),
                (TokenType::Question, 2),
                (TokenType::LearnMore, 3),
                (TokenType::Passage, 2),
                (TokenType::Content, 3),
                (TokenType::Content, 3),
                (TokenType::Question, 3),
                (TokenType::Header, 1),
                (TokenType::Question, 2),
            ]
        );
        assert_eq!(tree.timestamp, "2024-05-01T12:00:00Z");
        assert_eq!(
            tree.root().value,
            ParsedValue::FileHeader {
                title: "Guide".into()
            }
        );
    }

    #[test]
    fn passage_after_question_attaches_to_header() {
        let tree = parse(&[
            "Guide",
            "A: B: C",
            "Passage: One",
            "1. Q? - A",
            "Passage: Two",
        ])
        .unwrap();
        let header = tree.root().children()[0];
        let kinds: Vec<_> = tree.children(header).map(|n| n.kind).collect();
        assert_eq!(kinds, vec![TokenType::Passage, TokenType::Passage]);
    }

    #[test]
    fn comments_and_blank_lines_are_dropped() {
        let tree = parse(&["Guide", "", "# note", "A: B: C", ""]).unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            Parser::new().parse(&[], Metadata::default()),
            Err(ParseError::NoLines)
        );
    }

    #[test]
    fn passage_requires_header() {
        let err = parse(&["Guide", "Passage: Orphan"]).unwrap_err();
        assert_eq!(err.message(), "passage without parent header");
        assert_eq!(err.line().map(|l| l.number), Some(2));
    }

    #[test]
    fn question_requires_parent() {
        let err = parse(&["Guide", "1. Q? - A"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "question without valid parent (line: 2, text: 1. Q? - A)"
        );
    }

    #[test]
    fn content_only_under_passage() {
        let err = parse(&["Guide", "A: B: C", "stray text"]).unwrap_err();
        assert_eq!(err.message(), "unexpected content under header");

        let err = parse(&["Guide", "A: B: C", "Passage: P", "1. Q? - A", "more"]).unwrap_err();
        assert_eq!(err.message(), "unexpected content under question");
    }

    #[test]
    fn learn_more_only_under_question() {
        let err = parse(&["Guide", "A: B: C", "Learn More: x"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::Unexpected {
                found: TokenType::LearnMore,
                under: TokenType::Header,
                line: SourceLine::new(3, "Learn More: x"),
            }
        );
    }

    #[test]
    fn first_line_must_be_file_header() {
        let tokens = vec![crate::guide::preparsing::ParsedLine {
            number: 1,
            text: "x".into(),
            token_type: TokenType::Content,
            value: ParsedValue::Content { text: "x".into() },
        }];
        let err = Parser::new()
            .parse(&tokens, Metadata::default())
            .unwrap_err();
        assert_eq!(err.message(), "first line must be a file header");
    }
}
