//! Structural parser
//!
//!     A single pass over the parsed lines with one cursor, `current`, the most
//!     recently opened node. Placement rules:
//!
//!         header      always a child of the root; becomes current
//!         passage     under the nearest header above current; becomes current
//!         question    under the nearest passage, else the nearest header; becomes current
//!         content     only directly under a current passage
//!         learn_more  only directly under a current question
//!         comment, empty, binary are dropped
//!
//!     The first structural error aborts the parse.

use chrono::{SecondsFormat, Utc};

use super::syntax_tree::{NodeId, SyntaxTree};
use super::ParseError;
use crate::guide::metadata::Metadata;
use crate::guide::preparsing::ParsedLine;
use crate::guide::token::TokenType;

/// Source of the tree's creation timestamp.
pub type Clock = fn() -> String;

fn utc_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone)]
pub struct Parser {
    clock: Clock,
}

impl Parser {
    pub fn new() -> Self {
        Self { clock: utc_now }
    }

    /// Replace the wall clock, e.g. for reproducible snapshots.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn parse(
        &self,
        lines: &[ParsedLine],
        metadata: Metadata,
    ) -> Result<SyntaxTree, ParseError> {
        let Some((first, rest)) = lines.split_first() else {
            return Err(ParseError::NoLines);
        };
        if first.token_type != TokenType::FileHeader {
            return Err(ParseError::MissingFileHeader {
                line: first.source(),
            });
        }

        let mut tree =
            SyntaxTree::with_root(metadata, (self.clock)(), first.value.clone(), first.number);
        let mut current = NodeId::ROOT;

        for line in rest {
            let value = line.value.clone();
            match line.token_type {
                TokenType::Header => {
                    current = tree.attach(NodeId::ROOT, TokenType::Header, value, line.number);
                }
                TokenType::Passage => {
                    let parent = tree
                        .nearest(current, TokenType::Header)
                        .ok_or_else(|| ParseError::PassageWithoutHeader {
                            line: line.source(),
                        })?;
                    current = tree.attach(parent, TokenType::Passage, value, line.number);
                }
                TokenType::Question => {
                    let parent = tree
                        .nearest(current, TokenType::Passage)
                        .or_else(|| tree.nearest(current, TokenType::Header))
                        .ok_or_else(|| ParseError::QuestionWithoutParent {
                            line: line.source(),
                        })?;
                    current = tree.attach(parent, TokenType::Question, value, line.number);
                }
                TokenType::Content => {
                    attach_under_current(&mut tree, current, TokenType::Passage, line)?;
                }
                TokenType::LearnMore => {
                    attach_under_current(&mut tree, current, TokenType::Question, line)?;
                }
                TokenType::FileHeader
                | TokenType::Comment
                | TokenType::Empty
                | TokenType::Binary => {
                    tracing::trace!(line = line.number, kind = %line.token_type, "skipped line");
                }
            }
        }

        tracing::debug!(nodes = tree.len(), "parsed syntax tree");
        Ok(tree)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn attach_under_current(
    tree: &mut SyntaxTree,
    current: NodeId,
    expected: TokenType,
    line: &ParsedLine,
) -> Result<NodeId, ParseError> {
    let under = tree.node(current).kind;
    if under != expected {
        return Err(ParseError::Unexpected {
            found: line.token_type,
            under,
            line: line.source(),
        });
    }
    Ok(tree.attach(current, line.token_type, line.value.clone(), line.number))
}
