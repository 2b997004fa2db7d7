//! Line Classification
//!
//!     Each classifier inspects one cleaned line and either claims it (returning a
//!     [Classification]) or passes. The [Lexer](super::Lexer) runs them in the order of
//!     [STANDARD_CLASSIFIERS] and the first claim wins, so order carries meaning:
//!
//!         1. binary        control characters poison the line before anything else
//!         2. file_header   line 1 only; may claim the line with an error
//!         3. comment       exactly one leading `#`
//!         4. question      list prefix; may claim the line with an error
//!         5. header        two or more colons, and not a passage/question/learn more
//!         6. passage       `Passage:` optionally behind `###` / `####`
//!         7. learn_more    `Learn More:`
//!         8. empty         whitespace only
//!
//!     A line nobody claims is content.

use super::patterns::{
    ANSWER_DELIMITER, COLON_DELIMITER, COMMENT_PREFIX, FIRST_LINE_NUMBER, LEARN_MORE_PREFIX,
    LIST_ITEM_PREFIX, MIN_HEADER_PARTS, PASSAGE_HEADING_PREFIXES, PASSAGE_PREFIX,
};
use crate::guide::text;
use crate::guide::token::TokenType;

/// A problem found while classifying a line. The line keeps its claimed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    BinaryContent,
    FirstLineEmpty,
    FirstLineIsHeader,
    MissingAnswerDelimiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub token_type: TokenType,
    pub finding: Option<Finding>,
}

impl Classification {
    fn clean(token_type: TokenType) -> Option<Self> {
        Some(Self {
            token_type,
            finding: None,
        })
    }

    fn flagged(token_type: TokenType, finding: Finding) -> Option<Self> {
        Some(Self {
            token_type,
            finding: Some(finding),
        })
    }
}

pub type Classifier = fn(&str, usize) -> Option<Classification>;

/// A classifier with the name it is reported under.
#[derive(Clone, Copy)]
pub struct NamedClassifier {
    pub name: &'static str,
    pub classify: Classifier,
}

pub const STANDARD_CLASSIFIERS: [NamedClassifier; 8] = [
    NamedClassifier {
        name: "binary",
        classify: is_binary,
    },
    NamedClassifier {
        name: "file_header",
        classify: is_file_header,
    },
    NamedClassifier {
        name: "comment",
        classify: is_comment,
    },
    NamedClassifier {
        name: "question",
        classify: is_question,
    },
    NamedClassifier {
        name: "header",
        classify: is_header,
    },
    NamedClassifier {
        name: "passage",
        classify: is_passage,
    },
    NamedClassifier {
        name: "learn_more",
        classify: is_learn_more,
    },
    NamedClassifier {
        name: "empty",
        classify: is_empty,
    },
];

pub fn is_binary(line: &str, _number: usize) -> Option<Classification> {
    line.chars()
        .any(|c| (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r'))
        .then_some(Classification {
            token_type: TokenType::Binary,
            finding: Some(Finding::BinaryContent),
        })
}

pub fn is_file_header(line: &str, number: usize) -> Option<Classification> {
    if number != FIRST_LINE_NUMBER {
        return None;
    }
    if text::is_blank(line) {
        return Classification::flagged(TokenType::Empty, Finding::FirstLineEmpty);
    }
    if is_header(line, number).is_some() {
        return Classification::flagged(TokenType::Header, Finding::FirstLineIsHeader);
    }
    Classification::clean(TokenType::FileHeader)
}

pub fn is_comment(line: &str, _number: usize) -> Option<Classification> {
    let trimmed = line.trim();
    let double = COMMENT_PREFIX.repeat(2);
    if trimmed.starts_with(COMMENT_PREFIX) && !trimmed.starts_with(&double) {
        return Classification::clean(TokenType::Comment);
    }
    None
}

pub fn is_question(line: &str, _number: usize) -> Option<Classification> {
    if !LIST_ITEM_PREFIX.is_match(line) {
        return None;
    }
    if !line.contains(ANSWER_DELIMITER) {
        return Classification::flagged(TokenType::Question, Finding::MissingAnswerDelimiter);
    }
    Classification::clean(TokenType::Question)
}

pub fn is_header(line: &str, number: usize) -> Option<Classification> {
    if is_passage(line, number).is_some()
        || is_question(line, number).is_some()
        || is_learn_more(line, number).is_some()
    {
        return None;
    }
    if line.split(COLON_DELIMITER).count() >= MIN_HEADER_PARTS {
        return Classification::clean(TokenType::Header);
    }
    None
}

pub fn is_passage(line: &str, _number: usize) -> Option<Classification> {
    let bare = text::has_prefix_ignore_case(line, PASSAGE_PREFIX);
    let under_heading = PASSAGE_HEADING_PREFIXES
        .iter()
        .any(|heading| text::has_prefix_ignore_case(line, &format!("{heading}{PASSAGE_PREFIX}")));
    if bare || under_heading {
        return Classification::clean(TokenType::Passage);
    }
    None
}

pub fn is_learn_more(line: &str, _number: usize) -> Option<Classification> {
    text::has_prefix_ignore_case(line, LEARN_MORE_PREFIX)
        .then_some(Classification {
            token_type: TokenType::LearnMore,
            finding: None,
        })
}

pub fn is_empty(line: &str, _number: usize) -> Option<Classification> {
    text::is_blank(line).then_some(Classification {
        token_type: TokenType::Empty,
        finding: None,
    })
}
