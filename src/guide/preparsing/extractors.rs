//! Per-kind value extractors
//!
//!     One function per token type. Each receives the token and its cleaned text and
//!     either produces the [ParsedValue] for that kind or a validation message. The
//!     lexer has already classified the line, so most checks here only fail when a
//!     token was built by hand or edited after lexing.

use crate::guide::lexing::patterns::{
    find_after_keyword, strip_prefix_ignore_case, ANSWER_DELIMITER, COLON_DELIMITER,
    COMMENT_PREFIX, FIRST_LINE_NUMBER, LEARN_MORE_PREFIX, LIST_ITEM_PREFIX, MIN_HEADER_PARTS,
    PASSAGE_PREFIX,
};
use crate::guide::text;
use crate::guide::token::Token;

use super::ParsedValue;

/// Validation failures carry a fixed message; the caller attaches the line.
pub type Extracted = Result<ParsedValue, &'static str>;

pub fn question(cleaned: &str) -> Extracted {
    let trimmed = cleaned.trim_start();
    if !LIST_ITEM_PREFIX.is_match(trimmed) {
        return Err("question must start with a number or bullet point");
    }
    let Some((prompt, answer)) = trimmed.split_once(ANSWER_DELIMITER) else {
        return Err("question must contain answer delimiter ' - '");
    };
    let prompt = LIST_ITEM_PREFIX.replace(prompt, "");
    Ok(ParsedValue::Question {
        question_text: text::clean(&prompt),
        answer_text: text::clean(answer),
    })
}

pub fn header(cleaned: &str) -> Extracted {
    let parts: Vec<String> = cleaned.split(COLON_DELIMITER).map(text::clean).collect();
    if parts.len() < MIN_HEADER_PARTS {
        return Err("header must contain at least two colons");
    }
    Ok(ParsedValue::Header { parts })
}

pub fn file_header(token: &Token, cleaned: &str) -> Extracted {
    if token.number != FIRST_LINE_NUMBER {
        return Err("file header must be on line 1");
    }
    if cleaned.matches(COLON_DELIMITER).count() >= MIN_HEADER_PARTS - 1 {
        return Err("file header should not be a regular header");
    }
    Ok(ParsedValue::FileHeader {
        title: cleaned.to_string(),
    })
}

pub fn passage(cleaned: &str) -> Extracted {
    let Some(start) = find_after_keyword(cleaned, PASSAGE_PREFIX) else {
        return Err("passage must contain 'Passage:'");
    };
    let title = text::clean(&cleaned[start..]);
    if title.is_empty() {
        return Err("passage must contain text after 'Passage:'");
    }
    Ok(ParsedValue::Passage { text: title })
}

pub fn learn_more(cleaned: &str) -> Extracted {
    let Some(rest) = strip_prefix_ignore_case(cleaned, LEARN_MORE_PREFIX) else {
        return Err("learn more line must start with 'Learn More:'");
    };
    let rest = text::clean(rest);
    if rest.is_empty() {
        return Err("learn more line must contain text after 'Learn More:'");
    }
    Ok(ParsedValue::LearnMore { text: rest })
}

pub fn content(cleaned: &str) -> Extracted {
    if text::is_blank(cleaned) {
        return Err("content line must not be empty or whitespace only");
    }
    Ok(ParsedValue::Content {
        text: cleaned.to_string(),
    })
}

pub fn comment(cleaned: &str) -> Extracted {
    let Some(rest) = cleaned.strip_prefix(COMMENT_PREFIX) else {
        return Err("comment must start with exactly one #");
    };
    if rest.starts_with(COMMENT_PREFIX) {
        return Err("comment must start with exactly one #");
    }
    Ok(ParsedValue::Comment {
        text: text::clean(rest),
    })
}

pub fn empty(cleaned: &str) -> Extracted {
    if !text::is_blank(cleaned) {
        return Err("line must be empty or contain only whitespace");
    }
    Ok(ParsedValue::Empty {})
}

/// Binary lines are passed through untouched; the lexer already reported them.
pub fn binary(token: &Token) -> Extracted {
    Ok(ParsedValue::Binary {
        raw_text: token.text.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::token::TokenType;

    #[test]
    fn question_splits_on_first_delimiter() {
        assert_eq!(
            question("2. What is 2 - 2? - 0"),
            Ok(ParsedValue::Question {
                question_text: "What is 2".into(),
                answer_text: "2? - 0".into(),
            })
        );
    }

    #[test]
    fn question_strips_bullets() {
        assert_eq!(
            question("* Powerhouse of the cell? - Mitochondria"),
            Ok(ParsedValue::Question {
                question_text: "Powerhouse of the cell?".into(),
                answer_text: "Mitochondria".into(),
            })
        );
    }

    #[test]
    fn question_validation() {
        assert_eq!(
            question("What? - yes"),
            Err("question must start with a number or bullet point")
        );
        assert_eq!(
            question("1. What?"),
            Err("question must contain answer delimiter ' - '")
        );
    }

    #[test]
    fn header_parts_are_cleaned() {
        assert_eq!(
            header("Science :  Biology\u{200B}: Cells "),
            Ok(ParsedValue::Header {
                parts: vec!["Science".into(), "Biology".into(), "Cells".into()]
            })
        );
        assert_eq!(
            header("Science: Biology"),
            Err("header must contain at least two colons")
        );
    }

    #[test]
    fn file_header_rules() {
        let first = Token::new(1, "Guide: Intro", TokenType::FileHeader);
        assert_eq!(
            file_header(&first, "Guide: Intro"),
            Ok(ParsedValue::FileHeader {
                title: "Guide: Intro".into()
            })
        );
        let later = Token::new(2, "Guide", TokenType::FileHeader);
        assert_eq!(
            file_header(&later, "Guide"),
            Err("file header must be on line 1")
        );
        assert_eq!(
            file_header(&first, "A: B: C"),
            Err("file header should not be a regular header")
        );
    }

    #[test]
    fn passage_title_after_keyword() {
        assert_eq!(
            passage("### PASSAGE:   Cell Theory"),
            Ok(ParsedValue::Passage {
                text: "Cell Theory".into()
            })
        );
        assert_eq!(
            passage("Passage:"),
            Err("passage must contain text after 'Passage:'")
        );
    }

    #[test]
    fn learn_more_text() {
        assert_eq!(
            learn_more("LEARN MORE: chapter 2"),
            Ok(ParsedValue::LearnMore {
                text: "chapter 2".into()
            })
        );
        assert_eq!(
            learn_more("Learn More:   "),
            Err("learn more line must contain text after 'Learn More:'")
        );
        assert_eq!(
            learn_more("See also: x"),
            Err("learn more line must start with 'Learn More:'")
        );
    }

    #[test]
    fn comment_and_empty() {
        assert_eq!(
            comment("# todo: verify"),
            Ok(ParsedValue::Comment {
                text: "todo: verify".into()
            })
        );
        assert_eq!(
            comment("## heading"),
            Err("comment must start with exactly one #")
        );
        assert_eq!(empty(""), Ok(ParsedValue::Empty {}));
        assert_eq!(
            empty("x"),
            Err("line must be empty or contain only whitespace")
        );
        assert_eq!(
            content(""),
            Err("content line must not be empty or whitespace only")
        );
    }

    #[test]
    fn binary_passes_raw_text() {
        let token = Token::new(5, "a\u{0}b ", TokenType::Binary);
        assert_eq!(
            binary(&token),
            Ok(ParsedValue::Binary {
                raw_text: "a\u{0}b ".into()
            })
        );
    }
}
