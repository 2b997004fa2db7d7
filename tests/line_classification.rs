//! Line classification table
//!
//! Each case is one line of a guide, its line number and the token type the lexer must
//! assign. Cases with an attached error also check the error code.

use rstest::rstest;
use studyguide::guide::lexing::Lexer;
use studyguide::guide::token::TokenType;

#[rstest]
#[case::title("Biology Guide", 1, TokenType::FileHeader)]
#[case::title_with_one_colon("Biology: Intro", 1, TokenType::FileHeader)]
#[case::header("Science: Biology: Cells", 2, TokenType::Header)]
#[case::deep_header("A: B: C: D: E: F", 5, TokenType::Header)]
#[case::numbered_question("1. What is a cell? - Unit of life", 3, TokenType::Question)]
#[case::starred_question("* What is a cell? - Unit of life", 3, TokenType::Question)]
#[case::dashed_question("- What is a cell? - Unit of life", 3, TokenType::Question)]
#[case::question_with_colons("1. Ratio a: b: c? - 1:2:3", 3, TokenType::Question)]
#[case::passage("Passage: Cell Theory", 4, TokenType::Passage)]
#[case::passage_lowercase("passage: cell theory", 4, TokenType::Passage)]
#[case::passage_heading("### Passage: Cell Theory", 4, TokenType::Passage)]
#[case::passage_subheading("#### Passage: Cell Theory", 4, TokenType::Passage)]
#[case::passage_with_colons("Passage: Time: 10: 30", 4, TokenType::Passage)]
#[case::learn_more("Learn More: Chapter 1", 5, TokenType::LearnMore)]
#[case::learn_more_upper("LEARN MORE: Chapter 1", 5, TokenType::LearnMore)]
#[case::comment("# a note", 6, TokenType::Comment)]
#[case::double_hash_is_content("## not a comment", 6, TokenType::Content)]
#[case::empty("", 7, TokenType::Empty)]
#[case::whitespace("   \t ", 7, TokenType::Empty)]
#[case::content("All living things are made of cells.", 8, TokenType::Content)]
#[case::number_without_space("1.5 liters", 8, TokenType::Content)]
fn classifies_lines(#[case] line: &str, #[case] number: usize, #[case] expected: TokenType) {
    let (token_type, error) = Lexer::new().classify(line, number);
    assert_eq!(token_type, expected, "line {number}: {line:?}");
    assert!(error.is_none(), "unexpected error for {line:?}: {error:?}");
}

#[rstest]
#[case::empty_first_line("", 1, TokenType::Empty, "MISSING_FILE_HEADER")]
#[case::header_first_line("A: B: C", 1, TokenType::Header, "MISSING_FILE_HEADER")]
#[case::missing_delimiter("1. What is a cell?", 3, TokenType::Question, "MISSING_ANSWER_DELIMITER")]
#[case::hyphen_without_spaces("2. Self-evident-answer", 3, TokenType::Question, "MISSING_ANSWER_DELIMITER")]
#[case::control_character("bad \u{0007} bell", 4, TokenType::Binary, "BINARY_CONTENT")]
#[case::binary_on_first_line("\u{0000}", 1, TokenType::Binary, "BINARY_CONTENT")]
fn classifies_lines_with_errors(
    #[case] line: &str,
    #[case] number: usize,
    #[case] expected: TokenType,
    #[case] code: &str,
) {
    let (token_type, error) = Lexer::new().classify(line, number);
    assert_eq!(token_type, expected);
    let error = error.expect("an error");
    assert_eq!(error.code(), code);
    assert_eq!(error.line().number, number);
}

#[test]
fn classifier_order_is_stable() {
    assert_eq!(
        Lexer::new().classifier_names(),
        vec![
            "binary",
            "file_header",
            "comment",
            "question",
            "header",
            "passage",
            "learn_more",
            "empty"
        ]
    );
}
