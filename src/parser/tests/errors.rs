//! Tests for the errors reported while constructing trees.

use crate::parser::ast::UnknownOperator;
use crate::test_util::assert_parse_error;
use crate::{Config, ParseError, parse_with};
use rstest::rstest;

fn expression(text: &str) -> String {
    text.to_string()
}

#[rstest]
#[case("*5", '*')]
#[case("/5", '/')]
fn leading_multiplicative_operator_is_rejected(#[case] src: &str, #[case] operator: char) {
    assert_parse_error(
        src,
        &ParseError::InvalidLeadingOperator {
            operator,
            expression: expression(src),
        },
    );
}

#[test]
fn leading_operator_inside_group_reports_group_text() {
    assert_parse_error(
        "1+(*2)",
        &ParseError::InvalidLeadingOperator {
            operator: '*',
            expression: expression("*2"),
        },
    );
}

#[rstest]
#[case("()", 0, "()")]
#[case("1+()", 2, "1+()")]
#[case("(1+())", 2, "1+()")]
#[case("5()", 1, "5()")]
fn empty_parentheses_are_rejected(#[case] src: &str, #[case] index: usize, #[case] text: &str) {
    assert_parse_error(
        src,
        &ParseError::EmptyParentheses {
            index,
            expression: expression(text),
        },
    );
}

#[rstest]
#[case("(1+2", 0, "(1+2")]
#[case("1+2)", 3, "1+2)")]
#[case("((1+2)", 0, "((1+2)")]
#[case("(1))", 3, "(1))")]
#[case("2*(3+(4)", 2, "2*(3+(4)")]
#[case("2(", 1, "2(")]
fn unmatched_parentheses_are_rejected(
    #[case] src: &str,
    #[case] index: usize,
    #[case] text: &str,
) {
    assert_parse_error(
        src,
        &ParseError::UnmatchedParentheses {
            index,
            expression: expression(text),
        },
    );
}

#[rstest]
#[case("1+a", 'a', 2, "1+a")]
#[case("1 + 2", ' ', 1, "1 + 2")]
#[case("2^3", '^', 1, "2^3")]
#[case("4*(1+x)", 'x', 2, "1+x")]
fn unrecognised_characters_are_located(
    #[case] src: &str,
    #[case] character: char,
    #[case] index: usize,
    #[case] text: &str,
) {
    assert_parse_error(
        src,
        &ParseError::UnrecognizedCharacter {
            character,
            index,
            expression: expression(text),
        },
    );
}

#[rstest]
#[case("1.2.3", "01.2.3", 0, "1.2.3")]
#[case("1+.", ".", 2, "1+.")]
#[case("4*1..5", "1..5", 2, "4*1..5")]
#[case("1+(2+1.2.3)", "1.2.3", 2, "2+1.2.3")]
fn malformed_numbers_are_rejected(
    #[case] src: &str,
    #[case] literal: &str,
    #[case] index: usize,
    #[case] text: &str,
) {
    assert_parse_error(
        src,
        &ParseError::InvalidNumber {
            literal: literal.to_string(),
            index,
            expression: expression(text),
        },
    );
}

#[rstest]
#[case("1++2", 1)]
#[case("1*-2", 1)]
#[case("3-/2", 1)]
#[case("1+", 1)]
#[case("2*", 1)]
#[case("4+5-", 3)]
#[case("-", 0)]
fn operator_without_operand_is_rejected(#[case] src: &str, #[case] index: usize) {
    assert_parse_error(
        src,
        &ParseError::MissingOperand {
            index,
            expression: expression(src),
        },
    );
}

#[rstest]
#[case("2(3)", 1)]
#[case("(2)(3)", 3)]
#[case("(2)3", 3)]
#[case("1+(2)45", 5)]
fn adjacent_operands_are_rejected(#[case] src: &str, #[case] index: usize) {
    assert_parse_error(
        src,
        &ParseError::MissingOperator {
            index,
            expression: expression(src),
        },
    );
}

#[test]
fn nesting_beyond_limit_is_rejected() {
    let config = Config::default().with_max_depth(2);
    assert_eq!(
        parse_with("(((1)))", &config),
        Err(ParseError::NestingTooDeep { limit: 2 })
    );
}

#[test]
fn unknown_operator_converts_into_parse_error() {
    let err: ParseError = UnknownOperator('%').into();
    assert_eq!(err, ParseError::UnknownOperator(UnknownOperator('%')));
    assert_eq!(
        err.to_string(),
        "character '%' does not name a supported operator"
    );
}

#[test]
fn invalid_number_message_names_expression() {
    let err = crate::parse("1+(2+1.2.3)").err();
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("invalid number '1.2.3' at position 2 of the expression 2+1.2.3")
    );
}

#[test]
fn messages_name_position_and_expression() {
    let err = crate::parse("1+a").err();
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("character 'a' at position 2 of the expression 1+a could not be processed")
    );
}
