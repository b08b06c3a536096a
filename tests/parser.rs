//! Parser tests: precedence, associativity, and syntax error reporting.

use boolcalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Scanner, TokenKind},
        parser::{MAX_NESTING_DEPTH, Parser},
    },
};
use rstest::rstest;

fn parse(source: &str) -> Result<Expr, Vec<String>> {
    let mut parser = Parser::new(Scanner::new(source));
    parser.parse().ok_or_else(|| parser.error_messages())
}

fn parse_errors(source: &str) -> Vec<String> {
    match parse(source) {
        Ok(expr) => panic!("'{source}' parsed as {expr} but was expected to fail"),
        Err(errors) => errors,
    }
}

#[rstest]
#[case("X", "X")]
#[case("X OR Y AND Z", "(X OR (Y AND Z))")]
#[case("X AND Y OR Z", "((X AND Y) OR Z)")]
#[case("X AND Y AND Z", "((X AND Y) AND Z)")]
#[case("X OR Y OR Z", "((X OR Y) OR Z)")]
#[case("X XOR Y XOR Z", "((X XOR Y) XOR Z)")]
#[case("X XOR Y OR Z", "((X XOR Y) OR Z)")]
#[case("X OR Y XOR Z", "(X OR (Y XOR Z))")]
#[case("X OR Y XOR Z AND W", "(X OR (Y XOR (Z AND W)))")]
#[case("(X OR Y) AND Z", "((X OR Y) AND Z)")]
#[case("NOT X AND Y", "((NOT X) AND Y)")]
#[case("X AND NOT Y", "(X AND (NOT Y))")]
#[case("NOT NOT X", "(NOT (NOT X))")]
#[case("NOT (X OR Y)", "(NOT (X OR Y))")]
#[case("((X))", "X")]
#[case("X AND (Y OR (Z XOR (NOT A)))", "(X AND (Y OR (Z XOR (NOT A))))")]
#[case("x and y", "(x AND y)")]
#[case("a\nor\nb", "(a OR b)")]
fn precedence_and_associativity(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(parse(source).unwrap().to_string(), expected);
}

#[test]
fn builds_the_expected_tree() {
    let expected = Expr::binary(BinaryOperator::Or,
                                Expr::variable("x"),
                                Expr::unary(UnaryOperator::Not, Expr::variable("Y")));
    assert_eq!(parse("x or not Y").unwrap(), expected);
}

#[test]
fn keyword_spelled_in_lowercase_is_not_a_variable() {
    // `and` alone cannot start an expression.
    assert_eq!(parse_errors("and"), ["(1:1) unknown expression AND"]);
}

#[rstest]
#[case("X AND", &["(1:6) unknown expression EOF"])]
#[case("", &["(1:1) unknown expression EOF"])]
#[case(")", &["(1:1) unknown expression )"])]
#[case("X AND Y)", &["(1:8) expected next token to be EOF, got ) instead"])]
#[case("X Y", &["(1:3) expected next token to be EOF, got IDENTIFIER instead"])]
#[case("X & Y", &["(1:3) expected next token to be EOF, got ILLEGAL instead"])]
#[case("(X AND Y", &["(1:9) expected next token to be ), got EOF instead"])]
#[case("X NOT Y", &["(1:3) unknown operator NOT"])]
#[case("X (Y)", &["(1:3) unknown operator ("])]
#[case("NOT", &["(1:4) unknown expression EOF"])]
#[case("X OR\n  AND Y", &["(2:3) unknown expression AND"])]
fn syntax_errors(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(parse_errors(source), expected);
}

#[test]
fn failed_group_reports_both_the_inner_error_and_the_missing_paren() {
    assert_eq!(parse_errors("(X AND"),
               ["(1:7) unknown expression EOF",
                "(1:7) expected next token to be ), got EOF instead"]);
}

#[test]
fn operators_after_a_failed_operand_are_skipped_silently() {
    assert_eq!(parse_errors("X AND ) OR Y"), ["(1:7) unknown expression )"]);
    assert_eq!(parse_errors("(X AND ) OR Y)"),
               ["(1:8) unknown expression )",
                "(1:13) expected next token to be ), got IDENTIFIER instead"]);
}

#[test]
fn errors_are_typed() {
    let mut parser = Parser::new(Scanner::new("X AND Y)"));
    assert!(parser.parse().is_none());
    assert_eq!(parser.errors(),
               [SyntaxError::UnexpectedToken { expected: TokenKind::Eof,
                                               found:    TokenKind::RParen,
                                               line:     1,
                                               column:   8, }]);
    assert_eq!(parser.errors()[0].position(), (1, 8));
}

#[test]
fn successful_parse_records_no_errors() {
    let mut parser = Parser::new(Scanner::new("NOT (A XOR b) OR C"));
    assert!(parser.parse().is_some());
    assert!(parser.errors().is_empty());
}

fn nesting_errors(source: &str) -> Vec<SyntaxError> {
    let mut parser = Parser::new(Scanner::new(source));
    assert!(parser.parse().is_none(), "deeply nested input must not parse");
    parser.into_errors()
}

#[test]
fn nested_groups_stop_at_the_depth_limit() {
    let source = "(".repeat(5000) + "X" + &")".repeat(5000);
    assert_eq!(nesting_errors(&source),
               [SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                              line:   1,
                                              column: MAX_NESTING_DEPTH + 1, }]);
    assert_eq!(nesting_errors(&source)[0].to_string(),
               "(1:257) expression nested too deeply (limit 256)");
}

#[test]
fn repeated_not_stops_at_the_depth_limit() {
    let source = "NOT ".repeat(200_000) + "X";
    assert_eq!(nesting_errors(&source),
               [SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                              line:   1,
                                              column: 4 * MAX_NESTING_DEPTH + 1, }]);
}

#[test]
fn long_operator_chains_count_towards_the_depth_limit() {
    let source = "X AND ".repeat(100_000) + "X";
    let errors = nesting_errors(&source);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], SyntaxError::NestingTooDeep { .. }));
}

#[test]
fn nesting_below_the_limit_parses() {
    let groups = "(".repeat(200) + "NOT X" + &")".repeat(200);
    assert_eq!(parse(&groups).map(|expr| expr.to_string()),
               Ok("(NOT X)".to_string()));

    let chain = "X OR ".repeat(200) + "X";
    assert!(parse(&chain).is_ok());
}
