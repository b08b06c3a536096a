//! # boolcalc
//!
//! boolcalc is a boolean logic expression interpreter written in Rust.
//! It scans, parses, and evaluates expressions built from `AND`, `OR`, `XOR`,
//! `NOT`, parentheses and named variables, and explains every result with an
//! ordered trace of the operator applications that produced it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::{CalcProcess, Evaluator},
        lexer::Scanner,
        parser::Parser,
        renderer::expression_to_string,
        value::{Bindings, Bit},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// a parsed expression as a tree. The tree is built by the parser and read by
/// the evaluator and the renderer.
///
/// # Responsibilities
/// - Defines one variant per expression kind, so every consumer matches
///   exhaustively.
/// - Maps operator tokens to operators and operators back to their keywords.
pub mod ast;
/// Provides error types for parsing, evaluation, and binding input.
///
/// Every stage reports failure as a list of typed errors whose `Display`
/// output is the human-readable message shown to users.
///
/// # Responsibilities
/// - Defines syntax errors with `(line:column)` positions.
/// - Defines semantic errors for unbound variables.
/// - Defines errors for malformed `NAME=BIT` bindings.
pub mod error;
/// Orchestrates scanning, parsing, evaluation, and rendering.
///
/// # Responsibilities
/// - Coordinates the scanner, parser, evaluator and renderer.
/// - Defines the `Bit` value type and variable bindings.
pub mod interpreter;
/// General utilities shared by the library and the command-line tool.
///
/// # Responsibilities
/// - Parse `NAME=BIT` binding strings into `Bindings`.
pub mod util;

/// The outcome of a successful [`calculate`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// The parsed expression, fully parenthesized.
    pub parsed:     String,
    /// The parsed expression with bound variables replaced by their values.
    pub expression: String,
    /// The value of the expression.
    pub result:     Bit,
    /// Every operator application, in the order it completed.
    pub processes:  Vec<CalcProcess>,
}

/// Scans, parses, and evaluates `source` against `bindings`.
///
/// A fresh scanner, parser and evaluator are built for every call, so calls
/// share no state.
///
/// # Errors
/// Returns [`CalcError::Syntax`] with every recorded syntax error if the
/// source does not parse, or [`CalcError::Evaluation`] with every unbound
/// variable if it parses but cannot be evaluated.
///
/// # Examples
/// ```
/// use boolcalc::{
///     calculate,
///     interpreter::value::{Bindings, Bit},
/// };
///
/// let bindings = Bindings::from([("X".to_string(), Bit::One), ("Y".to_string(), Bit::Zero)]);
///
/// let calculation = calculate("x or not Y", &bindings);
/// assert!(calculation.is_err()); // `x` is not `X`
///
/// let calculation = calculate("X or not Y", &bindings).unwrap();
/// assert_eq!(calculation.parsed, "(X OR (NOT Y))");
/// assert_eq!(calculation.expression, "(1 OR (NOT 0))");
/// assert_eq!(calculation.result, Bit::One);
/// assert_eq!(calculation.processes.len(), 2);
/// ```
pub fn calculate(source: &str, bindings: &Bindings) -> Result<Calculation, CalcError> {
    let mut parser = Parser::new(Scanner::new(source));
    let Some(expression) = parser.parse() else {
        return Err(CalcError::Syntax(parser.into_errors()));
    };

    let mut evaluator = Evaluator::new(bindings);
    let result = evaluator.calculate(&expression);
    let (processes, errors) = evaluator.finish();
    let Some(result) = result else {
        return Err(CalcError::Evaluation(errors));
    };

    Ok(Calculation { parsed: expression_to_string(&expression, None),
                     expression: expression_to_string(&expression, Some(bindings)),
                     result,
                     processes })
}
