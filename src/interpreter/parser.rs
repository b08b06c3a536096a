/// Core parser state and the precedence-climbing loop.
///
/// Holds the current and lookahead tokens, the syntax error accumulator, and
/// the priority table that decides how far an expression extends.
pub mod core;

/// Binary operator parsing.
///
/// Folds `AND`, `OR` and `XOR` into the expression built so far.
pub mod binary;

/// Prefix term parsing.
///
/// Handles variables, `NOT` and parenthesized groups.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, Parser, Priority};
