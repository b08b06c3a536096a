use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur while parsing.
///
/// Every message is prefixed with the `(line:column)` of the token that caused
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The lookahead token is not the one the grammar requires here.
    #[error("({line}:{column}) expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the parser required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line of the found token.
        line:     usize,
        /// The source column of the found token.
        column:   usize,
    },
    /// The token cannot start an expression.
    #[error("({line}:{column}) unknown expression {found}")]
    UnknownExpression {
        /// The token kind found where an operand was expected.
        found:  TokenKind,
        /// The source line of the found token.
        line:   usize,
        /// The source column of the found token.
        column: usize,
    },
    /// The token binds like an operator but is not a binary operator.
    #[error("({line}:{column}) unknown operator {found}")]
    UnknownOperator {
        /// The token kind found in operator position.
        found:  TokenKind,
        /// The source line of the found token.
        line:   usize,
        /// The source column of the found token.
        column: usize,
    },
    /// The expression nests deeper than the parser allows.
    #[error("({line}:{column}) expression nested too deeply (limit {limit})")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line of the token at which the limit was reached.
        line:   usize,
        /// The source column of the token at which the limit was reached.
        column: usize,
    },
}

impl SyntaxError {
    /// Returns the `(line, column)` the error points at.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnknownExpression { line, column, .. }
            | Self::UnknownOperator { line, column, .. }
            | Self::NestingTooDeep { line, column, .. } => (*line, *column),
        }
    }
}
