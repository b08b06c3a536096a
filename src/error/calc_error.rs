use thiserror::Error;

use crate::error::{EvalError, SyntaxError};

/// The failure of a full scan, parse, and evaluate run.
///
/// Syntax errors take precedence: an expression that does not parse is never
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The source text is not a valid expression.
    #[error("{}", join_lines(.0))]
    Syntax(Vec<SyntaxError>),
    /// The expression parsed but could not be reduced to a bit.
    #[error("{}", join_lines(.0))]
    Evaluation(Vec<EvalError>),
}

impl CalcError {
    /// Returns the human-readable messages, one per recorded error.
    ///
    /// # Example
    /// ```
    /// use boolcalc::{calculate, interpreter::value::Bindings};
    ///
    /// let err = calculate("A AND B", &Bindings::new()).unwrap_err();
    /// assert_eq!(err.messages(), ["Variable A not found", "Variable B not found"]);
    /// ```
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Syntax(errors) => errors.iter().map(ToString::to_string).collect(),
            Self::Evaluation(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }
}

fn join_lines<E: std::fmt::Display>(errors: &[E]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
