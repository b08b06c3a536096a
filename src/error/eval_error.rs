use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression references a variable that has no binding.
    #[error("Variable {name} not found")]
    UnknownVariable {
        /// The name of the variable, as written in the source.
        name: String,
    },
}
