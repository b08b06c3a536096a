use thiserror::Error;

/// Represents all errors that can occur while building variable bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The binding text has no `=` separating name and value.
    #[error("binding '{binding}' must have the form NAME=0 or NAME=1")]
    MissingSeparator {
        /// The offending binding text.
        binding: String,
    },
    /// The name part of the binding is empty.
    #[error("binding '{binding}' has an empty variable name")]
    EmptyName {
        /// The offending binding text.
        binding: String,
    },
    /// The value is neither `0` nor `1`.
    #[error("'{text}' is not a bit, expected 0 or 1")]
    InvalidBit {
        /// The text or number that failed to convert.
        text: String,
    },
    /// The same variable was bound more than once.
    #[error("variable {name} is bound more than once")]
    DuplicateName {
        /// The repeated variable name.
        name: String,
    },
}
