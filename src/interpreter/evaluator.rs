/// Core evaluation logic and the evaluation context.
///
/// Holds the bindings, the semantic error accumulator, and the calculation
/// trace, and dispatches on the expression variant.
pub mod core;

/// Unary operator evaluation.
///
/// Implements `NOT`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the `AND`, `OR` and `XOR` truth tables.
pub mod binary;

/// Calculation trace records.
///
/// One record per operator application, in the order the applications
/// complete.
pub mod trace;

pub use self::{core::Evaluator, trace::CalcProcess};
