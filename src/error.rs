/// Binding errors.
///
/// Raised while turning `NAME=BIT` text into variable bindings, or when a
/// number or string cannot be converted into a bit.
pub mod binding_error;
/// Pipeline errors.
///
/// Wraps the error lists of the parser and the evaluator for callers that run
/// the whole pipeline in one call.
pub mod calc_error;
/// Evaluation errors.
///
/// Semantic errors recorded while reducing an expression tree to a bit.
pub mod eval_error;
/// Syntax errors.
///
/// Grammar violations and unexpected tokens recorded by the parser. Each one
/// carries the source position of the offending token.
pub mod syntax_error;

pub use binding_error::BindingError;
pub use calc_error::CalcError;
pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
