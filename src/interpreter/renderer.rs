use crate::{ast::Expr, interpreter::value::Bindings};

/// Formats an expression tree back into fully parenthesized text.
///
/// Binary operations render as `(left OP right)` and unary operations as
/// `(OP operand)`. A variable renders as its name, or as its bound bit when
/// `bindings` is given and contains it.
///
/// # Example
/// ```
/// use boolcalc::{
///     ast::{BinaryOperator, Expr, UnaryOperator},
///     interpreter::{
///         renderer::expression_to_string,
///         value::{Bindings, Bit},
///     },
/// };
///
/// let expr = Expr::binary(BinaryOperator::Or,
///                         Expr::variable("X"),
///                         Expr::unary(UnaryOperator::Not, Expr::variable("Y")));
/// assert_eq!(expression_to_string(&expr, None), "(X OR (NOT Y))");
///
/// let bindings = Bindings::from([("X".to_string(), Bit::One)]);
/// assert_eq!(expression_to_string(&expr, Some(&bindings)), "(1 OR (NOT Y))");
/// ```
#[must_use]
pub fn expression_to_string(expression: &Expr, bindings: Option<&Bindings>) -> String {
    match expression {
        Expr::BinaryOperation { operator, left, right } => {
            let left = expression_to_string(left, bindings);
            let right = expression_to_string(right, bindings);
            format!("({left} {operator} {right})")
        },
        Expr::UnaryOperation { operator, operand } => {
            format!("({operator} {})", expression_to_string(operand, bindings))
        },
        Expr::Variable { name } => bindings.and_then(|b| b.get(name))
                                           .map_or_else(|| name.clone(), ToString::to_string),
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", expression_to_string(self, None))
    }
}
