use serde::Serialize;

use crate::interpreter::value::Bit;

/// One operator application recorded during evaluation.
///
/// `left` is absent for unary operations. `index` numbers the records of one
/// evaluation run in completion order (children before parents), starting at
/// zero with no gaps.
///
/// Displays as `left OP right = result`, or `OP right = result` for unary
/// steps.
///
/// # Example
/// ```
/// use boolcalc::interpreter::{evaluator::CalcProcess, value::Bit};
///
/// let step = CalcProcess { operator: "NOT".to_string(),
///                          left:     None,
///                          right:    Bit::Zero,
///                          result:   Bit::One,
///                          index:    0, };
/// assert_eq!(step.to_string(), "NOT 0 = 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcProcess {
    /// The operator name, such as `AND` or `NOT`.
    pub operator: String,
    /// The left operand; `None` for unary operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left:     Option<Bit>,
    /// The right (or only) operand.
    pub right:    Bit,
    /// The result of the application.
    pub result:   Bit,
    /// Position of this record in the trace.
    pub index:    usize,
}

impl std::fmt::Display for CalcProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(left) = self.left {
            write!(f, "{left} ")?;
        }
        write!(f, "{} {} = {}", self.operator, self.right, self.result)
    }
}
