use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{evaluator::core::Evaluator, value::Bit},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are evaluated before either is inspected; there is no
    /// short-circuiting. If either operand is absent the result is absent and
    /// no trace entry is recorded.
    pub(super) fn eval_binary_op(&mut self,
                                 operator: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> Option<Bit> {
        let left = self.calculate(left);
        let right = self.calculate(right);
        let (Some(left), Some(right)) = (left, right) else {
            return None;
        };

        let result = Self::eval_logic(operator, left, right);
        self.record(operator, Some(left), right, result);
        Some(result)
    }

    /// Applies a binary operator's truth table.
    ///
    /// - `AND` is one only when both operands are one.
    /// - `OR` is zero only when both operands are zero.
    /// - `XOR` is one when the operands differ.
    ///
    /// # Example
    /// ```
    /// use boolcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Bit},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_logic(BinaryOperator::Xor, Bit::One, Bit::Zero), Bit::One);
    /// assert_eq!(Evaluator::eval_logic(BinaryOperator::And, Bit::One, Bit::Zero), Bit::Zero);
    /// ```
    #[must_use]
    pub fn eval_logic(operator: BinaryOperator, left: Bit, right: Bit) -> Bit {
        match operator {
            BinaryOperator::And => left & right,
            BinaryOperator::Or => left | right,
            BinaryOperator::Xor => left ^ right,
        }
    }
}
