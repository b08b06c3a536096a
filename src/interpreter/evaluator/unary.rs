use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{evaluator::core::Evaluator, value::Bit},
};

impl Evaluator<'_> {
    /// Evaluates a unary operation node.
    ///
    /// When the operand is absent the result is absent and no trace entry is
    /// recorded.
    pub(super) fn eval_unary_op(&mut self, operator: UnaryOperator, operand: &Expr) -> Option<Bit> {
        let operand = self.calculate(operand)?;
        let result = Self::eval_unary(operator, operand);
        self.record(operator, None, operand, result);
        Some(result)
    }

    /// Applies a unary operator to a bit.
    ///
    /// # Example
    /// ```
    /// use boolcalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Bit},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, Bit::Zero), Bit::One);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, Bit::One), Bit::Zero);
    /// ```
    #[must_use]
    pub fn eval_unary(operator: UnaryOperator, operand: Bit) -> Bit {
        match operator {
            UnaryOperator::Not => !operand,
        }
    }
}
