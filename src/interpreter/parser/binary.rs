use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::parser::core::{Parser, Priority},
};

impl Parser<'_> {
    /// Folds the current infix operator into `left`.
    ///
    /// The right operand is parsed at the operator's own priority, so only
    /// tighter-binding operators extend it:
    /// ```text
    ///     X OR Y AND Z   =>  (X OR (Y AND Z))
    ///     X AND Y AND Z  =>  ((X AND Y) AND Z)
    /// ```
    ///
    /// # Errors
    /// Records `UnknownOperator` when the current token has a binding priority
    /// but is not a binary operator (`NOT` or `(` following a complete term).
    pub(super) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let kind = self.current.kind;
        let Some(operator) = BinaryOperator::from_token(kind) else {
            self.push_error(SyntaxError::UnknownOperator { found:  kind,
                                                           line:   self.current.line,
                                                           column: self.current.column, });
            return None;
        };

        self.advance();
        let right = self.parse_expression(Priority::of(kind))?;
        Some(Expr::binary(operator, left, right))
    }
}
