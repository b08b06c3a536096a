use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Priority},
    },
};

impl Parser<'_> {
    /// Parses a prefix term starting at the current token.
    ///
    /// Grammar:
    /// ```text
    ///     prefix := IDENTIFIER
    ///             | "NOT" expression(NOT)
    ///             | "(" expression(LOWEST) ")"
    /// ```
    /// `NOT` binds tighter than every binary operator, so `NOT X AND Y` parses
    /// as `((NOT X) AND Y)`.
    ///
    /// # Errors
    /// Records `UnknownExpression` when the current token cannot start a term,
    /// and `UnexpectedToken` when a group is not closed by `)`.
    pub(super) fn parse_prefix(&mut self) -> Option<Expr> {
        if let Some(name) = self.current.name() {
            return Some(Expr::variable(name));
        }

        match self.current.kind {
            TokenKind::Not => {
                self.advance();
                let operand = self.parse_expression(Priority::Not)?;
                Some(Expr::unary(UnaryOperator::Not, operand))
            },
            TokenKind::LParen => self.parse_grouping(),
            found => {
                self.push_error(SyntaxError::UnknownExpression { found,
                                                                 line: self.current.line,
                                                                 column: self.current.column });
                None
            },
        }
    }

    /// Parses `( expression )`.
    ///
    /// The closing parenthesis is checked even when the inner expression
    /// failed, so an unclosed group is reported alongside the inner error.
    /// The check is skipped once the nesting limit has been hit.
    fn parse_grouping(&mut self) -> Option<Expr> {
        self.advance();
        let expression = self.parse_expression(Priority::Lowest);
        if self.too_deep || !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        expression
    }
}
