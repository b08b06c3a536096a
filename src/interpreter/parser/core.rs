use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// Maximum depth of nested expressions.
///
/// Every parenthesized group, `NOT` operand and binary operator application
/// along one path of the tree counts as one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Binding priorities, lowest to highest.
///
/// An infix token is folded into the current expression only while its
/// priority is strictly greater than the current floor, which makes operators
/// of equal priority left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Lowest = 1,
    Or     = 2,
    Xor    = 3,
    And    = 4,
    Not    = 5,
    Paren  = 6,
}

impl Priority {
    /// Returns the binding priority of a token kind.
    ///
    /// Kinds that never continue an expression (identifiers, `)`, EOF,
    /// illegal characters) bind at [`Priority::Lowest`].
    ///
    /// # Example
    /// ```
    /// use boolcalc::interpreter::{lexer::TokenKind, parser::Priority};
    ///
    /// assert!(Priority::of(TokenKind::And) > Priority::of(TokenKind::Or));
    /// assert_eq!(Priority::of(TokenKind::RParen), Priority::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Or => Self::Or,
            TokenKind::Xor => Self::Xor,
            TokenKind::And => Self::And,
            TokenKind::Not => Self::Not,
            TokenKind::LParen => Self::Paren,
            TokenKind::RParen | TokenKind::Identifier | TokenKind::Eof | TokenKind::Illegal => {
                Self::Lowest
            },
        }
    }
}

/// Builds an expression tree from the tokens of a [`Scanner`].
///
/// Parsing never panics on malformed input. A failed parse returns `None`
/// and leaves at least one [`SyntaxError`] in [`Parser::errors`]; one input can
/// produce several errors when independent failures are hit before the
/// recursion unwinds. Input nested deeper than [`MAX_NESTING_DEPTH`] fails
/// with a single [`SyntaxError::NestingTooDeep`].
///
/// A parser is meant to be used for a single input.
///
/// # Example
/// ```
/// use boolcalc::interpreter::{lexer::Scanner, parser::Parser};
///
/// let mut parser = Parser::new(Scanner::new("X OR Y AND Z"));
/// let expr = parser.parse().unwrap();
/// assert_eq!(expr.to_string(), "(X OR (Y AND Z))");
///
/// let mut parser = Parser::new(Scanner::new("X AND"));
/// assert!(parser.parse().is_none());
/// assert_eq!(parser.error_messages(), ["(1:6) unknown expression EOF"]);
/// ```
pub struct Parser<'src> {
    scanner:             Scanner<'src>,
    pub(super) current:  Token,
    pub(super) peek:     Token,
    errors:              Vec<SyntaxError>,
    depth:               usize,
    pub(super) too_deep: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the first token of `scanner`.
    #[must_use]
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();
        Self { scanner,
               current,
               peek,
               errors: Vec::new(),
               depth: 0,
               too_deep: false }
    }

    /// Parses the whole input as a single expression.
    ///
    /// The expression must be followed by EOF; trailing tokens are a syntax
    /// error.
    pub fn parse(&mut self) -> Option<Expr> {
        let expression = self.parse_expression(Priority::Lowest)?;
        if !self.expect_peek(TokenKind::Eof) {
            return None;
        }
        Some(expression)
    }

    /// Returns the syntax errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Consumes the parser, returning its syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Returns the recorded syntax errors as formatted messages.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Parses an expression whose operators all bind tighter than
    /// `priority`.
    ///
    /// Grammar (precedence climbing):
    /// ```text
    ///     expression(p) := prefix (infix_op expression(priority(infix_op)))*
    ///                      while priority(infix_op) > p
    /// ```
    /// When a prefix term fails, the function returns immediately. When an
    /// infix step fails, the remaining operators at this level are still
    /// consumed so that the enclosing context sees the token that follows
    /// them.
    pub(crate) fn parse_expression(&mut self, priority: Priority) -> Option<Expr> {
        let depth = self.depth;
        let expression = self.parse_nested(priority);
        self.depth = depth;
        expression
    }

    fn parse_nested(&mut self, priority: Priority) -> Option<Expr> {
        self.descend()?;
        let mut left = Some(self.parse_prefix()?);

        while self.peek.kind != TokenKind::Eof && priority < Priority::of(self.peek.kind) {
            self.advance();
            left = match left {
                Some(left) => {
                    self.descend()?;
                    self.parse_infix(left)
                },
                None => {
                    tracing::trace!(operator = %self.current.kind, "skipping operator");
                    None
                },
            };
        }

        left
    }

    /// Takes one level of the nesting budget, recording `NestingTooDeep` at
    /// the current token once it is spent.
    fn descend(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            if !self.too_deep {
                self.too_deep = true;
                self.push_error(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                              line:   self.current.line,
                                                              column: self.current.column, });
            }
            return None;
        }
        self.depth += 1;
        Some(())
    }

    /// Moves the lookahead token into the current position and pulls a new
    /// lookahead from the scanner.
    pub(super) fn advance(&mut self) {
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances past the lookahead token if it has the required kind;
    /// otherwise records an error at the lookahead's position.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.kind == kind {
            self.advance();
            return true;
        }

        self.push_error(SyntaxError::UnexpectedToken { expected: kind,
                                                       found:    self.peek.kind,
                                                       line:     self.peek.line,
                                                       column:   self.peek.column, });
        false
    }

    pub(super) fn push_error(&mut self, error: SyntaxError) {
        tracing::debug!(%error, "syntax error");
        self.errors.push(error);
    }
}
