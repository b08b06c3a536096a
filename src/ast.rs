use crate::interpreter::lexer::TokenKind;

/// A node of the expression tree built by the parser.
///
/// Each node owns its children exclusively, so a tree has no sharing and no
/// cycles. Trees are immutable once built and are read by both the evaluator
/// and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable, with its source casing preserved.
        name: String,
    },
    /// A prefix operation such as `NOT X`.
    UnaryOperation {
        /// The operator to apply.
        operator: UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An infix operation such as `X AND Y`.
    BinaryOperation {
        /// The operator to apply.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Creates a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary(operator: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOperation { operator,
                               operand: Box::new(operand) }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(operator: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOperation { operator,
                                left: Box::new(left),
                                right: Box::new(right) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
    Xor,
}

impl BinaryOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use boolcalc::{ast::BinaryOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Xor), Some(BinaryOperator::Xor));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Not), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(Self::And),
            TokenKind::Or => Some(Self::Or),
            TokenKind::Xor => Some(Self::Xor),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "NOT"),
        }
    }
}
