use crate::parser::{ast::expr::Expr, token::op::BinOpKind};

/// A binary expression, such as `+ 1 2`. Binary expressions exclusively own both of their
/// operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a binary expression that takes ownership of both operands.
    pub fn new(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// Consumes the expression, returning its operands.
    pub fn into_operands(self) -> (Expr, Expr) {
        (*self.lhs, *self.rhs)
    }
}
