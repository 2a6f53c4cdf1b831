use crate::parser::{ast::{binary::Binary, iter::ExprIter}, token::op::BinOpKind};

/// A node of an expression tree.
///
/// Leaves are either numbers or single-character variables; every other node is a [`Binary`]
/// operation with exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, such as `3` or `2.5`.
    Number(f64),

    /// A variable, such as `x`.
    Variable(char),

    /// A binary operation, such as `+ x 1`.
    Binary(Binary),
}

impl Expr {
    /// Creates a binary operation node that takes ownership of both operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(Binary::new(op, lhs, rhs))
    }

    /// Returns the value of the number, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name of the variable, if this is a variable.
    pub fn as_variable(&self) -> Option<char> {
        match self {
            Self::Variable(name) => Some(*name),
            _ => None,
        }
    }

    /// Returns true if this is a number exactly equal to `value`.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns true if this is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Binary(_))
    }

    /// Returns the children of this node, or [`None`] for leaves.
    pub fn children(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Binary(binary) => Some((&*binary.lhs, &*binary.rhs)),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<char> for Expr {
    fn from(name: char) -> Self {
        Self::Variable(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves() {
        assert!(Expr::Number(0.0).is_number(0.0));
        assert!(!Expr::Variable('x').is_number(1.0));
        assert!(Expr::Variable('x').is_leaf());
        assert_eq!(Expr::Variable('x').children(), None);
    }

    #[test]
    fn clone_is_deep() {
        let expr = Expr::binary(BinOpKind::Mul, Expr::Variable('x'), Expr::Number(2.0));
        let copy = expr.clone();
        assert_eq!(expr, copy);

        let (lhs, _) = expr.children().unwrap();
        let (copy_lhs, _) = copy.children().unwrap();
        assert!(!std::ptr::eq(lhs, copy_lhs));
    }

    #[test]
    fn counts_nodes() {
        let expr = Expr::binary(
            BinOpKind::Add,
            Expr::binary(BinOpKind::Mul, 'x'.into(), 'x'.into()),
            1.0.into(),
        );
        assert_eq!(expr.node_count(), 5);
    }
}
