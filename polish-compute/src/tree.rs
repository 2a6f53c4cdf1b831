//! The [`Tree`] type, which owns an expression and ties together the parser, simplifier and
//! differentiator.

use crate::{
    derivative::{self, step::Step},
    eval::{Ctxt, Eval},
    graph::DotFormatter,
    simplify::{self, step::Step as SimplifyStep},
};
use polish_error::Error;
use polish_parser::parser::{ast::Expr, fmt::PrefixFormatter, token::op::BinOpKind, Parser};
use std::{fmt, ops::{Add, Div, Mul, Sub}, str::FromStr};
use tracing::debug;

/// An expression tree.
///
/// A tree exclusively owns its root, and the root exclusively owns its children, so no two trees
/// ever share a node. Every operation that needs a subtree in more than one place, including
/// [`Tree::copy`] and the arithmetic operators, makes a deep copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// The root of the tree.
    root: Expr,
}

impl Tree {
    /// Creates a tree from the given root, as-is.
    pub fn new(root: Expr) -> Self {
        Self { root }
    }

    /// Parses the given prefix expression and simplifies the result once.
    ///
    /// ```
    /// use polish_compute::tree::Tree;
    ///
    /// let tree = Tree::parse("* + x 0 1").unwrap();
    /// assert_eq!(tree.to_string(), "x");
    /// ```
    pub fn parse(source: &str) -> Result<Self, Error> {
        let root = Parser::new(source).parse()?;
        debug!(%root, "parsed");
        Self::new(root).simplify()
    }

    /// Returns a deep copy of the tree. The copy shares no nodes with `self`.
    pub fn copy(&self) -> Self {
        debug!(nodes = self.root.node_count(), "copying tree");
        self.clone()
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Consumes the tree, returning its root.
    pub fn into_root(self) -> Expr {
        self.root
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Simplifies the tree in one bottom-up pass.
    pub fn simplify(self) -> Result<Self, Error> {
        simplify::simplify(self.root).map(Self::new)
    }

    /// Simplifies the tree in one bottom-up pass, returning the steps taken.
    pub fn simplify_with_steps(self) -> Result<(Self, Vec<SimplifyStep>), Error> {
        let (root, steps) = simplify::simplify_with_steps(self.root)?;
        Ok((Self::new(root), steps))
    }

    /// Computes the derivative of the tree with respect to the variable `with`.
    ///
    /// The result is a new tree; `self` is left untouched.
    pub fn derivative(&self, with: char) -> Result<Self, Error> {
        derivative::derivative(&self.root, with).map(Self::new)
    }

    /// Computes the derivative of the tree with respect to the variable `with`, returning the
    /// steps taken.
    pub fn derivative_with_steps(&self, with: char) -> Result<(Self, Vec<Step>), Error> {
        let (root, steps) = derivative::derivative_with_steps(&self.root, with)?;
        Ok((Self::new(root), steps))
    }

    /// Returns a formatter that writes the tree in prefix notation.
    pub fn prefix(&self) -> PrefixFormatter<'_> {
        self.root.prefix()
    }

    /// Returns a formatter that writes the tree as a DOT digraph.
    pub fn dot(&self) -> DotFormatter<'_> {
        DotFormatter::new(&self.root)
    }

    /// Builds `lhs op rhs` from the two roots, without simplifying the result. Callers pass deep
    /// copies of any tree they only borrowed.
    fn combine(op: BinOpKind, lhs: Expr, rhs: Expr) -> Tree {
        debug!(%op, %lhs, %rhs, "combining trees");
        Tree::new(Expr::binary(op, lhs, rhs))
    }
}

impl From<Expr> for Tree {
    fn from(root: Expr) -> Self {
        Self::new(root)
    }
}

impl FromStr for Tree {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl Eval for Tree {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.root.eval(ctxt)
    }
}

/// Implements an arithmetic operator for every combination of owned and borrowed trees. Borrowed
/// operands are deep-copied; owned operands are moved into the new tree.
macro_rules! impl_tree_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&Tree> for &Tree {
            type Output = Tree;

            fn $method(self, rhs: &Tree) -> Tree {
                Tree::combine($op, self.root.clone(), rhs.root.clone())
            }
        }

        impl $trait<Tree> for &Tree {
            type Output = Tree;

            fn $method(self, rhs: Tree) -> Tree {
                Tree::combine($op, self.root.clone(), rhs.root)
            }
        }

        impl $trait<&Tree> for Tree {
            type Output = Tree;

            fn $method(self, rhs: &Tree) -> Tree {
                Tree::combine($op, self.root, rhs.root.clone())
            }
        }

        impl $trait<Tree> for Tree {
            type Output = Tree;

            fn $method(self, rhs: Tree) -> Tree {
                Tree::combine($op, self.root, rhs.root)
            }
        }
    };
}

impl_tree_op!(Add, add, BinOpKind::Add);
impl_tree_op!(Sub, sub, BinOpKind::Sub);
impl_tree_op!(Mul, mul, BinOpKind::Mul);
impl_tree_op!(Div, div, BinOpKind::Div);

#[cfg(test)]
mod tests {
    use polish_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_simplifies() {
        assert_eq!(Tree::parse("+ 3 4").unwrap().root(), &Expr::Number(7.0));
        assert_eq!(Tree::parse("+ x 0").unwrap().root(), &Expr::Variable('x'));
        assert_eq!(Tree::parse("* x 1").unwrap().root(), &Expr::Variable('x'));
    }

    #[test]
    fn parse_division_by_zero() {
        let err = Tree::parse("/ 5 0").unwrap_err();
        assert_eq!(err.category(), Category::DivisionByZero);
        assert_eq!(err.operation, "simplify");
    }

    #[test]
    fn from_str() {
        let tree: Tree = "- * x 2 y".parse().unwrap();
        assert_eq!(tree.to_string(), "(x*2)-y");
        assert_eq!(tree.prefix().to_string(), "- * x 2 y");
    }

    #[test]
    fn operators_do_not_simplify() {
        let x = Tree::new(Expr::Variable('x'));
        let zero = Tree::new(Expr::Number(0.0));
        let sum = &x + &zero;
        assert_eq!(sum.to_string(), "x+0");
        assert_eq!(sum.simplify().unwrap().to_string(), "x");
    }

    #[test]
    fn operators_keep_operands() {
        let a = Tree::parse("+ x 1").unwrap();
        let b = Tree::parse("* y 2").unwrap();
        let product = &a * &b;
        assert_eq!(product.to_string(), "(x+1)*(y*2)");
        assert_eq!(a.to_string(), "x+1");
        assert_eq!(b.to_string(), "y*2");

        let quotient = product / Tree::new(Expr::Number(4.0));
        assert_eq!(quotient.prefix().to_string(), "/ * + x 1 * y 2 4");

        let difference = Tree::new(Expr::Variable('z')) - &a;
        assert_eq!(difference.to_string(), "z-(x+1)");
    }

    #[test]
    fn owned_operands_are_moved() {
        let a = Tree::parse("+ x 1").unwrap();
        let b = Tree::parse("* y 2").unwrap();
        let (a_lhs, _) = a.root().children().unwrap();
        let (b_lhs, _) = b.root().children().unwrap();
        let (a_lhs, b_lhs) = (a_lhs as *const Expr, b_lhs as *const Expr);

        let sum = a + &b;
        let (sum_lhs, sum_rhs) = sum.root().children().unwrap();

        // the boxed children of `a` now belong to `sum`; `b` was only borrowed, so it is copied
        assert!(std::ptr::eq(sum_lhs.children().unwrap().0, a_lhs));
        assert!(!std::ptr::eq(sum_rhs.children().unwrap().0, b_lhs));
        assert_eq!(sum.to_string(), "(x+1)+(y*2)");
        assert_eq!(b.to_string(), "y*2");
    }

    #[test]
    fn derivative() {
        let tree = Tree::parse("* x x").unwrap();
        let derivative = tree.derivative('x').unwrap();
        assert_eq!(derivative.to_string(), "x+x");
        assert_eq!(tree.to_string(), "x*x");
    }

    #[test]
    fn copy() {
        let tree = Tree::parse("- * x 2.5 y").unwrap();
        let copy = tree.copy();
        assert_eq!(copy, tree);
        assert_eq!(copy.node_count(), 5);
    }
}
