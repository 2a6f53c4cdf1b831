//! The expression tree produced by the parser.
//!
//! Each [`Expr`] node exclusively owns its children, so a tree can never share nodes with
//! another tree. Cloning an [`Expr`] produces a deep copy.

pub mod binary;
pub mod expr;
mod iter;

pub use binary::Binary;
pub use expr::Expr;
pub use iter::ExprIter;
