//! Simplification and symbolic differentiation of expression trees produced by
//! [`polish_parser`].
//!
//! The [`Tree`] type is the usual entry point: it parses and simplifies a prefix expression, and
//! computes its derivative.
//!
//! ```
//! use polish_compute::Tree;
//!
//! let tree = Tree::parse("* + x 0 x").unwrap();
//! assert_eq!(tree.to_string(), "x*x");
//!
//! let derivative = tree.derivative('x').unwrap();
//! assert_eq!(derivative.to_string(), "x+x");
//! ```
//!
//! The individual algorithms are also available on bare [`Expr`] values, in the [`simplify`] and
//! [`derivative`] modules. Both can report the rules they applied through a [`StepCollector`].
//!
//! [`Expr`]: polish_parser::parser::ast::Expr
//! [`StepCollector`]: step_collector::StepCollector

pub mod derivative;
pub mod error;
pub mod eval;
pub mod graph;
pub mod simplify;
pub mod step_collector;
pub mod tree;

pub use eval::{Ctxt, Eval};
pub use tree::Tree;
