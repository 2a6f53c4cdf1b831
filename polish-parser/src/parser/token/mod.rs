//! Operator tokens understood by the parser.

pub mod op;

pub use op::{BinOp, BinOpKind};
