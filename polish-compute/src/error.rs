//! The errors raised while simplifying, differentiating and evaluating expressions.

use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;
use polish_parser::parser::token::op::BinOpKind;

/// A constant was divided by exactly zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = DivisionByZero,
    message = format!("cannot divide {} by zero", dividend),
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero {
    /// The number that was being divided.
    pub dividend: f64,
}

/// The differentiator reached an operation it has no derivative rule for.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectParsing,
    message = format!("unknown node type: cannot differentiate `{}`", op),
    labels = ["this operation cannot be differentiated"],
    help = format!("only {} can be differentiated", "+ - *".fg(EXPR)),
)]
pub struct Underivable {
    /// The operator of the node.
    pub op: BinOpKind,
}

/// A variable was evaluated without being given a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectArgument,
    message = format!("no value was given for the variable `{}`", name),
    labels = ["this variable has no value"],
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: char,
}
