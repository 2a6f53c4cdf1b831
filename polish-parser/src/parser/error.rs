//! The errors the parser can report.

use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;

/// A character that is neither an operator, a number, nor a lowercase variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectArgument,
    message = format!("incorrect operator or variable: {}", character),
    labels = ["I don't know what this character means"],
    help = format!(
        "expressions may only contain the operators {}, numbers, and single lowercase variables",
        "+ - * /".fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
}

/// An operator node was requested for a character that is not an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectArgument,
    message = format!("no such operator provided: {}", character),
    labels = ["an operator was expected here"],
)]
pub struct UnknownOperator {
    /// The character that was given as an operator.
    pub character: char,
}

/// After reading all of the input, the operands did not reduce to exactly one tree.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectParsing,
    message = format!("invalid number of tree roots: {}", count),
    labels = if *count == 0 {
        vec![format!("I expected to see an {} here", "expression".fg(EXPR))]
    } else {
        vec![format!("this is one of {} separate trees", count)]
    },
    help = "every operator must be given exactly two operands",
)]
pub struct InvalidRootCount {
    /// The number of operands that remained after reading the input.
    pub count: usize,
}

/// After reading all of the input, some operators never received their operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = IncorrectParsing,
    message = format!(
        "{} operator(s) are missing operands, with {} residual operand(s)",
        count,
        operands,
    ),
    labels = ["this operator is missing an operand"],
    help = format!("add another {} after the operator", "expression".fg(EXPR)),
)]
pub struct DanglingOperator {
    /// The number of operators left unreduced.
    pub count: usize,

    /// The number of operands left on the stack.
    pub operands: usize,
}
