use polish_parser::parser::token::op::BinOpKind;
use std::fmt;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// `3+4 = 7`
    /// `6/4 = 1.5`
    /// etc.
    FoldConstants {
        /// The operator that was computed.
        op: BinOpKind,

        /// The value the operation was replaced with.
        value: f64,
    },

    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a*1 = a`
    MultiplyOne,

    /// `a/0 = a`
    ///
    /// This rewrite is kept for compatibility with earlier output. It is not mathematically
    /// sound; division of a variable by zero is not reported as an error.
    DivideZero,

    /// `0+a = a`
    ZeroAdd,

    /// `0-a = a`
    ///
    /// Mirror of [`Step::SubtractZero`]. It is not mathematically sound; the result should be
    /// `-a`.
    ZeroSubtract,

    /// `1*a = a`
    OneMultiply,

    /// `0/a = a`
    ///
    /// Mirror of [`Step::DivideZero`], and equally unsound.
    ZeroDivide,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FoldConstants { op, value } => write!(f, "compute `{}` to get {}", op, value),
            Self::AddZero => write!(f, "a+0 = a"),
            Self::SubtractZero => write!(f, "a-0 = a"),
            Self::MultiplyOne => write!(f, "a*1 = a"),
            Self::DivideZero => write!(f, "a/0 = a"),
            Self::ZeroAdd => write!(f, "0+a = a"),
            Self::ZeroSubtract => write!(f, "0-a = a"),
            Self::OneMultiply => write!(f, "1*a = a"),
            Self::ZeroDivide => write!(f, "0/a = a"),
        }
    }
}
