use crate::simplify::step::Step as SimplifyStep;
use polish_parser::parser::ast::Expr;
use std::fmt;

/// The differentiation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `c' = 0`
    Constant,

    /// `x' = 1`
    Variable,

    /// `y' = 0`, for any variable other than the one being differentiated with respect to.
    OtherVariable,

    /// `(f + g)' = f' + g'`
    Sum,

    /// `(f - g)' = f' - g'`
    Difference,

    /// `(f * g)' = f' * g + f * g'`
    Product,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "constant rule"),
            Self::Variable => write!(f, "identity rule"),
            Self::OtherVariable => write!(f, "independent variable"),
            Self::Sum => write!(f, "sum rule"),
            Self::Difference => write!(f, "difference rule"),
            Self::Product => write!(f, "product rule"),
        }
    }
}

/// A step taken while differentiating.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A differentiation rule was applied to a subtree.
    Rule {
        /// The rule that was applied.
        rule: Rule,

        /// The variable the derivative is taken with respect to.
        with: char,

        /// The subtree that was differentiated.
        expr: Expr,

        /// The (simplified) derivative of the subtree.
        result: Expr,
    },

    /// A newly combined node was simplified.
    Simplify(SimplifyStep),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule { rule, with, expr, result } => {
                write!(f, "d/d{} [{}] = {}    ({})", with, expr, result, rule)
            },
            Self::Simplify(step) => write!(f, "    simplify: {}", step),
        }
    }
}
