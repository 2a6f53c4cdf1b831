//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the operation to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; its children are expected to
//! have been simplified already.

use crate::{error::DivisionByZero, step_collector::StepCollector};
use polish_error::Error;
use polish_parser::parser::{ast::{Binary, Expr}, token::op::BinOpKind};
use super::step::Step;
use tracing::trace;

/// The name of the operation reported by errors raised while simplifying.
const OPERATION: &str = "simplify";

/// Computes `lhs op rhs`.
///
/// Returns a [`DivisionByZero`] error if dividing by exactly zero.
pub fn compute(op: BinOpKind, lhs: f64, rhs: f64) -> Result<f64, Error> {
    match op {
        BinOpKind::Add => Ok(lhs + rhs),
        BinOpKind::Sub => Ok(lhs - rhs),
        BinOpKind::Mul => Ok(lhs * rhs),
        BinOpKind::Div if rhs == 0.0 => Err(Error::detached(OPERATION, DivisionByZero { dividend: lhs })),
        BinOpKind::Div => Ok(lhs / rhs),
    }
}

/// `3+4 = 7`
///
/// Replaces an operation on two numbers with its result.
pub fn fold_constants(
    binary: &Binary,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, Error> {
    let (Some(lhs), Some(rhs)) = (binary.lhs.as_number(), binary.rhs.as_number()) else {
        return Ok(None);
    };

    let value = compute(binary.op, lhs, rhs)?;
    step_collector.push(Step::FoldConstants { op: binary.op, value });
    Ok(Some(Expr::Number(value)))
}

/// `a+0 = a`
/// `a-0 = a`
/// `a*1 = a`
/// `a/0 = a`
///
/// Removes the operation if its left-hand side is a variable and its right-hand side is the
/// operation's identity. The last rule is unsound but kept for compatibility.
pub fn variable_identity(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !binary.lhs.is_variable() {
        return None;
    }

    let step = match binary.op {
        BinOpKind::Add if binary.rhs.is_number(0.0) => Step::AddZero,
        BinOpKind::Sub if binary.rhs.is_number(0.0) => Step::SubtractZero,
        BinOpKind::Mul if binary.rhs.is_number(1.0) => Step::MultiplyOne,
        BinOpKind::Div if binary.rhs.is_number(0.0) => Step::DivideZero,
        _ => return None,
    };

    step_collector.push(step);
    Some((*binary.lhs).clone())
}

/// `0+a = a`
/// `0-a = a`
/// `1*a = a`
/// `0/a = a`
///
/// Mirror of [`variable_identity`] for operations whose right-hand side is a variable. The `0-a`
/// and `0/a` rules are unsound but kept for compatibility.
pub fn mirrored_variable_identity(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !binary.rhs.is_variable() {
        return None;
    }

    let step = match binary.op {
        BinOpKind::Add if binary.lhs.is_number(0.0) => Step::ZeroAdd,
        BinOpKind::Sub if binary.lhs.is_number(0.0) => Step::ZeroSubtract,
        BinOpKind::Mul if binary.lhs.is_number(1.0) => Step::OneMultiply,
        BinOpKind::Div if binary.lhs.is_number(0.0) => Step::ZeroDivide,
        _ => return None,
    };

    step_collector.push(step);
    Some((*binary.rhs).clone())
}

/// Applies the first group of rules that matches the shape of the operation:
///
/// - if both operands are numbers, [`fold_constants`];
/// - otherwise, if the left-hand side is a variable, [`variable_identity`];
/// - otherwise, if the right-hand side is a variable, [`mirrored_variable_identity`].
///
/// Leaves never match.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Binary(binary) = expr else {
        return Ok(None);
    };

    let simplified = if binary.lhs.as_number().is_some() && binary.rhs.as_number().is_some() {
        fold_constants(binary, step_collector)?
    } else if binary.lhs.is_variable() {
        variable_identity(binary, step_collector)
    } else if binary.rhs.is_variable() {
        mirrored_variable_identity(binary, step_collector)
    } else {
        None
    };

    if let Some(simplified) = &simplified {
        trace!(from = %expr, to = %simplified, "simplified");
    }
    Ok(simplified)
}

#[cfg(test)]
mod tests {
    use polish_error::Category;
    use super::*;

    fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Binary {
        Binary::new(op, lhs, rhs)
    }

    #[test]
    fn fold_each_operator() {
        let cases = [
            (BinOpKind::Add, 7.0),
            (BinOpKind::Sub, -1.0),
            (BinOpKind::Mul, 12.0),
            (BinOpKind::Div, 0.75),
        ];
        for (op, expected) in cases {
            let folded = fold_constants(&binary(op, 3.0.into(), 4.0.into()), &mut ()).unwrap();
            assert_eq!(folded, Some(Expr::Number(expected)));
        }
    }

    #[test]
    fn fold_division_by_zero() {
        let err = fold_constants(&binary(BinOpKind::Div, 5.0.into(), 0.0.into()), &mut ()).unwrap_err();
        assert_eq!(err.category(), Category::DivisionByZero);
        assert_eq!(err.operation, "simplify");
    }

    #[test]
    fn identity_needs_a_number_operand() {
        // `x*y` must not be mistaken for `x*1`
        assert_eq!(variable_identity(&binary(BinOpKind::Mul, 'x'.into(), 'y'.into()), &mut ()), None);

        let op = Expr::binary(BinOpKind::Mul, 'y'.into(), 'z'.into());
        assert_eq!(variable_identity(&binary(BinOpKind::Add, 'x'.into(), op), &mut ()), None);
    }

    #[test]
    fn zero_minus_variable() {
        // kept for compatibility: `0-x` is rewritten to `x`, not `-x`
        let mut steps = Vec::new();
        let simplified = mirrored_variable_identity(&binary(BinOpKind::Sub, 0.0.into(), 'x'.into()), &mut steps);
        assert_eq!(simplified, Some(Expr::Variable('x')));
        assert_eq!(steps, vec![Step::ZeroSubtract]);

        // only an exact zero triggers it
        assert_eq!(mirrored_variable_identity(&binary(BinOpKind::Sub, 2.0.into(), 'x'.into()), &mut ()), None);
    }

    #[test]
    fn steps_are_collected() {
        let mut steps = Vec::new();
        let expr = Expr::binary(BinOpKind::Mul, 1.0.into(), 'x'.into());
        let simplified = all(&expr, &mut steps).unwrap();
        assert_eq!(simplified, Some(Expr::Variable('x')));
        assert_eq!(steps, vec![Step::OneMultiply]);
    }
}
