//! Symbolic differentiation of expression trees.
//!
//! [`derivative`] builds a brand new tree; the input is only read. Every operation the
//! differentiator creates is simplified with [`simplify_root`] as soon as it is built, so the
//! result never contains trivial terms such as `1*x` that the simplifier knows how to remove.
//! Subtrees of the input that appear in the result (such as `g` in `f' * g`) are deep copies.
//!
//! Only `+`, `-` and `*` can be differentiated. Reaching a division is an error.

pub mod step;

use crate::{
    error::Underivable,
    simplify::{simplify_root, step::Step as SimplifyStep},
    step_collector::StepCollector,
};
use polish_error::Error;
use polish_parser::parser::{ast::{Binary, Expr}, token::op::BinOpKind};
use step::{Rule, Step};
use tracing::{debug, trace};

/// The name of the operation reported by errors raised while differentiating.
const OPERATION: &str = "derivative";

/// Forwards the steps taken by the simplifier to the collector of the differentiator.
struct SimplifySteps<'a>(&'a mut dyn StepCollector<Step>);

impl StepCollector<SimplifyStep> for SimplifySteps<'_> {
    fn push(&mut self, step: SimplifyStep) {
        self.0.push(Step::Simplify(step));
    }
}

/// Builds the operation `lhs op rhs`, taking ownership of both operands, and simplifies the new
/// node.
fn combine(
    op: BinOpKind,
    lhs: Expr,
    rhs: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    debug!(%op, %lhs, %rhs, "combining derivative terms");
    simplify_root(Expr::binary(op, lhs, rhs), &mut SimplifySteps(step_collector))
}

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn linear_rule(
    binary: &Binary,
    with: char,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let lhs = inner_derivative(&binary.lhs, with, step_collector)?;
    let rhs = inner_derivative(&binary.rhs, with, step_collector)?;
    combine(binary.op, lhs, rhs, step_collector)
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(
    binary: &Binary,
    with: char,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let lhs_derivative = inner_derivative(&binary.lhs, with, step_collector)?;
    let rhs_derivative = inner_derivative(&binary.rhs, with, step_collector)?;

    // `f` and `g` are each used twice: once differentiated, once as-is
    let left_term = combine(BinOpKind::Mul, lhs_derivative, (*binary.rhs).clone(), step_collector)?;
    let right_term = combine(BinOpKind::Mul, (*binary.lhs).clone(), rhs_derivative, step_collector)?;
    combine(BinOpKind::Add, left_term, right_term, step_collector)
}

/// Base implementation of the differentiation algorithm.
fn inner_derivative(
    expr: &Expr,
    with: char,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let (rule, result) = match expr {
        Expr::Number(_) => (Rule::Constant, Expr::Number(0.0)),
        Expr::Variable(name) if *name == with => (Rule::Variable, Expr::Number(1.0)),
        Expr::Variable(_) => (Rule::OtherVariable, Expr::Number(0.0)),
        Expr::Binary(binary) => match binary.op {
            BinOpKind::Add => (Rule::Sum, linear_rule(binary, with, step_collector)?),
            BinOpKind::Sub => (Rule::Difference, linear_rule(binary, with, step_collector)?),
            BinOpKind::Mul => (Rule::Product, product_rule(binary, with, step_collector)?),
            BinOpKind::Div => return Err(Error::detached(OPERATION, Underivable { op: binary.op })),
        },
    };

    trace!(%rule, %expr, %result, "differentiated");
    step_collector.push(Step::Rule {
        rule,
        with,
        expr: expr.clone(),
        result: result.clone(),
    });
    Ok(result)
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Returns an error if the expression contains a division, or if simplifying the result divides
/// a constant by zero.
pub fn derivative(expr: &Expr, with: char) -> Result<Expr, Error> {
    inner_derivative(expr, with, &mut ())
}

/// Computes the derivative of the given expression with respect to the variable `with`. The
/// steps taken will also be collected and returned, innermost subtrees first.
pub fn derivative_with_steps(expr: &Expr, with: char) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_derivative(expr, with, &mut steps)?;
    Ok((expr, steps))
}
