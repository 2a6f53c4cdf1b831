//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression tree in a single
//! bottom-up pass: the children of every operation are simplified first, then the rules in
//! [`rules`] are applied once to the operation itself. The pass is **not** repeated until no more
//! rules apply, so the result of a rewrite is never revisited within the same call. Callers that
//! want further normalization may call [`simplify`] again.

pub mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use polish_error::Error;
use polish_parser::parser::ast::{Binary, Expr};
use step::Step;

/// Applies the simplification rules to the root of the expression only.
///
/// The children of the expression are expected to have been simplified already.
pub fn simplify_root(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    Ok(rules::all(&expr, step_collector)?.unwrap_or(expr))
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Binary(Binary { lhs, op, rhs }) => {
            let lhs = inner_simplify(*lhs, step_collector)?;
            let rhs = inner_simplify(*rhs, step_collector)?;
            simplify_root(Expr::binary(op, lhs, rhs), step_collector)
        },
        leaf => Ok(leaf),
    }
}

/// Simplify the given expression in one bottom-up pass.
///
/// Returns an error if a constant is divided by zero.
pub fn simplify(expr: Expr) -> Result<Expr, Error> {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression in one bottom-up pass. The steps taken by the simplifier will
/// also be collected and returned, in the order they were taken.
pub fn simplify_with_steps(expr: Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps)?;
    Ok((expr, steps))
}
