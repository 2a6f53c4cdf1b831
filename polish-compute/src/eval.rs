//! Numerical evaluation of expression trees.
//!
//! Evaluation substitutes a value for every variable and computes the result with `f64`
//! arithmetic. It is mostly useful to check a derivative against a finite difference.

use crate::{error::UnboundVariable, simplify::rules::compute};
use polish_error::Error;
use polish_parser::parser::ast::Expr;
use std::collections::HashMap;

/// The name of the operation reported by errors raised while evaluating.
const OPERATION: &str = "eval";

/// A context to use when evaluating an expression, containing the values of its variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<char, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: char, value: f64) {
        self.vars.insert(name, value);
    }

    /// Add a variable to the context, returning the context.
    pub fn with_var(mut self, name: char, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: char) -> Option<f64> {
        self.vars.get(&name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<char, f64> {
        &self.vars
    }
}

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => ctxt.get_var(*name)
                .ok_or_else(|| Error::detached(OPERATION, UnboundVariable { name: *name })),
            Expr::Binary(binary) => {
                let lhs = binary.lhs.eval(ctxt)?;
                let rhs = binary.rhs.eval(ctxt)?;
                compute(binary.op, lhs, rhs).map_err(|mut err| {
                    err.operation = OPERATION;
                    err
                })
            },
        }
    }
}
