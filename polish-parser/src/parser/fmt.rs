//! Text output for expression trees.
//!
//! [`Display`] on [`Expr`] produces infix notation, where every operation that is an operand of
//! another operation is wrapped in parentheses, such as `(1*x)+y`. [`Expr::prefix`] produces
//! space-separated prefix notation, such as `+ * 1 x y`.
//!
//! Negative numbers are written with a leading `-`, which the parser reads as an operator, so
//! prefix output containing a negative number does not parse back to the same tree.

use std::fmt::{Display, Formatter, Result};
use super::ast::expr::Expr;

/// A wrapper type that implements [`Display`] by formatting the tree in prefix notation.
pub struct PrefixFormatter<'a>(&'a Expr);

impl Display for PrefixFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let mut first = true;
        let mut stack = vec![self.0];
        while let Some(expr) = stack.pop() {
            if !first {
                write!(f, " ")?;
            }
            first = false;

            match expr {
                Expr::Number(value) => write!(f, "{}", value)?,
                Expr::Variable(name) => write!(f, "{}", name)?,
                Expr::Binary(binary) => {
                    write!(f, "{}", binary.op)?;
                    stack.push(&binary.rhs);
                    stack.push(&binary.lhs);
                },
            }
        }
        Ok(())
    }
}

impl Expr {
    /// Wraps the expression in a [`PrefixFormatter`], which implements [`Display`].
    pub fn prefix(&self) -> PrefixFormatter<'_> {
        PrefixFormatter(self)
    }
}

/// Helper to format an operand of a binary operation, parenthesizing it unless it is a leaf.
fn fmt_operand(f: &mut Formatter, operand: &Expr) -> Result {
    if operand.is_leaf() {
        write!(f, "{}", operand)
    } else {
        write!(f, "({})", operand)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Binary(binary) => {
                fmt_operand(f, &binary.lhs)?;
                write!(f, "{}", binary.op)?;
                fmt_operand(f, &binary.rhs)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::Parser;

    #[test]
    fn fmt_infix() {
        let expr = Parser::new("+ * 2 x 3").parse().unwrap();
        assert_eq!(expr.to_string(), "(2*x)+3");
    }

    #[test]
    fn fmt_infix_leaf() {
        let expr = Parser::new("2.5").parse().unwrap();
        assert_eq!(expr.to_string(), "2.5");
    }

    #[test]
    fn fmt_infix_nested() {
        let expr = Parser::new("/ - x y * 4 z").parse().unwrap();
        // operators reduce as soon as two operands are available
        assert_eq!(expr.to_string(), "((x-y)*4)/z");
    }

    #[test]
    fn fmt_prefix() {
        let expr = Parser::new("+*2x3").parse().unwrap();
        assert_eq!(expr.prefix().to_string(), "+ * 2 x 3");
    }

    #[test]
    fn prefix_negative_number() {
        let expr = Expr::Number(-1.0);
        assert_eq!(expr.prefix().to_string(), "-1");
        assert_eq!(expr.to_string(), "-1");

        // the sign is read back as a subtraction with one operand
        let err = Parser::new(&expr.prefix().to_string()).parse().unwrap_err();
        assert_eq!(err.category(), polish_error::Category::IncorrectParsing);
    }

    #[test]
    fn prefix_parses_back() {
        let expr = Parser::new("- * x 2.5 / y 4").parse().unwrap();
        let printed = expr.prefix().to_string();
        assert_eq!(Parser::new(&printed).parse().unwrap(), expr);
    }
}
