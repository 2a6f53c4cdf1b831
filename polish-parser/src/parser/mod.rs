pub mod ast;
pub mod error;
pub mod fmt;
pub mod literal;
pub mod token;

use ast::expr::Expr;
use error::{DanglingOperator, InvalidCharacter, InvalidRootCount};
use literal::number_value;
use polish_error::Error;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use token::op::BinOp;
use tracing::trace;

/// The name of the operation reported by errors raised while parsing.
const OPERATION: &str = "Parser::parse";

/// An expression on the operand stack, along with the region of the source code it was built
/// from.
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    expr: Expr,
    span: Range<usize>,
}

/// A parser for expressions written in prefix (Polish) notation, such as `+ * 2 x 3`.
///
/// Tokens may be separated by whitespace or packed together (`+*2x3`); a number always consumes
/// the longest run of digits and dots.
///
/// The parser keeps a stack of operators and a stack of operands. After every token, while there
/// is at least one operator and at least two operands, the two most recent operands are combined
/// under the most recent operator. This reduces well-formed prefix input to a single tree; it
/// does not check that the input is well-formed beyond the validity of each token, so input such
/// as `+ 1 * 2 3` is read as `(1*2)+3`.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is parsing.
    tokens: Box<[Token<'source>]>,

    /// The length of the source code, in bytes.
    source_len: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            source_len: source.len(),
        }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Converts a number or variable token into an operand.
    fn operand(token: &Token<'source>) -> Result<Operand, Error> {
        let expr = match token.kind {
            TokenKind::Number => Expr::Number(number_value(token.lexeme)),
            TokenKind::Variable => Expr::Variable(token.first_char()),
            _ => return Err(Error::new(
                vec![token.span.clone()],
                OPERATION,
                InvalidCharacter { character: token.first_char() },
            )),
        };

        Ok(Operand {
            expr,
            span: token.span.clone(),
        })
    }

    /// Combines the most recent operands under the most recent operator for as long as there are
    /// enough of both.
    fn reduce(operators: &mut Vec<BinOp>, operands: &mut Vec<Operand>) {
        while operands.len() >= 2 {
            let Some(op) = operators.pop() else {
                break;
            };

            // the length check above guarantees both pops succeed
            let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                break;
            };

            trace!(op = %op.kind, lhs = %lhs.expr, rhs = %rhs.expr, "reducing operands");
            let span = op.span.start.min(lhs.span.start)..rhs.span.end.max(lhs.span.end);
            operands.push(Operand {
                expr: Expr::binary(op.kind, lhs.expr, rhs.expr),
                span,
            });
        }
    }

    /// Parses the source into a single expression tree.
    ///
    /// The returned tree is exactly what was written; no simplification is done.
    pub fn parse(&self) -> Result<Expr, Error> {
        let mut operators = Vec::new();
        let mut operands = Vec::new();

        for token in self.tokens.iter() {
            if token.is_whitespace() {
                continue;
            }

            if token.kind.is_operator() {
                operators.push(BinOp::try_from(token)?);
            } else {
                operands.push(Self::operand(token)?);
            }

            Self::reduce(&mut operators, &mut operands);
        }

        if operands.len() != 1 {
            let spans = if operands.is_empty() {
                vec![self.eof_span()]
            } else {
                operands.iter().map(|operand| operand.span.clone()).collect()
            };
            return Err(Error::new(spans, OPERATION, InvalidRootCount { count: operands.len() }));
        }

        if !operators.is_empty() {
            return Err(Error::new(
                operators.iter().map(|op| op.span.clone()).collect(),
                OPERATION,
                DanglingOperator { count: operators.len(), operands: operands.len() },
            ));
        }

        Ok(operands.swap_remove(0).expr)
    }
}
