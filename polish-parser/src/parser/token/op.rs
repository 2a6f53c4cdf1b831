//! Structs to help parse binary operators.

use crate::{parser::error::UnknownOperator, tokenizer::{Token, TokenKind}};
use polish_error::Error;
use std::{fmt, ops::Range};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    /// Returns the character used to write the operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns the operator a token represents, if the token is an operator.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }
}

/// Looks up the operator written with the given character.
///
/// Returns an [`UnknownOperator`] error if the character is not one of `+ - * /`.
impl TryFrom<char> for BinOpKind {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            character => Err(Error::detached("BinOpKind::try_from", UnknownOperator { character })),
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operator read from the source, waiting for its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl TryFrom<&Token<'_>> for BinOp {
    type Error = Error;

    fn try_from(token: &Token<'_>) -> Result<Self, Self::Error> {
        let kind = BinOpKind::from_token_kind(token.kind)
            .map_or_else(|| BinOpKind::try_from(token.first_char()), Ok)
            .map_err(|mut err| {
                err.spans = vec![token.span.clone()];
                err
            })?;

        Ok(Self {
            kind,
            span: token.span.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use polish_error::Category;
    use super::*;

    #[test]
    fn operator_characters() {
        for ch in ['+', '-', '*', '/'] {
            assert_eq!(BinOpKind::try_from(ch).unwrap().symbol(), ch);
        }
    }

    #[test]
    fn unknown_operator() {
        let err = BinOpKind::try_from('%').unwrap_err();
        assert_eq!(err.category(), Category::IncorrectArgument);
        assert_eq!(err.message(), "no such operator provided: %");
    }

    #[test]
    fn operator_from_token() {
        let token = Token { span: 4..5, kind: TokenKind::Variable, lexeme: "x" };
        let err = BinOp::try_from(&token).unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
    }
}
