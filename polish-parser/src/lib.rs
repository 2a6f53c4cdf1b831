//! Tokenizer and parser for arithmetic expressions written in prefix (Polish) notation.
//!
//! Expressions are made of real-number literals, single lowercase variables, and the binary
//! operators `+ - * /`, with every operator written before its two operands:
//!
//! ```
//! use polish_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("+ * 2 x 3").parse().unwrap();
//! assert_eq!(expr.to_string(), "(2*x)+3");
//! assert_eq!(expr.prefix().to_string(), "+ * 2 x 3");
//! ```

pub mod parser;
pub mod tokenizer;
