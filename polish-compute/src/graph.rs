//! Export of expression trees as [Graphviz](https://graphviz.org) DOT graphs.
//!
//! Every node of the tree becomes one DOT node, labelled with its operator, value or variable
//! name. Every operation has an edge to its left operand, followed by an edge to its right
//! operand. Nodes are numbered in post-order, so a tree with `n` nodes uses the names `node0` to
//! `node{n-1}`, and the root is always the last node.

use polish_parser::parser::ast::Expr;
use std::fmt::{Display, Formatter, Result};

/// A wrapper type that implements [`Display`] by formatting the tree as a DOT digraph.
pub struct DotFormatter<'a>(&'a Expr);

impl<'a> DotFormatter<'a> {
    /// Creates a new DOT formatter for the given tree.
    pub fn new(expr: &'a Expr) -> Self {
        Self(expr)
    }
}

impl Display for DotFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "digraph expression {{")?;

        // ids of the nodes whose parent has not been written yet
        let mut pending = Vec::new();
        for (id, expr) in self.0.post_order_iter().enumerate() {
            match expr {
                Expr::Number(value) => writeln!(f, "    node{} [label=\"{}\", shape=box];", id, value)?,
                Expr::Variable(name) => writeln!(f, "    node{} [label=\"{}\", shape=box];", id, name)?,
                Expr::Binary(binary) => {
                    writeln!(f, "    node{} [label=\"{}\", shape=circle];", id, binary.op)?;
                    let (Some(rhs), Some(lhs)) = (pending.pop(), pending.pop()) else {
                        return Err(std::fmt::Error);
                    };
                    writeln!(f, "    node{} -> node{};", id, lhs)?;
                    writeln!(f, "    node{} -> node{};", id, rhs)?;
                },
            }
            pending.push(id);
        }

        writeln!(f, "}}")
    }
}

/// Renders the tree as a DOT digraph.
pub fn to_dot(expr: &Expr) -> String {
    DotFormatter::new(expr).to_string()
}

#[cfg(test)]
mod tests {
    use polish_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaf() {
        assert_eq!(
            to_dot(&Expr::Variable('x')),
            "digraph expression {\n    node0 [label=\"x\", shape=box];\n}\n",
        );
    }

    #[test]
    fn nested() {
        let expr = Parser::new("* + x 1 2.5").parse().unwrap();
        assert_eq!(to_dot(&expr), [
            "digraph expression {",
            "    node0 [label=\"x\", shape=box];",
            "    node1 [label=\"1\", shape=box];",
            "    node2 [label=\"+\", shape=circle];",
            "    node2 -> node0;",
            "    node2 -> node1;",
            "    node3 [label=\"2.5\", shape=box];",
            "    node4 [label=\"*\", shape=circle];",
            "    node4 -> node2;",
            "    node4 -> node3;",
            "}",
            "",
        ].join("\n"));
    }
}
