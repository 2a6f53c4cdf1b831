use assert_float_eq::assert_float_absolute_eq;
use polish_compute::{Ctxt, Eval, Tree};
use polish_error::Category;
use polish_parser::parser::{ast::Expr, token::op::BinOpKind};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// Returns the addresses of every node in the tree.
fn addresses(tree: &Tree) -> HashSet<*const Expr> {
    tree.root()
        .post_order_iter()
        .map(|expr| expr as *const Expr)
        .collect()
}

/// Asserts that no node of `a` lives at the same address as a node of `b`.
fn assert_disjoint(a: &Tree, b: &Tree) {
    let a = addresses(a);
    let b = addresses(b);
    assert!(a.is_disjoint(&b), "trees share {} node(s)", a.intersection(&b).count());
}

#[test]
fn fold_sum() {
    assert_eq!(Tree::parse("+ 3 4").unwrap().root(), &Expr::Number(7.0));
}

#[test]
fn add_zero() {
    assert_eq!(Tree::parse("+ x 0").unwrap().root(), &Expr::Variable('x'));
}

#[test]
fn multiply_one() {
    assert_eq!(Tree::parse("* x 1").unwrap().root(), &Expr::Variable('x'));
}

#[test]
fn constant_division_by_zero() {
    let err = Tree::parse("/ 5 0").unwrap_err();
    assert_eq!(err.category(), Category::DivisionByZero);
}

#[test]
fn invalid_character() {
    let err = Tree::parse("3 & 4").unwrap_err();
    assert_eq!(err.category(), Category::IncorrectArgument);
    assert!(err.message().contains('&'));
}

#[test]
fn missing_operand() {
    let err = Tree::parse("+ 3").unwrap_err();
    assert_eq!(err.category(), Category::IncorrectParsing);
}

#[test]
fn single_pass() {
    // `(x+0)+0`: the inner sum is rewritten to `x`, which lets the outer rule fire too, since
    // children are simplified before their parent
    assert_eq!(Tree::parse("+ + x 0 0").unwrap().root(), &Expr::Variable('x'));

    // read as `(0+x)+0`; the mirror rule removes the inner zero
    assert_eq!(Tree::parse("+ 0 + x 0").unwrap().root(), &Expr::Variable('x'));
}

#[test]
fn suspect_division_identity() {
    assert_eq!(Tree::parse("/ x 0").unwrap().root(), &Expr::Variable('x'));
    assert_eq!(Tree::parse("/ 0 x").unwrap().root(), &Expr::Variable('x'));
}

#[test]
fn zero_minus_variable_drops_sign() {
    assert_eq!(Tree::parse("- 0 x").unwrap().root(), &Expr::Variable('x'));
    assert_eq!(Tree::parse("- 0 x").unwrap().eval(&Ctxt::new().with_var('x', 2.0)).unwrap(), 2.0);
}

#[test]
fn derivative_of_square() {
    let tree = Tree::parse("* x x").unwrap();
    let derivative = tree.derivative('x').unwrap();
    assert_eq!(
        derivative.root(),
        &Expr::binary(BinOpKind::Add, Expr::Variable('x'), Expr::Variable('x')),
    );
    assert_eq!(derivative.to_string(), "x+x");
}

#[test]
fn derivative_of_quotient() {
    let tree = Tree::parse("/ x y").unwrap();
    let err = tree.derivative('x').unwrap_err();
    assert_eq!(err.category(), Category::IncorrectParsing);
}

#[test]
fn derivative_shares_no_nodes() {
    let tree = Tree::parse("* + x y - x 2").unwrap();
    let a = Tree::parse("* x x").unwrap();
    let b = Tree::parse("+ x 1").unwrap();
    let combined = &a * &b;

    let derivative = tree.derivative('x').unwrap();
    assert_disjoint(&derivative, &tree);
    assert_disjoint(&derivative, &a);
    assert_disjoint(&derivative, &b);

    let combined_derivative = combined.derivative('x').unwrap();
    assert_disjoint(&combined_derivative, &combined);
    assert_disjoint(&combined_derivative, &derivative);
    assert_disjoint(&combined, &a);
    assert_disjoint(&combined, &b);
}

#[test]
fn copy_prints_the_same() {
    let tree = Tree::parse("- * x 2.5 / y 4").unwrap();
    let copy = tree.copy();
    assert_eq!(copy.to_string(), tree.to_string());
    assert_eq!(copy.prefix().to_string(), tree.prefix().to_string());
    assert_disjoint(&copy, &tree);
}

#[test]
fn prefix_output_parses_back() {
    let tree = Tree::parse("* - x 1.5 + x 4").unwrap();
    let reparsed = Tree::parse(&tree.prefix().to_string()).unwrap();
    assert_eq!(reparsed, tree);
}

/// Checks the derivative of the expression against a central finite difference at a few points.
fn check_derivative(source: &str, with: char) {
    const H: f64 = 1e-4;

    let tree = Tree::parse(source).unwrap();
    let derivative = tree.derivative(with).unwrap();

    for point in [-2.0, -0.5, 0.0, 1.0, 3.25] {
        let ctxt_at = |value: f64| Ctxt::new()
            .with_var('x', point)
            .with_var('y', 0.75)
            .with_var(with, value);

        let forward = tree.eval(&ctxt_at(point + H)).unwrap();
        let backward = tree.eval(&ctxt_at(point - H)).unwrap();
        let approx = (forward - backward) / (2.0 * H);
        let exact = derivative.eval(&ctxt_at(point)).unwrap();
        assert_float_absolute_eq!(exact, approx, 1e-4);
    }
}

#[test]
fn derivative_matches_finite_difference() {
    check_derivative("* * x x x", 'x');
    check_derivative("- * 3 x y", 'x');
    check_derivative("* + x y - x 2", 'x');
    check_derivative("+ * x y * x x", 'x');
    check_derivative("* - x 1.5 + x 4", 'x');
    check_derivative("* - x 1.5 + x 4", 'y');
    check_derivative("+ * x y * x x", 'y');
}
