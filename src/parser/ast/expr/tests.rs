//! Tests for bracketed rendering of expression trees.

use super::{Expr, Operator};
use rstest::rstest;

#[rstest]
#[case(Expr::literal(2.0), "2.0")]
#[case(Expr::literal(0.5), "0.5")]
#[case(Expr::literal(12.25), "12.25")]
#[case(Expr::literal(0.001), "0.001")]
#[case(Expr::literal(1_234_567.5), "1234567.5")]
#[case(Expr::literal(10_000_000.0), "10000000.0")]
#[case(Expr::literal(0.0005), "0.0005")]
#[case(Expr::literal(1e16), "1e16")]
#[case(Expr::literal(1e-5), "1e-5")]
fn literals_render(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.render(), expected);
}

#[test]
fn binary_renders_as_two_element_group() {
    let expr = Expr::binary(Expr::literal(6.0), Expr::literal(3.0), Operator::Divide);
    assert_eq!(expr.render(), "([6.0][3.0] /)");
}

#[test]
fn composite_lists_elements_then_operators() {
    let expr = Expr::composite(
        vec![Expr::literal(1.0), Expr::literal(2.0), Expr::literal(0.0)],
        vec![Operator::Subtract, Operator::Add],
    );
    assert_eq!(expr.render(), "([1.0][2.0][0.0] -+)");
}

#[test]
fn nested_nodes_render_recursively() {
    let inner = Expr::composite(
        vec![Expr::literal(1.0), Expr::literal(0.0)],
        vec![Operator::Add],
    );
    let expr = Expr::composite(
        vec![
            Expr::binary(inner, Expr::literal(4.0), Operator::Multiply),
            Expr::literal(0.0),
        ],
        vec![Operator::Add],
    );
    assert_eq!(expr.render(), "([([([1.0][0.0] +)][4.0] *)][0.0] +)");
}

#[test]
fn empty_composite_renders_brackets_only() {
    assert_eq!(Expr::composite(Vec::new(), Vec::new()).render(), "( )");
}

#[test]
fn display_matches_render() {
    let expr = Expr::binary(Expr::literal(1.0), Expr::literal(2.0), Operator::Add);
    assert_eq!(expr.to_string(), expr.render());
}

#[test]
fn long_left_chain_renders_and_drops() {
    let chain = (0..200_000).fold(Expr::literal(1.0), |acc, _| {
        Expr::binary(acc, Expr::literal(2.0), Operator::Multiply)
    });
    let rendered = chain.render();
    assert_eq!(rendered.len(), 11 * 200_000 + 3);
    assert!(rendered.starts_with("([([([") && rendered.ends_with("][2.0] *)"));
    assert_eq!(rendered.matches("1.0").count(), 1);
    drop(chain);
}
