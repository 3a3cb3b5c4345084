use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let cube = pow_op(&mut graph, x, 3.0)?;
    assert_eq!(graph.value(cube)?, 8.0);
    assert_eq!(graph.node(cube)?.op(), Op::Pow { exponent: 3.0 });
    assert_eq!(graph.node(cube)?.label(), "**3");

    let root = pow_op(&mut graph, 9.0, 0.5)?;
    assert_relative_eq!(graph.value(root)?, 3.0);

    let squared_neg = pow_op(&mut graph, -3.0, 2)?;
    assert_eq!(graph.value(squared_neg)?, 9.0);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<()> {
    // d(x^3)/dx = 3x^2
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let out = pow_op(&mut graph, x, 3.0)?;
    graph.backward(out)?;
    assert_relative_eq!(graph.grad(x)?, 12.0);
    Ok(())
}

#[test]
fn test_pow_reciprocal() -> Result<()> {
    let mut graph = Graph::new();
    let a = graph.leaf(4.0);
    let b = pow_op(&mut graph, a, -1.0)?;
    graph.backward(b)?;
    assert_eq!(graph.value(b)?, 0.25);
    assert_eq!(graph.grad(a)?, -0.0625);
    Ok(())
}

#[test]
fn test_pow_node_exponent_unsupported() {
    let mut graph = Graph::new();
    let base = graph.leaf(2.0);
    let exponent = graph.leaf(3.0);
    let result = pow_op(&mut graph, base, exponent);
    assert!(matches!(
        result,
        Err(ScalarGradError::UnsupportedExponent { .. })
    ));
    // nothing appended on failure
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_pow_zero_base_negative_exponent() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0);
    let out = pow_op(&mut graph, x, -1.0)?;
    assert!(graph.value(out)?.is_infinite());
    graph.backward(out)?;
    assert_eq!(graph.grad(x)?, f64::NEG_INFINITY);
    Ok(())
}

#[test]
fn test_pow_grad_check() -> std::result::Result<(), GradCheckError> {
    let func = |g: &mut Graph, x: &[NodeId]| pow_op(g, x[0], 2.5);
    check_grad(func, &[1.3], &GradCheckConfig::default())
}
