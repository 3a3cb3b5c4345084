use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
use crate::utils::testing::{check_grads_near, create_leaves};

#[test]
fn test_sub_forward() -> Result<()> {
    let mut graph = Graph::new();
    let ids = create_leaves(&mut graph, &[5.0, 3.5]);
    let out = sub_op(&mut graph, ids[0], ids[1])?;
    assert_eq!(graph.value(out)?, 1.5);
    Ok(())
}

#[test]
fn test_sub_backward() -> Result<()> {
    let mut graph = Graph::new();
    let ids = create_leaves(&mut graph, &[5.0, 3.5]);
    let out = sub_op(&mut graph, ids[0], ids[1])?;
    graph.backward(out)?;
    check_grads_near(&graph, &ids, &[1.0, -1.0], 1e-12);
    Ok(())
}

#[test]
fn test_scalar_minus_node() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(4.0);
    let out = sub_op(&mut graph, 1.0, x)?;
    graph.backward(out)?;
    assert_eq!(graph.value(out)?, -3.0);
    assert_eq!(graph.grad(x)?, -1.0);
    Ok(())
}

#[test]
fn test_self_minus_self() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(4.0);
    let out = sub_op(&mut graph, x, x)?;
    graph.backward(out)?;
    assert_eq!(graph.value(out)?, 0.0);
    assert_eq!(graph.grad(x)?, 0.0);
    Ok(())
}

#[test]
fn test_sub_grad_check() -> std::result::Result<(), GradCheckError> {
    let func = |g: &mut Graph, x: &[NodeId]| sub_op(g, x[0], x[1]);
    check_grad(func, &[0.2, 0.9], &GradCheckConfig::default())
}
