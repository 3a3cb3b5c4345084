use crate::error::{Result, ScalarGradError};
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;

/// Distributes the gradient accumulated at `id` into its operands' gradients.
///
/// Single dispatch point for every operation tag. Leaves are a no-op.
pub(crate) fn local_backward(graph: &mut Graph, id: NodeId) -> Result<()> {
    let node = *graph.node(id)?;
    match (node.op, node.operands) {
        (Op::Leaf, _) => Ok(()),
        (Op::Add, [Some(a), Some(b)]) => add_backward(graph, &node, a, b),
        (Op::Mul, [Some(a), Some(b)]) => mul_backward(graph, &node, a, b),
        (Op::Pow { exponent }, [Some(a), None]) => pow_backward(graph, &node, a, exponent),
        (Op::Relu, [Some(a), None]) => relu_backward(graph, &node, a),
        (op, operands) => Err(ScalarGradError::MalformedGraph(format!(
            "node {} ({:?}) expects {} operands, found {}",
            id.index,
            op,
            op.arity(),
            operands.iter().flatten().count()
        ))),
    }
}
