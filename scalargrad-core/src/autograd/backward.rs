use crate::autograd::backward_op::local_backward;
use crate::autograd::graph::topological_sort;
use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{debug, trace, warn};

/// Performs the backward pass starting from `root`.
///
/// 1. Topologically sorts the nodes reachable from `root`.
/// 2. Seeds `root.grad = 1` (d root / d root).
/// 3. Replays every node's local derivative in reverse order, root first.
///
/// The pass computes its own contributions starting from zero and adds them
/// onto the gradients left by earlier passes. Only the root's gradient is
/// assigned, so two calls without [`Graph::zero_grad`] in between leave
/// every other reachable node with twice its single-pass gradient. Replaying
/// in place instead would compound interior gradients: in
/// `relu((x + y) * z) + x * y` at (2, -3, 10), `x.grad` would reach -9
/// after two passes rather than -6.
///
/// If a local derivative fails, every reachable gradient is restored to its
/// value before the call.
///
/// # Errors
/// * `InvalidOperandType` if `root` does not belong to `graph`.
/// * `MalformedGraph` if the traversal finds a structurally impossible edge.
pub fn backward(graph: &mut Graph, root: NodeId) -> Result<()> {
    let sorted_nodes = topological_sort(graph, root)?;
    debug!(
        "backward: root {} over {} nodes",
        root.index(),
        sorted_nodes.len()
    );

    let previous: Vec<f64> = sorted_nodes.iter().map(|id| graph.get(*id).grad).collect();
    for &node_id in &sorted_nodes {
        graph.set_grad(node_id, 0.0)?;
    }
    graph.set_grad(root, 1.0)?;

    if let Err(e) = replay(graph, &sorted_nodes) {
        for (&node_id, &earlier) in sorted_nodes.iter().zip(&previous) {
            graph.set_grad(node_id, earlier)?;
        }
        return Err(e);
    }

    for (&node_id, &earlier) in sorted_nodes.iter().zip(&previous) {
        if node_id != root {
            graph.accumulate_grad(node_id, earlier)?;
        }
    }

    if let Some(bad) = sorted_nodes
        .iter()
        .find(|id| !graph.get(**id).grad.is_finite())
    {
        warn!(
            "backward: non-finite gradient at node {} ({})",
            bad.index(),
            graph.get(*bad)
        );
    }
    debug!("backward: done");
    Ok(())
}

/// Runs the local derivatives of `sorted_nodes` in reverse, root first.
fn replay(graph: &mut Graph, sorted_nodes: &[NodeId]) -> Result<()> {
    for &node_id in sorted_nodes.iter().rev() {
        trace!(
            "backward: node {} grad {}",
            node_id.index(),
            graph.get(node_id).grad
        );
        local_backward(graph, node_id)?;
    }
    Ok(())
}
