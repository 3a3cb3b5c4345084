use crate::graph::Graph;
use crate::node::NodeId;

/// Creates one leaf per value, in order.
pub(crate) fn create_leaves(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Checks that each node's gradient is within `tolerance` of the expected value.
/// Panics with the offending index otherwise.
pub(crate) fn check_grads_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");

    for (i, (id, e)) in ids.iter().zip(expected.iter()).enumerate() {
        let actual = graph
            .grad(*id)
            .expect("Node not found in check_grads_near");
        let diff = (actual - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}
