use scalargrad_core::{Graph, NodeId, ScalarGradError};

/// Leaves and output of the reference expression
/// `relu((x + y) * z) + x * y` at x = 2, y = -3, z = 10.
#[allow(dead_code)]
pub(crate) struct Canonical {
    pub graph: Graph,
    pub x: NodeId,
    pub y: NodeId,
    pub z: NodeId,
    pub out: NodeId,
}

// Shared by several test crates; not every one uses it.
#[allow(dead_code)]
pub(crate) fn build_canonical() -> Result<Canonical, ScalarGradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.leaf(-3.0);
    let z = graph.leaf(10.0);
    let q = graph.add(x, y)?;
    let f = graph.mul(q, z)?;
    let gated = graph.relu(f)?;
    let xy = graph.mul(x, y)?;
    let out = graph.add(gated, xy)?;
    Ok(Canonical {
        graph,
        x,
        y,
        z,
        out,
    })
}
