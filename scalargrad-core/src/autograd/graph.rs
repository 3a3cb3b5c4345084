use crate::error::{Result, ScalarGradError};
use crate::graph::Graph;
use crate::node::NodeId;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Post-order depth-first walk over operand edges: a node is pushed only after
/// all of its operands. An explicit stack replaces recursion, so the depth of
/// the graph is not limited by the call stack. Shared operands are visited once.
///
/// Fails with `MalformedGraph` if an operand does not precede its consumer in
/// the arena or if a node is reached again while still on the stack.
pub(crate) fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>> {
    graph.check_node(root, "backward")?;

    let mut state = vec![VisitState::Unvisited; graph.len()];
    let mut sorted_list = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    state[root.index] = VisitState::InProgress;

    while let Some(&(id, slot)) = stack.last() {
        let next = graph.get(id).operands.get(slot).copied().flatten();
        match next {
            Some(operand) => {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                if operand.graph != graph.id() || operand.index >= id.index {
                    return Err(ScalarGradError::MalformedGraph(format!(
                        "operand {} of node {} does not precede it",
                        operand.index, id.index
                    )));
                }
                match state[operand.index] {
                    VisitState::Unvisited => {
                        state[operand.index] = VisitState::InProgress;
                        stack.push((operand, 0));
                    }
                    VisitState::InProgress => {
                        return Err(ScalarGradError::MalformedGraph(format!(
                            "cycle through node {}",
                            operand.index
                        )));
                    }
                    VisitState::Done => {}
                }
            }
            None => {
                state[id.index] = VisitState::Done;
                sorted_list.push(id);
                stack.pop();
            }
        }
    }

    trace!(
        "[topological_sort] root {} reaches {} nodes",
        root.index,
        sorted_list.len()
    );
    Ok(sorted_list)
}
