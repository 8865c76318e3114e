//! Graph validation logic.

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Check that every adjacency entry has a mirror entry with the same weight
/// on the other end, and that the entry count matches the edge count.
pub(crate) fn validate_adjacency(graph: &Graph) -> GraphResult<()> {
    let mut entries = 0;

    for node in graph.nodes() {
        for edge in node.edges() {
            let mirrored = graph.node(edge.to).is_some_and(|other| {
                other
                    .edges()
                    .iter()
                    .any(|back| back.to == node.idx && back.weight.to_bits() == edge.weight.to_bits())
            });
            if !mirrored {
                return Err(GraphError::InconsistentAdjacency {
                    node: node.id().to_string(),
                });
            }
        }
        entries += node.degree();
    }

    if entries != 2 * graph.edge_count() {
        let node = graph.anchor().id().to_string();
        return Err(GraphError::InconsistentAdjacency { node });
    }

    Ok(())
}
