//! Reachability diagnostics.
//!
//! Runs one A* search per node towards a fixed goal and collects the nodes
//! that never get there. That is V searches of O(V²) each, meant for offline
//! network audits such as finding taps that cannot drain to the boiler.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::astar::{endpoint, search};
use crate::error::{EndpointRole, GraphResult};
use crate::graph::{Graph, GraphNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReachabilityOptions {
    /// Spread the per-node searches over the rayon thread pool.
    pub parallel: bool,
}

/// Ids of all nodes with no path to `goal`.
pub fn find_unreachable_nodes(graph: &Graph, goal: &str) -> GraphResult<BTreeSet<String>> {
    find_unreachable_nodes_with(graph, goal, ReachabilityOptions::default())
}

/// Parallel variant of [`find_unreachable_nodes`]; returns the same set.
pub fn find_unreachable_nodes_par(graph: &Graph, goal: &str) -> GraphResult<BTreeSet<String>> {
    find_unreachable_nodes_with(graph, goal, ReachabilityOptions { parallel: true })
}

pub fn find_unreachable_nodes_with(
    graph: &Graph,
    goal: &str,
    options: ReachabilityOptions,
) -> GraphResult<BTreeSet<String>> {
    let goal_idx = endpoint(graph, goal, EndpointRole::Goal)?;
    let cannot_reach = |node: &&GraphNode| search(graph, node.idx, goal_idx).is_none();

    let unreachable: BTreeSet<String> = if options.parallel {
        graph
            .nodes()
            .par_iter()
            .filter(cannot_reach)
            .map(|n| n.id().to_string())
            .collect()
    } else {
        graph
            .nodes()
            .iter()
            .filter(cannot_reach)
            .map(|n| n.id().to_string())
            .collect()
    };

    tracing::info!(
        goal,
        nodes = graph.len(),
        unreachable = unreachable.len(),
        parallel = options.parallel,
        "reachability sweep finished"
    );

    Ok(unreachable)
}
