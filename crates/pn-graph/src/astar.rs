//! A* search over the pipe graph.
//!
//! The heuristic is each node's straight-line distance to the anchor while
//! edge weights are volumetric energy losses, so the heuristic is only a
//! lower bound on the remaining cost when the goal is the anchor and every
//! pipe's loss per meter is at least one. Outside that case the returned
//! path can be suboptimal.
//!
//! The open set is scanned linearly for the lowest f-score; among equal
//! scores the node that entered the open set first wins, which keeps
//! results reproducible for a given input order.

use pn_core::{NodeIdx, Real};

use crate::error::{EndpointRole, GraphError, GraphResult};
use crate::graph::Graph;

/// A route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub nodes: Vec<String>,
    /// Sum of the edge weights along the route.
    pub cost: Real,
}

impl Path {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: a path holds at least its start node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of pipes traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a search between two known nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(Path),
    /// The goal cannot be reached from the start.
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPath => None,
        }
    }
}

/// Find a lowest-cost path from `start` to `goal`.
///
/// Fails with [`GraphError::UnknownEndpoint`] if either id is not in the
/// graph. An unreachable goal is reported as [`PathOutcome::NoPath`].
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> GraphResult<PathOutcome> {
    let start_idx = endpoint(graph, start, EndpointRole::Start)?;
    let goal_idx = endpoint(graph, goal, EndpointRole::Goal)?;

    let outcome = match search(graph, start_idx, goal_idx) {
        Some(path) => PathOutcome::Found(path),
        None => PathOutcome::NoPath,
    };

    match &outcome {
        PathOutcome::Found(path) => {
            tracing::debug!(start, goal, hops = path.hops(), cost = path.cost, "path found")
        }
        PathOutcome::NoPath => tracing::debug!(start, goal, "no path"),
    }

    Ok(outcome)
}

pub(crate) fn endpoint(graph: &Graph, id: &str, role: EndpointRole) -> GraphResult<NodeIdx> {
    graph.idx_of(id).ok_or_else(|| GraphError::UnknownEndpoint {
        role,
        id: id.to_string(),
    })
}

/// Run A* between two arena slots known to be valid.
pub(crate) fn search(graph: &Graph, start: NodeIdx, goal: NodeIdx) -> Option<Path> {
    let mut state = SearchState::new(graph.len());
    state.g[start.index()] = 0.0;
    state.f[start.index()] = graph.nodes[start.index()].heuristic;
    state.push_open(start);

    while let Some(current) = state.pop_lowest() {
        if current == goal {
            return Some(state.reconstruct(graph, goal));
        }
        state.closed[current.index()] = true;

        let g_current = state.g[current.index()];
        for edge in graph.neighbors(current) {
            let n = edge.to.index();
            if state.closed[n] {
                continue;
            }

            let tentative = g_current + edge.weight;
            if !state.in_open[n] {
                state.push_open(edge.to);
            } else if tentative >= state.g[n] {
                continue;
            }

            state.came_from[n] = Some(current);
            state.g[n] = tentative;
            state.f[n] = tentative + graph.nodes[n].heuristic;
        }
    }

    None
}

/// Per-search bookkeeping, indexed by arena slot. Created fresh for every
/// call so searches share nothing but the graph.
struct SearchState {
    /// Frontier in insertion order.
    open: Vec<NodeIdx>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
    g: Vec<Real>,
    f: Vec<Real>,
    came_from: Vec<Option<NodeIdx>>,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            open: Vec::new(),
            in_open: vec![false; len],
            closed: vec![false; len],
            g: vec![Real::INFINITY; len],
            f: vec![Real::INFINITY; len],
            came_from: vec![None; len],
        }
    }

    fn push_open(&mut self, idx: NodeIdx) {
        self.in_open[idx.index()] = true;
        self.open.push(idx);
    }

    /// Remove and return the open node with the lowest f-score, the earliest
    /// inserted one on ties.
    fn pop_lowest(&mut self) -> Option<NodeIdx> {
        let mut best: Option<(usize, Real)> = None;
        for (pos, idx) in self.open.iter().enumerate() {
            let f = self.f[idx.index()];
            let lower = match best {
                Some((_, best_f)) => f < best_f,
                None => true,
            };
            if lower {
                best = Some((pos, f));
            }
        }

        let (pos, _) = best?;
        let idx = self.open.remove(pos);
        self.in_open[idx.index()] = false;
        Some(idx)
    }

    fn reconstruct(&self, graph: &Graph, goal: NodeIdx) -> Path {
        let mut nodes = vec![graph.nodes[goal.index()].id().to_string()];
        let mut current = goal;
        while let Some(prev) = self.came_from[current.index()] {
            nodes.push(graph.nodes[prev.index()].id().to_string());
            current = prev;
        }
        nodes.reverse();

        Path {
            nodes,
            cost: self.g[goal.index()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use pn_network::{RawConnection, RawNode};

    fn diamond() -> Graph {
        // boiler - left - sink and boiler - right - sink; the right branch
        // uses thinner pipe and is cheaper.
        let nodes = vec![
            RawNode::new("boiler", 0.0, 0.0, 0.0),
            RawNode::new("left", -1.0, 1.0, 0.0),
            RawNode::new("right", 1.0, 1.0, 0.0),
            RawNode::new("sink", 0.0, 2.0, 0.0),
        ];
        let connections = vec![
            RawConnection::new("boiler", "left", 4.0, 1.0),
            RawConnection::new("left", "sink", 4.0, 1.0),
            RawConnection::new("boiler", "right", 2.0, 1.0),
            RawConnection::new("right", "sink", 2.0, 1.0),
        ];
        build_graph(&nodes, &connections).unwrap()
    }

    #[test]
    fn picks_cheaper_branch() {
        let graph = diamond();
        let path = find_path(&graph, "sink", "boiler").unwrap().into_path().unwrap();
        assert_eq!(path.nodes, vec!["sink", "right", "boiler"]);
        assert_eq!(path.hops(), 2);

        let expected = graph.edge_weight("sink", "right").unwrap()
            + graph.edge_weight("right", "boiler").unwrap();
        assert!((path.cost - expected).abs() < 1e-12);
    }

    #[test]
    fn start_equals_goal() {
        let graph = diamond();
        let outcome = find_path(&graph, "left", "left").unwrap();
        assert_eq!(
            outcome,
            PathOutcome::Found(Path {
                nodes: vec!["left".into()],
                cost: 0.0,
            })
        );
    }

    #[test]
    fn unknown_endpoints() {
        let graph = diamond();
        assert_eq!(
            find_path(&graph, "attic", "boiler").unwrap_err(),
            GraphError::UnknownEndpoint {
                role: EndpointRole::Start,
                id: "attic".into(),
            }
        );
        assert_eq!(
            find_path(&graph, "sink", "attic").unwrap_err(),
            GraphError::UnknownEndpoint {
                role: EndpointRole::Goal,
                id: "attic".into(),
            }
        );
    }

    #[test]
    fn equal_scores_resolve_by_insertion_order() {
        // Both branches are mirror images, so every tie is decided by which
        // neighbor entered the open set first: "left" is connected first.
        let nodes = vec![
            RawNode::new("boiler", 0.0, 0.0, 0.0),
            RawNode::new("left", -1.0, 1.0, 0.0),
            RawNode::new("right", 1.0, 1.0, 0.0),
            RawNode::new("sink", 0.0, 2.0, 0.0),
        ];
        let connections = vec![
            RawConnection::new("sink", "left", 2.0, 1.0),
            RawConnection::new("sink", "right", 2.0, 1.0),
            RawConnection::new("left", "boiler", 2.0, 1.0),
            RawConnection::new("right", "boiler", 2.0, 1.0),
        ];
        let graph = build_graph(&nodes, &connections).unwrap();
        let path = find_path(&graph, "sink", "boiler").unwrap().into_path().unwrap();
        assert_eq!(path.nodes, vec!["sink", "left", "boiler"]);

        let swapped = vec![
            connections[1].clone(),
            connections[0].clone(),
            connections[2].clone(),
            connections[3].clone(),
        ];
        let graph = build_graph(&nodes, &swapped).unwrap();
        let path = find_path(&graph, "sink", "boiler").unwrap().into_path().unwrap();
        assert_eq!(path.nodes, vec!["sink", "right", "boiler"]);
    }

    #[test]
    fn disconnected_goal_is_not_an_error() {
        let nodes = vec![
            RawNode::new("boiler", 0.0, 0.0, 0.0),
            RawNode::new("island", 5.0, 0.0, 0.0),
        ];
        let graph = build_graph(&nodes, &[]).unwrap();
        let outcome = find_path(&graph, "island", "boiler").unwrap();
        assert_eq!(outcome, PathOutcome::NoPath);
        assert!(!outcome.is_found());
        assert!(outcome.path().is_none());
    }

    #[test]
    fn pop_lowest_prefers_first_inserted_on_ties() {
        let mut state = SearchState::new(3);
        for i in [2, 0, 1] {
            let idx = NodeIdx::from_index(i);
            state.f[i] = 1.0;
            state.push_open(idx);
        }
        state.f[1] = 0.5;

        assert_eq!(state.pop_lowest(), Some(NodeIdx::from_index(1)));
        assert_eq!(state.pop_lowest(), Some(NodeIdx::from_index(2)));
        assert_eq!(state.pop_lowest(), Some(NodeIdx::from_index(0)));
        assert_eq!(state.pop_lowest(), None);
    }
}
