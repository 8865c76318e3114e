//! Core graph data structures.

use std::collections::HashMap;

use pn_core::{NodeIdx, Position, Real};
use pn_network::RawNode;

/// One side of an undirected pipe: the neighbor's arena slot and the
/// traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeIdx,
    pub weight: Real,
}

/// A node of the pipe graph.
///
/// The heuristic is the straight-line distance to the anchor node and is
/// fixed when the graph is built.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub idx: NodeIdx,
    pub record: RawNode,
    pub heuristic: Real,
    pub(crate) edges: Vec<Edge>,
}

impl GraphNode {
    pub fn id(&self) -> &str {
        &self.record.pipe_id
    }

    pub fn position(&self) -> Position {
        self.record.position()
    }

    /// Incident edges, in connection insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// The graph: an immutable arena of nodes with symmetric adjacency lists.
///
/// Nodes keep the order of the records they were built from, which is also
/// the order searches and sweeps visit them in.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<GraphNode>,
    pub(crate) index: HashMap<String, NodeIdx>,
    pub(crate) anchor: NodeIdx,
    pub(crate) edge_count: usize,
}

impl Graph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built graph, which holds at least its anchor.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get a node by arena index (returns None if out of bounds).
    pub fn node(&self, idx: NodeIdx) -> Option<&GraphNode> {
        self.nodes.get(idx.index())
    }

    pub fn node_by_id(&self, id: &str) -> Option<&GraphNode> {
        self.idx_of(id).and_then(|idx| self.node(idx))
    }

    pub fn idx_of(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The node every heuristic is measured against.
    pub fn anchor(&self) -> &GraphNode {
        &self.nodes[self.anchor.index()]
    }

    /// Edges incident to a node (empty if the index is out of bounds).
    pub fn neighbors(&self, idx: NodeIdx) -> &[Edge] {
        match self.node(idx) {
            Some(node) => node.edges(),
            None => &[],
        }
    }

    /// Weight of the first edge between two nodes, if they are adjacent.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Real> {
        let b_idx = self.idx_of(b)?;
        self.node_by_id(a)?
            .edges
            .iter()
            .find(|e| e.to == b_idx)
            .map(|e| e.weight)
    }

    /// Add an adjacency entry on both ends with the same weight.
    pub(crate) fn insert_edge(&mut self, a: NodeIdx, b: NodeIdx, weight: Real) {
        self.nodes[a.index()].edges.push(Edge { to: b, weight });
        self.nodes[b.index()].edges.push(Edge { to: a, weight });
        self.edge_count += 1;
    }
}
