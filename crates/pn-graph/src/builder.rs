//! Graph construction from raw node and connection records.

use std::collections::HashMap;

use pn_core::{NodeIdx, euclidean_distance};
use pn_network::{RawConnection, RawNode, connection_weight};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, GraphNode};
use crate::validate;

/// Id of the node heuristics are measured against unless configured otherwise.
pub const DEFAULT_ANCHOR_ID: &str = "boiler";

/// Knobs for graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Node whose distance to every other node becomes that node's heuristic.
    pub anchor_id: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
        }
    }
}

/// Builder for collecting records incrementally.
///
/// Use `add_node` and `add_connection` to gather records, then call
/// `build()` to resolve and freeze them into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    options: BuildOptions,
    nodes: Vec<RawNode>,
    connections: Vec<RawConnection>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Measure heuristics against `id` instead of the default anchor.
    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.options.anchor_id = id.into();
        self
    }

    pub fn add_node(&mut self, node: RawNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = RawNode>) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn add_connection(&mut self, connection: RawConnection) -> &mut Self {
        self.connections.push(connection);
        self
    }

    pub fn add_connections(
        &mut self,
        connections: impl IntoIterator<Item = RawConnection>,
    ) -> &mut Self {
        self.connections.extend(connections);
        self
    }

    /// Build the graph, returning an immutable `Graph`.
    pub fn build(self) -> GraphResult<Graph> {
        build_graph_with(&self.nodes, &self.connections, &self.options)
    }
}

/// Build a graph anchored at [`DEFAULT_ANCHOR_ID`].
pub fn build_graph(nodes: &[RawNode], connections: &[RawConnection]) -> GraphResult<Graph> {
    build_graph_with(nodes, connections, &BuildOptions::default())
}

/// Build a graph from a snapshot of records.
///
/// Every node gets its distance to the anchor as heuristic, every connection
/// becomes a symmetric edge weighted by [`connection_weight`]. Nodes and edges
/// keep the input order. The input slices are not modified.
pub fn build_graph_with(
    nodes: &[RawNode],
    connections: &[RawConnection],
    options: &BuildOptions,
) -> GraphResult<Graph> {
    let anchor_slot = nodes
        .iter()
        .position(|n| n.pipe_id == options.anchor_id)
        .ok_or_else(|| GraphError::MissingAnchorNode {
            id: options.anchor_id.clone(),
        })?;
    let anchor_pos = nodes[anchor_slot].position();

    let mut graph = Graph {
        nodes: Vec::with_capacity(nodes.len()),
        index: HashMap::with_capacity(nodes.len()),
        anchor: NodeIdx::from_index(anchor_slot),
        edge_count: 0,
    };

    for (slot, record) in nodes.iter().enumerate() {
        let idx = NodeIdx::from_index(slot);
        if graph.index.insert(record.pipe_id.clone(), idx).is_some() {
            return Err(GraphError::DuplicateNode {
                id: record.pipe_id.clone(),
            });
        }
        graph.nodes.push(GraphNode {
            idx,
            record: record.clone(),
            heuristic: euclidean_distance(&record.position(), &anchor_pos),
            edges: Vec::new(),
        });
    }

    for connection in connections {
        let resolve = |id: &str| {
            graph
                .idx_of(id)
                .ok_or_else(|| GraphError::DanglingConnection {
                    key: connection.key(),
                    missing: id.to_string(),
                })
        };
        let a = resolve(&connection.node_a)?;
        let b = resolve(&connection.node_b)?;

        let weight = connection_weight(
            connection,
            &graph.nodes[a.index()].record,
            &graph.nodes[b.index()].record,
        );
        graph.insert_edge(a, b, weight);
    }

    validate::validate_adjacency(&graph)?;

    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        anchor = %options.anchor_id,
        "built pipe graph"
    );

    Ok(graph)
}
