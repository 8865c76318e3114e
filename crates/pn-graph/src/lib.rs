//! pn-graph: weighted pipe graph and A* search for pipenet.
//!
//! Provides:
//! - An arena-backed undirected graph whose edge weights are pipe energy losses
//! - A builder that derives weights and per-node heuristics from raw records
//! - A* pathfinding between two nodes
//! - Reachability diagnostics against a fixed goal node
//!
//! # Example
//!
//! ```
//! use pn_graph::{PathOutcome, build_graph, find_path};
//! use pn_network::{RawConnection, RawNode};
//!
//! let nodes = vec![
//!     RawNode::new("boiler", 0.0, 0.0, 0.0),
//!     RawNode::new("tap", 0.0, 2.0, 0.0),
//! ];
//! let connections = vec![RawConnection::new("tap", "boiler", 1.6, 0.4)];
//! let graph = build_graph(&nodes, &connections).unwrap();
//!
//! let outcome = find_path(&graph, "tap", "boiler").unwrap();
//! let path = outcome.into_path().unwrap();
//! assert_eq!(path.nodes, vec!["tap", "boiler"]);
//! ```

pub mod astar;
pub mod builder;
pub mod error;
pub mod graph;
pub mod reachability;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use astar::{Path, PathOutcome, find_path};
pub use builder::{BuildOptions, DEFAULT_ANCHOR_ID, GraphBuilder, build_graph, build_graph_with};
pub use error::{EndpointRole, GraphError, GraphResult};
pub use graph::{Edge, Graph, GraphNode};
pub use reachability::{
    ReachabilityOptions, find_unreachable_nodes, find_unreachable_nodes_par,
    find_unreachable_nodes_with,
};
