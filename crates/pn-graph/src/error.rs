//! Graph-specific error types.

use std::fmt;

use pn_network::ConnectionKey;
use thiserror::Error;

/// Which end of a search request an unknown id was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    Goal,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointRole::Start => f.write_str("start"),
            EndpointRole::Goal => f.write_str("goal"),
        }
    }
}

/// Graph construction and search precondition errors.
///
/// A search that simply finds no route is not an error; see
/// [`crate::PathOutcome::NoPath`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No node carries the anchor id, so no heuristic can be computed.
    #[error("Anchor node '{id}' not found")]
    MissingAnchorNode { id: String },

    /// A connection refers to a node that doesn't exist.
    #[error("Connection {key} references unknown node {missing}")]
    DanglingConnection { key: ConnectionKey, missing: String },

    /// A search endpoint is not a node of the graph.
    #[error("Unknown {role} node '{id}'")]
    UnknownEndpoint { role: EndpointRole, id: String },

    /// Two node records share the same id.
    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: String },

    /// An edge has no mirror entry with the same weight on its other end.
    #[error("Adjacency of node {node} is inconsistent")]
    InconsistentAdjacency { node: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
