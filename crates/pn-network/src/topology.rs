//! Resolving connection endpoints against a node list.

use std::collections::HashMap;

use crate::error::{NetworkError, NetworkResult};
use crate::model::{RawConnection, RawNode};

/// A connection together with the records of both its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConnection<'a> {
    pub connection: &'a RawConnection,
    pub start: &'a RawNode,
    pub end: &'a RawNode,
}

/// Node records indexed by `pipe_id`.
///
/// When an id appears more than once the last record wins.
#[derive(Debug, Clone, Default)]
pub struct NodeLookup<'a> {
    by_id: HashMap<&'a str, &'a RawNode>,
}

impl<'a> NodeLookup<'a> {
    pub fn new(nodes: &'a [RawNode]) -> Self {
        let by_id = nodes.iter().map(|n| (n.pipe_id.as_str(), n)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a RawNode> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Look up both endpoints of `connection`.
    pub fn resolve(&self, connection: &'a RawConnection) -> NetworkResult<ResolvedConnection<'a>> {
        let lookup = |id: &str| {
            self.get(id).ok_or_else(|| NetworkError::DanglingConnection {
                key: connection.key(),
                missing: id.to_string(),
            })
        };
        Ok(ResolvedConnection {
            connection,
            start: lookup(&connection.node_a)?,
            end: lookup(&connection.node_b)?,
        })
    }

    fn is_dangling(&self, connection: &RawConnection) -> bool {
        !self.contains(&connection.node_a) || !self.contains(&connection.node_b)
    }
}

/// Pair every connection with its endpoint records, in input order.
///
/// Each item fails with [`NetworkError::DanglingConnection`] if an endpoint is
/// not among `nodes`.
pub fn resolve_connections<'a>(
    connections: &'a [RawConnection],
    nodes: &'a [RawNode],
) -> impl Iterator<Item = NetworkResult<ResolvedConnection<'a>>> + 'a {
    let lookup = NodeLookup::new(nodes);
    connections.iter().map(move |c| lookup.resolve(c))
}

/// Keep only the connections whose endpoints both exist among `nodes`.
///
/// Input order is preserved and neither slice is modified.
pub fn filter_dangling_connections(
    connections: &[RawConnection],
    nodes: &[RawNode],
) -> Vec<RawConnection> {
    let lookup = NodeLookup::new(nodes);
    let kept: Vec<RawConnection> = connections
        .iter()
        .filter(|c| !lookup.is_dangling(c))
        .cloned()
        .collect();

    let dropped = connections.len() - kept.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped dangling connections");
    }
    kept
}

/// The connections [`filter_dangling_connections`] would drop.
pub fn dangling_connections<'a>(
    connections: &'a [RawConnection],
    nodes: &[RawNode],
) -> Vec<&'a RawConnection> {
    let lookup = NodeLookup::new(nodes);
    connections.iter().filter(|c| lookup.is_dangling(c)).collect()
}
