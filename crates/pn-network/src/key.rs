//! Direction-free connection keys.

use std::fmt;

use crate::model::RawConnection;

/// Separator placed between the two sorted endpoint ids.
pub const KEY_SEPARATOR: char = ';';

/// Lookup key for an undirected connection: both endpoint ids, sorted and
/// joined with [`KEY_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey(String);

impl ConnectionKey {
    /// Key for the pipe between `a` and `b`, whichever way round they are given.
    pub fn from_ids(a: &str, b: &str) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("{lo}{KEY_SEPARATOR}{hi}"))
    }

    pub fn from_connection(connection: &RawConnection) -> Self {
        Self::from_ids(&connection.node_a, &connection.node_b)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
