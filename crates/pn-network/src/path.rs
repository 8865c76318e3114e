//! Mapping a node path back onto connection records.

use std::collections::HashMap;

use crate::error::{NetworkError, NetworkResult};
use crate::key::ConnectionKey;
use crate::model::RawConnection;

/// The connection records traversed by `path`, one per consecutive id pair.
///
/// Pairs are matched through [`ConnectionKey`], so a path may walk a
/// connection in either direction. Fails with
/// [`NetworkError::MissingConnection`] when a pair has no record.
pub fn connections_along_path<'a, S: AsRef<str>>(
    path: &[S],
    connections: &'a [RawConnection],
) -> NetworkResult<Vec<&'a RawConnection>> {
    let by_key: HashMap<ConnectionKey, &RawConnection> =
        connections.iter().map(|c| (c.key(), c)).collect();

    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            by_key
                .get(&ConnectionKey::from_ids(from, to))
                .copied()
                .ok_or_else(|| NetworkError::MissingConnection {
                    from: from.to_string(),
                    to: to.to_string(),
                })
        })
        .collect()
}
