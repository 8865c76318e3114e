//! Network record validation.

use std::collections::HashSet;

use pn_core::{PnError, ensure_finite, ensure_non_negative, ensure_positive};

use crate::error::{NetworkError, NetworkResult};
use crate::model::{RawConnection, RawNode};
use crate::topology::NodeLookup;

/// Check a node/connection snapshot before it is turned into a graph.
///
/// Rejects, in this order: duplicate or non-finite nodes, connections with a
/// non-positive diameter or a negative loss coefficient, and dangling
/// connections. Returns the first problem found.
pub fn validate_network(nodes: &[RawNode], connections: &[RawConnection]) -> NetworkResult<()> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.pipe_id.as_str()) {
            return Err(NetworkError::DuplicateNode {
                id: node.pipe_id.clone(),
            });
        }
        validate_node(node).map_err(|source| NetworkError::InvalidValue {
            context: format!("node {}", node.pipe_id),
            source,
        })?;
    }

    for connection in connections {
        validate_connection(connection).map_err(|source| NetworkError::InvalidValue {
            context: format!("connection {}", connection.key()),
            source,
        })?;
    }

    let lookup = NodeLookup::new(nodes);
    for connection in connections {
        lookup.resolve(connection)?;
    }

    Ok(())
}

fn validate_node(node: &RawNode) -> Result<(), PnError> {
    ensure_finite(node.x, "x")?;
    ensure_finite(node.y, "y")?;
    ensure_finite(node.z, "z")?;
    Ok(())
}

fn validate_connection(connection: &RawConnection) -> Result<(), PnError> {
    ensure_positive(connection.diameter_in_cm, "diameterInCm")?;
    ensure_non_negative(connection.loss_of_energy, "lossOfEnergy")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<RawNode> {
        vec![
            RawNode::new("boiler", 0.0, 0.0, 0.0),
            RawNode::new("sink", 0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn accepts_clean_network() {
        let connections = vec![RawConnection::new("boiler", "sink", 1.6, 0.0)];
        assert_eq!(validate_network(&nodes(), &connections), Ok(()));
        assert_eq!(validate_network(&[], &[]), Ok(()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut nodes = nodes();
        nodes.push(RawNode::new("sink", 3.0, 0.0, 0.0));
        assert_eq!(
            validate_network(&nodes, &[]),
            Err(NetworkError::DuplicateNode { id: "sink".into() })
        );
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let mut nodes = nodes();
        nodes[1].z = f64::NAN;
        let err = validate_network(&nodes, &[]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidValue {
                source: PnError::NonFinite { what: "z", .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_pipe_parameters() {
        let zero_diameter = vec![RawConnection::new("boiler", "sink", 0.0, 0.1)];
        let err = validate_network(&nodes(), &zero_diameter).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidValue {
                source: PnError::OutOfRange {
                    what: "diameterInCm",
                    ..
                },
                ..
            }
        ));

        let negative_loss = vec![RawConnection::new("boiler", "sink", 1.0, -0.1)];
        let err = validate_network(&nodes(), &negative_loss).unwrap_err();
        assert!(err.to_string().contains("connection boiler;sink"));
    }

    #[test]
    fn rejects_dangling_connection() {
        let connections = vec![RawConnection::new("boiler", "ghost", 1.0, 0.1)];
        assert!(matches!(
            validate_network(&nodes(), &connections),
            Err(NetworkError::DanglingConnection { .. })
        ));
    }
}
