//! Pipe metrics: volume and energy loss of connections.
//!
//! A connection's graph weight is the water it holds times its loss
//! coefficient, not its length:
//!
//! `weight = π · (d / 2)² · L · 1000 · loss`
//!
//! with `d` the inner diameter in meters, `L` the straight-line distance
//! between the endpoints in meters, and the factor 1000 converting cubic
//! meters to liters.

use pn_core::units::{Length, Volume, as_liters, circle_area, cm, m};
use pn_core::{Real, euclidean_distance};

use crate::error::NetworkResult;
use crate::model::{RawConnection, RawNode};
use crate::topology::resolve_connections;

/// Volume of a straight pipe.
pub fn pipe_volume(diameter: Length, length: Length) -> Volume {
    circle_area(diameter) * length
}

/// Volume in liters of a pipe given its diameter in centimeters and length in meters.
pub fn pipe_volume_liters(diameter_in_cm: Real, length_m: Real) -> Real {
    as_liters(pipe_volume(cm(diameter_in_cm), m(length_m)))
}

/// Straight-line length of a connection, in meters.
pub fn connection_length(start: &RawNode, end: &RawNode) -> Real {
    euclidean_distance(&start.position(), &end.position())
}

pub fn connection_volume_liters(connection: &RawConnection, start: &RawNode, end: &RawNode) -> Real {
    pipe_volume_liters(connection.diameter_in_cm, connection_length(start, end))
}

/// Edge weight of a connection: its volume scaled by the loss coefficient.
pub fn connection_weight(connection: &RawConnection, start: &RawNode, end: &RawNode) -> Real {
    connection_volume_liters(connection, start, end) * connection.loss_of_energy
}

/// Water held by all connections, in liters.
///
/// Fails on the first connection with an endpoint missing from `nodes`.
pub fn total_volume_liters(connections: &[RawConnection], nodes: &[RawNode]) -> NetworkResult<Real> {
    resolve_connections(connections, nodes)
        .map(|resolved| resolved.map(|r| connection_volume_liters(r.connection, r.start, r.end)))
        .sum()
}

/// Sum of the edge weights of all connections.
pub fn total_energy_loss(connections: &[RawConnection], nodes: &[RawNode]) -> NetworkResult<Real> {
    resolve_connections(connections, nodes)
        .map(|resolved| resolved.map(|r| connection_weight(r.connection, r.start, r.end)))
        .sum()
}
