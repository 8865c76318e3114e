//! Node and connection records.
//!
//! Field names follow the record format used by the surrounding application
//! (`pipeId`, `nodeA`, `diameterInCm`, ...), so the structs deserialize
//! straight from its JSON exports.

use pn_core::units::{Length, cm};
use pn_core::{Position, Real, position};
use serde::{Deserialize, Serialize};

use crate::key::ConnectionKey;

/// A point of the pipe network, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub pipe_id: String,
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl RawNode {
    pub fn new(pipe_id: impl Into<String>, x: Real, y: Real, z: Real) -> Self {
        Self {
            pipe_id: pipe_id.into(),
            x,
            y,
            z,
        }
    }

    pub fn position(&self) -> Position {
        position(self.x, self.y, self.z)
    }
}

/// A pipe segment between two nodes. The endpoints are an unordered pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnection {
    pub node_a: String,
    pub node_b: String,
    /// Inner diameter in centimeters
    pub diameter_in_cm: Real,
    /// Dimensionless energy-loss coefficient
    pub loss_of_energy: Real,
}

impl RawConnection {
    pub fn new(
        node_a: impl Into<String>,
        node_b: impl Into<String>,
        diameter_in_cm: Real,
        loss_of_energy: Real,
    ) -> Self {
        Self {
            node_a: node_a.into(),
            node_b: node_b.into(),
            diameter_in_cm,
            loss_of_energy,
        }
    }

    pub fn key(&self) -> ConnectionKey {
        ConnectionKey::from_connection(self)
    }

    pub fn diameter(&self) -> Length {
        cm(self.diameter_in_cm)
    }

    /// True if either endpoint is `id`.
    pub fn touches(&self, id: &str) -> bool {
        self.node_a == id || self.node_b == id
    }
}
