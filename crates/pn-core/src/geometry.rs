//! Positions in 3D space.

use nalgebra::Point3;

use crate::Real;

/// A point in the building's coordinate frame, in meters.
pub type Position = Point3<Real>;

#[inline]
pub fn position(x: Real, y: Real, z: Real) -> Position {
    Point3::new(x, y, z)
}

/// Straight-line distance between two positions, in meters.
#[inline]
pub fn euclidean_distance(a: &Position, b: &Position) -> Real {
    nalgebra::distance(a, b)
}
