//! pn-core: shared foundation for pipenet.
//!
//! Contains:
//! - units (uom SI types + constructors for pipe geometry)
//! - numeric (Real + tolerances + float helpers)
//! - geometry (3D positions and distances)
//! - ids (compact arena indices for graph nodes)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PnError, PnResult};
pub use geometry::*;
pub use ids::*;
pub use numeric::*;
pub use units::*;
