//! pn-network: raw pipe-network records and the metrics derived from them.
//!
//! Provides:
//! - Node and connection records as supplied by the surrounding application
//! - Canonical, direction-free connection keys
//! - Pipe volume and energy-loss metrics used as graph edge weights
//! - Helpers for resolving, filtering and validating connection lists
//! - JSON/YAML record loading
//!
//! # Example
//!
//! ```
//! use pn_network::{RawConnection, RawNode, connection_weight};
//!
//! let a = RawNode::new("a", 0.0, 0.0, 0.0);
//! let b = RawNode::new("b", 0.0, 0.0, 3.0);
//! let pipe = RawConnection::new("a", "b", 10.0, 0.5);
//!
//! let weight = connection_weight(&pipe, &a, &b);
//! assert!(weight > 0.0);
//! ```

pub mod error;
pub mod io;
pub mod key;
pub mod metrics;
pub mod model;
pub mod path;
pub mod topology;
pub mod validate;

pub use error::{NetworkError, NetworkResult};
pub use io::{LoadError, LoadResult, RecordFormat, load_connections, load_nodes};
pub use key::{ConnectionKey, KEY_SEPARATOR};
pub use metrics::{
    connection_length, connection_volume_liters, connection_weight, pipe_volume,
    pipe_volume_liters, total_energy_loss, total_volume_liters,
};
pub use model::{RawConnection, RawNode};
pub use path::connections_along_path;
pub use topology::{
    NodeLookup, ResolvedConnection, dangling_connections, filter_dangling_connections,
    resolve_connections,
};
pub use validate::validate_network;
