//! Error types for network record handling.

use pn_core::PnError;
use thiserror::Error;

use crate::key::ConnectionKey;

/// Consistency errors found in node/connection records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("Connection {key} references unknown node {missing}")]
    DanglingConnection { key: ConnectionKey, missing: String },

    #[error("No connection between {from} and {to}")]
    MissingConnection { from: String, to: String },

    #[error("Invalid value in {context}: {source}")]
    InvalidValue {
        context: String,
        #[source]
        source: PnError,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
