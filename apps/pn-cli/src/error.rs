//! Error type for the command-line shell.

use pn_graph::GraphError;
use pn_network::{LoadError, NetworkError};

/// Wraps every library error the CLI can run into.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load records: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid network: {0}")]
    Network(#[from] NetworkError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type CliResult<T> = Result<T, CliError>;
