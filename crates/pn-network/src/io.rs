//! Loading node and connection records from disk.
//!
//! Files hold a single array of records, as JSON or YAML. The format is
//! picked from the file extension.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::{RawConnection, RawNode};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported record file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse an array of records.
pub fn parse_records<T: DeserializeOwned>(content: &str, format: RecordFormat) -> LoadResult<Vec<T>> {
    let records = match format {
        RecordFormat::Json => serde_json::from_str(content)?,
        RecordFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(records)
}

/// Read an array of records from `path`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let format = RecordFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content, format)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

pub fn load_nodes(path: &Path) -> LoadResult<Vec<RawNode>> {
    load_records(path)
}

pub fn load_connections(path: &Path) -> LoadResult<Vec<RawConnection>> {
    load_records(path)
}
