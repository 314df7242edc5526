use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the master bookmark list
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("master list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to read or write a local storage slot
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode slot {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A bookmark candidate that is missing required fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a bookmark needs a title")]
    MissingTitle,

    #[error("a bookmark needs a url")]
    MissingUrl,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not encode export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors a command handler hands back to the caller
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
