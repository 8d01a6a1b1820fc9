use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the input dataset. Startup halts on any of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open dataset '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read header row of '{}': {source}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset '{}' is missing required columns: {}", .path.display(), .missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },
}

/// A single row that could not be cleaned. The row is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("line {line}: malformed record: {message}")]
    Malformed { line: u64, message: String },

    #[error("line {line}: unparseable year {value:?}")]
    Year { line: u64, value: String },
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("unknown region {0:?}")]
    UnknownRegion(String),

    #[error("unknown manufacturer {0:?}")]
    UnknownManufacturer(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
