//! Error types for loading data and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request for {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),
    #[error("line {line}: invalid value {value:?} in column `{column}`")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: unknown smoker value {value:?} (expected \"yes\" or \"no\")")]
    UnknownSmoker { line: u64, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("bin_count must be at least 1")]
    ZeroBins,
    #[error("data source must not be empty")]
    EmptySource,
}
