use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the launch table. Fatal at start-up.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("malformed Arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("{0}")]
    Schema(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{0} contains no launch records")]
    Empty(String),
}

/// A query received selector values outside the valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("invalid payload range: low {low} must not exceed high {high}")]
    InvalidPayloadRange { low: f64, high: f64 },
}
