//! Error types for dashboard construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while building or loading a tabular dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while building a figure from a dataset.
#[derive(Error, Debug, PartialEq)]
pub enum FigureError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column '{0}' must be numeric")]
    NonNumericColumn(String),
}

/// Umbrella error for the dashboard crates.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Figure error: {0}")]
    Figure(#[from] FigureError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
