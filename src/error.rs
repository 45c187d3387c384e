//! Error types returned by the data layer.
//!
//! The host shell decides how to surface these; nothing here logs.

use thiserror::Error;

/// Failure to turn a file into a [`Dataset`](crate::data::model::Dataset).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Unreadable file or malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("file has no header row")]
    Empty,

    #[error("line {line} has {found} fields but the header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Selection state that cannot be projected.
///
/// The messages double as the guidance text shown in place of the chart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select exactly one column for the X-axis")]
    NoOrMultipleXAxis,

    #[error("Please select one or more columns for the Y-axis")]
    NoYAxis,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
