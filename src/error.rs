//! Error types for table extraction and frame construction
//!
//! Extraction itself never fails on missing nodes: an absent row or cell
//! simply yields an empty sequence. Errors come from two places only: a
//! caller-supplied cell transform, and frame construction rejecting a grid
//! whose shape does not fit the requested labels.

use thiserror::Error;

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Error types for table extraction and frame construction
#[derive(Debug, Error)]
pub enum TableError {
    /// The cell transform failed; extraction stops at the first failing cell
    #[error("Cell transform failed at row {row}, column {column}: {source}")]
    Transform {
        row: usize,
        column: usize,
        #[source]
        source: anyhow::Error,
    },

    /// A record does not have one value per declared column label
    #[error("Record {row} has {found} values but {expected} columns were declared")]
    LengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column-label row position points past the end of the grid
    #[error("Header row {index} is out of range for a grid with {rows} rows")]
    HeaderRowOutOfRange { index: usize, rows: usize },

    /// A row-label column position points past the end of the column labels
    #[error("Column position {index} is out of range for a frame with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// No column carries the requested label
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// More than one column carries the requested label
    #[error("Column label '{0}' is not unique")]
    DuplicateColumn(String),

    /// Span expansion would exceed the grid limits
    #[error("Table too large: {0}")]
    TableTooLarge(String),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TableError {
    /// Check if the error was raised by the caller's cell transform
    #[must_use]
    pub fn is_transform(&self) -> bool {
        matches!(self, TableError::Transform { .. })
    }

    /// Check if the error was raised while shaping the frame
    #[must_use]
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            TableError::LengthMismatch { .. }
                | TableError::HeaderRowOutOfRange { .. }
                | TableError::ColumnOutOfRange { .. }
                | TableError::ColumnNotFound(_)
                | TableError::DuplicateColumn(_)
        )
    }
}
