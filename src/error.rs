use thiserror::Error;

use crate::matrix::Axis;

/// Result alias for `comgrid`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while validating label matrices and rendering grids.
///
/// Every variant is an input problem detected before any ordering work
/// starts. Ordering itself cannot fail once the inputs are valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Matrix has no rows or no columns.
    #[error("empty input provided")]
    EmptyInput,

    /// A row does not have the same length as the first row.
    #[error("ragged matrix: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Labels index frequency tables, so they must be non-negative.
    #[error("negative label {value} at ({row}, {col})")]
    NegativeLabel {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Entry value.
        value: i64,
    },

    /// A floating-point entry is not a finite whole number.
    #[error("label {value} at ({row}, {col}) is not an integer")]
    NonIntegerLabel {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Entry value.
        value: f64,
    },

    /// Label too large to index a label table.
    #[error("label {value} at ({row}, {col}) is out of range")]
    LabelOutOfRange {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Entry value as given.
        value: String,
    },

    /// Name list length does not match the axis length.
    #[error("{axis} names: expected {expected}, found {found}")]
    NameCountMismatch {
        /// Axis the names belong to.
        axis: Axis,
        /// Axis length.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },

    /// Drawing backend failure.
    #[cfg(feature = "plot")]
    #[error("plot failed: {0}")]
    Plot(String),
}
