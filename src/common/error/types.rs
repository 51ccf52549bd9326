//! Unified error types for texgen.
//!
//! Building and rendering expression trees is infallible except for the two
//! matrix operations that validate shapes: construction and multiplication.
use crate::matrix::Shape;
use thiserror::Error;

/// Main error type for texgen operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Matrix product requested with disagreeing contracted dimensions
    #[error(
        "When multiplying matrices A x B, A.n_cols must equal B.n_rows: {left} x {right} ({} != {})",
        .left.cols,
        .right.rows
    )]
    DimensionMismatch { left: Shape, right: Shape },

    /// Matrix grid is empty or not rectangular
    #[error("Invalid matrix shape: {0}")]
    Shape(#[from] ShapeError),
}

/// Reasons a grid of cells cannot form a matrix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The grid has no rows
    #[error("matrix has no rows")]
    Empty,

    /// The first row has no cells, so the column count is zero
    #[error("matrix has no columns")]
    EmptyRow,

    /// A row's length differs from the first row's
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for texgen operations.
pub type Result<T> = std::result::Result<T, Error>;
