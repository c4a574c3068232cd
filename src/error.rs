//! Error types for curve-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running a rasterization.
///
/// Rasterizers themselves are total over their numeric domain; errors come
/// from malformed input reaching a fallible entry point.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (config file access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Matrix multiply with incompatible shapes.
    #[error("Matrix dimensions don't match: left has {left_cols} columns, right has {right_rows} rows")]
    MatrixDimension {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// Too few control or picked points for the chosen algorithm.
    #[error("{algorithm} needs at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Algorithm name.
        algorithm: &'static str,
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Non-positive radius, semi-axis or focal parameter under the reject policy.
    #[error("Degenerate parameter '{name}': {value} must be positive")]
    DegenerateParameter {
        /// Parameter name (`a`, `b` or `p`).
        name: &'static str,
        /// Derived value.
        value: f64,
    },

    /// Any other malformed argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}
