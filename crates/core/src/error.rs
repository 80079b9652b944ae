//! Error types for the finding-beauty core.
//!
//! Sampling itself is infallible; these errors come from grid construction,
//! registry lookup, configuration and snapshot I/O.

use thiserror::Error;

/// Errors produced by noise operations outside the sampling hot path.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Width or height was zero (or their product overflowed) when creating a grid.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The grid holds more cells than [`MAX_GRID_CELLS`](crate::field::MAX_GRID_CELLS).
    #[error("grid too large: {width}x{height} exceeds {max} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    /// A data buffer did not match the grid it was meant to fill.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A noise kind name was not recognized by the registry.
    #[error("unknown noise kind: {0}")]
    UnknownNoise(String),

    /// A parameter was present but unusable.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
