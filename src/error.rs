//! Precondition failures raised before any sampling starts.

use thiserror::Error;

/// Invalid terrain or noise parameters.
///
/// Every variant is a caller error: nothing here is retried or recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("grid must be at least 2x2 vertices, got {width}x{length}")]
    GridTooSmall { width: usize, length: usize },

    #[error("grid of {width}x{length} vertices exceeds the u32 draw range")]
    GridTooLarge { width: usize, length: usize },

    #[error("octave count must be at least 1")]
    NoOctaves,

    #[error("persistence must be finite and > 0, got {0}")]
    InvalidPersistence(f64),

    #[error("grid spacing must be finite and > 0, got {0}")]
    InvalidSpacing(f32),

    #[error("height scale must be finite and > 0, got {0}")]
    InvalidHeightScale(f32),

    #[error("noise slice must be finite, got {0}")]
    InvalidNoiseSlice(f64),
}
