//! Parameter definitions with units and documented semantics.
//!
//! Generation constants live here rather than inline:
//! - World units (spacing, height scale)
//! - Documented ranges and defaults
//! - Validation before any sampling runs

mod fractal;
mod terrain;

// Re-export all types
pub use fractal::FractalParams;
pub use terrain::{ClampMode, TerrainParams};
