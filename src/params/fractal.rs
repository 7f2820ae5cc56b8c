//! Octave summation parameters for fractal noise.

use crate::error::TerrainError;

/// Octave count and per-octave amplitude falloff.
///
/// Fields are private so a value with `octaves == 0` or a non-positive
/// persistence can never reach the sampling loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    octaves: u32,
    persistence: f64,
}

impl FractalParams {
    /// Validate and build.
    ///
    /// # Arguments
    /// * `octaves` - Number of noise layers summed (>= 1)
    /// * `persistence` - Amplitude multiplier applied per octave (finite, > 0)
    pub fn new(octaves: u32, persistence: f64) -> Result<Self, TerrainError> {
        if octaves == 0 {
            return Err(TerrainError::NoOctaves);
        }
        if !persistence.is_finite() || persistence <= 0.0 {
            return Err(TerrainError::InvalidPersistence(persistence));
        }
        Ok(Self {
            octaves,
            persistence,
        })
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 6,
            persistence: 0.5,
        }
    }
}
