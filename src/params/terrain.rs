//! Terrain grid and height shaping parameters.

use glam::Vec3;

use super::FractalParams;
use crate::error::TerrainError;

/// Which maximum the water/sand/grass/stone bands are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Single row-major pass; each vertex is banded against the highest
    /// height sampled so far. Early vertices can be banded against a maximum
    /// that later rows exceed.
    #[default]
    RunningMax,

    /// Sample every height first, then band against the true maximum.
    /// Rows are sampled in parallel.
    GlobalMax,
}

/// Terrain generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainParams {
    /// Distance between neighboring grid vertices (world units)
    pub spacing: f32,

    /// Vertical scale applied to the shaped height fraction, in grid steps.
    /// World height = fraction^2 * height_scale * spacing
    pub height_scale: f32,

    /// Third noise coordinate; selects the 2D slice of the 3D field
    pub noise_z: f64,

    /// Band/clamp reference maximum
    pub clamp_mode: ClampMode,

    /// Octave summation for the height function
    pub fractal: FractalParams,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            height_scale: 50.0, // Peaks reach 250 world units at default spacing
            noise_z: 0.0,
            clamp_mode: ClampMode::RunningMax,
            fractal: FractalParams::default(),
        }
    }
}

impl TerrainParams {
    /// Validate configuration
    ///
    /// Spacing and height scale must be positive, and the tallest possible
    /// peak must leave room for the normal computation in `f32`. The noise
    /// slice must be finite.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(TerrainError::InvalidSpacing(self.spacing));
        }
        if !self.height_scale.is_finite() || self.height_scale <= 0.0 {
            return Err(TerrainError::InvalidHeightScale(self.height_scale));
        }

        // Worst-case central difference vector, squared during normalization
        let peak = self.height_scale * self.spacing;
        if !Vec3::new(peak, peak, self.spacing).length_squared().is_finite() {
            return Err(TerrainError::InvalidHeightScale(self.height_scale));
        }

        if !self.noise_z.is_finite() {
            return Err(TerrainError::InvalidNoiseSlice(self.noise_z));
        }
        Ok(())
    }
}
