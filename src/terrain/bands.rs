//! Height bands: terrain type and vertex color by elevation.

use glam::Vec4;

/// Below this fraction of the reference maximum: water (and clamped to it)
pub const WATER_LEVEL: f32 = 0.30;

/// Below this fraction: sand
pub const SAND_LEVEL: f32 = 0.40;

/// Below this fraction: grass. Everything above is stone.
pub const GRASS_LEVEL: f32 = 0.60;

/// Terrain class of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightBand {
    Water,
    Sand,
    Grass,
    Stone,
}

impl HeightBand {
    pub const ALL: [HeightBand; 4] = [
        HeightBand::Water,
        HeightBand::Sand,
        HeightBand::Grass,
        HeightBand::Stone,
    ];

    /// Classify a height against the reference maximum
    pub fn classify(y: f32, max_height: f32) -> Self {
        if y < WATER_LEVEL * max_height {
            HeightBand::Water
        } else if y < SAND_LEVEL * max_height {
            HeightBand::Sand
        } else if y < GRASS_LEVEL * max_height {
            HeightBand::Grass
        } else {
            HeightBand::Stone
        }
    }

    /// RGBA vertex color
    pub fn color(self) -> Vec4 {
        match self {
            HeightBand::Water => Vec4::new(0.10, 0.30, 0.80, 1.0),
            HeightBand::Sand => Vec4::new(0.76, 0.70, 0.50, 1.0),
            HeightBand::Grass => Vec4::new(0.20, 0.55, 0.20, 1.0),
            HeightBand::Stone => Vec4::new(0.50, 0.50, 0.50, 1.0),
        }
    }

    /// Position in [`HeightBand::ALL`]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Water surface height for a given reference maximum
#[inline]
pub fn water_line(max_height: f32) -> f32 {
    WATER_LEVEL * max_height
}

/// Classify a sampled height and flatten water to the water line.
///
/// # Returns
/// * Tuple of (stored height, band)
pub fn apply_band(y: f32, max_height: f32) -> (f32, HeightBand) {
    match HeightBand::classify(y, max_height) {
        HeightBand::Water => (water_line(max_height), HeightBand::Water),
        band => (y, band),
    }
}
