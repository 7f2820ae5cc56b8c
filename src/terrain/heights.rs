//! Height sampling pass: noise per grid cell, shaping, band clamp.

use noise::NoiseFn;
use rayon::prelude::*;

use super::bands::{apply_band, HeightBand};
use super::grid::Grid;
use crate::noise::FractalNoise;
use crate::params::{ClampMode, TerrainParams};

/// Per-vertex heights in row-major order
#[derive(Debug, Clone)]
pub struct HeightField {
    /// Shaped noise heights before banding
    pub raw: Vec<f32>,
    /// Stored heights (water flattened to the water line)
    pub heights: Vec<f32>,
    pub bands: Vec<HeightBand>,
    /// Highest raw height over the whole grid
    pub max_height: f32,
}

/// Shaped world-space height for one grid cell
fn raw_height(
    noise: &FractalNoise,
    grid: &Grid,
    params: &TerrainParams,
    row: usize,
    col: usize,
) -> f32 {
    let u = col as f64 / grid.width() as f64;
    let v = row as f64 / grid.length() as f64;
    let fraction = noise.get([u, v, params.noise_z]) as f32;

    // Squaring biases toward lowland with occasional peaks
    fraction * fraction * params.height_scale * grid.spacing()
}

/// Sample and band every vertex according to `params.clamp_mode`
pub fn sample_heights(grid: &Grid, params: &TerrainParams) -> HeightField {
    match params.clamp_mode {
        ClampMode::RunningMax => sample_running(grid, params),
        ClampMode::GlobalMax => sample_two_pass(grid, params),
    }
}

/// Single row-major pass. Each vertex is banded against the running maximum
/// at the moment it is sampled, so results depend on visit order.
fn sample_running(grid: &Grid, params: &TerrainParams) -> HeightField {
    let noise = FractalNoise::new(params.fractal);
    let count = grid.vertex_count();

    let mut raw = Vec::with_capacity(count);
    let mut heights = Vec::with_capacity(count);
    let mut bands = Vec::with_capacity(count);
    let mut max_height = 0.0f32;

    for row in 0..grid.length() {
        for col in 0..grid.width() {
            let y = raw_height(&noise, grid, params, row, col);
            max_height = max_height.max(y);

            let (stored, band) = apply_band(y, max_height);
            raw.push(y);
            heights.push(stored);
            bands.push(band);
        }
    }

    HeightField {
        raw,
        heights,
        bands,
        max_height,
    }
}

/// Sample all rows in parallel, then band against the global maximum
fn sample_two_pass(grid: &Grid, params: &TerrainParams) -> HeightField {
    let noise = FractalNoise::new(params.fractal);
    let mut raw = vec![0.0f32; grid.vertex_count()];

    raw.par_chunks_mut(grid.width())
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, y) in cells.iter_mut().enumerate() {
                *y = raw_height(&noise, grid, params, row, col);
            }
        });

    let max_height = raw.iter().copied().fold(0.0f32, f32::max);
    let (heights, bands): (Vec<f32>, Vec<HeightBand>) =
        raw.iter().map(|&y| apply_band(y, max_height)).unzip();

    HeightField {
        raw,
        heights,
        bands,
        max_height,
    }
}
