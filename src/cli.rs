//! Command-line argument parsing.

use clap::Parser;
use log::{info, warn};

use crate::error::TerrainError;
use crate::params::{ClampMode, FractalParams, TerrainParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Terrascape")]
#[command(about = "Procedural terrain mesh generator", long_about = None)]
pub struct Args {
    /// Vertices along X
    #[arg(long, value_name = "VERTICES", default_value_t = 600)]
    pub width: usize,

    /// Vertices along Z
    #[arg(long, value_name = "VERTICES", default_value_t = 600)]
    pub length: usize,

    /// Distance between grid vertices (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 5.0)]
    pub spacing: f32,

    /// Vertical scale in grid steps
    #[arg(long, value_name = "STEPS", default_value_t = 50.0)]
    pub height_scale: f32,

    /// Noise octaves summed per height sample
    #[arg(long, default_value_t = 6)]
    pub octaves: u32,

    /// Amplitude falloff per octave
    #[arg(long, default_value_t = 0.5)]
    pub persistence: f64,

    /// Band reference: running (default) or global
    #[arg(long, value_name = "MODE", default_value = "running")]
    pub clamp_mode: String,
}

impl Args {
    /// Parse clamp mode from command-line arguments
    pub fn parse_clamp_mode(&self) -> ClampMode {
        match self.clamp_mode.to_lowercase().as_str() {
            "running" => {
                info!("Clamp: running maximum (single pass)");
                ClampMode::RunningMax
            }
            "global" => {
                info!("Clamp: global maximum (two pass)");
                ClampMode::GlobalMax
            }
            other => {
                warn!("Unknown clamp mode '{}', using running", other);
                ClampMode::RunningMax
            }
        }
    }

    /// Build validated terrain parameters
    pub fn terrain_params(&self) -> Result<TerrainParams, TerrainError> {
        let params = TerrainParams {
            spacing: self.spacing,
            height_scale: self.height_scale,
            clamp_mode: self.parse_clamp_mode(),
            fractal: FractalParams::new(self.octaves, self.persistence)?,
            ..TerrainParams::default()
        };
        params.validate()?;
        Ok(params)
    }
}
