//! Terrascape library - Procedural heightfield terrain for GPU rendering

pub mod cli;
pub mod error;
pub mod noise;
pub mod params;
pub mod terrain;

pub use error::TerrainError;
pub use terrain::{TerrainBuilder, TerrainMesh};
