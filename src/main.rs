//! Terrascape - Procedural heightfield terrain generator
//!
//! Generates the terrain mesh a renderer would upload and reports what it
//! built: counts, extents, and how the vertices split across height bands.

use std::time::Instant;

use clap::Parser;
use log::info;

use terrascape::cli::Args;
use terrascape::terrain::{HeightBand, TerrainBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.terrain_params()?;

    info!("Generating {}x{} terrain...", args.width, args.length);
    let start = Instant::now();

    let builder = TerrainBuilder::new(params)?;
    let mesh = builder.generate(args.width, args.length)?;

    info!("  Faces: {}", mesh.faces().len());
    info!("  Draw vertices: {}", mesh.vertices().len());
    info!(
        "  Extent: {:.1} x {:.1} (center offset {:.1}, {:.1})",
        mesh.world_width(),
        mesh.world_length(),
        -mesh.world_width() / 2.0,
        -mesh.world_length() / 2.0
    );
    info!("  Max height: {:.2}", mesh.max_height());

    let counts = mesh.band_counts();
    let total = mesh.indexed().vertex_count() as f32;
    for band in HeightBand::ALL {
        let count = counts[band.ordinal()];
        info!(
            "  {:?}: {} vertices ({:.1}%)",
            band,
            count,
            count as f32 / total * 100.0
        );
    }

    let vertices = mesh.flat().interleaved();
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    info!("  Vertex buffer: {} bytes interleaved", bytes.len());
    info!("Done in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
