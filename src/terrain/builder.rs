//! Terrain mesh builder: grid → heights → indexed mesh → flat streams.

use std::time::Instant;

use log::debug;

use super::bands::HeightBand;
use super::flat::FlatMesh;
use super::grid::Grid;
use super::heights::sample_heights;
use super::mesh::IndexedMesh;
use super::topology::VertexFaces;
use crate::error::TerrainError;
use crate::params::TerrainParams;

/// Generated terrain, owned by the caller
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    grid: Grid,
    indexed: IndexedMesh,
    flat: FlatMesh,
    max_height: f32,
}

impl TerrainMesh {
    /// Face-ordered positions, `faces * 3` entries
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.flat.positions
    }

    /// Face-ordered normals, parallel to [`TerrainMesh::vertices`]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.flat.normals
    }

    /// Face-ordered RGBA colors, parallel to [`TerrainMesh::vertices`]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.flat.colors
    }

    /// Triangles as grid vertex indices
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.indexed.faces
    }

    pub fn flat(&self) -> &FlatMesh {
        &self.flat
    }

    /// Per-grid-vertex data before flattening
    pub fn indexed(&self) -> &IndexedMesh {
        &self.indexed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mesh extent along X, for centering
    pub fn world_width(&self) -> f32 {
        self.grid.world_width()
    }

    /// Mesh extent along Z, for centering
    pub fn world_length(&self) -> f32 {
        self.grid.world_length()
    }

    /// Highest unclamped height over the grid
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Grid vertices per band, indexed by [`HeightBand::ordinal`]
    pub fn band_counts(&self) -> [usize; 4] {
        let mut counts = [0; HeightBand::ALL.len()];
        for band in &self.indexed.bands {
            counts[band.ordinal()] += 1;
        }
        counts
    }

    /// Faces touching each grid vertex
    pub fn vertex_faces(&self) -> VertexFaces {
        VertexFaces::build(self.indexed.vertex_count(), &self.indexed.faces)
    }
}

/// Builds terrain meshes from validated parameters
#[derive(Debug, Clone, Default)]
pub struct TerrainBuilder {
    params: TerrainParams,
}

impl TerrainBuilder {
    /// Create a builder, rejecting invalid spacing or height scale up front
    pub fn new(params: TerrainParams) -> Result<Self, TerrainError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Generate a `width × length` vertex terrain
    ///
    /// # Arguments
    /// * `width` - Vertices along X (>= 2)
    /// * `length` - Vertices along Z (>= 2)
    pub fn generate(&self, width: usize, length: usize) -> Result<TerrainMesh, TerrainError> {
        let grid = Grid::new(width, length, self.params.spacing)?;
        let start = Instant::now();

        let field = sample_heights(&grid, &self.params);
        debug!(
            "Sampled {}x{} heights ({:?}) in {:.2}ms, max height {:.2}",
            width,
            length,
            self.params.clamp_mode,
            start.elapsed().as_secs_f64() * 1000.0,
            field.max_height
        );

        let indexed = IndexedMesh::build(&grid, &field);
        let flat = FlatMesh::from_indexed(&indexed);
        debug!(
            "Built {} faces, {} flattened vertices in {:.2}ms",
            indexed.face_count(),
            flat.vertex_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(TerrainMesh {
            grid,
            indexed,
            flat,
            max_height: field.max_height,
        })
    }
}
