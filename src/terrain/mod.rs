//! Procedural terrain mesh generation from layered gradient noise.

mod bands;
mod builder;
mod flat;
mod grid;
mod heights;
mod mesh;
mod topology;

// Re-export public types
pub use bands::{water_line, HeightBand, GRASS_LEVEL, SAND_LEVEL, WATER_LEVEL};
pub use builder::{TerrainBuilder, TerrainMesh};
pub use flat::{FlatMesh, TerrainVertex};
pub use grid::Grid;
pub use heights::{sample_heights, HeightField};
pub use mesh::{grid_normals, triangulate, IndexedMesh};
pub use topology::VertexFaces;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_grid_creation() {
        let mesh = TerrainBuilder::default().generate(2, 2).unwrap();

        // Check vertex count: width * length
        assert_eq!(mesh.indexed().vertex_count(), 4);

        // Check triangle count: one quad, two triangles, three flattened vertices each
        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.vertices().len(), 6);
    }
}
