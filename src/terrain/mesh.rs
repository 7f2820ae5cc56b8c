//! Indexed terrain mesh: positions, finite-difference normals, triangulation.

use glam::{Vec3, Vec4};

use super::bands::HeightBand;
use super::grid::Grid;
use super::heights::HeightField;

/// Grid mesh before flattening, one entry per grid vertex
#[derive(Debug, Clone)]
pub struct IndexedMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub bands: Vec<HeightBand>,
    /// Vertex indices, two triangles per grid quad
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Assemble the indexed mesh from a sampled height field
    pub fn build(grid: &Grid, field: &HeightField) -> Self {
        let spacing = grid.spacing();
        let mut positions = Vec::with_capacity(grid.vertex_count());

        for row in 0..grid.length() {
            for col in 0..grid.width() {
                positions.push(Vec3::new(
                    col as f32 * spacing,
                    field.heights[grid.index(row, col)],
                    row as f32 * spacing,
                ));
            }
        }

        let colors = field.bands.iter().map(|band| band.color()).collect();
        let faces = triangulate(grid);
        let normals = grid_normals(grid, &field.heights);

        Self {
            positions,
            normals,
            colors,
            bands: field.bands.clone(),
            faces,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Two triangles per grid quad
pub fn triangulate(grid: &Grid) -> Vec<[u32; 3]> {
    let width = grid.width();
    let mut faces = Vec::with_capacity(grid.face_count());

    for row in 0..grid.length() - 1 {
        for col in 0..width - 1 {
            let top_left = (row * width + col) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((row + 1) * width + col) as u32;
            let bottom_right = bottom_left + 1;

            //  tl -- tr
            //  |   /
            //  bl
            faces.push([top_left, bottom_left, top_right]);

            //        tr
            //      / |
            //  bl -- br
            faces.push([bottom_left, bottom_right, top_right]);
        }
    }

    faces
}

/// Central-difference normals from stored heights.
///
/// Border vertices get straight up. The Z component is the grid spacing, so
/// slope steepness scales with height differences measured in world units.
pub fn grid_normals(grid: &Grid, heights: &[f32]) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(grid.vertex_count());

    for row in 0..grid.length() {
        for col in 0..grid.width() {
            if grid.is_border(row, col) {
                normals.push(Vec3::Y);
                continue;
            }

            let h_left = heights[grid.index(row, col - 1)];
            let h_right = heights[grid.index(row, col + 1)];
            let h_down = heights[grid.index(row - 1, col)];
            let h_up = heights[grid.index(row + 1, col)];

            normals.push(Vec3::new(h_left - h_right, h_down - h_up, grid.spacing()).normalize());
        }
    }

    normals
}
