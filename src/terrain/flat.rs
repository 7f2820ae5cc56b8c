//! Face-ordered (non-indexed) vertex streams for `draw` without an index buffer.

use bytemuck::{Pod, Zeroable};

use super::mesh::IndexedMesh;

/// Interleaved vertex for a single vertex buffer upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Three parallel streams, `faces * 3` entries each.
///
/// Each face contributes its corners in reverse order: `face[2]`, `face[1]`,
/// `face[0]`. The renderer's front-face winding depends on this.
#[derive(Debug, Clone, Default)]
pub struct FlatMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl FlatMesh {
    /// Expand an indexed mesh by face order
    pub fn from_indexed(mesh: &IndexedMesh) -> Self {
        let count = mesh.faces.len() * 3;
        let mut flat = Self {
            positions: Vec::with_capacity(count),
            normals: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
        };

        for face in &mesh.faces {
            for &index in face.iter().rev() {
                let i = index as usize;
                flat.positions.push(mesh.positions[i].to_array());
                flat.normals.push(mesh.normals[i].to_array());
                flat.colors.push(mesh.colors[i].to_array());
            }
        }

        flat
    }

    /// Number of vertices to draw
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Zip the three streams into one interleaved buffer
    pub fn interleaved(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((&position, &normal), &color)| TerrainVertex {
                position,
                normal,
                color,
            })
            .collect()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}
