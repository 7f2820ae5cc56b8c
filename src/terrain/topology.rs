//! Vertex-to-face adjacency over the indexed grid.

/// For each vertex, the faces that reference it.
///
/// Stored compressed: faces of vertex `v` are
/// `face_ids[offsets[v]..offsets[v + 1]]`, in ascending face order.
#[derive(Debug, Clone)]
pub struct VertexFaces {
    offsets: Vec<usize>,
    face_ids: Vec<u32>,
}

impl VertexFaces {
    /// Build adjacency from a face list
    pub fn build(vertex_count: usize, faces: &[[u32; 3]]) -> Self {
        // Count faces per vertex
        let mut offsets = vec![0usize; vertex_count + 1];
        for face in faces {
            for &v in face {
                offsets[v as usize + 1] += 1;
            }
        }

        // Prefix sum
        for i in 0..vertex_count {
            offsets[i + 1] += offsets[i];
        }

        // Scatter face ids
        let mut cursor = offsets.clone();
        let mut face_ids = vec![0u32; faces.len() * 3];
        for (f, face) in faces.iter().enumerate() {
            for &v in face {
                let slot = &mut cursor[v as usize];
                face_ids[*slot] = f as u32;
                *slot += 1;
            }
        }

        Self { offsets, face_ids }
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Faces touching `vertex`
    pub fn faces_of(&self, vertex: usize) -> &[u32] {
        let start = self.offsets[vertex];
        let end = self.offsets[vertex + 1];
        &self.face_ids[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::grid::Grid;
    use crate::terrain::mesh::triangulate;

    #[test]
    fn test_grid_adjacency_counts() {
        let grid = Grid::new(4, 4, 1.0).unwrap();
        let faces = triangulate(&grid);
        let adjacency = VertexFaces::build(grid.vertex_count(), &faces);

        assert_eq!(adjacency.vertex_count(), 16);

        // Interior vertices sit in six triangles
        assert_eq!(adjacency.faces_of(grid.index(1, 1)).len(), 6);
        assert_eq!(adjacency.faces_of(grid.index(2, 2)).len(), 6);

        // Corners along the shared diagonal touch two, the others one
        assert_eq!(adjacency.faces_of(grid.index(0, 0)).len(), 1);
        assert_eq!(adjacency.faces_of(grid.index(0, 3)).len(), 2);
        assert_eq!(adjacency.faces_of(grid.index(3, 0)).len(), 2);
        assert_eq!(adjacency.faces_of(grid.index(3, 3)).len(), 1);
    }

    #[test]
    fn test_adjacency_references_vertex() {
        let grid = Grid::new(5, 3, 1.0).unwrap();
        let faces = triangulate(&grid);
        let adjacency = VertexFaces::build(grid.vertex_count(), &faces);

        let mut total = 0;
        for v in 0..grid.vertex_count() {
            let ids = adjacency.faces_of(v);
            total += ids.len();
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for &f in ids {
                assert!(faces[f as usize].contains(&(v as u32)));
            }
        }
        assert_eq!(total, faces.len() * 3);
    }

    #[test]
    fn test_offsets_span_every_incidence() {
        let grid = Grid::new(7, 6, 1.0).unwrap();
        let faces = triangulate(&grid);
        let adjacency = VertexFaces::build(grid.vertex_count(), &faces);

        assert_eq!(adjacency.offsets[0], 0);
        assert_eq!(adjacency.offsets.len(), grid.vertex_count() + 1);
        assert!(adjacency.offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(adjacency.offsets[grid.vertex_count()], faces.len() * 3);
        assert_eq!(adjacency.face_ids.len(), faces.len() * 3);
    }
}
