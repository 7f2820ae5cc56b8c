//! Implicit vertex grid: dimensions, spacing, and index arithmetic.

use crate::error::TerrainError;

/// Row-major vertex grid in the XZ plane.
///
/// `width` counts vertices along X (columns), `length` counts vertices along
/// Z (rows). Vertex `(row, col)` lives at index `row * width + col` and at
/// world position `(col * spacing, y, row * spacing)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    width: usize,
    length: usize,
    spacing: f32,
}

impl Grid {
    /// Validate dimensions and spacing.
    ///
    /// At least one quad is required. The flattened draw count (three
    /// vertices per face) must fit in a `u32`, which also bounds vertex and
    /// face indices. World extents must be finite.
    pub fn new(width: usize, length: usize, spacing: f32) -> Result<Self, TerrainError> {
        if width < 2 || length < 2 {
            return Err(TerrainError::GridTooSmall { width, length });
        }
        let draw_count = (width - 1)
            .checked_mul(length - 1)
            .and_then(|quads| quads.checked_mul(6));
        match draw_count {
            Some(count) if count <= u32::MAX as usize => {}
            _ => return Err(TerrainError::GridTooLarge { width, length }),
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(TerrainError::InvalidSpacing(spacing));
        }
        let extent = (width.max(length) - 1) as f32 * spacing;
        if !extent.is_finite() {
            return Err(TerrainError::InvalidSpacing(spacing));
        }
        Ok(Self {
            width,
            length,
            spacing,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn vertex_count(&self) -> usize {
        self.width * self.length
    }

    /// Two triangles per quad
    pub fn face_count(&self) -> usize {
        2 * (self.width - 1) * (self.length - 1)
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Border vertices lack a neighbor on at least one side
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        col == 0 || row == 0 || row == self.length - 1 || col == self.width - 1
    }

    /// Mesh extent along X in world units
    pub fn world_width(&self) -> f32 {
        self.spacing * (self.width - 1) as f32
    }

    /// Mesh extent along Z in world units
    pub fn world_length(&self) -> f32 {
        self.spacing * (self.length - 1) as f32
    }
}
