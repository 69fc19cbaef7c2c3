//! # Geometry Data
//!
//! CPU-side geometry shared by the mesh loader and the procedural
//! primitives, before it is uploaded to the GPU.
//!
//! ## Usage
//!
//! ```
//! use orrery::gfx::geometry::generate_cube;
//!
//! let cube = generate_cube(0.4);
//! assert_eq!(cube.vertex_count(), 24);
//! assert_eq!(cube.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated or loaded geometry data ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fully resolved vertex and indexes it as the next corner
    /// of the triangle list.
    pub fn push_vertex(&mut self, position: [f32; 3], tex_coords: [f32; 2], normal: [f32; 3]) {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.tex_coords.push(tex_coords);
        self.normals.push(normal);
        self.indices.push(index);
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the interleaved vertex at `index`, if present.
    pub fn vertex(&self, index: usize) -> Option<Vertex3D> {
        Some(Vertex3D {
            position: *self.vertices.get(index)?,
            tex_coords: self.tex_coords.get(index).copied().unwrap_or([0.0, 0.0]),
            normal: self.normals.get(index).copied().unwrap_or([0.0, 1.0, 0.0]),
        })
    }

    /// Convert to the interleaved vertex + index format used by the renderer
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = (0..self.vertices.len())
            .filter_map(|i| self.vertex(i))
            .collect();

        (vertices, self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_indexes_in_order() {
        let mut data = GeometryData::new();
        data.push_vertex([0.0, 0.0, 0.0], [0.0, 0.0], [0.0, 0.0, 1.0]);
        data.push_vertex([1.0, 0.0, 0.0], [1.0, 0.0], [0.0, 0.0, 1.0]);
        data.push_vertex([0.0, 1.0, 0.0], [0.0, 1.0], [0.0, 0.0, 1.0]);

        assert_eq!(data.indices, vec![0, 1, 2]);
        assert_eq!(data.triangle_count(), 1);

        let (vertices, indices) = data.to_scene_format();
        assert_eq!(vertices.len(), 3);
        assert_eq!(indices.len(), 3);
        assert_eq!(vertices[1].tex_coords, [1.0, 0.0]);
    }

    #[test]
    fn test_empty_geometry() {
        let data = GeometryData::new();
        assert!(data.is_empty());
        assert!(data.vertex(0).is_none());
        assert_eq!(data.to_scene_format().0.len(), 0);
    }
}
