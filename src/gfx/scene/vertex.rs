//! # Vertex Data Structures
//!
//! GPU-compatible vertex format shared by loaded meshes and generated
//! primitives.

/// A 3D vertex with position, texture coordinate and normal.
///
/// `#[repr(C)]` gives the struct a C-compatible layout so a slice of
/// vertices can be cast straight into a vertex buffer.
///
/// # Examples
///
/// ```
/// use orrery::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     tex_coords: [0.5, 1.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// assert_eq!(std::mem::size_of_val(&vertex), 32);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex3D {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Float32x3];

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Texture coordinates (Float32x2)
    /// - Attribute 2: Normal (Float32x3)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
