use cgmath::{Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;
use crate::wgpu_utils::{binding_types, uniform_buffer::UniformBuffer};

use super::vertex::Vertex3D;

/// Triangle mesh uploaded to vertex and index buffers
pub struct Mesh {
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    /// Uploads `geometry`. An empty geometry creates no buffers and draws
    /// nothing.
    pub fn from_geometry(device: &wgpu::Device, geometry: &GeometryData, label: &str) -> Self {
        if geometry.is_empty() {
            return Self {
                vertex_buffer: None,
                index_buffer: None,
                index_count: 0,
            };
        }

        let (vertices, indices): (Vec<Vertex3D>, Vec<u32>) = geometry.to_scene_format();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer: Some(vertex_buffer),
            index_buffer: Some(index_buffer),
            index_count: indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Per-object uniform: the model matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
}

impl From<Matrix4<f32>> for TransformUniform {
    fn from(model: Matrix4<f32>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

/// Layout shared by every object's transform bind group
pub struct ObjectBindings {
    bind_group_layout: wgpu::BindGroupLayout,
}

impl ObjectBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Transform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: binding_types::uniform(),
                count: None,
            }],
        });

        Self { bind_group_layout }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}

/// A mesh placed in the world by a model matrix
pub struct Object {
    pub name: String,
    pub mesh: Mesh,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
    transform_ubo: UniformBuffer<TransformUniform>,
    transform_bind_group: wgpu::BindGroup,
}

impl Object {
    /// Create a new Object with identity transformation
    pub fn new(device: &wgpu::Device, bindings: &ObjectBindings, name: &str, mesh: Mesh) -> Self {
        let transform = Matrix4::identity();
        let transform_ubo = UniformBuffer::new_with_data(device, &TransformUniform::from(transform));

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Transform Bind Group", name)),
            layout: bindings.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.binding_resource(),
            }],
        });

        Self {
            name: name.to_string(),
            mesh,
            transform,
            transform_ubo,
            transform_bind_group,
        }
    }

    pub fn set_transform(&mut self, transform: Matrix4<f32>) {
        self.transform = transform;
    }

    /// Sync the transformation matrix to the GPU
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        self.transform_ubo
            .update_content(queue, TransformUniform::from(self.transform));
    }

    pub fn transform_bind_group(&self) -> &wgpu::BindGroup {
        &self.transform_bind_group
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    /// Binds the object's transform at `transform_slot` and draws its mesh.
    fn draw_object(&mut self, object: &'a Object, transform_slot: u32);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // Nothing uploaded
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn draw_object(&mut self, object: &'b Object, transform_slot: u32) {
        self.set_bind_group(transform_slot, object.transform_bind_group(), &[]);
        self.draw_mesh(&object.mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_transform_uniform_is_column_major() {
        let uniform = TransformUniform::from(Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(uniform.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<TransformUniform>(), 64);
    }
}
