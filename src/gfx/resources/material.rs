//! Surface materials
//!
//! A material pairs the lighting coefficients of a surface with the texture
//! that modulates its lit colour. The planet and the cubes each get one,
//! and every object using a material shares its bind group.

use crate::gfx::resources::texture_resource::TextureResource;
use crate::wgpu_utils::{binding_types, uniform_buffer::UniformBuffer};

/// GPU uniform data for materials
///
/// MUST match the `Material` struct in `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub emissive: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// rgb specular colour, w = shininess
    pub specular: [f32; 4],
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Lighting coefficients of a surface
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialProperties {
    pub emissive: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            emissive: [0.0, 0.0, 0.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [1.0, 1.0, 1.0],
            specular: [0.0, 0.0, 0.0],
            shininess: 0.0,
        }
    }
}

impl MaterialProperties {
    /// Self-lit planet surface.
    pub fn planet() -> Self {
        Self::default().with_emission(0.8, 0.8, 0.8)
    }

    /// Plain diffuse surface for the orbiting cubes.
    pub fn cube() -> Self {
        Self::default()
    }

    /// Builder pattern: Set emissive color
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = [r, g, b];
        self
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        let [er, eg, eb] = self.emissive;
        let [ar, ag, ab] = self.ambient;
        let [dr, dg, db] = self.diffuse;
        let [sr, sg, sb] = self.specular;
        MaterialUniform {
            emissive: [er, eg, eb, 1.0],
            ambient: [ar, ag, ab, 1.0],
            diffuse: [dr, dg, db, 1.0],
            specular: [sr, sg, sb, self.shininess],
        }
    }
}

/// Material bind group layout: uniform, texture, sampler
pub struct MaterialBindings {
    bind_group_layout: wgpu::BindGroupLayout,
}

impl MaterialBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[
                binding_types::entry(0, binding_types::uniform()),
                binding_types::entry(1, binding_types::texture_2d()),
                binding_types::entry(
                    2,
                    binding_types::sampler(wgpu::SamplerBindingType::Filtering),
                ),
            ],
        });

        MaterialBindings { bind_group_layout }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}

/// Material with its GPU resources
pub struct Material {
    pub name: String,
    pub properties: MaterialProperties,
    texture: TextureResource,
    material_ubo: MaterialUBO,
    bind_group: wgpu::BindGroup,
}

impl Material {
    pub fn new(
        device: &wgpu::Device,
        bindings: &MaterialBindings,
        name: &str,
        properties: MaterialProperties,
        texture: TextureResource,
    ) -> Self {
        let material_ubo = MaterialUBO::new_with_data(device, &properties.to_uniform());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Material Bind Group", name)),
            layout: bindings.bind_group_layout(),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: material_ubo.binding_resource(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        Self {
            name: name.to_string(),
            properties,
            texture,
            material_ubo,
            bind_group,
        }
    }

    /// Syncs `properties` to the GPU. Must be called after they change.
    pub fn update_gpu_resources(&mut self, queue: &wgpu::Queue) {
        self.material_ubo
            .update_content(queue, self.properties.to_uniform());
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub fn texture(&self) -> &TextureResource {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_is_emissive() {
        let uniform = MaterialProperties::planet().to_uniform();
        assert_eq!(uniform.emissive, [0.8, 0.8, 0.8, 1.0]);
        assert_eq!(uniform.diffuse, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cube_has_no_emission_or_specular() {
        let uniform = MaterialProperties::cube().to_uniform();
        assert_eq!(uniform.emissive, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(uniform.specular, [0.0; 4]);
    }

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 64);
    }
}
