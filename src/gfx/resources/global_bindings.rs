//! Global uniform bindings for camera and scene data
//!
//! Manages the GPU uniform buffer and bind group for per-frame state shared
//! by every object in the scene: the camera matrices and the point light
//! that rides along with the planet.

use cgmath::Point3;

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in `scene.wgsl` exactly. Every light
/// field is a vec4 so no implicit padding is needed.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    // Camera data (matches CameraUniform)
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],

    // Point light, w = 1
    pub light_position: [f32; 4],
    pub light_ambient: [f32; 4],
    pub light_diffuse: [f32; 4],
    pub light_specular: [f32; 4],
    /// constant, linear, quadratic, unused
    pub light_attenuation: [f32; 4],
    pub global_ambient: [f32; 4],
}

impl GlobalUBOContent {
    pub fn new(camera: &CameraUniform, light: &LightConfig, light_position: Point3<f32>) -> Self {
        let [ar, ag, ab] = light.ambient;
        let [dr, dg, db] = light.diffuse;
        let [sr, sg, sb] = light.specular;
        let [kc, kl, kq] = light.attenuation;
        let g = light.global_ambient;

        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            light_position: [light_position.x, light_position.y, light_position.z, 1.0],
            light_ambient: [ar, ag, ab, 1.0],
            light_diffuse: [dr, dg, db, 1.0],
            light_specular: [sr, sg, sb, 1.0],
            light_attenuation: [kc, kl, kq, 0.0],
            global_ambient: [g, g, g, 1.0],
        }
    }
}

/// Point light colour and falloff; the position is supplied per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    /// Constant, linear and quadratic attenuation factors.
    pub attenuation: [f32; 3],
    pub global_ambient: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            ambient: [0.1, 0.1, 0.1],
            diffuse: [1.0, 1.0, 0.9],
            specular: [1.0, 1.0, 1.0],
            attenuation: [1.0, 0.05, 0.01],
            global_ambient: 0.2,
        }
    }
}

impl LightConfig {
    /// Attenuation factor at distance `d` from the light.
    pub fn attenuation_at(&self, d: f32) -> f32 {
        let [kc, kl, kq] = self.attenuation;
        1.0 / (kc + kl * d + kq * d * d)
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called once per frame, before any object is drawn, with the light
/// placed at the planet's current position.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: &CameraUniform,
    light: &LightConfig,
    light_position: Point3<f32>,
) {
    ubo.update_content(queue, GlobalUBOContent::new(camera, light, light_position));
}

/// Manages bind group layout and bind group for global uniforms
///
/// Bound to slot 0 in the render pipeline.
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    /// Sets up the layout; the bind group is created by `create_bind_group()`.
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[binding_types::entry(0, binding_types::uniform())],
        });

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group with the provided uniform buffer
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        }));
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// `None` until `create_bind_group()` has run.
    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bind_group.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ubo_size_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 176);
        assert_eq!(std::mem::size_of::<GlobalUBOContent>() % 16, 0);
    }

    #[test]
    fn test_light_follows_given_position() {
        let content = GlobalUBOContent::new(
            &CameraUniform::default(),
            &LightConfig::default(),
            Point3::new(3.0, 0.0, -1.5),
        );
        assert_eq!(content.light_position, [3.0, 0.0, -1.5, 1.0]);
        assert_eq!(content.light_attenuation, [1.0, 0.05, 0.01, 0.0]);
        assert_eq!(content.global_ambient, [0.2, 0.2, 0.2, 1.0]);
    }

    #[test]
    fn test_attenuation_falloff() {
        let light = LightConfig::default();
        assert_eq!(light.attenuation_at(0.0), 1.0);
        // 1 / (1 + 0.5 + 1.0)
        assert!((light.attenuation_at(10.0) - 0.4).abs() < 1e-6);
    }
}
