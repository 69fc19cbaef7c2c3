//! WGPU-based rendering engine for the orrery
//!
//! Owns the surface, device and queue, the depth buffer, the global
//! camera/light uniform and the single lit-and-textured pipeline every
//! object is drawn with.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use cgmath::Point3;
use wgpu::Device;

use crate::gfx::{
    camera::camera_utils::CameraUniform,
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightConfig},
        material::MaterialBindings,
        texture_resource::TextureResource,
    },
    scene::{
        object::{DrawObject, ObjectBindings},
        scene::Scene,
    },
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

const SCENE_PIPELINE: &str = "Scene";

// Bind group slots, matching scene.wgsl
const GLOBALS_GROUP: u32 = 0;
const MATERIAL_GROUP: u32 = 1;
const TRANSFORM_GROUP: u32 = 2;

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    clear_color: wgpu::Color,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_bindings: ObjectBindings,
    material_bindings: MaterialBindings,
    light_config: LightConfig,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Picks a non-sRGB surface format so texture colours reach the screen
    /// unconverted, creates the depth buffer and builds the scene pipeline
    /// with depth testing on and face culling off.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        clear_color: [f64; 4],
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to request adapter")?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to request a device")?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device, &global_ubo);

        let object_bindings = ObjectBindings::new(&device);
        let material_bindings = MaterialBindings::new(&device);

        // Wrap device and queue in Arc for pipeline manager
        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("scene", include_str!("scene.wgsl"));

        // Cube faces are not wound consistently, so nothing is culled.
        pipeline_manager.register_pipeline(
            SCENE_PIPELINE,
            PipelineConfig::default_with_shader("scene")
                .with_label("SCENE")
                .with_cull_mode(None)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_color_format(format)
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    material_bindings.bind_group_layout().clone(),
                    object_bindings.bind_group_layout().clone(),
                ]),
        );

        pipeline_manager
            .create_all_pipelines()
            .map_err(|errors| anyhow!(errors.join("; ")))?;

        let [r, g, b, a] = clear_color;

        Ok(RenderEngine {
            device: device_handle,
            config,
            surface,
            queue: queue_handle,
            depth_texture,
            clear_color: wgpu::Color { r, g, b, a },
            pipeline_manager,
            global_bindings,
            global_ubo,
            object_bindings,
            material_bindings,
            light_config: LightConfig::default(),
        })
    }

    /// Draws one frame: the planet first, then the cubes in table order.
    ///
    /// Surface errors are returned to the caller, which decides whether to
    /// reconfigure, skip or exit.
    pub fn render_frame(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let (Some(pipeline), Some(globals)) = (
                self.pipeline_manager.pipeline(SCENE_PIPELINE),
                self.global_bindings.bind_group(),
            ) {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(GLOBALS_GROUP, globals, &[]);

                render_pass.set_bind_group(MATERIAL_GROUP, scene.planet_material.bind_group(), &[]);
                render_pass.draw_object(&scene.planet, TRANSFORM_GROUP);

                render_pass.set_bind_group(MATERIAL_GROUP, scene.cube_material.bind_group(), &[]);
                for satellite in &scene.satellites {
                    render_pass.draw_object(satellite, TRANSFORM_GROUP);
                }
            } else {
                log::warn!("Scene pipeline unavailable, frame left blank");
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Uploads the camera and places the light for the coming frame
    pub fn update(&mut self, camera_uniform: &CameraUniform, light_position: Point3<f32>) {
        update_global_ubo(
            &mut self.global_ubo,
            &self.queue,
            camera_uniform,
            &self.light_config,
            light_position,
        );
    }

    /// Reconfigures the surface and recreates the depth buffer. Zero sizes
    /// (a minimised window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;

        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Reconfigures the surface at its current size, after it was lost or outdated
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn object_bindings(&self) -> &ObjectBindings {
        &self.object_bindings
    }

    pub fn material_bindings(&self) -> &MaterialBindings {
        &self.material_bindings
    }
}
