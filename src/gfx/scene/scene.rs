use crate::{
    assets::load_mesh,
    config::AssetConfig,
    gfx::{
        geometry::{primitives::generate_cube, GeometryData},
        resources::{
            material::{Material, MaterialBindings, MaterialProperties},
            texture_resource::TextureResource,
        },
    },
    simulation::{FrameTransforms, OrbitalBody, SATELLITE_COUNT},
};

use super::object::{Mesh, Object, ObjectBindings};

/// The drawable orrery: the planet, its six cubes and their two materials
pub struct Scene {
    pub planet: Object,
    pub satellites: Vec<Object>,
    pub planet_material: Material,
    pub cube_material: Material,
}

impl Scene {
    /// Loads assets and uploads every object.
    ///
    /// Asset failures are not fatal: a planet mesh that fails to load
    /// leaves an empty planet, and a texture that fails to load is
    /// replaced by a placeholder.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        assets: &AssetConfig,
        bodies: &[OrbitalBody; SATELLITE_COUNT],
        object_bindings: &ObjectBindings,
        material_bindings: &MaterialBindings,
    ) -> Self {
        let planet_path = assets.planet_mesh_path();
        let planet_geometry = load_mesh(&planet_path).unwrap_or_else(|err| {
            log::error!("Failed to load planet mesh: {err}");
            GeometryData::new()
        });
        let planet = Object::new(
            device,
            object_bindings,
            "Planet",
            Mesh::from_geometry(device, &planet_geometry, "Planet"),
        );

        let satellites = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let label = format!("Cube {}", i);
                let geometry = generate_cube(body.size);
                Object::new(
                    device,
                    object_bindings,
                    &label,
                    Mesh::from_geometry(device, &geometry, &label),
                )
            })
            .collect();

        let planet_texture = TextureResource::load_or_placeholder(
            device,
            queue,
            &assets.planet_texture_path(),
            "Planet Texture",
        );
        let cube_texture = TextureResource::load_or_placeholder(
            device,
            queue,
            &assets.cube_texture_path(),
            "Cube Texture",
        );

        let planet_material = Material::new(
            device,
            material_bindings,
            "Planet",
            MaterialProperties::planet(),
            planet_texture,
        );
        let cube_material = Material::new(
            device,
            material_bindings,
            "Cube",
            MaterialProperties::cube(),
            cube_texture,
        );

        let scene = Self {
            planet,
            satellites,
            planet_material,
            cube_material,
        };

        let stats = scene.get_statistics();
        log::info!(
            "Scene ready: {} objects, {} triangles",
            stats.object_count,
            stats.total_triangles
        );

        scene
    }

    /// Copies this frame's poses into the objects and syncs them to the GPU
    pub fn update(&mut self, queue: &wgpu::Queue, frame: &FrameTransforms) {
        self.planet.set_transform(frame.planet_model);
        self.planet.update_transform(queue);

        for (object, pose) in self.satellites.iter_mut().zip(frame.satellites.iter()) {
            object.set_transform(pose.model_matrix());
            object.update_transform(queue);
        }
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let total_triangles = std::iter::once(&self.planet)
            .chain(self.satellites.iter())
            .map(|obj| obj.mesh.index_count() / 3)
            .sum();

        SceneStatistics {
            object_count: 1 + self.satellites.len(),
            total_triangles,
        }
    }
}

/// Scene statistics for logging
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_triangles: u32,
}
