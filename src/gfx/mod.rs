//! # Graphics Module
//!
//! Everything between the animation state and the screen.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera stepped by the arrow keys
//! - **Geometry** ([`geometry`]) - CPU-side meshes and the cube primitive
//! - **Rendering Pipeline** ([`rendering`]) - Lit, textured forward pass with depth testing
//! - **Scene Management** ([`scene`]) - The planet and cube objects on the GPU
//! - **Resource Management** ([`resources`]) - Materials, textures, and global uniforms

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
