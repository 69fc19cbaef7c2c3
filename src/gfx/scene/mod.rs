//! # Scene Management Module
//!
//! GPU-side objects of the orrery: meshes uploaded to vertex/index buffers,
//! objects carrying a model-matrix uniform, and the [`Scene`] that owns
//! the planet, the six cubes and their materials.
//!
//! ## Key Components
//!
//! - [`Scene`] - Owns every drawable and syncs poses each frame
//! - [`Object`] - A mesh plus its transform uniform
//! - [`DrawObject`] - Render-pass extension for drawing objects
//! - [`Vertex3D`] - Vertex layout with position, texture coordinates and normal

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object, ObjectBindings};
pub use scene::Scene;
pub use vertex::Vertex3D;
