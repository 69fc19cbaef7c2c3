//! Startup asset loading
//!
//! Both loaders run once before the first frame. They only touch the
//! filesystem and return CPU-side data; GPU upload lives in
//! [`crate::gfx::resources`].

pub mod image_loader;
pub mod mesh_loader;

pub use image_loader::{decode_image, DecodedImage};
pub use mesh_loader::load_mesh;
