//! Texture resource management for wgpu
//!
//! Provides utilities for creating GPU textures, views, and samplers for
//! the depth buffer and for image-backed surface textures.

use std::path::Path;

use crate::assets::{decode_image, DecodedImage};

/// GPU texture resource containing texture, view, and sampler
///
/// Bundles the three main components needed for texture operations:
/// - Texture: The actual GPU memory allocation
/// - View: Interface for shader access
/// - Sampler: Filtering and addressing configuration
#[derive(Clone)]
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Standard depth buffer format used throughout the renderer
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Colour textures are stored as linear RGBA8 and sampled as-is.
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Creates a depth texture matching the surface configuration
    ///
    /// # Arguments
    /// * `device` - WGPU device for creating resources
    /// * `config` - Surface configuration to match dimensions
    /// * `label` - Debug label for the texture
    pub fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        };

        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        };

        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Depth is never sampled.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Uploads a decoded image as a repeating, linearly filtered 2D texture
    pub fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = Self::create_color_texture(device, size, label);

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.bytes_per_row()),
                rows_per_image: Some(image.height),
            },
            size,
        );

        Self::with_repeat_sampler(device, texture, label)
    }

    /// A 1x1 texture with no uploaded data.
    ///
    /// Stands in for a surface texture that could not be loaded so the
    /// object is still drawn. Its contents are whatever the backend
    /// zero-initialises to.
    pub fn placeholder(device: &wgpu::Device, label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        };
        let texture = Self::create_color_texture(device, size, label);
        Self::with_repeat_sampler(device, texture, label)
    }

    /// Loads `path`, falling back to [`TextureResource::placeholder`] on any
    /// asset error or when the image exceeds the device's texture limit.
    pub fn load_or_placeholder(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        label: &str,
    ) -> Self {
        let max_dimension = device.limits().max_texture_dimension_2d;
        let image = decode_image(path).map_err(|err| err.to_string()).and_then(|image| {
            check_dimensions(image.width, image.height, max_dimension)
                .map(|()| image)
                .map_err(|reason| format!("{}: {}", path.display(), reason))
        });

        match image {
            Ok(image) => {
                log::info!(
                    "Loaded texture {} ({}x{}, {} channels)",
                    path.display(),
                    image.width,
                    image.height,
                    image.channels
                );
                Self::from_decoded(device, queue, &image, label)
            }
            Err(err) => {
                log::error!("Failed to load texture: {err}");
                Self::placeholder(device, label)
            }
        }
    }

    fn create_color_texture(
        device: &wgpu::Device,
        size: wgpu::Extent3d,
        label: &str,
    ) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    fn with_repeat_sampler(device: &wgpu::Device, texture: wgpu::Texture, label: &str) -> Self {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Rejects images the device cannot hold as a single 2D texture.
fn check_dimensions(width: u32, height: u32, max_dimension: u32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("image has zero size ({}x{})", width, height));
    }
    if width > max_dimension || height > max_dimension {
        return Err(format!(
            "image is {}x{}, larger than the device limit of {}",
            width, height, max_dimension
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_within_limit() {
        assert!(check_dimensions(1, 1, 4096).is_ok());
        assert!(check_dimensions(4096, 2048, 4096).is_ok());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let err = check_dimensions(5000, 10, 4096).unwrap_err();
        assert!(err.contains("5000x10"));
        assert!(check_dimensions(10, 4097, 4096).is_err());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(check_dimensions(0, 16, 4096).is_err());
        assert!(check_dimensions(16, 0, 4096).is_err());
    }
}
