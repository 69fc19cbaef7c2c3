//! Image decoding for textures
//!
//! Decodes PNG/JPEG files into tightly packed RGBA8 pixels ready for
//! upload. The source channel count is kept so callers can tell an opaque
//! RGB image from one carrying alpha.

use std::path::Path;

use crate::error::AssetError;

/// Decoded pixel data, always expanded to RGBA8 for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Channel count of the source file (3 = RGB, 4 = RGBA).
    pub channels: u8,
    /// `width * height * 4` bytes, row-major, top row first.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn has_alpha(&self) -> bool {
        self.channels == 4 || self.channels == 2
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Decodes the image at `path`.
pub fn decode_image(path: impl AsRef<Path>) -> Result<DecodedImage, AssetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AssetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|source| match source {
        image::ImageError::IoError(io) => AssetError::Io {
            path: path.to_path_buf(),
            source: io,
        },
        source => AssetError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let channels = image.color().channel_count();
    let rgba = image.to_rgba8();

    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        channels,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_png_expands_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        image::RgbImage::from_pixel(2, 3, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!((decoded.width, decoded.height), (2, 3));
        assert_eq!(decoded.channels, 3);
        assert!(!decoded.has_alpha());
        assert_eq!(decoded.rgba.len(), 2 * 3 * 4);
        assert_eq!(&decoded.rgba[0..4], &[10, 20, 30, 255]);
        assert_eq!(decoded.bytes_per_row(), 8);
    }

    #[test]
    fn test_rgba_png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        image::RgbaImage::from_pixel(1, 1, image::Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.channels, 4);
        assert!(decoded.has_alpha());
        assert_eq!(decoded.rgba, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_image_is_not_found() {
        let err = decode_image("no/such/texture.png").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Decode { .. } | AssetError::Io { .. }
        ));
    }
}
