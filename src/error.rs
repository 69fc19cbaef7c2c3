//! Asset error types
//!
//! Startup asset loads are one-shot: nothing is retried. Callers decide
//! whether an error is fatal; the application treats every asset error as
//! recoverable and renders with an empty or placeholder resource.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading meshes and textures from disk.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset file does not exist.
    #[error("asset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but its contents violate the mesh format
    /// (out-of-range index, missing attribute, non-triangular face).
    #[error("malformed asset {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The image decoder rejected the file.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Any other I/O failure while reading the file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the `Malformed` variant.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
