// src/lib.rs
//! Orrery
//!
//! A textured planet orbiting the origin with six cubes orbiting the
//! planet, lit by a point light that travels with it. Built on wgpu and
//! winit.

pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod scheduler;
pub mod simulation;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::OrreryApp;
pub use config::{AppConfig, CliArgs};
pub use error::AssetError;

/// Runs the orrery with `config` until the user quits
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    OrreryApp::new(config)?.run()
}
