//! Application configuration
//!
//! [`AppConfig`] carries every tunable constant of the orrery with the
//! defaults the scene was designed around. [`CliArgs`] lets the binary
//! override the few values worth changing from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub timing: TimingConfig,
    pub camera: CameraConfig,
    /// Framebuffer clear colour (RGBA).
    pub clear_color: [f64; 4],
    /// Default `env_logger` filter, overridable with `--log-level`.
    pub log_filter: String,
}

/// Window settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Asset locations. File names are resolved against `directory`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetConfig {
    pub directory: PathBuf,
    pub planet_mesh: String,
    pub planet_texture: String,
    pub cube_texture: String,
}

/// Fixed-rate simulation timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Wall-clock period between ticks.
    pub tick_period: Duration,
    /// Scene time added per tick while running.
    pub time_step: f32,
}

/// Camera and projection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Fixed eye distance from the origin.
    pub distance: f32,
    /// Degrees added to yaw or pitch per arrow-key press.
    pub angle_step: f32,
    /// Vertical field of view in degrees.
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            timing: TimingConfig::default(),
            camera: CameraConfig::default(),
            clear_color: [0.05, 0.05, 0.1, 1.0],
            log_filter: "info,wgpu_core=warn,wgpu_hal=warn,naga=warn".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Planet Project".to_string(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            planet_mesh: "planet.obj".to_string(),
            planet_texture: "planet_Quom1200.png".to_string(),
            cube_texture: "container.png".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(16),
            time_step: 0.05,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 25.0,
            angle_step: 2.0,
            fovy_degrees: 60.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl AppConfig {
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Apply command-line overrides. Flags that were not given keep their
    /// current value.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.assets {
            self.assets.directory = dir.clone();
        }
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref level) = args.log_level {
            self.log_filter = level.clone();
        }
    }
}

impl AssetConfig {
    pub fn planet_mesh_path(&self) -> PathBuf {
        self.resolve(&self.planet_mesh)
    }

    pub fn planet_texture_path(&self) -> PathBuf {
        self.resolve(&self.planet_texture)
    }

    pub fn cube_texture_path(&self) -> PathBuf {
        self.resolve(&self.cube_texture)
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.directory.join(path)
        }
    }
}

/// Orrery command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "A planet and its cube constellation, animated in real time")]
pub struct CliArgs {
    /// Directory containing planet.obj, planet_Quom1200.png and container.png.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Initial window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log filter (error, warn, info, debug, trace, or an env_logger filter string).
    #[arg(long)]
    pub log_level: Option<String>,
}
