//! Mutable scene state
//!
//! Everything that changes while the orrery runs, gathered in one struct
//! and passed by reference into the update and render paths. Each field
//! has a single writer:
//!
//! - `clock` time: [`SceneState::tick`]
//! - `clock` run state: the pause toggle in [`SceneState::apply`]
//! - `camera` angles: directional actions in [`SceneState::apply`]
//! - `camera` aspect: [`SceneState::resize`]

use crate::config::AppConfig;
use crate::gfx::camera::{CameraController, OrbitCamera};
use crate::input::InputAction;

use super::clock::{RunState, SceneClock};
use super::orbital::{FrameTransforms, OrbitalSystem};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Something visible changed outside a tick; redraw now.
    Redraw,
    Exit,
}

#[derive(Debug, Clone)]
pub struct SceneState {
    pub clock: SceneClock,
    pub camera: OrbitCamera,
    pub controller: CameraController,
    pub system: OrbitalSystem,
}

impl SceneState {
    pub fn new(config: &AppConfig) -> Self {
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        Self {
            clock: SceneClock::new(config.timing.time_step),
            camera: OrbitCamera::from_config(&config.camera, aspect),
            controller: CameraController::new(config.camera.angle_step),
            system: OrbitalSystem::default(),
        }
    }

    /// Tick handler: advances time unless paused.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    /// Key-down handler.
    pub fn apply(&mut self, action: InputAction) -> Control {
        match action {
            InputAction::Quit => Control::Exit,
            InputAction::TogglePause => {
                let state = self.clock.toggle_pause();
                log::debug!(
                    "{} at t = {:.2}",
                    match state {
                        RunState::Running => "Resumed",
                        RunState::Paused => "Paused",
                    },
                    self.clock.time()
                );
                Control::Continue
            }
            camera_action => {
                self.controller.process_action(camera_action, &mut self.camera);
                Control::Redraw
            }
        }
    }

    /// Resize handler: keeps the projection aspect in step with the window.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }

    /// Poses for the current scene time.
    pub fn frame(&self) -> FrameTransforms {
        self.system.frame(self.clock.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_running() {
        let state = SceneState::new(&AppConfig::default());
        assert_eq!(state.clock.state(), RunState::Running);
        assert_eq!(state.clock.time(), 0.0);
        assert!((state.camera.aspect - 1024.0 / 768.0).abs() < 1e-6);
    }

    #[test]
    fn test_quit_exits() {
        let mut state = SceneState::new(&AppConfig::default());
        assert_eq!(state.apply(InputAction::Quit), Control::Exit);
    }

    #[test]
    fn test_camera_input_live_while_paused() {
        let mut state = SceneState::new(&AppConfig::default());
        state.apply(InputAction::TogglePause);
        assert_eq!(state.apply(InputAction::RotateRight), Control::Redraw);
        assert_eq!(state.camera.yaw, 2.0);
        assert!(!state.tick());
    }
}
