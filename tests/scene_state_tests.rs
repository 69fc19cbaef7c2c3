use std::time::Duration;

use approx::assert_relative_eq;
use orrery::config::{AppConfig, TimingConfig};
use orrery::input::InputAction;
use orrery::simulation::{Control, RunState, SceneState};

#[test]
fn test_ticks_advance_time_by_step() {
    let mut state = SceneState::new(&AppConfig::default());
    for _ in 0..10 {
        assert!(state.tick());
    }
    assert_relative_eq!(state.clock.time(), 0.5, epsilon = 1e-5);
    assert_relative_eq!(state.frame().time, state.clock.time());
}

#[test]
fn test_custom_time_step() {
    let config = AppConfig::default().with_timing(TimingConfig {
        tick_period: Duration::from_millis(16),
        time_step: 0.1,
    });
    let mut state = SceneState::new(&config);
    state.tick();
    state.tick();
    assert_relative_eq!(state.clock.time(), 0.2, epsilon = 1e-6);
}

#[test]
fn test_pause_toggle_round_trip() {
    let mut state = SceneState::new(&AppConfig::default());
    state.tick();

    assert_eq!(state.apply(InputAction::TogglePause), Control::Continue);
    assert_eq!(state.clock.state(), RunState::Paused);
    let frozen = state.frame();
    state.tick();
    state.tick();
    assert_eq!(state.frame(), frozen);

    state.apply(InputAction::TogglePause);
    assert_eq!(state.clock.state(), RunState::Running);
    state.tick();
    assert_relative_eq!(state.clock.time(), 0.1, epsilon = 1e-6);
}

#[test]
fn test_arrow_keys_step_camera() {
    let mut state = SceneState::new(&AppConfig::default());
    assert_eq!(state.apply(InputAction::RotateLeft), Control::Redraw);
    assert_eq!(state.apply(InputAction::RotateUp), Control::Redraw);
    assert_eq!(state.apply(InputAction::RotateUp), Control::Redraw);
    assert_relative_eq!(state.camera.yaw, -2.0);
    assert_relative_eq!(state.camera.pitch, 4.0);
    assert_eq!(state.apply(InputAction::RotateDown), Control::Redraw);
    assert_relative_eq!(state.camera.pitch, 2.0);
}

#[test]
fn test_pitch_is_not_clamped() {
    let mut state = SceneState::new(&AppConfig::default());
    for _ in 0..50 {
        state.apply(InputAction::RotateUp);
    }
    assert_relative_eq!(state.camera.pitch, 100.0);
}

#[test]
fn test_resize_updates_aspect() {
    let mut state = SceneState::new(&AppConfig::default());
    state.resize(800, 800);
    assert_relative_eq!(state.camera.aspect, 1.0);
    state.resize(0, 0);
    assert_relative_eq!(state.camera.aspect, 1.0);
}
