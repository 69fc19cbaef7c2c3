use approx::assert_relative_eq;
use cgmath::{Deg, Vector3};

use orrery::gfx::camera::{camera_utils::CameraUniform, CameraController, OrbitCamera};
use orrery::gfx::camera::orbit_camera::calculate_cartesian_eye_position;
use orrery::input::InputAction;

#[test]
fn test_default_view_looks_down_z() {
    let eye = calculate_cartesian_eye_position(Deg(0.0), Deg(0.0), 25.0, Vector3::new(0.0, 0.0, 0.0));
    assert_relative_eq!(eye.x, 0.0);
    assert_relative_eq!(eye.y, 0.0);
    assert_relative_eq!(eye.z, 25.0);
}

#[test]
fn test_quarter_turn_moves_eye_to_x() {
    let eye = calculate_cartesian_eye_position(Deg(0.0), Deg(90.0), 25.0, Vector3::new(0.0, 0.0, 0.0));
    assert_relative_eq!(eye.x, 25.0, epsilon = 1e-4);
    assert_relative_eq!(eye.y, 0.0);
    assert_relative_eq!(eye.z, 0.0, epsilon = 1e-4);
}

#[test]
fn test_forty_five_right_presses_reach_ninety_degrees() {
    let controller = CameraController::new(2.0);
    let mut camera = OrbitCamera::new(25.0, 0.0, 0.0, 4.0 / 3.0);
    for _ in 0..45 {
        controller.process_action(InputAction::RotateRight, &mut camera);
    }
    assert_relative_eq!(camera.yaw, 90.0);
    assert_relative_eq!(camera.eye.x, 25.0, epsilon = 1e-3);
}

#[test]
fn test_view_projection_is_finite_and_changes_with_rotation() {
    let controller = CameraController::new(2.0);
    let mut camera = OrbitCamera::new(25.0, 0.0, 0.0, 4.0 / 3.0);
    camera.update_view_proj();
    let initial: CameraUniform = camera.uniform;

    for row in &initial.view_proj {
        for &val in row {
            assert!(val.is_finite(), "view-projection contains non-finite values");
        }
    }

    controller.process_action(InputAction::RotateUp, &mut camera);
    camera.update_view_proj();
    assert_ne!(initial.view_proj, camera.uniform.view_proj);
    assert_relative_eq!(camera.uniform.view_position[3], 1.0);
}

#[test]
fn test_resize_ignores_minimised_window() {
    let mut camera = OrbitCamera::new(25.0, 0.0, 0.0, 4.0 / 3.0);
    camera.resize_projection(0, 600);
    assert_relative_eq!(camera.aspect, 4.0 / 3.0);
    camera.resize_projection(1600, 900);
    assert_relative_eq!(camera.aspect, 16.0 / 9.0);
}
