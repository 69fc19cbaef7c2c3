use crate::input::InputAction;

use super::orbit_camera::OrbitCamera;

/// Turns directional input into yaw/pitch steps on an [`OrbitCamera`].
///
/// The controller is the only writer of the camera angles.
#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    /// Degrees per key press.
    pub rotate_step: f32,
}

impl CameraController {
    pub fn new(rotate_step: f32) -> Self {
        Self { rotate_step }
    }

    /// Applies `action` to the camera. Returns `false` for actions that are
    /// not camera movement.
    pub fn process_action(&self, action: InputAction, camera: &mut OrbitCamera) -> bool {
        match action {
            InputAction::RotateLeft => camera.add_yaw(-self.rotate_step),
            InputAction::RotateRight => camera.add_yaw(self.rotate_step),
            InputAction::RotateUp => camera.add_pitch(self.rotate_step),
            InputAction::RotateDown => camera.add_pitch(-self.rotate_step),
            InputAction::Quit | InputAction::TogglePause => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_steps() {
        let controller = CameraController::new(2.0);
        let mut camera = OrbitCamera::new(25.0, 0.0, 0.0, 1.0);

        assert!(controller.process_action(InputAction::RotateRight, &mut camera));
        assert!(controller.process_action(InputAction::RotateRight, &mut camera));
        assert!(controller.process_action(InputAction::RotateLeft, &mut camera));
        assert!(controller.process_action(InputAction::RotateUp, &mut camera));
        assert_eq!(camera.yaw, 2.0);
        assert_eq!(camera.pitch, 2.0);

        assert!(controller.process_action(InputAction::RotateDown, &mut camera));
        assert!(controller.process_action(InputAction::RotateDown, &mut camera));
        assert_eq!(camera.pitch, -2.0);
    }

    #[test]
    fn test_non_camera_actions_leave_camera_alone() {
        let controller = CameraController::new(2.0);
        let mut camera = OrbitCamera::new(25.0, 0.0, 0.0, 1.0);
        assert!(!controller.process_action(InputAction::TogglePause, &mut camera));
        assert!(!controller.process_action(InputAction::Quit, &mut camera));
        assert_eq!((camera.yaw, camera.pitch), (0.0, 0.0));
    }
}
