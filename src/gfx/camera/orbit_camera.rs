use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use crate::config::CameraConfig;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Camera orbiting the world origin at a fixed distance.
///
/// Yaw and pitch are plain accumulators in degrees with no clamping: past
/// ±90° pitch the view flips over the pole, which is accepted behaviour.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    /// Degrees, rotation about +Y.
    pub yaw: f32,
    /// Degrees, elevation above the XZ plane.
    pub pitch: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            yaw,
            pitch,
            eye: Vector3::zero(), // Will be auto-calculated in `update()` nevertheless.
            target: Vector3::zero(),
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(60.0),
            znear: 0.1,
            zfar: 100.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    /// Camera at yaw = pitch = 0 with distance and projection from `config`.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.distance, 0.0, 0.0, aspect);
        camera.fovy = Deg(config.fovy_degrees);
        camera.znear = config.znear;
        camera.zfar = config.zfar;
        camera
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye = calculate_cartesian_eye_position(
            Deg(self.pitch),
            Deg(self.yaw),
            self.distance,
            self.target,
        );
    }

    /// Updates the aspect ratio; zero-sized dimensions are ignored.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

/// Spherical to Cartesian:
/// `(d·sin(yaw)·cos(pitch), d·sin(pitch), d·cos(yaw)·cos(pitch)) + target`.
pub fn calculate_cartesian_eye_position(
    pitch: Deg<f32>,
    yaw: Deg<f32>,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    let pitch: Rad<f32> = pitch.into();
    let yaw: Rad<f32> = yaw.into();
    Vector3::new(
        distance * yaw.0.sin() * pitch.0.cos(),
        distance * pitch.0.sin(),
        distance * yaw.0.cos() * pitch.0.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_on_positive_z_at_rest() {
        let camera = OrbitCamera::new(25.0, 0.0, 0.0, 1.0);
        assert!((camera.eye - Vector3::new(0.0, 0.0, 25.0)).magnitude() < 1e-4);
    }

    #[test]
    fn test_pitch_is_not_clamped() {
        let mut camera = OrbitCamera::new(10.0, 0.0, 0.0, 1.0);
        camera.add_pitch(120.0);
        assert_eq!(camera.pitch, 120.0);
        // Past the pole the eye is behind the origin
        assert!(camera.eye.z < 0.0);
    }

    #[test]
    fn test_resize_ignores_zero_height() {
        let mut camera = OrbitCamera::new(10.0, 0.0, 0.0, 1.5);
        camera.resize_projection(800, 0);
        assert_eq!(camera.aspect, 1.5);
        camera.resize_projection(800, 400);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_view_proj_is_finite() {
        let mut camera = OrbitCamera::new(25.0, 30.0, 20.0, 4.0 / 3.0);
        camera.update_view_proj();
        for row in camera.uniform.view_proj.iter() {
            assert!(row.iter().all(|v| v.is_finite()));
        }
        assert_eq!(camera.uniform.view_position[3], 1.0);
    }
}
