//! Orbital transform engine
//!
//! Derives every body's world pose from the scene time alone. The planet
//! orbits the world origin; each satellite orbits the planet's *current*
//! position, so satellite frames are re-anchored every frame. A satellite's
//! model matrix composes, outermost first:
//!
//! ```text
//! T(planet) * T(orbital offset) * R(spin axis, spin angle)
//! ```
//!
//! so self-rotation only turns the cube in place at its orbital slot.
//! Every function here is pure: the same time gives the same poses, and no
//! two bodies influence each other.

use cgmath::{Deg, InnerSpace, Matrix4, Rad, SquareMatrix, Vector3};

use super::constellation::{OrbitalBody, PlanetOrbit, CONSTELLATION, PLANET, SATELLITE_COUNT};

impl PlanetOrbit {
    /// World position at time `t`: `(R cos(ωt), 0, R sin(ωt))`, ω in radians.
    pub fn position(&self, t: f32) -> Vector3<f32> {
        let angle = t * self.angular_speed;
        Vector3::new(self.radius * angle.cos(), 0.0, self.radius * angle.sin())
    }

    /// Self-rotation angle about +Y at time `t`.
    pub fn spin_angle(&self, t: f32) -> Deg<f32> {
        Deg(t * self.spin_speed)
    }

    /// Model matrix: translate to the orbit, spin about +Y, then scale.
    pub fn model_matrix(&self, t: f32) -> Matrix4<f32> {
        Matrix4::from_translation(self.position(t))
            * Matrix4::from_angle_y(self.spin_angle(t))
            * Matrix4::from_scale(self.scale)
    }
}

impl OrbitalBody {
    /// Orbital angle about the anchor: `t·ω + φ`.
    pub fn orbital_angle(&self, t: f32) -> Deg<f32> {
        Deg(t * self.orbit_speed + self.phase_offset)
    }

    /// Offset from the anchor: `(R cos θ, y, R sin θ)`.
    pub fn local_offset(&self, t: f32) -> Vector3<f32> {
        let theta: Rad<f32> = self.orbital_angle(t).into();
        Vector3::new(
            self.orbit_radius * theta.0.cos(),
            self.y_offset,
            self.orbit_radius * theta.0.sin(),
        )
    }

    /// Self-rotation angle: linear in `t`, independent of the orbit.
    pub fn spin_angle(&self, t: f32) -> Deg<f32> {
        Deg(t * self.spin_speed)
    }

    /// Normalised `(ax, ay, 0)`, or `None` for a degenerate zero axis.
    pub fn spin_axis(&self) -> Option<Vector3<f32>> {
        let axis = Vector3::new(self.spin_axis[0], self.spin_axis[1], 0.0);
        if axis.magnitude2() > f32::EPSILON {
            Some(axis.normalize())
        } else {
            None
        }
    }

    /// Pose of this body at time `t` about a (possibly moving) anchor.
    pub fn pose(&self, anchor: Vector3<f32>, t: f32) -> BodyPose {
        BodyPose {
            anchor,
            offset: self.local_offset(t),
            spin_axis: self.spin_axis(),
            spin_angle: self.spin_angle(t),
        }
    }
}

/// A satellite's pose decomposed into its nested frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// Planet position the orbit is centred on.
    pub anchor: Vector3<f32>,
    /// Orbital offset from the anchor.
    pub offset: Vector3<f32>,
    /// Normalised self-rotation axis; `None` means no self-rotation.
    pub spin_axis: Option<Vector3<f32>>,
    pub spin_angle: Deg<f32>,
}

impl BodyPose {
    pub fn world_position(&self) -> Vector3<f32> {
        self.anchor + self.offset
    }

    /// Self-rotation on its own, in the body's local frame.
    pub fn spin_matrix(&self) -> Matrix4<f32> {
        match self.spin_axis {
            Some(axis) => Matrix4::from_axis_angle(axis, self.spin_angle),
            None => Matrix4::identity(),
        }
    }

    /// `T(anchor) * T(offset) * R(spin)`.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.anchor)
            * Matrix4::from_translation(self.offset)
            * self.spin_matrix()
    }
}

/// Every transform needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub time: f32,
    pub planet_position: Vector3<f32>,
    pub planet_model: Matrix4<f32>,
    /// Point light position; bound to the planet.
    pub light_position: Vector3<f32>,
    pub satellites: [BodyPose; SATELLITE_COUNT],
}

/// The planet plus its fixed constellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSystem {
    pub planet: PlanetOrbit,
    pub bodies: [OrbitalBody; SATELLITE_COUNT],
}

impl Default for OrbitalSystem {
    fn default() -> Self {
        Self {
            planet: PLANET,
            bodies: CONSTELLATION,
        }
    }
}

impl OrbitalSystem {
    pub fn new(planet: PlanetOrbit, bodies: [OrbitalBody; SATELLITE_COUNT]) -> Self {
        Self { planet, bodies }
    }

    /// Computes all poses for scene time `t`.
    pub fn frame(&self, t: f32) -> FrameTransforms {
        let planet_position = self.planet.position(t);
        FrameTransforms {
            time: t,
            planet_position,
            planet_model: self.planet.model_matrix(t),
            light_position: planet_position,
            satellites: self.bodies.map(|body| body.pose(planet_position, t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Transform;

    const EPS: f32 = 1e-4;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPS
    }

    #[test]
    fn test_planet_starts_on_positive_x() {
        assert!(close(PLANET.position(0.0), Vector3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn test_planet_quarter_orbit() {
        // ω = 0.3 rad/t, so a quarter turn takes (π/2)/0.3
        let t = std::f32::consts::FRAC_PI_2 / 0.3;
        assert!(close(PLANET.position(t), Vector3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_spin_does_not_move_satellite() {
        let body = CONSTELLATION[2];
        let pose = body.pose(Vector3::new(1.0, 0.0, -1.0), 3.7);
        let origin = pose.model_matrix().transform_point(cgmath::Point3::new(0.0, 0.0, 0.0));
        assert!(close(
            Vector3::new(origin.x, origin.y, origin.z),
            pose.world_position()
        ));
    }

    #[test]
    fn test_zero_axis_means_no_spin() {
        let mut body = CONSTELLATION[0];
        body.spin_axis = [0.0, 0.0];
        let pose = body.pose(Vector3::new(0.0, 0.0, 0.0), 10.0);
        assert!(pose.spin_axis.is_none());
        assert_eq!(pose.spin_matrix(), Matrix4::identity());
    }

    #[test]
    fn test_light_follows_planet() {
        let system = OrbitalSystem::default();
        for t in [0.0, 1.3, 42.0] {
            let frame = system.frame(t);
            assert_eq!(frame.light_position, frame.planet_position);
        }
    }

    #[test]
    fn test_planet_model_places_origin_at_planet() {
        let t = 5.5;
        let m = PLANET.model_matrix(t);
        let p = m.transform_point(cgmath::Point3::new(0.0, 0.0, 0.0));
        assert!(close(Vector3::new(p.x, p.y, p.z), PLANET.position(t)));
    }
}
