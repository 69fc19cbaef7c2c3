//! Orbital configuration
//!
//! The planet's orbit about the world origin and the fixed table of six
//! satellites that orbit the planet. All values are immutable after
//! startup.

/// Number of satellites in the constellation.
pub const SATELLITE_COUNT: usize = 6;

/// The planet's motion about the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetOrbit {
    /// Distance from the world origin.
    pub radius: f32,
    /// Orbital angular speed in radians per unit of scene time.
    pub angular_speed: f32,
    /// Self-rotation about +Y in degrees per unit of scene time.
    pub spin_speed: f32,
    /// Uniform scale applied to the planet mesh.
    pub scale: f32,
}

/// The planet as the scene was designed: a 3-unit orbit, 20°/t spin, drawn
/// at half size.
pub const PLANET: PlanetOrbit = PlanetOrbit {
    radius: 3.0,
    angular_speed: 0.3,
    spin_speed: 20.0,
    scale: 0.5,
};

/// Static orbital parameters for one satellite.
///
/// Angles and angular speeds are in degrees (per unit of scene time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalBody {
    /// Distance from the planet in the XZ plane.
    pub orbit_radius: f32,
    /// Orbital angular speed, negative for clockwise.
    pub orbit_speed: f32,
    /// Orbital angle at `t = 0`.
    pub phase_offset: f32,
    /// Height above (or below) the planet's orbital plane.
    pub y_offset: f32,
    /// Self-rotation speed.
    pub spin_speed: f32,
    /// X and Y components of the self-rotation axis; Z is always 0.
    pub spin_axis: [f32; 2],
    /// Cube edge length.
    pub size: f32,
}

#[rustfmt::skip]
pub const CONSTELLATION: [OrbitalBody; SATELLITE_COUNT] = [
    OrbitalBody { orbit_radius: 1.5, orbit_speed:   80.0, phase_offset:   0.0, y_offset:  0.0, spin_speed: 60.0, spin_axis: [1.0, 0.0], size: 0.35 },
    OrbitalBody { orbit_radius: 2.0, orbit_speed:  -60.0, phase_offset:  60.0, y_offset:  0.2, spin_speed: 40.0, spin_axis: [0.0, 1.0], size: 0.45 },
    OrbitalBody { orbit_radius: 2.5, orbit_speed:  100.0, phase_offset: 120.0, y_offset: -0.3, spin_speed: 80.0, spin_axis: [1.0, 1.0], size: 0.40 },
    OrbitalBody { orbit_radius: 3.0, orbit_speed:  -70.0, phase_offset: 180.0, y_offset:  0.4, spin_speed: 50.0, spin_axis: [0.5, 1.0], size: 0.30 },
    OrbitalBody { orbit_radius: 3.5, orbit_speed:   85.0, phase_offset: 240.0, y_offset: -0.5, spin_speed: 70.0, spin_axis: [1.0, 0.5], size: 0.50 },
    OrbitalBody { orbit_radius: 4.0, orbit_speed:  -50.0, phase_offset: 300.0, y_offset:  0.1, spin_speed: 90.0, spin_axis: [0.0, 1.0], size: 0.38 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_spread_evenly() {
        for (i, body) in CONSTELLATION.iter().enumerate() {
            assert_eq!(body.phase_offset, 60.0 * i as f32);
        }
    }

    #[test]
    fn test_orbits_nest_outward() {
        for pair in CONSTELLATION.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn test_spin_axes_are_usable() {
        for body in CONSTELLATION.iter() {
            let [x, y] = body.spin_axis;
            assert!(x * x + y * y > 0.0);
        }
    }
}
