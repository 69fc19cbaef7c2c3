// src/simulation/mod.rs
//! Scene animation
//!
//! The clock, the orbital configuration, the transform engine that turns
//! scene time into world poses, and the state struct tying them to the
//! camera.

pub mod clock;
pub mod constellation;
pub mod orbital;
pub mod state;

pub use clock::{RunState, SceneClock};
pub use constellation::{OrbitalBody, PlanetOrbit, CONSTELLATION, PLANET, SATELLITE_COUNT};
pub use orbital::{BodyPose, FrameTransforms, OrbitalSystem};
pub use state::{Control, SceneState};
