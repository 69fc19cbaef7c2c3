//! Scene clock
//!
//! A single scalar scene time driving every animation. Only the tick
//! handler advances it, by a fixed step, and only while running.

/// Whether ticks advance the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// Monotonic scene time.
///
/// Time starts at zero and never decreases: the step is clamped to be
/// non-negative and there is no reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneClock {
    time: f32,
    step: f32,
    state: RunState,
}

impl SceneClock {
    /// Creates a running clock at `t = 0` that advances by `step` per tick.
    pub fn new(step: f32) -> Self {
        Self {
            time: 0.0,
            step: if step.is_finite() { step.max(0.0) } else { 0.0 },
            state: RunState::Running,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Flips between running and paused and returns the new state.
    pub fn toggle_pause(&mut self) -> RunState {
        self.state = self.state.toggled();
        self.state
    }

    /// Advances the clock by one step unless paused. Returns whether time
    /// moved.
    pub fn tick(&mut self) -> bool {
        match self.state {
            RunState::Running => {
                self.time += self.step;
                true
            }
            RunState::Paused => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_running_at_zero() {
        let clock = SceneClock::new(0.05);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.state(), RunState::Running);
    }

    #[test]
    fn test_tick_advances_by_step() {
        let mut clock = SceneClock::new(0.05);
        for _ in 0..4 {
            assert!(clock.tick());
        }
        assert!((clock.time() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut clock = SceneClock::new(0.05);
        clock.tick();
        assert_eq!(clock.toggle_pause(), RunState::Paused);
        let frozen = clock.time();
        for _ in 0..100 {
            assert!(!clock.tick());
        }
        assert_eq!(clock.time(), frozen);

        assert_eq!(clock.toggle_pause(), RunState::Running);
        clock.tick();
        assert!((clock.time() - (frozen + 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_negative_step_never_rewinds() {
        let mut clock = SceneClock::new(-1.0);
        clock.tick();
        assert_eq!(clock.time(), 0.0);

        let mut clock = SceneClock::new(f32::NAN);
        clock.tick();
        assert_eq!(clock.time(), 0.0);
    }
}
