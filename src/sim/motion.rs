//! Constant-acceleration motion from a shiftable time origin

use serde::{Deserialize, Serialize};

use crate::consts::MS_PER_SECOND;

/// One closed-form stretch of uniformly accelerated motion.
///
/// A segment never changes its acceleration or initial conditions; a phase
/// change builds a fresh one. Only the time origin moves, so that time spent
/// paused can be excluded from the elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    origin_time: f64,
    acceleration: f64,
    initial_position: f64,
    initial_velocity: f64,
    time_speed: f64,
}

impl Segment {
    pub fn new(
        origin_time: f64,
        acceleration: f64,
        initial_position: f64,
        initial_velocity: f64,
        time_speed: f64,
    ) -> Self {
        Self {
            origin_time,
            acceleration,
            initial_position,
            initial_velocity,
            time_speed,
        }
    }

    /// A segment that stays at `position` forever
    pub fn stationary(origin_time: f64, position: f64, time_speed: f64) -> Self {
        Self::new(origin_time, 0.0, position, 0.0, time_speed)
    }

    /// Scaled simulation seconds elapsed at sample `time` (ms)
    #[inline]
    fn elapsed(&self, time: f64) -> f64 {
        (time - self.origin_time) / MS_PER_SECOND * self.time_speed
    }

    pub fn position_at(&self, time: f64) -> f64 {
        let t = self.elapsed(time);
        self.initial_position + self.initial_velocity * t + self.acceleration / 2.0 * t * t
    }

    pub fn velocity_at(&self, time: f64) -> f64 {
        self.initial_velocity + self.acceleration * self.elapsed(time)
    }

    /// Move the time origin forward by `delta` ms
    pub fn shift(&mut self, delta: f64) {
        self.origin_time += delta;
    }

    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    #[inline]
    pub fn origin_time(&self) -> f64 {
        self.origin_time
    }

    #[inline]
    pub fn initial_position(&self) -> f64 {
        self.initial_position
    }

    #[inline]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }
}
