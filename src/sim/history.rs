//! Sample history for plotting position, velocity and acceleration over time
//!
//! Plotters draw a broken line wherever a sample is marked discontinuous, so
//! a bounce shows up as a jump instead of a steep slope.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::block::Snapshot;
use super::physics;
use crate::config::Config;
use crate::consts::HISTORY_CAPACITY;

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Milliseconds since the run started (pauses excluded)
    pub elapsed: f64,
    pub value: f64,
    /// The value jumped between the previous sample and this one
    pub discontinuous: bool,
}

/// Bounded history of one quantity (oldest samples are dropped first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    capacity: usize,
    samples: VecDeque<Sample>,
}

impl Trace {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, elapsed: f64, value: f64, discontinuous: bool) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            elapsed,
            value,
            discontinuous,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}

/// Axis extents for the three plots, in scaled units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    /// Highest position the block can reach
    pub max_position: f64,
    /// Largest speed in either direction
    pub max_velocity: f64,
    /// Largest acceleration magnitude (always toward the wall)
    pub max_acceleration: f64,
}

impl PlotBounds {
    pub fn from_config(config: &Config) -> Self {
        let scale = config.scale;
        let max_position = if config.initial_velocity == 0.0 {
            config.length * scale
        } else {
            physics::initial_height(config) * scale
        };
        let max_velocity = physics::bounce_velocity(config, config.length)
            .max(config.initial_velocity)
            * scale;
        let max_acceleration = physics::max_acceleration(config).abs() * scale;

        Self {
            max_position,
            max_velocity,
            max_acceleration,
        }
    }
}

/// Position, velocity and acceleration traces of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    pub bounds: PlotBounds,
    pub position: Trace,
    pub velocity: Trace,
    pub acceleration: Trace,
}

impl History {
    pub fn new(config: &Config) -> Self {
        Self::with_capacity(config, HISTORY_CAPACITY)
    }

    pub fn with_capacity(config: &Config, capacity: usize) -> Self {
        Self {
            bounds: PlotBounds::from_config(config),
            position: Trace::new(capacity),
            velocity: Trace::new(capacity),
            acceleration: Trace::new(capacity),
        }
    }

    /// Record one sample. Position is continuous; the flags mark velocity and
    /// acceleration jumps.
    pub fn record(&mut self, elapsed: f64, snapshot: &Snapshot) {
        self.position.push(elapsed, snapshot.position, false);
        self.velocity
            .push(elapsed, snapshot.velocity, snapshot.velocity_discontinuous);
        self.acceleration.push(
            elapsed,
            snapshot.acceleration,
            snapshot.acceleration_discontinuous,
        );
    }

    pub fn clear(&mut self) {
        self.position.clear();
        self.velocity.clear();
        self.acceleration.clear();
    }
}
