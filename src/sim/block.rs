//! Block state machine
//!
//! The block alternates between sliding toward the wall and flying away from
//! it after a bounce, until its residual apex is negligible or friction holds
//! it in place. Each sample evaluates the active segment, then checks for a
//! direction reversal followed by a wall impact. The order matters: an impact
//! detected on the recomputed state overrides a reversal in the same sample.

use serde::{Deserialize, Serialize};

use super::motion::Segment;
use super::physics;
use crate::config::Config;
use crate::consts::SETTLE_HEIGHT;

/// Direction of travel along the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the wall (also used at rest)
    Down,
    /// Away from the wall
    Up,
}

/// Physical phase of the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Sliding toward the wall
    Sliding,
    /// Flying away from the wall after a bounce or launch
    Flying,
    /// Terminal: at rest for good
    Settled,
}

/// Read-only per-sample state for renderers and plotters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub direction: Direction,
    pub phase: Phase,
    pub bounce_height: f64,
    pub bounces: u32,
    pub running: bool,
    pub velocity_discontinuous: bool,
    pub acceleration_discontinuous: bool,
}

/// The block and its current kinematics
#[derive(Debug, Clone)]
pub struct Block {
    config: Config,
    segment: Segment,
    position: f64,
    velocity: f64,
    direction: Direction,
    /// Apex reachable on the current excursion (scaled units)
    bounce_height: f64,
    bounces: u32,
    running: bool,
    settled: bool,
    velocity_discontinuous: bool,
    acceleration_discontinuous: bool,
}

impl Block {
    /// Build a block from a configuration snapshot at sample time `now` (ms)
    pub fn new(config: &Config, now: f64) -> Self {
        let config = *config;
        let scale = config.scale;

        let block = if config.initial_velocity == 0.0 {
            // Released from rest at the top
            let position = config.top_position();
            let mut acceleration = physics::acceleration_down(&config) * scale;
            let held = acceleration >= 0.0;
            if held {
                acceleration = 0.0;
            }
            Self {
                config,
                segment: Segment::new(now, acceleration, position, 0.0, config.time_speed),
                position,
                velocity: 0.0,
                direction: Direction::Down,
                bounce_height: position,
                bounces: 0,
                running: false,
                settled: held,
                velocity_discontinuous: false,
                acceleration_discontinuous: false,
            }
        } else {
            // Launched up the plane from the wall
            let velocity = config.initial_velocity * scale;
            let acceleration = physics::acceleration_up(&config) * scale;
            Self {
                config,
                segment: Segment::new(now, acceleration, 0.0, velocity, config.time_speed),
                position: 0.0,
                velocity,
                direction: Direction::Up,
                bounce_height: physics::initial_height(&config) * scale,
                bounces: 0,
                running: false,
                settled: false,
                velocity_discontinuous: false,
                acceleration_discontinuous: false,
            }
        };

        if block.settled {
            log::info!("Friction holds the block at the top; it will not move");
        }
        block
    }

    /// Begin running. Returns false if the block is already at rest for good.
    pub fn start(&mut self) -> bool {
        if self.settled {
            return false;
        }
        self.running = true;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Exclude `delta` ms (e.g. a pause) from the active segment's elapsed time
    pub fn shift_time(&mut self, delta: f64) {
        self.segment.shift(delta);
    }

    /// Advance to sample time `time` (ms)
    pub fn update_motion(&mut self, time: f64) {
        self.velocity = self.segment.velocity_at(time);
        self.position = self.segment.position_at(time);

        self.velocity_discontinuous = false;
        self.acceleration_discontinuous = false;

        if self.settled {
            return;
        }

        if self.should_change_direction() {
            self.acceleration_discontinuous = true;
            self.slide_down(time);
        }

        if self.hit_wall() {
            self.acceleration_discontinuous = true;
            self.velocity_discontinuous = true;
            self.bounce(time);
        }

        if self.segment.acceleration() > 0.0 {
            self.velocity = 0.0;
            self.segment = Segment::stationary(time, self.position, self.config.time_speed);
        }
    }

    fn should_change_direction(&self) -> bool {
        self.direction == Direction::Up && self.velocity < 0.0
    }

    /// Only a block travelling toward the wall can hit it. A rebound leaves at
    /// position 0 and may start slower than the threshold at small scales.
    fn hit_wall(&self) -> bool {
        self.direction == Direction::Down
            && self.position <= 0.0
            && self.velocity <= self.config.impact_threshold()
    }

    /// Apex reached: start sliding back from it, unless friction holds the block there
    fn slide_down(&mut self, time: f64) {
        self.position = self.bounce_height;
        self.velocity = 0.0;

        let acceleration = physics::acceleration_down(&self.config) * self.config.scale;
        if acceleration >= 0.0 {
            self.segment = Segment::stationary(time, self.position, self.config.time_speed);
            self.settle();
            log::info!("Block stuck at apex {:.2} after {} bounces", self.position, self.bounces);
            return;
        }

        log::debug!("Reversal at apex {:.2}", self.position);
        self.segment = Segment::new(time, acceleration, self.position, 0.0, self.config.time_speed);
        self.direction = Direction::Down;
    }

    fn bounce(&mut self, time: f64) {
        let scale = self.config.scale;

        if self.bounce_height < SETTLE_HEIGHT {
            self.position = 0.0;
            self.velocity = 0.0;
            self.segment = Segment::stationary(time, 0.0, self.config.time_speed);
            self.settle();
            log::info!("Block settled at the wall after {} bounces", self.bounces);
            return;
        }

        self.bounces += 1;

        let acceleration = physics::acceleration_up(&self.config) * scale;
        let velocity = physics::bounce_velocity(&self.config, self.bounce_height / scale) * scale;
        self.bounce_height *= physics::distance_multiplier(&self.config);

        log::debug!(
            "Bounce {}: v={:.2}, next apex {:.2}",
            self.bounces,
            velocity,
            self.bounce_height
        );

        self.segment = Segment::new(time, acceleration, 0.0, velocity, self.config.time_speed);
        self.position = 0.0;
        self.velocity = velocity;
        self.direction = Direction::Up;
    }

    fn settle(&mut self) {
        self.settled = true;
        self.direction = Direction::Down;
        self.running = false;
    }

    pub fn will_move(&self) -> bool {
        physics::will_move(&self.config)
    }

    pub fn will_fly_off(&self) -> bool {
        physics::will_fly_off(&self.config)
    }

    pub fn phase(&self) -> Phase {
        if self.settled {
            Phase::Settled
        } else {
            match self.direction {
                Direction::Down => Phase::Sliding,
                Direction::Up => Phase::Flying,
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.segment.acceleration(),
            direction: self.direction,
            phase: self.phase(),
            bounce_height: self.bounce_height,
            bounces: self.bounces,
            running: self.running,
            velocity_discontinuous: self.velocity_discontinuous,
            acceleration_discontinuous: self.acceleration_discontinuous,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.segment.acceleration()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn bounce_height(&self) -> f64 {
        self.bounce_height
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn velocity_discontinuous(&self) -> bool {
        self.velocity_discontinuous
    }

    pub fn acceleration_discontinuous(&self) -> bool {
        self.acceleration_discontinuous
    }
}
