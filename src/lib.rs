//! Incline Bounce - a block sliding and bouncing on a frictional inclined plane
//!
//! Core modules:
//! - `sim`: Physics core (kinematics segments, block state machine, run controller)
//! - `config`: Plane/block configuration, validation and persistence
//! - `geometry`: Scene coordinates for renderers
//! - `web`: Browser bindings (wasm32 only)

pub mod config;
pub mod geometry;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{Config, ConfigError, ConfigWarning};
pub use geometry::PlaneGeometry;
pub use sim::{Block, Direction, Phase, Segment, Simulation, Snapshot};

/// Simulation constants
pub mod consts {
    /// Sample times are wall-clock milliseconds
    pub const MS_PER_SECOND: f64 = 1000.0;

    /// Residual apex height (scaled units) below which the block is settled
    pub const SETTLE_HEIGHT: f64 = 1.0;

    /// Samples kept per history trace
    pub const HISTORY_CAPACITY: usize = 400;

    /// Frame interval used by the headless runner (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
