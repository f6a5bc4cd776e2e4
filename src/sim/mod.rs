//! Physics core
//!
//! Everything here is pure and synchronous:
//! - Time is an explicit millisecond sample, never read from a clock
//! - Configuration is passed in, never read from ambient state
//! - Phase changes replace the kinematics segment instead of mutating it

pub mod block;
pub mod history;
pub mod motion;
pub mod physics;
pub mod simulation;

pub use block::{Block, Direction, Phase, Snapshot};
pub use history::{History, PlotBounds, Sample, Trace};
pub use motion::Segment;
pub use simulation::Simulation;
