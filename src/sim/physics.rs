//! Closed-form equations for a block on a frictional incline
//!
//! Quantities here are in unscaled units; callers multiply by `Config::scale`.
//! Negative acceleration points toward the wall at the base of the plane.

use crate::config::Config;

/// Acceleration while sliding toward the wall (negative if the block slides)
pub fn acceleration_down(config: &Config) -> f64 {
    let Config {
        gravity,
        friction,
        angle,
        ..
    } = *config;
    -(gravity * angle.sin() - friction * gravity * angle.cos())
}

/// Acceleration while moving away from the wall (never positive)
pub fn acceleration_up(config: &Config) -> f64 {
    let Config {
        gravity,
        friction,
        angle,
        ..
    } = *config;
    -(gravity * angle.sin() + friction * gravity * angle.cos())
}

/// Largest-magnitude acceleration the block can experience
pub fn max_acceleration(config: &Config) -> f64 {
    acceleration_up(config)
}

/// Whether gravity overcomes friction so a resting block starts to slide
pub fn will_move(config: &Config) -> bool {
    let Config {
        gravity,
        friction,
        angle,
        ..
    } = *config;
    gravity * angle.sin() > friction * gravity * angle.cos()
}

/// Distance up the plane reached when launched from the wall at `initial_velocity`
pub fn initial_height(config: &Config) -> f64 {
    let Config {
        gravity,
        friction,
        angle,
        initial_velocity,
        ..
    } = *config;
    initial_velocity.powi(2)
        / (2.0 * gravity * angle.sin() + 2.0 * friction * gravity * angle.cos())
}

/// Whether the launch carries the block past the top of the plane
pub fn will_fly_off(config: &Config) -> bool {
    initial_height(config) + config.block_size > config.length
}

/// Speed leaving the wall after sliding down from `height`.
///
/// Returns 0 when the energy left after friction is negative (the block
/// doesn't rebound at all).
pub fn bounce_velocity(config: &Config, height: f64) -> f64 {
    let Config {
        gravity,
        friction,
        angle,
        energy,
        ..
    } = *config;
    let v = (2.0 * energy * gravity * height * angle.sin()
        - 2.0 * friction * gravity * height * angle.cos())
    .sqrt();
    if v.is_nan() { 0.0 } else { v }
}

/// Ratio of successive apex heights.
///
/// Returns 0 when undefined (flat, frictionless plane).
pub fn distance_multiplier(config: &Config) -> f64 {
    let Config {
        friction,
        angle,
        energy,
        ..
    } = *config;
    let ratio = (energy * angle.sin() - friction * angle.cos())
        / (angle.sin() + friction * angle.cos());
    if ratio.is_finite() { ratio } else { 0.0 }
}
