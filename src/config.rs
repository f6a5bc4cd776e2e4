//! Plane and block configuration
//!
//! A configuration is immutable for the duration of a run; any change means a
//! new block. Persisted as JSON (LocalStorage on web, a file on native).

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::sim::physics;

/// Rejected configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Angle must be between 0 and 90 degrees (got {0} rad)")]
    Angle(f64),

    #[error("Plane length must be positive (got {0})")]
    Length(f64),

    #[error("Block size must be positive and shorter than the plane (got {size}, plane {length})")]
    BlockSize { size: f64, length: f64 },

    #[error("Gravity must be positive (got {0})")]
    Gravity(f64),

    #[error("Friction coefficient must not be negative (got {0})")]
    Friction(f64),

    #[error("Energy retention must not be negative (got {0})")]
    Energy(f64),

    #[error("Scale must be positive (got {0})")]
    Scale(f64),

    #[error("Time speed must not be negative (got {0})")]
    TimeSpeed(f64),

    #[error("Initial velocity must not be negative (got {0})")]
    InitialVelocity(f64),

    #[error("Impact epsilon must be positive (got {0})")]
    ImpactEpsilon(f64),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Advisory conditions that make a run degenerate but not invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigWarning {
    /// Friction holds the block; it will never slide
    WontMove,
    /// The launch carries the block past the top of the plane
    FliesOff,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::WontMove => write!(f, "The block will not start sliding"),
            ConfigWarning::FliesOff => write!(f, "The block will fly off the top of the plane"),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plane inclination (radians, 0..π/2)
    pub angle: f64,
    /// Plane length along the slope
    pub length: f64,
    /// Edge length of the (square) block
    pub block_size: f64,
    pub gravity: f64,
    /// Kinetic friction coefficient
    pub friction: f64,
    /// Fraction of energy kept on each bounce
    pub energy: f64,
    /// Pixels per unit; multiplies every spatial quantity
    pub scale: f64,
    /// Simulation speed multiplier
    pub time_speed: f64,
    /// Launch speed up the plane from the wall (0 = release from the top)
    pub initial_velocity: f64,
    /// Velocity threshold for wall impact detection (defaults to 1/scale)
    pub impact_epsilon: Option<f64>,
    /// Renderer hint: draw velocity/acceleration arrows
    pub display_vectors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle: 30f64.to_radians(),
            length: 6.0,
            block_size: 0.5,
            gravity: 9.81,
            friction: 0.5,
            energy: 1.0,
            scale: 150.0,
            time_speed: 1.0,
            initial_velocity: 0.0,
            impact_epsilon: None,
            display_vectors: true,
        }
    }
}

impl Config {
    /// Set the angle from degrees
    pub fn with_angle_degrees(mut self, degrees: f64) -> Self {
        self.angle = degrees.to_radians();
        self
    }

    /// Set the plane length from its vertical height at the current angle
    pub fn with_height(mut self, height: f64) -> Self {
        self.length = height / self.angle.sin();
        self
    }

    /// Top of the plane in scaled units (where a released block starts)
    pub fn top_position(&self) -> f64 {
        self.scale * (self.length - self.block_size)
    }

    /// Wall impact velocity threshold in scaled units
    pub fn impact_threshold(&self) -> f64 {
        self.impact_epsilon.unwrap_or(1.0 / self.scale)
    }

    /// Reject out-of-range values before a block is built from them
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as !(x >= lo) so NaN is rejected too
        if !(self.angle >= 0.0 && self.angle <= FRAC_PI_2) {
            return Err(ConfigError::Angle(self.angle));
        }
        if !(self.length > 0.0 && self.length.is_finite()) {
            return Err(ConfigError::Length(self.length));
        }
        if !(self.block_size > 0.0 && self.block_size < self.length) {
            return Err(ConfigError::BlockSize {
                size: self.block_size,
                length: self.length,
            });
        }
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !(self.friction >= 0.0 && self.friction.is_finite()) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.energy >= 0.0 && self.energy.is_finite()) {
            return Err(ConfigError::Energy(self.energy));
        }
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(ConfigError::Scale(self.scale));
        }
        if !(self.time_speed >= 0.0 && self.time_speed.is_finite()) {
            return Err(ConfigError::TimeSpeed(self.time_speed));
        }
        if !(self.initial_velocity >= 0.0 && self.initial_velocity.is_finite()) {
            return Err(ConfigError::InitialVelocity(self.initial_velocity));
        }
        if let Some(eps) = self.impact_epsilon {
            if !(eps > 0.0 && eps.is_finite()) {
                return Err(ConfigError::ImpactEpsilon(eps));
            }
        }
        Ok(())
    }

    /// Degenerate-run warnings, checked once per reset
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if !physics::will_move(self) {
            warnings.push(ConfigWarning::WontMove);
        }
        if physics::will_fly_off(self) {
            warnings.push(ConfigWarning::FliesOff);
        }
        warnings
    }

    /// Pick the largest scale at which the plane fits a `width` x `height` viewport
    pub fn fit_scale(&mut self, width: f64, height: f64) {
        let x_scale = width / (2.0 * self.length * self.angle.cos()) * 0.7;
        let y_scale = height / (2.0 * self.length * self.angle.sin()) * 1.2;
        self.scale = x_scale.min(y_scale);
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "incline_bounce_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_stored() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn store(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Load config from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
