//! Browser bindings
//!
//! The page owns the canvas and the `requestAnimationFrame` loop; it passes
//! the frame timestamp in and reads JSON snapshots back out.

use wasm_bindgen::prelude::*;

use crate::config::{Config, ConfigWarning};
use crate::geometry::PlaneGeometry;
use crate::sim::Simulation;

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn warnings_array(warnings: &[ConfigWarning]) -> js_sys::Array {
    warnings
        .iter()
        .map(|w| JsValue::from_str(&w.to_string()))
        .collect()
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Incline Bounce starting...");
}

#[wasm_bindgen]
pub struct WebSimulation {
    sim: Simulation,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Build from a JSON config, or from the stored one when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebSimulation, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(to_js)?,
            None => Config::load_stored(),
        };
        let sim = Simulation::new(config, js_sys::Date::now()).map_err(to_js)?;
        Ok(Self { sim })
    }

    /// Apply a new config; returns its warnings
    pub fn reset(&mut self, config_json: &str, now: f64) -> Result<js_sys::Array, JsValue> {
        let config = Config::from_json(config_json).map_err(to_js)?;
        let warnings = self.sim.reset(config, now).map_err(to_js)?;
        let array = warnings_array(warnings);
        config.store();
        Ok(array)
    }

    /// Rescale to fit a `width` x `height` canvas (resets the run)
    pub fn fit_scale(&mut self, width: f64, height: f64, now: f64) -> Result<(), JsValue> {
        let mut config = *self.sim.config();
        config.fit_scale(width, height);
        self.sim.reset(config, now).map_err(to_js)?;
        Ok(())
    }

    /// Start over from the current config
    pub fn start(&mut self, now: f64) {
        self.sim.start(now);
    }

    /// Resume if paused, otherwise start over
    pub fn play(&mut self, now: f64) {
        self.sim.play(now);
    }

    pub fn pause(&mut self) {
        self.sim.pause();
    }

    pub fn resume(&mut self, now: f64) {
        self.sim.resume(now);
    }

    /// Advance to `now` and return the snapshot as JSON
    pub fn frame(&mut self, now: f64) -> Result<String, JsValue> {
        let snapshot = self.sim.frame(now);
        serde_json::to_string(&snapshot).map_err(to_js)
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.sim.snapshot()).map_err(to_js)
    }

    pub fn history_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.sim.history()).map_err(to_js)
    }

    pub fn geometry_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&PlaneGeometry::from_config(self.sim.config())).map_err(to_js)
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.sim.config().to_json().map_err(to_js)
    }

    pub fn warnings(&self) -> js_sys::Array {
        warnings_array(self.sim.warnings())
    }

    /// Seconds since start, pauses excluded
    pub fn elapsed_seconds(&self) -> f64 {
        self.sim.elapsed() / crate::consts::MS_PER_SECOND
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.sim.is_paused()
    }
}
