//! Run controller: reset / start / pause / resume around a single block
//!
//! The host owns the frame loop and passes in a wall-clock sample (ms) on
//! every call. Pausing is just "stop calling `frame`"; resuming shifts the
//! block's time origin by the paused duration so the trajectory continues
//! without a jump.

use super::block::{Block, Snapshot};
use super::history::History;
use crate::config::{Config, ConfigError, ConfigWarning};

/// A simulation run
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    block: Block,
    history: History,
    warnings: Vec<ConfigWarning>,
    /// Sample time the run started at (moved forward by pauses)
    start_time: f64,
    /// Latest sample time seen while running
    end_time: f64,
    paused: bool,
}

impl Simulation {
    /// Validate `config` and build an idle run at sample time `now`
    pub fn new(config: Config, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let warnings = config.warnings();
        for warning in &warnings {
            log::warn!("{}", warning);
        }
        Ok(Self {
            block: Block::new(&config, now),
            history: History::new(&config),
            warnings,
            config,
            start_time: now,
            end_time: now,
            paused: false,
        })
    }

    /// Replace the run with one for `config`.
    ///
    /// On error the current run is left untouched.
    pub fn reset(&mut self, config: Config, now: f64) -> Result<&[ConfigWarning], ConfigError> {
        let fresh = Self::new(config, now)?;
        *self = fresh;
        log::info!("Simulation reset");
        Ok(&self.warnings)
    }

    /// Start a fresh run from the current config
    pub fn start(&mut self, now: f64) {
        self.block = Block::new(&self.config, now);
        self.history.clear();
        self.paused = false;
        self.start_time = now;
        self.end_time = now;
        if self.block.start() {
            log::info!("Simulation started");
        } else {
            log::info!("Simulation started with a block that cannot move");
        }
    }

    /// Play button: resume a paused run, otherwise start over
    pub fn play(&mut self, now: f64) {
        if self.paused {
            self.resume(now);
        } else {
            self.start(now);
        }
    }

    pub fn pause(&mut self) {
        if !self.block.is_running() {
            return;
        }
        self.block.stop();
        self.paused = true;
        log::info!("Simulation paused at {:.0} ms", self.elapsed());
    }

    pub fn resume(&mut self, now: f64) {
        if !self.paused {
            return;
        }
        let paused_for = now - self.end_time;
        self.block.shift_time(paused_for);
        self.start_time += paused_for;
        self.end_time = now;
        self.paused = false;
        self.block.start();
        log::info!("Simulation resumed after {:.0} ms", paused_for);
    }

    /// Advance to sample time `now` and record the result.
    ///
    /// Does nothing unless the run is active.
    pub fn frame(&mut self, now: f64) -> Snapshot {
        if self.block.is_running() {
            self.end_time = now;
            self.block.update_motion(now);

            let snapshot = self.block.snapshot();
            self.history.record(self.elapsed(), &snapshot);
            if !snapshot.running {
                log::info!(
                    "Run finished after {:.2} s with {} bounces",
                    self.elapsed() / crate::consts::MS_PER_SECOND,
                    snapshot.bounces
                );
            }
            return snapshot;
        }
        self.block.snapshot()
    }

    /// Milliseconds of simulated wall-clock time since start, pauses excluded
    pub fn elapsed(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn snapshot(&self) -> Snapshot {
        self.block.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.block.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::block::Phase;

    const FRAME: f64 = 1000.0 / 60.0;

    fn lossy() -> Config {
        Config {
            friction: 0.1,
            energy: 0.8,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            length: -1.0,
            ..Default::default()
        };
        assert!(matches!(Simulation::new(config, 0.0), Err(ConfigError::Length(_))));
    }

    #[test]
    fn test_idle_until_started() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        let before = sim.snapshot();
        let after = sim.frame(5000.0);
        assert_eq!(before, after);
        assert!(!sim.is_running());
        assert!(sim.history().position.is_empty());
    }

    #[test]
    fn test_frames_record_history() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        sim.start(1000.0);
        for i in 1..=10 {
            sim.frame(1000.0 + i as f64 * FRAME);
        }
        assert_eq!(sim.history().position.len(), 10);
        assert!((sim.elapsed() - 10.0 * FRAME).abs() < 1e-9);
        assert!(sim.snapshot().position < sim.config().top_position());
    }

    #[test]
    fn test_pause_resume_continuity() {
        let mut continuous = Simulation::new(lossy(), 0.0).unwrap();
        let mut paused = Simulation::new(lossy(), 0.0).unwrap();
        continuous.start(0.0);
        paused.start(0.0);

        let t1 = 400.0;
        continuous.frame(t1);
        paused.frame(t1);

        paused.pause();
        assert!(paused.is_paused());
        assert!(!paused.is_running());
        // Paused frames don't advance anything
        let frozen = paused.frame(t1 + 1000.0);
        assert_eq!(frozen.position, paused.block().position());

        let gap = 5000.0;
        paused.resume(t1 + gap);
        let a = continuous.frame(t1 + 50.0);
        let b = paused.frame(t1 + gap + 50.0);

        assert!((a.position - b.position).abs() < 1e-9);
        assert!((a.velocity - b.velocity).abs() < 1e-9);
        assert!((continuous.elapsed() - paused.elapsed()).abs() < 1e-9);
    }

    #[test]
    fn test_play_resumes_or_restarts() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        sim.play(0.0);
        sim.frame(300.0);
        let position = sim.snapshot().position;

        sim.pause();
        sim.play(10_000.0);
        assert!(sim.is_running());
        assert_eq!(sim.frame(10_000.0).position, position);

        // Not paused: play starts over from the top
        sim.play(20_000.0);
        assert!((sim.snapshot().position - sim.config().top_position()).abs() < 1e-9);
        assert!(sim.history().position.is_empty());
    }

    #[test]
    fn test_run_finishes_when_settled() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        sim.start(0.0);
        let mut t = 0.0;
        while sim.is_running() && t < 120_000.0 {
            t += FRAME;
            sim.frame(t);
        }
        let snap = sim.snapshot();
        assert_eq!(snap.phase, Phase::Settled);
        assert_eq!(snap.position, 0.0);

        // A settled run can't be paused or resumed
        sim.pause();
        assert!(!sim.is_paused());
    }

    #[test]
    fn test_reset_swaps_config_and_reports_warnings() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        sim.start(0.0);
        sim.frame(FRAME);

        let sticky = Config {
            friction: 2.0,
            ..Default::default()
        };
        let warnings = sim.reset(sticky, 100.0).unwrap().to_vec();
        assert_eq!(warnings, vec![ConfigWarning::WontMove]);
        assert_eq!(sim.config().friction, 2.0);
        assert!(!sim.is_running());

        sim.start(200.0);
        assert!(!sim.is_running());
        assert_eq!(sim.snapshot().phase, Phase::Settled);
    }

    #[test]
    fn test_rejected_reset_keeps_current_run() {
        let mut sim = Simulation::new(lossy(), 0.0).unwrap();
        sim.start(0.0);
        sim.frame(FRAME);
        let before = sim.snapshot();

        let bad = Config {
            scale: 0.0,
            ..Default::default()
        };
        assert!(sim.reset(bad, FRAME).is_err());
        assert_eq!(sim.snapshot(), before);
        assert!(sim.is_running());
        assert_eq!(sim.config().friction, 0.1);
    }
}
