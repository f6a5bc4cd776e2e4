//! Incline Bounce headless runner
//!
//! Drives a simulation with a synthetic 60 Hz clock and prints each bounce.
//! Usage: `incline-bounce [config.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use incline_bounce::consts::{FRAME_MS, MS_PER_SECOND};
    use incline_bounce::{Config, Simulation};
    use std::path::Path;
    use std::process::exit;

    env_logger::init();
    log::info!("Incline Bounce (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                exit(1);
            }
        },
        None => Config::default(),
    };
    let seconds = match args.next().map(|s| s.parse::<f64>()) {
        Some(Ok(seconds)) if seconds > 0.0 => seconds,
        Some(_) => {
            log::error!("Duration must be a positive number of seconds");
            exit(2);
        }
        None => 30.0,
    };

    let mut sim = match Simulation::new(config, 0.0) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{}", e);
            exit(1);
        }
    };
    for warning in sim.warnings() {
        println!("warning: {}", warning);
    }

    let scale = config.scale;
    let mut bounces = 0;
    let mut t = 0.0;
    sim.start(t);
    while sim.is_running() && sim.elapsed() < seconds * MS_PER_SECOND {
        t += FRAME_MS;
        let snap = sim.frame(t);
        if snap.bounces != bounces {
            bounces = snap.bounces;
            println!(
                "{:>8.3} s  bounce {:>3}  speed {:>7.3}  next apex {:>7.3}",
                sim.elapsed() / MS_PER_SECOND,
                bounces,
                snap.velocity / scale,
                snap.bounce_height / scale
            );
        }
    }

    let snap = sim.snapshot();
    println!(
        "\n{:?} after {:.3} s: position {:.3}, velocity {:.3}, {} bounces",
        snap.phase,
        sim.elapsed() / MS_PER_SECOND,
        snap.position / scale,
        snap.velocity / scale,
        snap.bounces
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::init, this is just to satisfy the compiler
}
