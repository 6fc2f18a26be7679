//! Numfall headless demo driver
//!
//! Runs the simulation for a scripted stretch at a fixed frame cadence,
//! periodically answering the gun problem and one enemy problem, and logs
//! the events a UI layer would render. Useful for eyeballing balance
//! changes without a front end.

use std::path::Path;

use numfall::sim::Simulation;
use numfall::{ArithmeticSource, Settings, Tuning};

/// Simulated frame cadence
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Demo length in frames (two simulated minutes)
const DEMO_FRAMES: u32 = 120 * 60;

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let tuning = Tuning::load_or_default(Path::new("numfall_tuning.json"));
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xDECAF);

    let source = ArithmeticSource::new(seed.wrapping_add(1));
    let mut sim = Simulation::new(seed, tuning, &settings, Box::new(source));
    log::info!("demo run, seed {seed}");

    for frame in 0..DEMO_FRAMES {
        sim.tick(FRAME_MS);

        // Every three seconds, solve the oldest enemy's problem; every five,
        // the gun's. Interleaved they exercise the whole dispatch surface.
        if frame % 180 == 90 {
            if let Some(answer) = sim.enemies.first().map(|e| e.problem.answer) {
                sim.submit_answer(answer);
            }
        }
        if frame % 300 == 150 {
            let answer = sim.gun_problem.answer;
            sim.submit_answer(answer);
        }

        for event in sim.drain_events() {
            log::info!("frame {frame}: {event:?}");
        }
        if sim.run.game_over {
            break;
        }
    }

    println!(
        "final: score {} level {} lives {}",
        sim.run.score, sim.difficulty.level, sim.run.lives
    );
}
