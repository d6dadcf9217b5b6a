//! Castle Run headless demo runner
//!
//! Stands in for the desktop shell: opens a simulation, plays back a scripted
//! input sequence at the fixed tick cadence, logs gameplay events, and prints
//! the final snapshot as JSON. Seed and tick count are taken from argv.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use castle_run::consts::TICK_DT;
use castle_run::sim::{SimConfig, SimEvent, Simulation, TickInput, TickOutcome};

/// Scripted input: run right the whole time, hop on a fixed rhythm. Enough
/// to cross a few platforms and pick up coins deterministically.
fn scripted_input(t: u64) -> TickInput {
    TickInput {
        right: true,
        jump: t % 45 < 6,
        ..Default::default()
    }
}

fn run(seed: u64, ticks: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let mut sim = Simulation::open(config)?;

    let tick_interval = Duration::from_secs_f32(TICK_DT);
    let mut next_tick = Instant::now();

    for t in 0..ticks {
        if sim.tick(&scripted_input(t)) == TickOutcome::Quit {
            break;
        }

        for event in &sim.snapshot().events {
            match event {
                SimEvent::CoinCollected { index } => {
                    log::info!("coin {} collected, score {}", index, sim.snapshot().score);
                }
                SimEvent::EnemyStomped { index } => {
                    log::info!("enemy {} stomped, score {}", index, sim.snapshot().score);
                }
                SimEvent::PlayerDied => log::info!("player died, level reset"),
                SimEvent::GoalReached => log::info!("goal reached!"),
            }
        }

        // Hold the shell's ~16ms cadence
        next_tick += tick_interval;
        if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    println!("{}", serde_json::to_string_pretty(sim.snapshot())?);
    sim.close();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next().map(|s| s.parse()).transpose() {
        Ok(seed) => seed.unwrap_or(1337),
        Err(e) => {
            eprintln!("invalid seed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let ticks: u64 = match args.next().map(|s| s.parse()).transpose() {
        Ok(ticks) => ticks.unwrap_or(600),
        Err(e) => {
            eprintln!("invalid tick count: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(seed, ticks) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
