//! Nova Strike entry point
//!
//! Headless driver: loads settings, steps the session at the target frame rate
//! with autopilot (or idle) intents, and prints the final frame as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use nova_strike::Settings;
use nova_strike::settings::SETTINGS_FILE;
use nova_strike::sim::{GameEvent, GamePhase, Session, TickInput, autopilot};

fn main() {
    env_logger::init();
    log::info!("Nova Strike (headless) starting...");

    let path = std::env::args().nth(1).unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = Settings::load(&path);
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(&settings, seed);

    let fps = settings.target_fps.max(1) as u64;
    let mut runs = 1u32;
    let mut best_score = 0u64;

    for frame in 0..settings.demo_frames {
        // Integer frame times that average out to exactly 1/fps
        let elapsed_ms = ((frame + 1) * 1000 / fps - frame * 1000 / fps) as u32;

        let input = if settings.autopilot {
            autopilot(session.state())
        } else {
            TickInput::default()
        };
        let was_over = session.phase() == GamePhase::GameOver;

        for event in session.frame(&input, elapsed_ms) {
            if let GameEvent::GameOver { score, level } = event {
                log::info!("Run {} over: score {} at level {}", runs, score, level);
                best_score = best_score.max(*score);
            }
        }

        if was_over && session.phase() == GamePhase::Running {
            runs += 1;
        }
        if session.is_terminated() {
            break;
        }
    }

    let snapshot = session.snapshot();
    best_score = best_score.max(snapshot.hud.score);
    log::info!(
        "Finished after {} run(s), best score {}, seed {}",
        runs,
        best_score,
        seed
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

/// Seed derived from the wall clock for unseeded runs
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
