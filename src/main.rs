//! Guessboard entry point
//!
//! Wires stdin/stdout, settings and a wall-clock seed into a session.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use guessboard::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Guessboard starting...");

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let stdin = io::stdin();
    let mut session = Session::new(&settings, seed, stdin.lock(), io::stdout());
    match session.run() {
        Ok(summary) => log::info!(
            "Session over: {} rounds played, {} recorded, saved: {}",
            summary.rounds_played,
            summary.rounds_recorded,
            summary.saved
        ),
        // Exit status stays successful; the player already saw what happened
        Err(e) => log::error!("Session aborted: {}", e),
    }
}
