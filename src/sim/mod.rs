//! Round simulation
//!
//! All guessing logic lives here. This module must stay pure:
//! - Randomness only through a caller-owned RNG
//! - No console or file access

pub mod round;
pub mod state;

pub use round::{Feedback, GuessOutcome, submit_guess};
pub use state::{Preset, RoundPhase, RoundState};
