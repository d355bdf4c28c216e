//! Guess evaluation
//!
//! Pure transition function for a round: no I/O, no randomness.

use std::cmp::Ordering;

use super::state::{RoundPhase, RoundState};
use crate::error::{Error, Result};

/// Hint returned for a numeric guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    /// Phase after the guess was applied
    pub phase: RoundPhase,
}

/// Apply a numeric guess to the round.
///
/// Every guess counts as an attempt. A capped round is lost on the guess
/// that reaches the cap without hitting the target.
pub fn submit_guess(state: &mut RoundState, guess: i64) -> Result<GuessOutcome> {
    if state.is_finished() {
        return Err(Error::RoundFinished);
    }

    state.attempts = state.attempts.saturating_add(1);

    let feedback = match guess.cmp(&i64::from(state.target)) {
        Ordering::Less => Feedback::TooLow,
        Ordering::Greater => Feedback::TooHigh,
        Ordering::Equal => Feedback::Correct,
    };

    state.phase = if feedback == Feedback::Correct {
        RoundPhase::Won
    } else if state
        .preset
        .max_attempts
        .is_some_and(|cap| state.attempts >= cap)
    {
        RoundPhase::Lost
    } else {
        RoundPhase::AwaitingGuess
    };

    Ok(GuessOutcome {
        feedback,
        phase: state.phase,
    })
}
