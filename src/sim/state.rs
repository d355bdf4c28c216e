//! Round state and difficulty presets

use rand::Rng;

use crate::highscores::{Attempts, Level};

/// Range and attempt cap for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub level: Level,
    /// Target is drawn from `1..=max_range`
    pub max_range: u32,
    /// `None` means unlimited attempts
    pub max_attempts: Option<u32>,
}

impl Preset {
    pub const EASY: Preset = Preset {
        level: Level::Easy,
        max_range: 50,
        max_attempts: None,
    };
    pub const MEDIUM: Preset = Preset {
        level: Level::Medium,
        max_range: 100,
        max_attempts: Some(10),
    };
    pub const HARD: Preset = Preset {
        level: Level::Hard,
        max_range: 500,
        max_attempts: Some(7),
    };

    /// Map a menu choice to a preset. Anything but 1-3 falls back to Medium;
    /// the flag is true when that happened.
    pub fn from_choice(choice: Option<i64>) -> (Preset, bool) {
        match choice {
            Some(1) => (Self::EASY, false),
            Some(2) => (Self::MEDIUM, false),
            Some(3) => (Self::HARD, false),
            _ => (Self::MEDIUM, true),
        }
    }

    /// Menu line describing this preset
    pub fn describe(&self) -> String {
        let attempts = match self.max_attempts {
            Some(n) => format!("Max {} attempts", n),
            None => "Unlimited attempts".to_string(),
        };
        format!("1-{}, {}", self.max_range, attempts)
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingGuess,
    Won,
    Lost,
}

/// State of one guessing round
#[derive(Debug, Clone)]
pub struct RoundState {
    pub preset: Preset,
    pub target: u32,
    /// Numeric guesses made so far
    pub attempts: u32,
    pub phase: RoundPhase,
}

impl RoundState {
    /// Start a round with a target drawn from the session RNG
    pub fn new<R: Rng + ?Sized>(preset: Preset, rng: &mut R) -> Self {
        let target = rng.random_range(1..=preset.max_range);
        Self::with_target(preset, target)
    }

    /// Start a round with a known target
    pub fn with_target(preset: Preset, target: u32) -> Self {
        Self {
            preset,
            target,
            attempts: 0,
            phase: RoundPhase::AwaitingGuess,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase != RoundPhase::AwaitingGuess
    }

    /// Remaining attempts, `None` when unlimited
    pub fn attempts_left(&self) -> Option<u32> {
        self.preset
            .max_attempts
            .map(|cap| cap.saturating_sub(self.attempts))
    }

    /// Scoreboard result once the round is over
    pub fn result(&self) -> Option<Attempts> {
        match self.phase {
            RoundPhase::AwaitingGuess => None,
            RoundPhase::Won => Some(Attempts::Won(self.attempts)),
            RoundPhase::Lost => Some(Attempts::Lost),
        }
    }
}
