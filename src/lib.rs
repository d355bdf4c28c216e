//! Guessboard - A console number-guessing game
//!
//! Core modules:
//! - `sim`: Pure round logic (difficulty presets, guess evaluation)
//! - `highscores`: Score records, scoreboard ordering and rendering
//! - `persistence`: Flat-file score storage
//! - `session`: Interactive driver tying rounds and the scoreboard together
//! - `settings`: Optional JSON configuration

pub mod console;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use highscores::{Attempts, Level, ScoreRecord, Scoreboard};
pub use persistence::ScoreStore;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Longest accepted player name (characters)
    pub const NAME_MAX_LEN: usize = 49;
    /// Default scoreboard capacity
    pub const DEFAULT_CAPACITY: usize = 1000;
    /// Default score file, relative to the working directory
    pub const DEFAULT_SCORE_FILE: &str = "scoreboard.txt";
    /// Settings file, relative to the working directory
    pub const SETTINGS_FILE: &str = "guessboard.json";
    /// Attempts column value marking a lost round
    pub const LOSS_SENTINEL: i64 = -1;
}
