//! Scoreboard records and ordering
//!
//! A record is one finished round. The scoreboard keeps every round in play
//! order; sorting only happens on a copy for display.

use std::cmp::Ordering;
use std::fmt;

use crate::consts::{DEFAULT_CAPACITY, LOSS_SENTINEL, NAME_MAX_LEN};
use crate::error::{Error, Result};

/// Difficulty level a round was played at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    /// Level code read from a score file that maps to no preset
    Unknown(i64),
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
            Level::Unknown(_) => "Unknown",
        }
    }

    /// Numeric code used in the score file
    pub fn code(&self) -> i64 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
            Level::Unknown(code) => *code,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Level::Easy,
            2 => Level::Medium,
            3 => Level::Hard,
            other => Level::Unknown(other),
        }
    }

    /// Sort key: presets rank above unknown codes
    fn rank(&self) -> (u8, i64) {
        match self {
            Level::Unknown(code) => (0, *code),
            Level::Easy => (1, 0),
            Level::Medium => (2, 0),
            Level::Hard => (3, 0),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round outcome as stored on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attempts {
    /// Guessed correctly after this many attempts (always >= 1)
    Won(u32),
    Lost,
}

impl Attempts {
    /// Numeric code used in the score file (`-1` for a loss)
    pub fn code(&self) -> i64 {
        match self {
            Attempts::Won(n) => i64::from(*n),
            Attempts::Lost => LOSS_SENTINEL,
        }
    }

    /// Parse a score-file code; zero and negatives other than the sentinel are rejected
    pub fn from_code(code: i64) -> Option<Self> {
        if code == LOSS_SENTINEL {
            return Some(Attempts::Lost);
        }
        u32::try_from(code).ok().filter(|n| *n >= 1).map(Attempts::Won)
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Attempts::Won(_))
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempts::Won(n) => write!(f, "{}", n),
            Attempts::Lost => f.write_str("Lost"),
        }
    }
}

/// Check a player name against the storage rules
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName("name is empty".to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidName("name must not contain spaces".to_string()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(Error::InvalidName(format!(
            "name is longer than {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(())
}

/// A single finished round
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreRecord {
    pub name: String,
    pub level: Level,
    pub attempts: Attempts,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, level: Level, attempts: Attempts) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            level,
            attempts,
        })
    }
}

/// Formats the record as a score-file line (without the newline)
impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.name,
            self.level.code(),
            self.attempts.code()
        )
    }
}

impl Ord for ScoreRecord {
    /// Level descending, wins before losses, then attempts descending,
    /// then name ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .level
            .rank()
            .cmp(&self.level.rank())
            .then_with(|| match (self.attempts, other.attempts) {
                // Larger counts first among wins
                (Attempts::Won(a), Attempts::Won(b)) => b.cmp(&a),
                (Attempts::Won(_), Attempts::Lost) => Ordering::Less,
                (Attempts::Lost, Attempts::Won(_)) => Ordering::Greater,
                (Attempts::Lost, Attempts::Lost) => Ordering::Equal,
            })
            .then_with(|| self.name.as_bytes().cmp(other.name.as_bytes()))
    }
}

impl PartialOrd for ScoreRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// All recorded rounds, bounded by a capacity
#[derive(Debug, Clone)]
pub struct Scoreboard {
    entries: Vec<ScoreRecord>,
    capacity: usize,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Scoreboard {
    /// Create an empty scoreboard holding at most `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Append a record. Returns false (and drops the record) when full.
    pub fn push(&mut self, record: ScoreRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(record);
        true
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted copy for display; play order is left alone
    pub fn sorted(&self) -> Vec<ScoreRecord> {
        let mut sorted = self.entries.clone();
        sorted.sort();
        sorted
    }

    /// Render the sorted scoreboard as a console table
    pub fn render_table(&self) -> String {
        format_table(&self.sorted())
    }
}

/// Format records as the scoreboard table, in the order given
pub fn format_table(records: &[ScoreRecord]) -> String {
    let mut out = String::new();
    out.push_str("\n============= SCOREBOARD =============\n");
    out.push_str("No. | Name         | Level   | Attempts\n");
    out.push_str("----+--------------+---------+---------\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<12} | {:<7} | {}\n",
            i + 1,
            record.name,
            record.level.as_str(),
            record.attempts
        ));
    }
    out.push_str("=======================================\n");
    out
}
