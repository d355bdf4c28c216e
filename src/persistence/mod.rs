//! Scoreboard persistence
//!
//! Features:
//! - Plain-text snapshot, one record per line
//! - Atomic save (tmp → rename), prior data survives a failed write
//! - Missing or truncated files load as far as they are readable

pub mod store;

pub use store::{ScoreStore, parse_records};
