//! Flat-file score storage
//!
//! File format: whitespace-separated `name level attempts` triples, written
//! one per line. Loading stops at the first triple that does not parse.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::consts::NAME_MAX_LEN;
use crate::error::{Error, Result};
use crate::highscores::{Attempts, Level, ScoreRecord, Scoreboard};

/// Score file handle (just the path; files are opened per call)
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load up to `capacity` records. A missing or unreadable file is an
    /// empty scoreboard.
    pub fn load(&self, capacity: usize) -> Scoreboard {
        let contents = match fs::read(&self.path).map_err(Error::from) {
            Ok(contents) => contents,
            Err(e) if e.is_not_found() => {
                log::info!("No score file at {}, starting fresh", self.path.display());
                return Scoreboard::with_capacity(capacity);
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return Scoreboard::with_capacity(capacity);
            }
        };

        let board = parse_records(&contents, capacity);
        log::info!(
            "Loaded {} scores from {}",
            board.len(),
            self.path.display()
        );
        board
    }

    /// Overwrite the score file with every record, in order.
    ///
    /// Writes go to a temporary sibling that replaces the target only once
    /// complete, so the previous file is intact on any error.
    pub fn save(&self, records: &[ScoreRecord]) -> Result<()> {
        let tmp = self.tmp_path();
        if let Err(e) = write_records(&tmp, records) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })?;
        log::info!(
            "Scoreboard saved ({} entries) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_records(path: &Path, records: &[ScoreRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Parse score-file contents into a scoreboard of the given capacity.
/// Anything after the first malformed triple is dropped, including a
/// triple with a token that is not valid UTF-8.
pub fn parse_records(contents: impl AsRef<[u8]>, capacity: usize) -> Scoreboard {
    let mut board = Scoreboard::with_capacity(capacity);
    let mut tokens = contents
        .as_ref()
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    while !board.is_full() {
        let Some(name) = tokens.next() else {
            break;
        };
        match parse_triple(name, tokens.next(), tokens.next()) {
            Ok(record) => {
                board.push(record);
            }
            Err(e) => {
                log::debug!("Stopping score load after {} records: {}", board.len(), e);
                break;
            }
        }
    }

    board
}

fn token_str(token: &[u8]) -> Result<&str> {
    std::str::from_utf8(token).map_err(|_| {
        Error::MalformedRecord(format!(
            "invalid UTF-8 in {:?}",
            String::from_utf8_lossy(token)
        ))
    })
}

fn parse_triple(
    name: &[u8],
    level: Option<&[u8]>,
    attempts: Option<&[u8]>,
) -> Result<ScoreRecord> {
    let name = token_str(name)?;
    let (Some(level), Some(attempts)) = (level, attempts) else {
        return Err(Error::MalformedRecord(format!("incomplete record for {}", name)));
    };
    let level = token_str(level)?;
    let attempts = token_str(attempts)?;
    if name.chars().count() > NAME_MAX_LEN {
        return Err(Error::MalformedRecord(format!("name too long: {}", name)));
    }
    let level = level
        .parse::<i64>()
        .map_err(|_| Error::MalformedRecord(format!("bad level {:?}", level)))?;
    let attempts = attempts
        .parse::<i64>()
        .ok()
        .and_then(Attempts::from_code)
        .ok_or_else(|| Error::MalformedRecord(format!("bad attempts {:?}", attempts)))?;

    ScoreRecord::new(name, Level::from_code(level), attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rec(name: &str, level: Level, attempts: Attempts) -> ScoreRecord {
        ScoreRecord::new(name, level, attempts).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let missing = ScoreStore::new(dir.path().join("nope.txt"));
        let empty_path = dir.path().join("empty.txt");
        fs::write(&empty_path, "").unwrap();
        let empty = ScoreStore::new(&empty_path);

        let a = missing.load(1000);
        let b = empty.load(1000);
        assert!(a.is_empty());
        assert_eq!(a.entries(), b.entries());
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.txt"));
        let records = vec![
            rec("Bob", Level::Medium, Attempts::Won(5)),
            rec("Amy", Level::Hard, Attempts::Lost),
            rec("Cid", Level::Easy, Attempts::Won(17)),
        ];

        store.save(&records).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "Bob 2 5\nAmy 3 -1\nCid 1 17\n");

        let loaded = store.load(1000);
        assert_eq!(loaded.entries(), records.as_slice());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.txt"));
        store
            .save(&[rec("Old", Level::Easy, Attempts::Won(1))])
            .unwrap();
        store
            .save(&[rec("New", Level::Hard, Attempts::Won(2))])
            .unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "New 3 2\n");
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_failed_save_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("missing-dir").join("scores.txt"));
        let err = store
            .save(&[rec("Amy", Level::Easy, Attempts::Won(1))])
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_rename_keeps_prior_data() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the final rename fail
        let target = dir.path().join("scores.txt");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "prior").unwrap();
        let store = ScoreStore::new(&target);

        assert!(
            store
                .save(&[rec("Amy", Level::Easy, Attempts::Won(1))])
                .is_err()
        );
        assert_eq!(fs::read_to_string(target.join("keep")).unwrap(), "prior");
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_parse_stops_at_malformed_triple() {
        let board = parse_records("Amy 3 2\nBob 2 x\nCid 1 4\n", 1000);
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].name, "Amy");

        let board = parse_records("Amy 3 2\nBob 2\n", 1000);
        assert_eq!(board.len(), 1);

        // Zero attempts is not a valid count
        let board = parse_records("Amy 3 0\nBob 2 1\n", 1000);
        assert!(board.is_empty());
    }

    #[test]
    fn test_load_stops_at_non_utf8_name_and_keeps_earlier_records() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.txt"));
        fs::write(store.path(), b"Amy 3 2\nBob 2 5\nJos\xe9 1 4\nCid 1 1\n").unwrap();

        let board = store.load(1000);
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[0].name, "Amy");
        assert_eq!(board.entries()[1].name, "Bob");

        // Saving back what was loaded keeps the readable records
        store.save(board.entries()).unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Amy 3 2\nBob 2 5\n"
        );
    }

    #[test]
    fn test_parse_stops_at_non_utf8_level() {
        let board = parse_records(b"Amy 3 2\nBob \xff 5\n", 1000);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_parse_keeps_unknown_levels() {
        let board = parse_records("Amy 9 2\n", 1000);
        assert_eq!(board.entries()[0].level, Level::Unknown(9));
        assert_eq!(board.entries()[0].to_string(), "Amy 9 2");
    }

    #[test]
    fn test_parse_stops_at_capacity() {
        let board = parse_records("A 1 1\nB 1 2\nC 1 3\n", 2);
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[1].name, "B");
    }

    #[test]
    fn test_parse_rejects_long_name() {
        let line = format!("{} 1 1\n", "x".repeat(NAME_MAX_LEN + 1));
        assert!(parse_records(&line, 10).is_empty());
    }
}
