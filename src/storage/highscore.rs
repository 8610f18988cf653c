//! Persistent best score
//!
//! The score file holds a single line `COUNTRY=<attempts>`. Stored values of one
//! or less read back as "no best"; the writer still accepts a score of one, so a
//! perfect first-guess game is saved but not reported by later sessions.

use crate::error::HighScoreError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Category label for the only game mode
pub const CATEGORY: &str = "COUNTRY";

/// Stored values at or below this are ignored on read
const MIN_READABLE_SCORE: u32 = 1;

/// Reads and overwrites the best-score file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score
    ///
    /// Never fails: a missing, unreadable, or malformed file all read as `None`.
    #[must_use]
    pub fn read_best(&self) -> Option<u32> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score file");
                return None;
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Could not read high score");
                return None;
            }
        };

        let best = parse_best(&content);
        if best.is_none() && !content.trim().is_empty() {
            debug!(path = %self.path.display(), "Ignoring malformed high score file");
        }
        debug!(?best, "Read high score");
        best
    }

    /// Overwrite the file with a new best score
    ///
    /// Creates the parent directory if needed. The new contents go to a temporary
    /// file in the same directory which then replaces the old one, so a failed
    /// write leaves the previous score in place.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::NonPositiveScore` for a score of zero, which no
    /// finished game can produce, and `HighScoreError::Io` if the file cannot be
    /// written.
    pub fn write_best(&self, attempts: u32) -> Result<(), HighScoreError> {
        if attempts == 0 {
            return Err(HighScoreError::NonPositiveScore(attempts));
        }

        replace_file(&self.path, |file| writeln!(file, "{CATEGORY}={attempts}"))?;
        info!(attempts, path = %self.path.display(), "Saved new best score");
        Ok(())
    }
}

/// Write `path` through a temporary sibling that is renamed over it on success
fn replace_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    write(temp_file.as_file_mut())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Parse the first line of a score file
///
/// The number must fit a signed 32-bit integer; anything larger is malformed.
fn parse_best(content: &str) -> Option<u32> {
    let line = content.lines().next()?.trim();
    let number = line.strip_prefix(CATEGORY)?.strip_prefix('=')?.trim();
    let value: i32 = number.parse().ok()?;
    let value = u32::try_from(value).ok()?;

    (value > MIN_READABLE_SCORE).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).read_best(), None);
    }

    #[test]
    fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for n in [2, 3, 17, 1000] {
            store.write_best(n).unwrap();
            assert_eq!(store.read_best(), Some(n));
        }
    }

    #[test]
    fn write_produces_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_best(7).unwrap();
        store.write_best(4).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "COUNTRY=4\n");
    }

    #[test]
    fn score_of_one_is_written_but_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_best(1).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "COUNTRY=1\n");
        assert_eq!(store.read_best(), None);
    }

    #[test]
    fn zero_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = store.write_best(0);
        assert!(matches!(result, Err(HighScoreError::NonPositiveScore(0))));
        assert!(!store.path().exists());
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("nested/data/highscore.txt"));

        store.write_best(5).unwrap();
        assert_eq!(store.read_best(), Some(5));
    }

    #[test]
    fn parse_accepts_padding() {
        assert_eq!(parse_best("  COUNTRY= 5 \n"), Some(5));
        assert_eq!(parse_best("COUNTRY=12\nignored=3\n"), Some(12));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_best(""), None);
        assert_eq!(parse_best("\n"), None);
        assert_eq!(parse_best("CITY=5"), None);
        assert_eq!(parse_best("COUNTRY5"), None);
        assert_eq!(parse_best("COUNTRY=five"), None);
        assert_eq!(parse_best("COUNTRY="), None);
        assert_eq!(parse_best("country=5"), None);
        assert_eq!(parse_best("\nCOUNTRY=5"), None);
    }

    #[test]
    fn parse_rejects_sub_threshold() {
        assert_eq!(parse_best("COUNTRY=1"), None);
        assert_eq!(parse_best("COUNTRY=0"), None);
        assert_eq!(parse_best("COUNTRY=-4"), None);
    }

    #[test]
    fn parse_rejects_values_beyond_i32() {
        assert_eq!(parse_best("COUNTRY=3000000000"), None);
        assert_eq!(parse_best("COUNTRY=2147483648"), None);
        assert_eq!(parse_best("COUNTRY=2147483647"), Some(2_147_483_647));
        assert_eq!(parse_best("COUNTRY=+6"), Some(6));
    }

    #[test]
    fn failed_write_keeps_previous_score() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.write_best(4).unwrap();

        let result = replace_file(store.path(), |file| {
            file.write_all(b"COUNTRY=")?;
            Err(io::Error::other("disk full"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "COUNTRY=4\n");
        assert_eq!(store.read_best(), Some(4));
    }

    #[test]
    fn writes_leave_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_best(9).unwrap();
        store.write_best(3).unwrap();
        let _ = replace_file(store.path(), |_| Err(io::Error::other("interrupted")));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["highscore.txt"]);
    }

    #[test]
    fn unreadable_or_malformed_file_stays_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "COUNTRY=lots\n").unwrap();
        let blocked = HighScoreStore::new(dir.path());

        let warnings = crate::storage::warnings_emitted(|| {
            assert_eq!(store.read_best(), None);
            assert_eq!(blocked.read_best(), None);
        });
        assert_eq!(warnings, "");
    }

    #[test]
    fn malformed_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "garbage\n").unwrap();

        assert_eq!(store.read_best(), None);
    }
}
