//! Per-session guess log
//!
//! Each session writes `data/logs/<YYYY-MM-DD_HH-mm-ss>_<Secret>.txt`, one line per
//! input: `<local ISO datetime> | <guess> | <outcome>`. Lines are flushed as they
//! are written so a crash leaves every earlier record on disk. The file is closed
//! when the log is dropped.

use super::clock::{Clock, SystemClock};
use crate::core::{Outcome, Secret};
use crate::error::GameError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Timestamp format used in log file names
pub const FILE_TIMESTAMP: &str = "%Y-%m-%d_%H-%M-%S";

/// Timestamp format used at the start of each log line
pub const ENTRY_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Upper bound on `-N` suffixes tried when a log name is already taken
const MAX_NAME_SUFFIX: u32 = 100;

/// Open log file for one game session
#[derive(Debug)]
pub struct SessionLog<C: Clock = SystemClock> {
    path: PathBuf,
    writer: BufWriter<File>,
    clock: C,
}

impl<C: Clock> SessionLog<C> {
    /// Create the logs directory if needed and open a fresh log file
    ///
    /// If another session already produced the same name, a `-2`, `-3`, ...
    /// suffix is inserted before the extension.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the directory or file cannot be created.
    pub fn create(logs_dir: &Path, secret: &Secret, clock: C) -> Result<Self, GameError> {
        fs::create_dir_all(logs_dir).map_err(|e| {
            GameError::io(format!("creating {}", logs_dir.display()), e)
        })?;

        let stem = format!(
            "{}_{}",
            clock.now().format(FILE_TIMESTAMP),
            secret.file_stem()
        );
        let (path, file) = open_unique(logs_dir, &stem)
            .map_err(|e| GameError::io(format!("creating log in {}", logs_dir.display()), e))?;

        info!(path = %path.display(), "Opened session log");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            clock,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record and flush it
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the record cannot be written.
    pub fn log_guess(&mut self, guess: &str, outcome: Outcome) -> Result<(), GameError> {
        let stamp = self.clock.now().format(ENTRY_TIMESTAMP);

        writeln!(self.writer, "{stamp} | {guess} | {outcome}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| GameError::io(format!("writing {}", self.path.display()), e))
    }

    /// Flush and close the file, reporting any error the drop would swallow
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if buffered data cannot be written out.
    pub fn close(mut self) -> Result<(), GameError> {
        self.writer
            .flush()
            .map_err(|e| GameError::io(format!("closing {}", self.path.display()), e))
    }
}

fn open_unique(dir: &Path, stem: &str) -> io::Result<(PathBuf, File)> {
    let mut suffix = 1;

    loop {
        let name = if suffix == 1 {
            format!("{stem}.txt")
        } else {
            format!("{stem}-{suffix}.txt")
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && suffix < MAX_NAME_SUFFIX => {
                debug!(path = %path.display(), "Log file name already taken");
                suffix += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::clock::FixedClock;
    use chrono::NaiveDate;

    fn noon() -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_milli_opt(12, 5, 7, 250))
            .unwrap();
        FixedClock(at)
    }

    #[test]
    fn file_name_uses_timestamp_and_secret() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::create(dir.path(), &Secret::new("South Africa"), noon()).unwrap();

        assert_eq!(
            log.path().file_name().unwrap().to_str().unwrap(),
            "2024-03-09_12-05-07_South_Africa.txt"
        );
    }

    #[test]
    fn creates_missing_logs_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("data/logs");

        let log = SessionLog::create(&logs, &Secret::new("Peru"), noon()).unwrap();
        assert!(logs.is_dir());
        assert!(log.path().starts_with(&logs));
    }

    #[test]
    fn records_are_flushed_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SessionLog::create(dir.path(), &Secret::new("Chile"), noon()).unwrap();

        log.log_guess("", Outcome::Empty).unwrap();
        log.log_guess("Chine", Outcome::Matches(4)).unwrap();

        // Read while the log is still open
        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "2024-03-09T12:05:07.250 |  | empty\n\
             2024-03-09T12:05:07.250 | Chine | matches=4\n"
        );
    }

    #[test]
    fn colliding_name_gets_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let secret = Secret::new("Chad");

        let first = SessionLog::create(dir.path(), &secret, noon()).unwrap();
        let second = SessionLog::create(dir.path(), &secret, noon()).unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(
            second.path().file_name().unwrap().to_str().unwrap(),
            "2024-03-09_12-05-07_Chad-2.txt"
        );
    }

    #[test]
    fn name_collision_is_not_reported_to_the_player() {
        let dir = tempfile::tempdir().unwrap();
        let secret = Secret::new("Fiji");
        let _first = SessionLog::create(dir.path(), &secret, noon()).unwrap();

        let warnings = crate::storage::warnings_emitted(|| {
            let second = SessionLog::create(dir.path(), &secret, noon()).unwrap();
            assert!(second.path().to_str().unwrap().ends_with("_Fiji-2.txt"));
        });
        assert_eq!(warnings, "");
    }

    #[test]
    fn close_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SessionLog::create(dir.path(), &Secret::new("Cuba"), noon()).unwrap();
        log.log_guess("QUIT", Outcome::Quit).unwrap();
        let path = log.path().to_path_buf();
        log.close().unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.ends_with("| QUIT | quit\n"));
    }
}
