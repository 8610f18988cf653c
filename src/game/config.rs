//! Filesystem layout used by a session

use std::path::{Path, PathBuf};

/// Directory holding the game's files, relative to the working directory
pub const DATA_DIR: &str = "data";

/// Where a session finds its dictionary and keeps its score and logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    pub countries: PathBuf,
    pub highscore: PathBuf,
    pub logs: PathBuf,
}

impl GamePaths {
    /// Standard layout beneath `root`
    ///
    /// # Examples
    /// ```
    /// use lucky_vault::game::GamePaths;
    /// use std::path::Path;
    ///
    /// let paths = GamePaths::under("/tmp/vault");
    /// assert_eq!(paths.countries, Path::new("/tmp/vault/countries.txt"));
    /// assert_eq!(paths.logs, Path::new("/tmp/vault/logs"));
    /// ```
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            countries: root.join("countries.txt"),
            highscore: root.join("highscore.txt"),
            logs: root.join("logs"),
        }
    }
}

impl Default for GamePaths {
    fn default() -> Self {
        Self::under(DATA_DIR)
    }
}
