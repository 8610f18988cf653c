//! Error types for the game and its collaborators

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can end a game session
#[derive(Debug)]
pub enum GameError {
    /// The dictionary is missing or has no usable lines
    Config(String),
    /// A terminal, log, or high-score operation failed
    Io { action: String, source: io::Error },
    /// The high-score store was handed a score it must never see
    Score(HighScoreError),
}

impl GameError {
    /// Wrap an I/O error with a short description of what was being done
    #[must_use]
    pub fn io(action: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
        }
    }

    /// Dictionary file does not exist
    #[must_use]
    pub fn missing_dictionary(path: impl Into<PathBuf>) -> Self {
        Self::Config(format!(
            "countries file not found: {}",
            path.into().display()
        ))
    }

    /// Dictionary file exists but has no non-blank lines
    #[must_use]
    pub fn empty_dictionary(path: impl Into<PathBuf>) -> Self {
        Self::Config(format!("countries file is empty: {}", path.into().display()))
    }

    /// Short label naming the failure category, used by the binary's diagnostic line
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration error",
            Self::Io { .. } | Self::Score(HighScoreError::Io(_)) => "Unexpected I/O error",
            Self::Score(HighScoreError::NonPositiveScore(_)) => "Internal error",
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(message) => write!(f, "{message}"),
            Self::Io { action, source } => write!(f, "{action}: {source}"),
            Self::Score(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Score(err) => Some(err),
        }
    }
}

impl From<HighScoreError> for GameError {
    fn from(err: HighScoreError) -> Self {
        Self::Score(err)
    }
}

/// Errors raised when saving a best score
#[derive(Debug)]
pub enum HighScoreError {
    /// Caller bug: a score must be at least one attempt
    NonPositiveScore(u32),
    /// The score file or its directory could not be written
    Io(io::Error),
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScore(value) => {
                write!(f, "attempts must be positive, got {value}")
            }
            Self::Io(err) => write!(f, "could not save high score: {err}"),
        }
    }
}

impl std::error::Error for HighScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NonPositiveScore(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for HighScoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
