//! Input classification and log outcome tags
//!
//! Every line the player types falls into exactly one [`GuessClass`]. The checks
//! run in a fixed order: empty, quit, length, exact match, then positional scoring.

use super::secret::{Secret, count_matching_positions, fold_case};
use std::fmt;

/// Command word that ends the session, compared case-insensitively
pub const QUIT_COMMAND: &str = "quit";

/// How a single input line was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessClass<'a> {
    /// Blank or whitespace-only line; `raw` is the untrimmed line
    Empty { raw: &'a str },
    /// The quit command; `raw` is the untrimmed line
    Quit { raw: &'a str },
    /// Trimmed guess whose character count differs from the secret's
    WrongLength { guess: &'a str, length: usize },
    /// Trimmed guess equal to the secret ignoring case
    Correct { guess: &'a str },
    /// Trimmed guess of the right length that is not the secret
    WrongSameLength { guess: &'a str, matches: usize },
}

impl<'a> GuessClass<'a> {
    /// Classify one input line (without its line terminator) against the secret
    ///
    /// # Examples
    /// ```
    /// use lucky_vault::core::{GuessClass, Secret};
    ///
    /// let secret = Secret::new("Canada");
    /// assert_eq!(
    ///     GuessClass::classify("  canada ", &secret),
    ///     GuessClass::Correct { guess: "canada" }
    /// );
    /// assert_eq!(
    ///     GuessClass::classify("JAPAN", &secret),
    ///     GuessClass::WrongLength { guess: "JAPAN", length: 5 }
    /// );
    /// ```
    #[must_use]
    pub fn classify(raw: &'a str, secret: &Secret) -> Self {
        let guess = raw.trim();

        if guess.is_empty() {
            return Self::Empty { raw };
        }

        let folded = fold_case(guess);

        if folded == QUIT_COMMAND {
            return Self::Quit { raw };
        }

        let length = guess.chars().count();
        if length != secret.char_count() {
            return Self::WrongLength { guess, length };
        }

        if folded == secret.folded() {
            return Self::Correct { guess };
        }

        Self::WrongSameLength {
            guess,
            matches: count_matching_positions(secret.folded(), &folded),
        }
    }

    /// Whether this input counts as an attempt
    #[inline]
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        !matches!(self, Self::Empty { .. } | Self::Quit { .. })
    }

    /// The text written to the session log for this input
    ///
    /// Empty and quit inputs log the raw line; everything else logs the trimmed guess.
    #[must_use]
    pub const fn logged_value(&self) -> &'a str {
        match *self {
            Self::Empty { raw } | Self::Quit { raw } => raw,
            Self::WrongLength { guess, .. }
            | Self::Correct { guess }
            | Self::WrongSameLength { guess, .. } => guess,
        }
    }
}

/// Outcome tag written as the third field of a session log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Quit,
    WrongLength,
    Matches(usize),
    Correct(u32),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Quit => write!(f, "quit"),
            Self::WrongLength => write!(f, "wrong_length"),
            Self::Matches(n) => write!(f, "matches={n}"),
            Self::Correct(attempts) => write!(f, "CORRECT in {attempts}"),
        }
    }
}
