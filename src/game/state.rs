//! Game rules as a state machine
//!
//! [`Game`] turns input lines into [`Turn`]s without touching the terminal or the
//! disk, so every rule can be exercised directly. The session layer performs the
//! I/O each turn asks for.

use crate::core::{GuessClass, Outcome, Secret};
use crate::output::feedback;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next input line
    Playing,
    /// Player typed the quit command
    Quit,
    /// Input ran out before the game finished
    InputClosed,
    /// Player named the secret
    Won,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Everything the session must do in response to one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Line shown to the player
    pub feedback: String,
    /// Second field of the log record
    pub logged: String,
    /// Third field of the log record
    pub outcome: Outcome,
    /// Set when this turn won the game with a better score than the stored one
    pub new_best: Option<u32>,
}

/// One round of the guessing game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Secret,
    best: Option<u32>,
    attempts: u32,
    phase: Phase,
}

impl Game {
    /// Start a game against `secret` with the previously stored best score
    #[must_use]
    pub const fn new(secret: Secret, best: Option<u32>) -> Self {
        Self {
            secret,
            best,
            attempts: 0,
            phase: Phase::Playing,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub const fn best(&self) -> Option<u32> {
        self.best
    }

    /// Inputs scored so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one input line (without its line terminator)
    ///
    /// Returns `None` once the game is over.
    ///
    /// # Examples
    /// ```
    /// use lucky_vault::core::{Outcome, Secret};
    /// use lucky_vault::game::{Game, Phase};
    ///
    /// let mut game = Game::new(Secret::new("Canada"), None);
    ///
    /// let turn = game.submit("JAPAN").unwrap();
    /// assert_eq!(turn.outcome, Outcome::WrongLength);
    ///
    /// let turn = game.submit("canada").unwrap();
    /// assert_eq!(turn.feedback, "Correct in 2 attempts! Word was: Canada");
    /// assert_eq!(turn.new_best, Some(2));
    /// assert_eq!(game.phase(), Phase::Won);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Option<Turn> {
        if self.phase.is_over() {
            return None;
        }

        let class = GuessClass::classify(raw, &self.secret);
        if class.is_scored() {
            self.attempts = self.attempts.saturating_add(1);
        }

        let outcome = match class {
            GuessClass::Empty { .. } => Outcome::Empty,
            GuessClass::Quit { .. } => {
                self.phase = Phase::Quit;
                Outcome::Quit
            }
            GuessClass::WrongLength { .. } => Outcome::WrongLength,
            GuessClass::Correct { .. } => {
                self.phase = Phase::Won;
                Outcome::Correct(self.attempts)
            }
            GuessClass::WrongSameLength { matches, .. } => Outcome::Matches(matches),
        };

        let new_best = (self.phase == Phase::Won && is_new_best(self.best, self.attempts))
            .then_some(self.attempts);

        Some(Turn {
            feedback: feedback(&class, self.attempts, &self.secret),
            logged: class.logged_value().to_string(),
            outcome,
            new_best,
        })
    }

    /// Close the game because no more input will arrive
    ///
    /// Behaves like the quit command with an empty line. Returns `None` once the
    /// game is over.
    pub fn close_input(&mut self) -> Option<Turn> {
        if self.phase.is_over() {
            return None;
        }

        self.phase = Phase::InputClosed;
        Some(Turn {
            feedback: crate::output::messages::BYE.to_string(),
            logged: String::new(),
            outcome: Outcome::Quit,
            new_best: None,
        })
    }
}

/// Whether `attempts` beats the stored best score
///
/// # Examples
/// ```
/// use lucky_vault::game::is_new_best;
///
/// assert!(is_new_best(None, 9));
/// assert!(is_new_best(Some(4), 3));
/// assert!(!is_new_best(Some(4), 4));
/// ```
#[must_use]
pub fn is_new_best(best: Option<u32>, attempts: u32) -> bool {
    best.is_none_or(|best| attempts < best)
}
