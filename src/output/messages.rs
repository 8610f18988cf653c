//! Player-facing text
//!
//! Every line the game prints comes from here so the transcript stays byte-for-byte
//! stable.

use crate::core::{GuessClass, Secret};
use crate::storage::CATEGORY;
use colored::Colorize;

/// First line of every session
pub const BANNER: &str = "LUCKY VAULT — COUNTRY MODE. Type QUIT to exit.";

/// Printed before each read, without a newline
pub const PROMPT: &str = "Your guess: ";

/// Last line of a session that ended normally
pub const THE_END: &str = "The end";

pub const EMPTY_GUESS: &str = "Empty guess. Try again.";
pub const BYE: &str = "Bye!";

#[must_use]
pub fn secret_length_line(length: usize) -> String {
    format!("Secret word length: {length}")
}

#[must_use]
pub fn best_score_line(best: Option<u32>) -> String {
    match best {
        Some(attempts) => format!("Current best: {attempts} attempts"),
        None => "Current best: —".to_string(),
    }
}

#[must_use]
pub fn new_best_line() -> String {
    format!("NEW BEST for {CATEGORY} mode!")
}

/// Feedback line for a classified input
///
/// `attempts` is the counter value after the input was scored.
///
/// # Examples
/// ```
/// use lucky_vault::core::{GuessClass, Secret};
/// use lucky_vault::output::messages::feedback;
///
/// let secret = Secret::new("Canada");
/// let class = GuessClass::classify("hi", &secret);
/// assert_eq!(feedback(&class, 1, &secret), "Wrong length (2). Need 6.");
/// ```
#[must_use]
pub fn feedback(class: &GuessClass<'_>, attempts: u32, secret: &Secret) -> String {
    match class {
        GuessClass::Empty { .. } => EMPTY_GUESS.to_string(),
        GuessClass::Quit { .. } => BYE.to_string(),
        GuessClass::WrongLength { length, .. } => {
            format!("Wrong length ({length}). Need {}.", secret.char_count())
        }
        GuessClass::Correct { .. } => {
            format!("Correct in {attempts} attempts! Word was: {secret}")
        }
        GuessClass::WrongSameLength { matches, .. } => {
            format!("Not it. {matches} letter(s) correct (right position).")
        }
    }
}

/// One-line diagnostic printed at the process boundary when a session fails
#[must_use]
pub fn diagnostic(category: &str, message: &str) -> String {
    format!("{}: {message}", category.red().bold())
}
