//! Core domain types for the guessing game
//!
//! This module contains the pure rules with no I/O: the secret, case folding,
//! positional matching and input classification.

mod guess;
mod secret;

pub use guess::{GuessClass, Outcome, QUIT_COMMAND};
pub use secret::{Secret, count_matching_positions, fold_case};
