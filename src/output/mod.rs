//! Terminal output formatting
//!
//! Fixed messages and feedback lines for the game transcript.

pub mod messages;

pub use messages::{BANNER, PROMPT, THE_END, feedback};
