//! Lucky Vault
//!
//! A terminal word-guessing game: guess the secret country, get per-guess feedback,
//! and try to beat the best score stored on disk. Every session is recorded in its
//! own timestamped log file.
//!
//! # Quick Start
//!
//! ```rust
//! use lucky_vault::core::Secret;
//! use lucky_vault::game::Game;
//!
//! let mut game = Game::new(Secret::new("Canada"), None);
//! let turn = game.submit("Brazil").unwrap();
//! assert_eq!(turn.feedback, "Not it. 0 letter(s) correct (right position).");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session state machine and interactive loop
pub mod game;

// Score file, session log and clock
pub mod storage;

// Country dictionary
pub mod wordlists;

// Terminal output formatting
pub mod output;
