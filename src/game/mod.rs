//! Game session: rules, file layout and the interactive loop

pub mod config;
pub mod session;
pub mod state;

pub use config::GamePaths;
pub use session::{GameSession, SessionSummary};
pub use state::{Game, Phase, Turn, is_new_best};
