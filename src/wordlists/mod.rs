//! Country dictionary
//!
//! Loads the candidate secrets from `data/countries.txt`.

pub mod loader;

pub use loader::{Dictionary, load_countries};
