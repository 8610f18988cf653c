//! Country list loading
//!
//! Reads the newline-delimited dictionary once per session.

use crate::core::Secret;
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Ordered, non-empty list of candidate secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from in-memory lines, trimming and skipping blanks
    ///
    /// Returns `None` when no usable line remains.
    ///
    /// # Examples
    /// ```
    /// use lucky_vault::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["Canada", "  ", " Brazil "]).unwrap();
    /// assert_eq!(dict.words(), ["Canada", "Brazil"]);
    ///
    /// assert!(Dictionary::from_lines(["", "   "]).is_none());
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Entries in file order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries (never zero)
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Pick a secret uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the dictionary has no entries. A dictionary
    /// built through this module never does.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Secret, GameError> {
        self.words
            .choose(rng)
            .map(Secret::new)
            .ok_or_else(|| GameError::Config("no countries to choose from".to_string()))
    }
}

/// Load the country dictionary from a file
///
/// # Errors
///
/// Returns `GameError::Config` if the file does not exist or holds only blank
/// lines, and `GameError::Io` if it exists but cannot be read.
///
/// # Examples
/// ```no_run
/// use lucky_vault::wordlists::loader::load_countries;
///
/// let countries = load_countries("data/countries.txt").unwrap();
/// println!("Loaded {} countries", countries.count());
/// ```
pub fn load_countries<P: AsRef<Path>>(path: P) -> Result<Dictionary, GameError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(GameError::missing_dictionary(path));
        }
        Err(e) => {
            return Err(GameError::io(
                format!("reading {}", path.display()),
                e,
            ));
        }
    };

    let dictionary =
        Dictionary::from_lines(content.lines()).ok_or_else(|| GameError::empty_dictionary(path))?;

    info!(path = %path.display(), count = dictionary.count(), "Loaded countries");
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn load_trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.txt");
        fs::write(&path, "Canada\n\n  Brazil  \r\n\t\nJapan").unwrap();

        let dict = load_countries(&path).unwrap();
        assert_eq!(dict.words(), ["Canada", "Brazil", "Japan"]);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_countries(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn load_blank_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.txt");
        fs::write(&path, "\n   \n\t\n").unwrap();

        let result = load_countries(&path);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn load_keeps_inner_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.txt");
        fs::write(&path, "United Kingdom\nSri Lanka\n").unwrap();

        let dict = load_countries(&path).unwrap();
        assert_eq!(dict.words(), ["United Kingdom", "Sri Lanka"]);
    }

    #[test]
    fn choose_returns_member() {
        let dict = Dictionary::from_lines(["Canada", "Brazil", "Japan"]).unwrap();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let secret = dict.choose(&mut rng).unwrap();
            assert!(dict.words().iter().any(|w| w == secret.text()));
        }
    }

    #[test]
    fn choose_single_entry_is_deterministic() {
        let dict = Dictionary::from_lines(["Canada"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(dict.choose(&mut rng).unwrap().text(), "Canada");
    }

    #[test]
    fn choose_reaches_every_entry() {
        let dict = Dictionary::from_lines(["Canada", "Brazil", "Japan"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(dict.choose(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
