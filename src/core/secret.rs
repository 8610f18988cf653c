//! Secret country representation
//!
//! A Secret keeps the country exactly as it appears in the dictionary for display
//! and log naming, plus a case-folded copy used for every comparison.

use std::fmt;

/// The country chosen for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    folded: String,
    char_count: usize,
}

impl Secret {
    /// Create a secret from a dictionary entry
    ///
    /// The entry is used as-is; the dictionary loader is responsible for trimming.
    ///
    /// # Examples
    /// ```
    /// use lucky_vault::core::Secret;
    ///
    /// let secret = Secret::new("South Korea");
    /// assert_eq!(secret.text(), "South Korea");
    /// assert_eq!(secret.folded(), "south korea");
    /// assert_eq!(secret.char_count(), 11);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = fold_case(&text);
        let char_count = text.chars().count();

        Self {
            text,
            folded,
            char_count,
        }
    }

    /// Original-case text, as loaded
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded text used for matching
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Length in characters of the original text
    #[inline]
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    /// Text with spaces replaced by underscores, safe to embed in a file name
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.text.replace(' ', "_")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Lowercase a string one character at a time, without consulting any locale
///
/// Each character maps to the first character of its Unicode lowercase form,
/// so the result always has the same number of characters as the input.
///
/// # Examples
/// ```
/// use lucky_vault::core::fold_case;
///
/// assert_eq!(fold_case("CÔTE D'IVOIRE"), "côte d'ivoire");
/// assert_eq!(fold_case("İ").chars().count(), 1);
/// ```
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Count indices where both strings hold the same character
///
/// Only the first `min(len(a), len(b))` characters are compared. Callers pass
/// already-folded text.
///
/// # Examples
/// ```
/// use lucky_vault::core::count_matching_positions;
///
/// assert_eq!(count_matching_positions("canada", "japan"), 2);
/// assert_eq!(count_matching_positions("chile", "chile"), 5);
/// ```
#[must_use]
pub fn count_matching_positions(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}
