//! Password rules.

use std::collections::HashSet;

use backtrack_core::{BacktrackError, Result};
use serde::{Deserialize, Serialize};

/// Shape constraints on the passwords to enumerate.
///
/// Missing fields take their [`PasswordRules::reference`] values when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PasswordRules {
    /// Allowed characters, in sibling order.
    pub alphabet: String,
    /// Character that must appear at least `min_markers` times.
    pub marker: char,
    pub min_markers: usize,
    /// Required number of ASCII digits.
    pub min_digits: usize,
    pub min_len: usize,
    /// No candidate longer than this is generated.
    pub max_len: usize,
}

impl PasswordRules {
    /// Lowercase letters then digits, one `'b'`, two digits, length 3 to 5.
    pub fn reference() -> Self {
        Self {
            alphabet: "abcdefghijklmnopqrstuvwxyz0123456789".to_string(),
            marker: 'b',
            min_markers: 1,
            min_digits: 2,
            min_len: 3,
            max_len: 5,
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Checks that the rules describe a well-formed space.
    ///
    /// # Errors
    ///
    /// Returns [`BacktrackError::InvalidSpace`] for an empty alphabet, a
    /// repeated alphabet character, a marker outside the alphabet, or
    /// `min_len > max_len`.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(BacktrackError::InvalidSpace(
                "alphabet must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.alphabet.chars().find(|&ch| !seen.insert(ch)) {
            return Err(BacktrackError::InvalidSpace(format!(
                "alphabet repeats {dup:?}"
            )));
        }
        if !seen.contains(&self.marker) {
            return Err(BacktrackError::InvalidSpace(format!(
                "marker {:?} is not in the alphabet",
                self.marker
            )));
        }
        if self.min_len > self.max_len {
            return Err(BacktrackError::InvalidSpace(format!(
                "min_len {} exceeds max_len {}",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self::reference()
    }
}
