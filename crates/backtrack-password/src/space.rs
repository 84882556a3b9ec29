//! The password search space.

use backtrack_core::{Result, SearchSpace};

use crate::rules::PasswordRules;

/// Character counts of one candidate.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    len: usize,
    markers: usize,
    digits: usize,
}

/// Strings grown one alphabet character at a time.
///
/// The root is usually the empty string. Children append the first alphabet
/// character; siblings advance the last character through the alphabet.
/// A candidate at the maximum length without enough markers or digits is
/// rejected along with its (empty) subtree.
#[derive(Debug, Clone)]
pub struct PasswordSpace {
    rules: PasswordRules,
    alphabet: Vec<char>,
}

impl PasswordSpace {
    /// Builds a space from validated rules.
    pub fn new(rules: PasswordRules) -> Result<Self> {
        rules.validate()?;
        let alphabet = rules.alphabet.chars().collect();
        Ok(Self { rules, alphabet })
    }

    /// The space of [`PasswordRules::reference`].
    pub fn reference() -> Self {
        let rules = PasswordRules::reference();
        let alphabet = rules.alphabet.chars().collect();
        Self { rules, alphabet }
    }

    pub fn rules(&self) -> &PasswordRules {
        &self.rules
    }

    fn tally(&self, candidate: &str) -> Tally {
        candidate.chars().fold(Tally::default(), |mut t, ch| {
            t.len += 1;
            if ch == self.rules.marker {
                t.markers += 1;
            }
            if ch.is_ascii_digit() {
                t.digits += 1;
            }
            t
        })
    }

    fn meets_quota(&self, tally: &Tally) -> bool {
        tally.markers >= self.rules.min_markers && tally.digits >= self.rules.min_digits
    }
}

impl SearchSpace for PasswordSpace {
    type Candidate = String;

    fn reject(&self, candidate: &String) -> bool {
        if candidate.chars().any(|ch| !self.alphabet.contains(&ch)) {
            return true;
        }
        let tally = self.tally(candidate);
        tally.len >= self.rules.max_len && !self.meets_quota(&tally)
    }

    fn accept(&self, candidate: &String) -> bool {
        let tally = self.tally(candidate);
        (self.rules.min_len..=self.rules.max_len).contains(&tally.len) && self.meets_quota(&tally)
    }

    fn first_child(&self, candidate: &String) -> Option<String> {
        if candidate.chars().count() >= self.rules.max_len {
            return None;
        }
        let first = *self.alphabet.first()?;
        let mut child = candidate.clone();
        child.push(first);
        Some(child)
    }

    fn next_sibling(&self, candidate: &String) -> Option<String> {
        let last = candidate.chars().last()?;
        let index = self.alphabet.iter().position(|&ch| ch == last)?;
        let next = *self.alphabet.get(index + 1)?;
        let mut sibling = candidate.clone();
        sibling.pop();
        sibling.push(next);
        Some(sibling)
    }
}
