//! Binary tree fixture.
//!
//! Candidates are strings over `'0'` and `'1'`; the children of `c` are
//! `c + "0"` and `c + "1"`, down to a fixed depth.

use backtrack_core::SearchSpace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RejectRule {
    /// Monotone: a candidate and its whole subtree.
    Prefix(String),
    /// Not monotone: only the candidate itself.
    Exactly(String),
}

/// Complete binary tree of a given depth.
///
/// Accepts leaves only unless [`BinaryTree::accept_all`] is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree {
    depth: usize,
    accept_all: bool,
    reject: Option<RejectRule>,
}

impl BinaryTree {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            accept_all: false,
            reject: None,
        }
    }

    /// Accepts every node, not just leaves.
    pub fn accept_all(mut self) -> Self {
        self.accept_all = true;
        self
    }

    /// Rejects every candidate starting with `prefix`.
    pub fn rejecting(mut self, prefix: &str) -> Self {
        self.reject = Some(RejectRule::Prefix(prefix.to_string()));
        self
    }

    /// Rejects `candidate` alone, leaving its children unrejected.
    pub fn rejecting_exactly(mut self, candidate: &str) -> Self {
        self.reject = Some(RejectRule::Exactly(candidate.to_string()));
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl SearchSpace for BinaryTree {
    type Candidate = String;

    fn reject(&self, candidate: &String) -> bool {
        match &self.reject {
            Some(RejectRule::Prefix(prefix)) => candidate.starts_with(prefix.as_str()),
            Some(RejectRule::Exactly(exact)) => candidate == exact,
            None => false,
        }
    }

    fn accept(&self, candidate: &String) -> bool {
        self.accept_all || candidate.len() == self.depth
    }

    fn first_child(&self, candidate: &String) -> Option<String> {
        (candidate.len() < self.depth).then(|| format!("{candidate}0"))
    }

    fn next_sibling(&self, candidate: &String) -> Option<String> {
        let parent = candidate.strip_suffix('0')?;
        Some(format!("{parent}1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children() {
        let tree = BinaryTree::new(2);
        let children: Vec<String> = tree.children(&"1".to_string()).collect();
        assert_eq!(children, vec!["10", "11"]);
        assert_eq!(tree.children(&"11".to_string()).count(), 0);
    }

    #[test]
    fn test_root_has_no_sibling() {
        let tree = BinaryTree::new(3);
        assert_eq!(tree.next_sibling(&String::new()), None);
        assert_eq!(tree.next_sibling(&"1".to_string()), None);
    }

    #[test]
    fn test_reject_rules() {
        let prefix = BinaryTree::new(3).rejecting("01");
        assert!(prefix.reject(&"01".to_string()));
        assert!(prefix.reject(&"011".to_string()));
        assert!(!prefix.reject(&"0".to_string()));

        let exact = BinaryTree::new(3).rejecting_exactly("01");
        assert!(exact.reject(&"01".to_string()));
        assert!(!exact.reject(&"011".to_string()));
    }

    #[test]
    fn test_accepts_leaves_only_by_default() {
        let tree = BinaryTree::new(2);
        assert!(!tree.accept(&"0".to_string()));
        assert!(tree.accept(&"01".to_string()));
        assert!(tree.clone().accept_all().accept(&"0".to_string()));
    }
}
