//! Password-shape search space.
//!
//! Enumerates strings over an alphabet that contain enough marker
//! characters and enough decimal digits, within a length range. The
//! reference rules find every string of length 3 to 5 over `a-z0-9` with at
//! least one `'b'` and at least two digits.
//!
//! # Examples
//!
//! ```
//! use backtrack_core::SearchSpace;
//! use backtrack_password::{PasswordRules, PasswordSpace};
//!
//! let space = PasswordSpace::new(PasswordRules::reference()).unwrap();
//!
//! assert!(space.accept(&"b00".to_string()));
//! assert!(space.reject(&"abcde".to_string()));
//! assert_eq!(space.first_child(&"b0".to_string()), Some("b0a".to_string()));
//! assert_eq!(space.next_sibling(&"b0a".to_string()), Some("b0b".to_string()));
//! ```

mod rules;
mod space;

pub use rules::PasswordRules;
pub use space::PasswordSpace;
