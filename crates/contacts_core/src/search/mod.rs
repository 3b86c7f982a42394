//! Keyword filtering over persons.
//!
//! # Responsibility
//! - Provide whole-word, case-insensitive keyword matching.
//! - Expose composable person predicates used by list filters.

pub mod keyword;
pub mod predicate;
