//! Person predicates for list filtering.
//!
//! # Responsibility
//! - Test a person against one keyword string.
//! - Allow callers to combine predicates without knowing their concrete types.
//!
//! # Invariants
//! - Matching is whole-word and case-insensitive (`contains_word_ignore_case`).
//! - Predicates are equal when their keyword strings are equal.

use crate::model::person::Person;
use crate::search::keyword::contains_word_ignore_case;

/// Filter condition over persons.
pub trait PersonPredicate {
    fn test(&self, person: &Person) -> bool;
}

/// Combinators available on every predicate.
pub trait PredicateExt: PersonPredicate + Sized {
    /// Matches when both predicates match.
    fn and<P: PersonPredicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Matches when either predicate matches.
    fn or<P: PersonPredicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }
}

impl<T: PersonPredicate> PredicateExt for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct And<A, B>(A, B);

impl<A: PersonPredicate, B: PersonPredicate> PersonPredicate for And<A, B> {
    fn test(&self, person: &Person) -> bool {
        self.0.test(person) && self.1.test(person)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Or<A, B>(A, B);

impl<A: PersonPredicate, B: PersonPredicate> PersonPredicate for Or<A, B> {
    fn test(&self, person: &Person) -> bool {
        self.0.test(person) || self.1.test(person)
    }
}

/// Matches persons with any tag named by one of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsContainsKeywordsPredicate {
    keywords: String,
}

impl TagsContainsKeywordsPredicate {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
        }
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }
}

impl PersonPredicate for TagsContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        person
            .tags()
            .iter()
            .any(|tag| contains_word_ignore_case(&self.keywords, tag.tag_name()))
    }
}

/// Matches persons with any previous module named by one of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrevModContainsKeywordsPredicate {
    keywords: String,
}

impl PrevModContainsKeywordsPredicate {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
        }
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }
}

impl PersonPredicate for PrevModContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        person
            .prev_modules()
            .iter()
            .any(|module| contains_word_ignore_case(&self.keywords, module.module_name()))
    }
}

/// Matches persons whose name contains any of the keywords as a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: String,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
        }
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }
}

impl PersonPredicate for NameContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        let name = person.name().as_str();
        self.keywords
            .split_whitespace()
            .any(|keyword| contains_word_ignore_case(name, keyword))
    }
}
