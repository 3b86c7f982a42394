//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered list of persons shown to callers.
//! - Enforce uniqueness of persons by identity (`Person::is_same_person`).
//!
//! # Invariants
//! - No two stored persons satisfy `is_same_person`.
//! - Indexes are zero-based positions in insertion order.

use crate::model::person::Person;
use crate::search::predicate::PersonPredicate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A person with the same name is already stored.
    DuplicatePerson(String),
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "person index {index} is out of range (len={len})")
            }
        }
    }
}

impl Error for RepoError {}

/// Repository interface for person list operations.
pub trait PersonRepository {
    fn add_person(&mut self, person: Person) -> RepoResult<()>;
    fn get_person(&self, index: usize) -> RepoResult<Person>;
    /// Replaces the person at `index`; the replacement may keep the old name.
    fn set_person(&mut self, index: usize, person: Person) -> RepoResult<()>;
    fn remove_person(&mut self, index: usize) -> RepoResult<Person>;
    fn list_persons(&self) -> Vec<Person>;
    fn filter_persons(&self, predicate: &dyn PersonPredicate) -> Vec<Person>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec`-backed person list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    persons: Vec<Person>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from existing persons, rejecting duplicates.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for person in persons {
            repo.add_person(person)?;
        }
        Ok(repo)
    }

    /// Returns whether a person with the same identity is stored.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|stored| stored.is_same_person(person))
    }

    fn check_index(&self, index: usize) -> RepoResult<()> {
        if index >= self.persons.len() {
            return Err(RepoError::IndexOutOfRange {
                index,
                len: self.persons.len(),
            });
        }
        Ok(())
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn add_person(&mut self, person: Person) -> RepoResult<()> {
        if self.contains(&person) {
            return Err(RepoError::DuplicatePerson(person.name().to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    fn get_person(&self, index: usize) -> RepoResult<Person> {
        self.check_index(index)?;
        Ok(self.persons[index].clone())
    }

    fn set_person(&mut self, index: usize, person: Person) -> RepoResult<()> {
        self.check_index(index)?;
        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(position, stored)| position != index && stored.is_same_person(&person));
        if clashes {
            return Err(RepoError::DuplicatePerson(person.name().to_string()));
        }
        self.persons[index] = person;
        Ok(())
    }

    fn remove_person(&mut self, index: usize) -> RepoResult<Person> {
        self.check_index(index)?;
        Ok(self.persons.remove(index))
    }

    fn list_persons(&self) -> Vec<Person> {
        self.persons.clone()
    }

    fn filter_persons(&self, predicate: &dyn PersonPredicate) -> Vec<Person> {
        self.persons
            .iter()
            .filter(|person| predicate.test(person))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.persons.len()
    }
}
