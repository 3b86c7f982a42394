//! Person use-case service.
//!
//! # Responsibility
//! - Provide the lesson and module transitions the command layer triggers.
//! - Provide keyword search entry points over the stored persons.
//!
//! # Invariants
//! - Every write derives a new `Person` and stores it back at the same index;
//!   a failed transition leaves the repository untouched.
//! - Log lines carry metadata only (indexes, counts), never person data.

use crate::model::lesson::Lesson;
use crate::model::person::{Person, PersonError};
use crate::repo::person_repo::{PersonRepository, RepoError};
use crate::search::predicate::{
    NameContainsKeywordsPredicate, PrevModContainsKeywordsPredicate, TagsContainsKeywordsPredicate,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for person use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Displayed index does not point at a person.
    InvalidIndex { index: usize, len: usize },
    /// Person-level transition rejected.
    Person(PersonError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => write!(
                f,
                "the person index provided is invalid: {index} (listed persons: {len})"
            ),
            Self::Person(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIndex { .. } => None,
            Self::Person(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<PersonError> for ServiceError {
    fn from(value: PersonError) -> Self {
        Self::Person(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::IndexOutOfRange { index, len } => Self::InvalidIndex { index, len },
            other => Self::Repo(other),
        }
    }
}

/// Person service facade over repository implementations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Adds a person to the list.
    pub fn add_person(&mut self, person: Person) -> ServiceResult<()> {
        match self.repo.add_person(person) {
            Ok(()) => {
                info!(
                    "event=person_add module=service status=ok len={}",
                    self.repo.len()
                );
                Ok(())
            }
            Err(err) => {
                warn!("event=person_add module=service status=error error_code=duplicate_person");
                Err(err.into())
            }
        }
    }

    /// Lists every stored person in displayed order.
    pub fn list_persons(&self) -> Vec<Person> {
        self.repo.list_persons()
    }

    /// Adds `lesson` to the person at displayed `index`.
    ///
    /// Returns the updated person.
    pub fn add_lesson(&mut self, index: usize, lesson: Lesson) -> ServiceResult<Person> {
        let updated = self.fetch(index, "lesson_add")?.add_lesson(lesson);
        self.store(index, updated, "lesson_add")
    }

    /// Removes `lesson` from the person at displayed `index`.
    ///
    /// # Errors
    /// - `ServiceError::InvalidIndex` for an index outside the list.
    /// - `ServiceError::Person(PersonError::LessonNotFound)` when the person
    ///   has no such lesson.
    pub fn remove_lesson(&mut self, index: usize, lesson: &Lesson) -> ServiceResult<Person> {
        let person = self.fetch(index, "lesson_remove")?;
        let updated = person.remove_lesson(lesson).map_err(|err| {
            warn!(
                "event=lesson_remove module=service status=error index={} error_code=lesson_not_found",
                index
            );
            err
        })?;
        self.store(index, updated, "lesson_remove")
    }

    /// Promotes current modules of the person at displayed `index`.
    pub fn update_prev_mods(&mut self, index: usize) -> ServiceResult<Person> {
        let updated = self.fetch(index, "module_promote")?.update_prev_mods();
        self.store(index, updated, "module_promote")
    }

    /// Promotes current modules of every person (end of term).
    ///
    /// Returns how many persons had current modules to promote.
    pub fn end_term(&mut self) -> ServiceResult<usize> {
        let mut promoted = 0;
        for index in 0..self.repo.len() {
            let person = self.repo.get_person(index)?;
            if person.curr_modules().is_empty() {
                continue;
            }
            self.repo.set_person(index, person.update_prev_mods())?;
            promoted += 1;
        }
        info!(
            "event=end_term module=service status=ok promoted={} len={}",
            promoted,
            self.repo.len()
        );
        Ok(promoted)
    }

    /// Persons having a tag named by any of `keywords`.
    pub fn find_by_tags(&self, keywords: &str) -> Vec<Person> {
        self.repo
            .filter_persons(&TagsContainsKeywordsPredicate::new(keywords))
    }

    /// Persons having a previous module named by any of `keywords`.
    pub fn find_by_prev_mods(&self, keywords: &str) -> Vec<Person> {
        self.repo
            .filter_persons(&PrevModContainsKeywordsPredicate::new(keywords))
    }

    /// Persons whose name contains any of `keywords` as a word.
    pub fn find_by_name(&self, keywords: &str) -> Vec<Person> {
        self.repo
            .filter_persons(&NameContainsKeywordsPredicate::new(keywords))
    }

    fn fetch(&self, index: usize, event: &str) -> ServiceResult<Person> {
        self.repo.get_person(index).map_err(|err| {
            warn!(
                "event={} module=service status=error index={} error_code=invalid_index",
                event, index
            );
            err.into()
        })
    }

    fn store(&mut self, index: usize, person: Person, event: &str) -> ServiceResult<Person> {
        self.repo.set_person(index, person.clone())?;
        info!(
            "event={} module=service status=ok index={}",
            event, index
        );
        Ok(person)
    }
}
