//! Core domain logic for the contacts book.
//! This crate is the single source of truth for contact/module invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, init_logging_with, logging_status, LogConfig};
pub use model::fields::{
    parse_all, Address, Email, FieldValidationError, Github, Name, Phone, Tag,
};
pub use model::lesson::{Lesson, LessonTime, LessonValidationError, Weekday};
pub use model::module::{
    CurrentModule, ModuleCode, ModuleValidationError, PlannedModule, PreviousModule,
};
pub use model::person::{Person, PersonBuilder, PersonError};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository, RepoError, RepoResult};
pub use search::keyword::contains_word_ignore_case;
pub use search::predicate::{
    NameContainsKeywordsPredicate, PersonPredicate, PredicateExt,
    PrevModContainsKeywordsPredicate, TagsContainsKeywordsPredicate,
};
pub use service::person_service::{PersonService, ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
