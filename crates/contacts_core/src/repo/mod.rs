//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the person list contract used by services.
//! - Keep storage details out of use-case orchestration.
//!
//! # Invariants
//! - Repositories store persons that already passed model validation.
//! - Repository APIs return semantic errors (`DuplicatePerson`,
//!   `IndexOutOfRange`) instead of panicking.

pub mod person_repo;
