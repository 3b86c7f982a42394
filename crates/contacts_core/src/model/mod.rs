//! Contact domain model.
//!
//! # Responsibility
//! - Define validated value objects (identity fields, modules, lessons).
//! - Define the `Person` aggregate and its copy-on-write transitions.
//!
//! # Invariants
//! - Every value object is validated at construction and on deserialize.
//! - Model types are immutable once built.

pub mod fields;
pub mod lesson;
pub mod module;
pub mod person;
