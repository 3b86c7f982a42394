//! Academic module value objects.
//!
//! # Responsibility
//! - Validate module codes once, at construction.
//! - Provide the three module kinds a person can hold: current, previous and
//!   planned.
//!
//! # Invariants
//! - A `ModuleCode` is non-empty ASCII alphanumeric; nothing else is stored.
//! - Module values are immutable after construction.
//! - Deserialization re-validates, so persisted garbage never becomes a value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static MODULE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid module code regex"));

/// Human-readable module code constraint, shared by all module kinds.
pub const MODULE_CODE_CONSTRAINTS: &str =
    "module codes should only contain alphanumeric characters and must not be blank";

/// Module code validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleValidationError {
    InvalidCode(String),
}

impl Display for ModuleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode(value) => {
                write!(f, "invalid module code `{value}`: {MODULE_CODE_CONSTRAINTS}")
            }
        }
    }
}

impl Error for ModuleValidationError {}

/// Validated academic course code, e.g. `CS2103T`.
///
/// Comparison is case-sensitive: `CS2103T` and `cs2103T` are distinct codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCode(String);

impl ModuleCode {
    /// Validates `value` exactly as given (no trimming).
    pub fn new(value: impl Into<String>) -> Result<Self, ModuleValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ModuleValidationError::InvalidCode(value));
        }
        Ok(Self(value))
    }

    /// Returns whether `value` is an acceptable module code.
    pub fn is_valid(value: &str) -> bool {
        MODULE_CODE_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ModuleCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses user input: surrounding whitespace is trimmed before validation.
impl FromStr for ModuleCode {
    type Err = ModuleValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for ModuleCode {
    type Error = ModuleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleCode> for String {
    fn from(value: ModuleCode) -> Self {
        value.0
    }
}

// The three kinds differ only in which set of a `Person` they live in.
macro_rules! module_kind {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            module_name: ModuleCode,
        }

        impl $name {
            /// Creates a module from a raw code, rejecting malformed input.
            pub fn new(module_name: impl Into<String>) -> Result<Self, ModuleValidationError> {
                Ok(Self {
                    module_name: ModuleCode::new(module_name)?,
                })
            }

            /// Returns whether `value` is an acceptable module name.
            pub fn is_valid_module_name(value: &str) -> bool {
                ModuleCode::is_valid(value)
            }

            pub fn module_name(&self) -> &str {
                self.module_name.as_str()
            }

            pub fn code(&self) -> &ModuleCode {
                &self.module_name
            }
        }

        impl From<ModuleCode> for $name {
            fn from(module_name: ModuleCode) -> Self {
                Self { module_name }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "[{}]", self.module_name)
            }
        }

        impl FromStr for $name {
            type Err = ModuleValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s.parse::<ModuleCode>()?))
            }
        }
    };
}

module_kind!(
    /// Module a person is taking this term.
    CurrentModule
);

module_kind!(
    /// Module a person has completed.
    PreviousModule
);

module_kind!(
    /// Module a person intends to take.
    PlannedModule
);

impl From<CurrentModule> for PreviousModule {
    /// End-of-term promotion keeps the code and changes only the kind.
    fn from(value: CurrentModule) -> Self {
        Self::from(value.module_name)
    }
}
