//! Validated identity fields of a person.
//!
//! # Responsibility
//! - Own the format rules for name, phone, email, address, GitHub handle and
//!   tag values.
//! - Offer strict construction (`new`) and lenient parsing (`FromStr`, trims
//!   surrounding whitespace) so input adapters stay thin.
//!
//! # Invariants
//! - A constructed value always satisfies its format rule.
//! - Deserialization goes through the same validation as `new`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// GitHub caps usernames at 39 characters.
pub const MAX_GITHUB_LEN: usize = 39;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[+_.\-]?[A-Za-z0-9])*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S").expect("valid address regex"));
static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("valid github regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Identity field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// Field label, e.g. `phone`.
    pub field: &'static str,
    /// Rejected input as given.
    pub value: String,
    /// Human-readable format rule.
    pub constraint: &'static str,
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} `{}`: {}",
            self.field, self.value, self.constraint
        )
    }
}

impl Error for FieldValidationError {}

macro_rules! validated_field {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $constraint:literal, $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $constraint;

            /// Validates `value` exactly as given (no trimming).
            pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
                let value = value.into();
                if !Self::is_valid(&value) {
                    return Err(FieldValidationError {
                        field: $label,
                        value,
                        constraint: $constraint,
                    });
                }
                Ok(Self(value))
            }

            pub fn is_valid(value: &str) -> bool {
                let check: fn(&str) -> bool = $check;
                check(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = FieldValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.trim())
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

validated_field!(
    /// Person display name; also the identity key of a person.
    Name,
    "name",
    "names should only contain alphanumeric characters and spaces, and must not be blank",
    |value| NAME_RE.is_match(value)
);

validated_field!(
    /// Phone number made of digits only.
    Phone,
    "phone",
    "phone numbers should only contain digits and be at least 3 digits long",
    |value| PHONE_RE.is_match(value)
);

validated_field!(
    /// Email address in `local-part@domain` form.
    Email,
    "email",
    "emails should be of the format local-part@domain with an alphanumeric local part and a domain whose last label has at least 2 characters",
    |value| EMAIL_RE.is_match(value)
);

validated_field!(
    /// Free-form postal address.
    Address,
    "address",
    "addresses can take any value but must not be blank or start with whitespace",
    |value| ADDRESS_RE.is_match(value)
);

validated_field!(
    /// GitHub username.
    Github,
    "github",
    "github usernames are 1-39 alphanumeric characters with single hyphens between them",
    |value| value.len() <= MAX_GITHUB_LEN && GITHUB_RE.is_match(value)
);

validated_field!(
    /// Free-form label used for grouping and search.
    Tag,
    "tag",
    "tag names should be alphanumeric",
    |value| TAG_RE.is_match(value)
);

impl Tag {
    pub fn tag_name(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Github {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Parses every raw value into a set, failing on the first invalid entry.
///
/// Used for tags and module lists alike; duplicates collapse.
pub fn parse_all<T, I, S>(values: I) -> Result<BTreeSet<T>, T::Err>
where
    T: FromStr + Ord,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().parse::<T>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_all, Address, Email, Github, Name, Phone, Tag};
    use crate::model::module::CurrentModule;

    const WHITESPACE: &str = " \t\r\n";

    #[test]
    fn name_rules() {
        assert!(Name::is_valid("Rachel Walker"));
        assert!(Name::is_valid("2nd Rachel"));
        assert!(!Name::is_valid("R@chel"));
        assert!(!Name::is_valid(" Rachel"));
        assert!(!Name::is_valid(""));
    }

    #[test]
    fn phone_rules() {
        assert!(Phone::is_valid("123456"));
        assert!(Phone::is_valid("911"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("+651234"));
    }

    #[test]
    fn email_rules() {
        assert!(Email::is_valid("rachel@example.com"));
        assert!(Email::is_valid("a.b+c@mail.example-host.sg"));
        assert!(!Email::is_valid("example.com"));
        assert!(!Email::is_valid("rachel@example.c"));
        assert!(!Email::is_valid("rachel..w@example.com"));
        assert!(!Email::is_valid("-rachel@example.com"));
    }

    #[test]
    fn address_rules() {
        assert!(Address::is_valid("123 Main Street #0505"));
        assert!(!Address::is_valid(" "));
        assert!(!Address::is_valid(""));
    }

    #[test]
    fn github_rules() {
        assert!(Github::is_valid("rachel-w"));
        assert!(!Github::is_valid("-rachel"));
        assert!(!Github::is_valid("rachel--w"));
        assert!(!Github::is_valid(&"a".repeat(40)));
        assert!(Github::is_valid(&"a".repeat(39)));
    }

    #[test]
    fn tag_rules() {
        assert!(Tag::is_valid("friend"));
        assert!(!Tag::is_valid("#friend"));
        assert_eq!(Tag::new("friend").unwrap().to_string(), "[friend]");
    }

    #[test]
    fn from_str_trims_surrounding_whitespace() {
        let raw = format!("{WHITESPACE}Rachel Walker{WHITESPACE}");
        assert_eq!(raw.parse::<Name>().unwrap(), Name::new("Rachel Walker").unwrap());

        let raw = format!("{WHITESPACE}rachel@example.com{WHITESPACE}");
        assert_eq!(
            raw.parse::<Email>().unwrap(),
            Email::new("rachel@example.com").unwrap()
        );
    }

    #[test]
    fn validation_error_names_field() {
        let err = Phone::new("+651234").unwrap_err();
        assert_eq!(err.field, "phone");
        assert_eq!(err.value, "+651234");
        assert!(err.to_string().contains("digits"));
    }

    #[test]
    fn parse_all_collects_and_fails_fast() {
        let tags = parse_all::<Tag, _, _>(["friend", "neighbour", "friend"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_all::<Tag, _, _>(["friend", "#friend"]).is_err());
        assert!(parse_all::<Tag, _, _>(Vec::<String>::new()).unwrap().is_empty());

        let modules = parse_all::<CurrentModule, _, _>(["CS2103T", "CS2101"]).unwrap();
        assert_eq!(modules.len(), 2);
        assert!(parse_all::<CurrentModule, _, _>(["CS2103T", "CS2103T*"]).is_err());
    }
}
