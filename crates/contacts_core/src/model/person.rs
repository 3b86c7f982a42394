//! Person domain model.
//!
//! # Responsibility
//! - Aggregate identity fields with tag, module and lesson sets.
//! - Provide lesson add/remove and end-of-term module promotion.
//!
//! # Invariants
//! - `Person` values are never mutated in place; every transition returns a
//!   new value and leaves the receiver untouched.
//! - A module code lives in at most one of the current/previous/planned sets.
//! - Structural equality covers every field; `is_same_person` compares names.

use crate::model::fields::{Address, Email, Github, Name, Phone, Tag};
use crate::model::lesson::Lesson;
use crate::model::module::{CurrentModule, ModuleCode, PlannedModule, PreviousModule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Domain error for person-level transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    /// Lesson to remove is not in the person's lesson set.
    LessonNotFound(Lesson),
    /// Module code appears in more than one module set.
    ModuleInMultipleSets(String),
}

impl Display for PersonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LessonNotFound(lesson) => write!(f, "no such lesson exists: {lesson}"),
            Self::ModuleInMultipleSets(code) => write!(
                f,
                "module `{code}` can only be one of current, previous or planned"
            ),
        }
    }
}

impl Error for PersonError {}

/// A contact with academic module associations and weekly lessons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonFields")]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    github: Github,
    tags: BTreeSet<Tag>,
    curr_modules: BTreeSet<CurrentModule>,
    prev_modules: BTreeSet<PreviousModule>,
    plan_modules: BTreeSet<PlannedModule>,
    lessons: BTreeSet<Lesson>,
}

impl Person {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn github(&self) -> &Github {
        &self.github
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn curr_modules(&self) -> &BTreeSet<CurrentModule> {
        &self.curr_modules
    }

    pub fn prev_modules(&self) -> &BTreeSet<PreviousModule> {
        &self.prev_modules
    }

    pub fn plan_modules(&self) -> &BTreeSet<PlannedModule> {
        &self.plan_modules
    }

    pub fn lessons(&self) -> &BTreeSet<Lesson> {
        &self.lessons
    }

    /// Weaker identity check: two persons are the same contact when their
    /// names match, whatever the other fields hold.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Returns a copy with `lesson` added. Adding a known lesson is a no-op.
    pub fn add_lesson(&self, lesson: Lesson) -> Person {
        let mut next = self.clone();
        next.lessons.insert(lesson);
        next
    }

    /// Returns a copy without `lesson`.
    ///
    /// # Errors
    /// - `PersonError::LessonNotFound` when the lesson is not present.
    pub fn remove_lesson(&self, lesson: &Lesson) -> Result<Person, PersonError> {
        if !self.lessons.contains(lesson) {
            return Err(PersonError::LessonNotFound(lesson.clone()));
        }
        let mut next = self.clone();
        next.lessons.remove(lesson);
        Ok(next)
    }

    /// Returns a copy where every current module became a previous module.
    ///
    /// The current set is empty afterwards, so a second call changes nothing.
    pub fn update_prev_mods(&self) -> Person {
        let mut next = self.clone();
        let promoted = std::mem::take(&mut next.curr_modules);
        next.prev_modules
            .extend(promoted.into_iter().map(PreviousModule::from));
        next
    }

    /// Starts a builder seeded with every field of this person.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            github: self.github.clone(),
            tags: self.tags.clone(),
            curr_modules: self.curr_modules.clone(),
            prev_modules: self.prev_modules.clone(),
            plan_modules: self.plan_modules.clone(),
            lessons: self.lessons.clone(),
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Github: {}",
            self.name, self.phone, self.email, self.address, self.github
        )?;
        write_section(f, "Tags", &self.tags)?;
        write_section(f, "Current Modules", &self.curr_modules)?;
        write_section(f, "Previous Modules", &self.prev_modules)?;
        write_section(f, "Planned Modules", &self.plan_modules)
    }
}

fn write_section<T: Display>(
    f: &mut Formatter<'_>,
    label: &str,
    items: &BTreeSet<T>,
) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    write!(f, "; {label}: ")?;
    for item in items {
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Builder for `Person`; identity fields are required up front.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    github: Github,
    tags: BTreeSet<Tag>,
    curr_modules: BTreeSet<CurrentModule>,
    prev_modules: BTreeSet<PreviousModule>,
    plan_modules: BTreeSet<PlannedModule>,
    lessons: BTreeSet<Lesson>,
}

impl PersonBuilder {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, github: Github) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            github,
            tags: BTreeSet::new(),
            curr_modules: BTreeSet::new(),
            prev_modules: BTreeSet::new(),
            plan_modules: BTreeSet::new(),
            lessons: BTreeSet::new(),
        }
    }

    pub fn name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn github(mut self, github: Github) -> Self {
        self.github = github;
        self
    }

    /// Replaces the tag set.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn curr_modules(mut self, modules: impl IntoIterator<Item = CurrentModule>) -> Self {
        self.curr_modules = modules.into_iter().collect();
        self
    }

    pub fn prev_modules(mut self, modules: impl IntoIterator<Item = PreviousModule>) -> Self {
        self.prev_modules = modules.into_iter().collect();
        self
    }

    pub fn plan_modules(mut self, modules: impl IntoIterator<Item = PlannedModule>) -> Self {
        self.plan_modules = modules.into_iter().collect();
        self
    }

    pub fn lessons(mut self, lessons: impl IntoIterator<Item = Lesson>) -> Self {
        self.lessons = lessons.into_iter().collect();
        self
    }

    /// Finishes the person.
    ///
    /// # Errors
    /// - `PersonError::ModuleInMultipleSets` when one code is in two module sets.
    pub fn build(self) -> Result<Person, PersonError> {
        if let Some(code) = shared_module_code(&self.curr_modules, &self.prev_modules, &self.plan_modules)
        {
            return Err(PersonError::ModuleInMultipleSets(code.to_string()));
        }

        Ok(Person {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            github: self.github,
            tags: self.tags,
            curr_modules: self.curr_modules,
            prev_modules: self.prev_modules,
            plan_modules: self.plan_modules,
            lessons: self.lessons,
        })
    }
}

fn shared_module_code<'a>(
    curr: &'a BTreeSet<CurrentModule>,
    prev: &'a BTreeSet<PreviousModule>,
    plan: &'a BTreeSet<PlannedModule>,
) -> Option<&'a ModuleCode> {
    let mut seen = BTreeSet::new();
    curr.iter()
        .map(CurrentModule::code)
        .chain(prev.iter().map(PreviousModule::code))
        .chain(plan.iter().map(PlannedModule::code))
        .find(|code| !seen.insert(*code))
}

#[derive(Deserialize)]
struct PersonFields {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    github: Github,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    curr_modules: BTreeSet<CurrentModule>,
    #[serde(default)]
    prev_modules: BTreeSet<PreviousModule>,
    #[serde(default)]
    plan_modules: BTreeSet<PlannedModule>,
    #[serde(default)]
    lessons: BTreeSet<Lesson>,
}

impl TryFrom<PersonFields> for Person {
    type Error = PersonError;

    fn try_from(value: PersonFields) -> Result<Self, Self::Error> {
        PersonBuilder::new(
            value.name,
            value.phone,
            value.email,
            value.address,
            value.github,
        )
        .tags(value.tags)
        .curr_modules(value.curr_modules)
        .prev_modules(value.prev_modules)
        .plan_modules(value.plan_modules)
        .lessons(value.lessons)
        .build()
    }
}
