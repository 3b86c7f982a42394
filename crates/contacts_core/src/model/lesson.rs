//! Weekly lesson slots linked to a person.
//!
//! # Responsibility
//! - Represent one recurring session: module, weekday and time window.
//! - Parse/print the compact `CS2103T MON 10:00-12:00` form.
//!
//! # Invariants
//! - `end` is strictly later than `start`.
//! - Lessons order by day, then start time, so sets list chronologically.

use crate::model::module::{ModuleCode, ModuleValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lesson validation/parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonValidationError {
    Module(ModuleValidationError),
    InvalidDay(String),
    InvalidTime(String),
    /// `end` must be later than `start`.
    InvalidWindow {
        start: LessonTime,
        end: LessonTime,
    },
    InvalidFormat(String),
}

impl Display for LessonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Module(err) => write!(f, "{err}"),
            Self::InvalidDay(value) => write!(f, "invalid lesson day `{value}`"),
            Self::InvalidTime(value) => {
                write!(f, "invalid lesson time `{value}`; expected HH:MM (24h)")
            }
            Self::InvalidWindow { start, end } => {
                write!(f, "lesson end ({end}) must be later than start ({start})")
            }
            Self::InvalidFormat(value) => write!(
                f,
                "invalid lesson `{value}`; expected `MODULE DAY HH:MM-HH:MM`"
            ),
        }
    }
}

impl Error for LessonValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Module(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModuleValidationError> for LessonValidationError {
    fn from(value: ModuleValidationError) -> Self {
        Self::Module(value)
    }
}

/// Day of week a lesson recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Accepts short (`mon`) and full (`Monday`) names, any case.
impl FromStr for Weekday {
    type Err = LessonValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Monday),
            "tue" | "tues" | "tuesday" => Ok(Self::Tuesday),
            "wed" | "wednesday" => Ok(Self::Wednesday),
            "thu" | "thur" | "thurs" | "thursday" => Ok(Self::Thursday),
            "fri" | "friday" => Ok(Self::Friday),
            "sat" | "saturday" => Ok(Self::Saturday),
            "sun" | "sunday" => Ok(Self::Sunday),
            _ => Err(LessonValidationError::InvalidDay(s.to_string())),
        }
    }
}

/// Time of day with minute precision, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonTime(u16);

impl LessonTime {
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, LessonValidationError> {
        if hour >= 24 || minute >= 60 {
            return Err(LessonValidationError::InvalidTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl Display for LessonTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for LessonTime {
    type Err = LessonValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LessonValidationError::InvalidTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = hour.parse::<u16>().map_err(|_| invalid())?;
        let minute = minute.parse::<u16>().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for LessonTime {
    type Error = LessonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LessonTime> for String {
    fn from(value: LessonTime) -> Self {
        value.to_string()
    }
}

/// One scheduled weekly session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LessonFields")]
pub struct Lesson {
    day: Weekday,
    start: LessonTime,
    end: LessonTime,
    module: ModuleCode,
}

impl Lesson {
    /// Creates a lesson, rejecting empty or reversed time windows.
    pub fn new(
        module: ModuleCode,
        day: Weekday,
        start: LessonTime,
        end: LessonTime,
    ) -> Result<Self, LessonValidationError> {
        if end <= start {
            return Err(LessonValidationError::InvalidWindow { start, end });
        }
        Ok(Self {
            day,
            start,
            end,
            module,
        })
    }

    pub fn module(&self) -> &ModuleCode {
        &self.module
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> LessonTime {
        self.start
    }

    pub fn end(&self) -> LessonTime {
        self.end
    }

    /// Length of the session in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.0 - self.start.0
    }

    /// Returns whether both lessons share a day and their windows intersect.
    pub fn overlaps(&self, other: &Lesson) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}-{}",
            self.module, self.day, self.start, self.end
        )
    }
}

impl FromStr for Lesson {
    type Err = LessonValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [module, day, window] = parts.as_slice() else {
            return Err(LessonValidationError::InvalidFormat(s.to_string()));
        };
        let (start, end) = window
            .split_once('-')
            .ok_or_else(|| LessonValidationError::InvalidFormat(s.to_string()))?;

        Self::new(module.parse()?, day.parse()?, start.parse()?, end.parse()?)
    }
}

#[derive(Deserialize)]
struct LessonFields {
    day: Weekday,
    start: LessonTime,
    end: LessonTime,
    module: ModuleCode,
}

impl TryFrom<LessonFields> for Lesson {
    type Error = LessonValidationError;

    fn try_from(value: LessonFields) -> Result<Self, Self::Error> {
        Self::new(value.module, value.day, value.start, value.end)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lesson, LessonTime, LessonValidationError, Weekday};
    use crate::model::module::ModuleCode;

    fn time(value: &str) -> LessonTime {
        value.parse().unwrap()
    }

    #[test]
    fn parses_compact_form() {
        let lesson: Lesson = "CS2103T mon 10:00-12:00".parse().unwrap();
        assert_eq!(lesson.module().as_str(), "CS2103T");
        assert_eq!(lesson.day(), Weekday::Monday);
        assert_eq!(lesson.start(), time("10:00"));
        assert_eq!(lesson.duration_minutes(), 120);
        assert_eq!(lesson.to_string(), "CS2103T MON 10:00-12:00");
    }

    #[test]
    fn rejects_reversed_or_empty_window() {
        let module = ModuleCode::new("CS2101").unwrap();
        let err = Lesson::new(module.clone(), Weekday::Friday, time("14:00"), time("13:00"))
            .unwrap_err();
        assert!(matches!(err, LessonValidationError::InvalidWindow { .. }));
        assert!(Lesson::new(module, Weekday::Friday, time("14:00"), time("14:00")).is_err());
    }

    #[test]
    fn rejects_bad_times_and_days() {
        for value in ["24:00", "9:7", "12:60", "ab:cd", "1200", ":30"] {
            assert!(value.parse::<LessonTime>().is_err(), "{value} should fail");
        }
        assert_eq!(time("9:05").to_string(), "09:05");
        assert!(matches!(
            "funday".parse::<Weekday>(),
            Err(LessonValidationError::InvalidDay(_))
        ));
    }

    #[test]
    fn rejects_malformed_compact_form() {
        assert!(matches!(
            "CS2103T MON".parse::<Lesson>(),
            Err(LessonValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            "CS2103T* MON 10:00-11:00".parse::<Lesson>(),
            Err(LessonValidationError::Module(_))
        ));
    }

    #[test]
    fn overlap_requires_same_day_and_intersection() {
        let a: Lesson = "CS2103T MON 10:00-12:00".parse().unwrap();
        let b: Lesson = "CS2101 MON 11:00-13:00".parse().unwrap();
        let c: Lesson = "CS2101 MON 12:00-13:00".parse().unwrap();
        let d: Lesson = "CS2101 TUE 10:00-12:00".parse().unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn orders_chronologically() {
        let late: Lesson = "CS1231 MON 14:00-15:00".parse().unwrap();
        let early: Lesson = "MA1521 MON 08:00-09:00".parse().unwrap();
        let tuesday: Lesson = "CS1010 TUE 08:00-09:00".parse().unwrap();
        let mut lessons = vec![tuesday.clone(), late.clone(), early.clone()];
        lessons.sort();
        assert_eq!(lessons, vec![early, late, tuesday]);
    }
}
