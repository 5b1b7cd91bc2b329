use std::{fmt, slice::Iter, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use derive_more::{AsRef, Display};
use uuid::Uuid;

use crate::{Name, Property, ScheduledTime};

/// A recurring weekly schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub day: DayOfWeek,
    pub time: ScheduledTime,
    pub workout_type: WorkoutType,
    /// Absolute calendar date, only used for exact-match lookups.
    pub date: Option<String>,
}

impl Workout {
    #[must_use]
    pub fn new(name: Name, day: DayOfWeek, time: ScheduledTime, workout_type: WorkoutType) -> Self {
        Self {
            id: WorkoutID::random(),
            name,
            day,
            time,
            workout_type,
            date: None,
        }
    }

    /// Replace all fields that are set in `update`. The id is never changed.
    pub fn apply(&mut self, update: WorkoutUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(day) = update.day {
            self.day = day;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(workout_type) = update.workout_type {
            self.workout_type = workout_type;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutUpdate {
    pub name: Option<Name>,
    pub day: Option<DayOfWeek>,
    pub time: Option<ScheduledTime>,
    pub workout_type: Option<WorkoutType>,
    /// `Some(None)` clears the date.
    pub date: Option<Option<String>>,
}

impl WorkoutUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.day.is_none()
            && self.time.is_none()
            && self.workout_type.is_none()
            && self.date.is_none()
    }
}

#[derive(AsRef, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(String);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Property for DayOfWeek {
    fn iter() -> Iter<'static, DayOfWeek> {
        static DAYS: [DayOfWeek; 7] = [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ];
        DAYS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl DayOfWeek {
    /// Days in calendar column order, starting with Sunday.
    pub fn iter_from_sunday() -> impl Iterator<Item = DayOfWeek> {
        std::iter::once(DayOfWeek::Sunday).chain(Self::iter().copied().take(6))
    }

    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    #[must_use]
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(value: DayOfWeek) -> Self {
        match value {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = DayOfWeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        DayOfWeek::iter()
            .find(|d| d.key() == normalized)
            .copied()
            .ok_or_else(|| DayOfWeekError::Invalid(s.to_string()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayOfWeekError {
    #[error("Invalid day of week: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkoutType {
    Cardio,
    Strength,
    Stretching,
}

impl Property for WorkoutType {
    fn iter() -> Iter<'static, WorkoutType> {
        static TYPES: [WorkoutType; 3] = [
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Stretching,
        ];
        TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Stretching => "Stretching",
        }
    }
}

impl WorkoutType {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "cardio",
            WorkoutType::Strength => "strength",
            WorkoutType::Stretching => "stretching",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "#FF6B6B",
            WorkoutType::Strength => "#4ECDC4",
            WorkoutType::Stretching => "#95E1D3",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        WorkoutType::iter()
            .find(|t| t.key() == normalized)
            .copied()
            .ok_or_else(|| WorkoutTypeError::Invalid(s.to_string()))
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutTypeError {
    #[error("Invalid workout type: {0}")]
    Invalid(String),
}
