use derive_more::{AsRef, Display};

/// Display name of a workout.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Please enter workout name")]
    Empty,
}

/// Free-form time of day at which a workout is scheduled, e.g. `07:30 AM`.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledTime(String);

impl ScheduledTime {
    pub fn new(time: &str) -> Result<Self, ScheduledTimeError> {
        let trimmed_time = time.trim();

        if trimmed_time.is_empty() {
            return Err(ScheduledTimeError::Empty);
        }

        Ok(ScheduledTime(trimmed_time.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScheduledTimeError {
    #[error("Please enter workout time")]
    Empty,
}
