use std::{collections::VecDeque, sync::Arc};

use ::log::warn;
use calroast_app::{Settings, SettingsRepository, log};
use calroast_domain::{self as domain, ReadError, StorageError, UpdateError};

use crate::{Key, KeyValueStorage};

/// Repository persisting all application state in a key-value backend.
pub struct LocalRepository<S> {
    storage: Arc<S>,
}

impl<S> LocalRepository<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> Clone for LocalRepository<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: KeyValueStorage> domain::WorkoutRepository for LocalRepository<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, ReadError> {
        let Some(values) = self
            .storage
            .get::<Vec<serde_json::Value>>(Key::Workouts)
            .map_err(StorageError::from)?
        else {
            return Ok(vec![]);
        };

        Ok(values
            .into_iter()
            .filter_map(|value| {
                match serde_json::from_value::<Workout>(value)
                    .map_err(WorkoutError::from)
                    .and_then(domain::Workout::try_from)
                {
                    Ok(workout) => Some(workout),
                    Err(err) => {
                        warn!("skipped invalid workout: {err}");
                        None
                    }
                }
            })
            .collect())
    }

    async fn write_workouts(&self, workouts: &[domain::Workout]) -> Result<(), UpdateError> {
        let workouts = workouts.iter().map(Workout::from).collect::<Vec<_>>();
        self.storage
            .set(Key::Workouts, &workouts)
            .map_err(StorageError::from)?;
        Ok(())
    }
}

impl<S: KeyValueStorage> SettingsRepository for LocalRepository<S> {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.storage
            .get(Key::Settings)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.storage
            .set(Key::Settings, &settings)
            .map_err(|err| err.to_string())
    }
}

impl<S: KeyValueStorage + Send + Sync + 'static> log::Repository for LocalRepository<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.storage
            .get(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.storage
            .set(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub day_of_week: String,
    pub time: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            day_of_week: value.day.key().to_string(),
            time: value.time.to_string(),
            workout_type: value.workout_type.key().to_string(),
            date: value.date.clone(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            day: value.day_of_week.parse()?,
            time: domain::ScheduledTime::new(&value.time)?,
            workout_type: value.workout_type.parse()?,
            date: value.date,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidRecord(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidDay(#[from] domain::DayOfWeekError),
    #[error(transparent)]
    InvalidTime(#[from] domain::ScheduledTimeError),
    #[error(transparent)]
    InvalidType(#[from] domain::WorkoutTypeError),
}
