#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::Cell, collections::VecDeque};

use ::log::debug;
use calroast_domain::{
    CalendarDay, CalorieTargets, CreateError, Month, Progress, UserStats, Workout, WorkoutID,
    WorkoutPlan, WorkoutRepository, WorkoutStore, WorkoutUpdate, month_grid,
};
use chrono::{Local, NaiveDate};

pub mod log;
mod service;
mod settings;

pub use service::Service;
pub use settings::*;

/// Session context shared by all views.
///
/// The store is created exactly once per session. Views borrow it from here instead of
/// constructing their own.
pub struct App<R> {
    store: WorkoutStore<R>,
    service: Service<R>,
    settings: Cell<Settings>,
}

impl<R> App<R>
where
    R: WorkoutRepository + SettingsRepository + Clone,
{
    /// Load settings and workouts. Unreadable settings are replaced by the defaults.
    pub async fn init(repository: R) -> Self {
        let service = Service::new(repository.clone());
        let settings = service.get_settings().await.unwrap_or_default();
        let store = WorkoutStore::init(repository).await;
        Self {
            store,
            service,
            settings: Cell::new(settings),
        }
    }

    pub async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.settings.set(settings);
        self.service.set_settings(settings).await
    }

    pub async fn add_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        let workout = self.store.add(workout)?;
        self.persist().await;
        Ok(workout)
    }

    pub async fn update_workout(&self, id: &WorkoutID, update: WorkoutUpdate) -> Option<Workout> {
        let workout = self.store.update(id, update);
        self.persist().await;
        workout
    }

    pub async fn delete_workout(&self, id: &WorkoutID) -> Option<Workout> {
        let workout = self.store.delete(id);
        self.persist().await;
        workout
    }

    pub async fn apply_plan(&self, plan: &WorkoutPlan) -> Vec<Workout> {
        let workouts = self.store.apply_plan(plan);
        self.persist().await;
        workouts
    }

    /// Write pending changes. The in-memory state stays authoritative if the write fails, and
    /// the changes remain pending for the next write.
    async fn persist(&self) {
        if let Err(err) = self.store.flush().await {
            debug!("kept unsaved workout changes in memory: {err}");
        }
    }
}

impl<R> App<R> {
    #[must_use]
    pub fn store(&self) -> &WorkoutStore<R> {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    /// Progress over the configured time range ending today.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress_on(today())
    }

    #[must_use]
    pub fn progress_on(&self, today: NaiveDate) -> Progress {
        let range = self.settings.get().progress_range;
        self.store
            .with_workouts(|workouts| Progress::new(workouts, range, today))
    }

    #[must_use]
    pub fn calendar(&self, month: Month) -> Vec<Option<CalendarDay>> {
        self.store.with_workouts(|workouts| month_grid(month, workouts))
    }

    #[must_use]
    pub fn calorie_targets(&self, stats: &UserStats) -> CalorieTargets {
        stats
            .energy_expenditure()
            .calorie_targets(self.settings.get().calorie_offset)
    }
}

impl<R: log::Repository> App<R> {
    /// Persisted log entries, newest first.
    pub fn log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        log::Service::get_log_entries(&self.service)
    }
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[must_use]
pub fn current_month() -> Month {
    Month::of(today())
}
