//! Workout store
//!
//! The store owns the canonical workout list of a session. It is constructed once at start-up and
//! passed by reference to every consumer.
//!
//! Mutations change the in-memory list immediately and enqueue a snapshot for persistence. Every
//! mutation increments a monotonic revision. `flush` drains the queue by writing the newest
//! snapshot, and keeps writing until the persisted revision has caught up with the current one.
//! Writes are never issued concurrently: a `flush` call made while another flush is in progress
//! returns immediately, and the running flush picks up the newer revision before it completes.
//! Consequently an older snapshot can never overwrite a newer one.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashSet},
};

use log::{debug, error, warn};

use crate::{
    CreateError, DayOfWeek, Property, ReadError, UpdateError, Workout, WorkoutID, WorkoutPlan,
    WorkoutUpdate,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn write_workouts(&self, workouts: &[Workout]) -> Result<(), UpdateError>;
}

#[derive(Default)]
struct State {
    workouts: Vec<Workout>,
    loading: bool,
    saving: bool,
    revision: u64,
    persisted_revision: u64,
}

pub struct WorkoutStore<R> {
    repository: R,
    state: RefCell<State>,
}

impl<R: WorkoutRepository> WorkoutStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: RefCell::new(State::default()),
        }
    }

    /// Create a store and load the persisted workouts.
    pub async fn init(repository: R) -> Self {
        let store = Self::new(repository);
        store.load().await;
        store
    }

    /// Rehydrate the list from the repository.
    ///
    /// Missing data results in an empty list. Unreadable data is logged and also results in an
    /// empty list; the persisted value stays untouched until the next write. Workouts added while
    /// loading are kept after the loaded ones.
    pub async fn load(&self) {
        self.state.borrow_mut().loading = true;
        let result = self.repository.read_workouts().await;
        let mut state = self.state.borrow_mut();
        state.loading = false;

        let loaded = match result {
            Ok(workouts) => workouts,
            Err(err) => {
                error!("failed to load workouts: {err}");
                return;
            }
        };

        let mut ids = HashSet::new();
        let mut workouts = Vec::with_capacity(loaded.len() + state.workouts.len());
        for workout in loaded {
            if ids.insert(workout.id.clone()) {
                workouts.push(workout);
            } else {
                warn!("dropped workout with duplicate id {}", workout.id);
            }
        }
        for workout in state.workouts.drain(..) {
            if ids.insert(workout.id.clone()) {
                workouts.push(workout);
            }
        }
        debug!("loaded {} workouts", workouts.len());
        state.workouts = workouts;
    }

    /// Write pending changes until the repository holds the newest snapshot.
    pub async fn flush(&self) -> Result<(), UpdateError> {
        if self.state.borrow().saving {
            return Ok(());
        }

        loop {
            let (revision, snapshot) = {
                let mut state = self.state.borrow_mut();
                if state.revision <= state.persisted_revision {
                    state.saving = false;
                    return Ok(());
                }
                state.saving = true;
                (state.revision, state.workouts.clone())
            };

            let result = self.repository.write_workouts(&snapshot).await;

            let mut state = self.state.borrow_mut();
            match result {
                Ok(()) => {
                    debug!("persisted workouts at revision {revision}");
                    state.persisted_revision = state.persisted_revision.max(revision);
                }
                Err(err) => {
                    error!("failed to persist workouts at revision {revision}: {err}");
                    state.saving = false;
                    return Err(err);
                }
            }
        }
    }

    pub fn add(&self, workout: Workout) -> Result<Workout, CreateError> {
        let mut state = self.state.borrow_mut();
        if state.workouts.iter().any(|w| w.id == workout.id) {
            return Err(CreateError::Conflict);
        }
        state.workouts.push(workout.clone());
        state.revision += 1;
        Ok(workout)
    }

    /// Add one workout per plan-day as a single change.
    pub fn apply_plan(&self, plan: &WorkoutPlan) -> Vec<Workout> {
        let workouts = plan.to_workouts();
        if workouts.is_empty() {
            return workouts;
        }
        let mut state = self.state.borrow_mut();
        state.workouts.extend(workouts.iter().cloned());
        state.revision += 1;
        debug!("added {} workouts of plan {}", workouts.len(), plan.id);
        workouts
    }

    /// Return the updated workout, or `None` if no workout has the given id.
    pub fn update(&self, id: &WorkoutID, update: WorkoutUpdate) -> Option<Workout> {
        let mut state = self.state.borrow_mut();
        let workout = state.workouts.iter_mut().find(|w| w.id == *id)?;
        if update.is_empty() {
            return Some(workout.clone());
        }
        workout.apply(update);
        let result = workout.clone();
        state.revision += 1;
        Some(result)
    }

    /// Return the deleted workout, or `None` if no workout has the given id.
    pub fn delete(&self, id: &WorkoutID) -> Option<Workout> {
        let mut state = self.state.borrow_mut();
        let index = state.workouts.iter().position(|w| w.id == *id)?;
        let workout = state.workouts.remove(index);
        state.revision += 1;
        Some(workout)
    }
}

impl<R> WorkoutStore<R> {
    #[must_use]
    pub fn workouts(&self) -> Vec<Workout> {
        self.state.borrow().workouts.clone()
    }

    /// Run `f` on the current list without copying it.
    pub fn with_workouts<T>(&self, f: impl FnOnce(&[Workout]) -> T) -> T {
        f(&self.state.borrow().workouts)
    }

    #[must_use]
    pub fn workout(&self, id: &WorkoutID) -> Option<Workout> {
        self.state
            .borrow()
            .workouts
            .iter()
            .find(|w| w.id == *id)
            .cloned()
    }

    /// Workouts on the given weekday name, matched case-insensitively.
    #[must_use]
    pub fn workouts_by_day(&self, day: &str) -> Vec<Workout> {
        match day.parse::<DayOfWeek>() {
            Ok(day) => self.workouts_on_day(day),
            Err(_) => vec![],
        }
    }

    #[must_use]
    pub fn workouts_on_day(&self, day: DayOfWeek) -> Vec<Workout> {
        self.state
            .borrow()
            .workouts
            .iter()
            .filter(|w| w.day == day)
            .cloned()
            .collect()
    }

    /// Workouts whose date is exactly `date`.
    #[must_use]
    pub fn workouts_by_date(&self, date: &str) -> Vec<Workout> {
        self.state
            .borrow()
            .workouts
            .iter()
            .filter(|w| w.date.as_deref() == Some(date))
            .cloned()
            .collect()
    }

    /// Workouts grouped by weekday from Monday to Sunday. Days without workouts are included.
    #[must_use]
    pub fn schedule(&self) -> BTreeMap<DayOfWeek, Vec<Workout>> {
        let mut result: BTreeMap<DayOfWeek, Vec<Workout>> =
            DayOfWeek::iter().map(|d| (*d, vec![])).collect();
        for workout in &self.state.borrow().workouts {
            result.entry(workout.day).or_default().push(workout.clone());
        }
        result
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().workouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().workouts.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.state.borrow().saving
    }

    #[must_use]
    pub fn has_pending_write(&self) -> bool {
        let state = self.state.borrow();
        state.revision > state.persisted_revision
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    #[must_use]
    pub fn persisted_revision(&self) -> u64 {
        self.state.borrow().persisted_revision
    }
}
