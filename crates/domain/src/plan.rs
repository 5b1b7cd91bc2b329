use std::slice::Iter;

use log::warn;

use crate::{DayOfWeek, Name, Property, ScheduledTime, Workout, WorkoutID, WorkoutType};

/// Time assigned to workouts created from a plan.
pub const PLAN_WORKOUT_TIME: &str = "09:00 AM";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub days_per_week: u32,
    pub duration: &'static str,
    pub goal: &'static str,
    pub days: &'static [PlanDay],
}

impl WorkoutPlan {
    /// Create one workout per plan-day, each with a fresh id.
    #[must_use]
    pub fn to_workouts(&self) -> Vec<Workout> {
        self.days
            .iter()
            .filter_map(|day| match Name::new(day.name) {
                Ok(name) => Some(Workout {
                    id: WorkoutID::random(),
                    name,
                    day: day.day,
                    time: ScheduledTime::new(PLAN_WORKOUT_TIME).ok()?,
                    workout_type: day.workout_type,
                    date: None,
                }),
                Err(err) => {
                    warn!("skipped plan day of {}: {err}", self.id);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanDay {
    pub day: DayOfWeek,
    pub name: &'static str,
    pub workout_type: WorkoutType,
    pub exercises: &'static [PlanExercise],
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanExercise {
    pub name: &'static str,
    pub prescription: Prescription,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prescription {
    SetsReps {
        sets: &'static str,
        reps: &'static str,
    },
    Duration(&'static str),
}

impl std::fmt::Display for Prescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prescription::SetsReps { sets, reps } => write!(f, "{sets} × {reps}"),
            Prescription::Duration(duration) => write!(f, "{duration}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

#[must_use]
pub fn find_workout_plan<'a>(plans: &'a [WorkoutPlan], id: &str) -> Option<&'a WorkoutPlan> {
    plans.iter().find(|p| p.id == id)
}
