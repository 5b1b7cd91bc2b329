use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::{DayOfWeek, Property, Workout, WorkoutType};

/// Fixed estimate of burned calories per scheduled workout.
pub const CALORIES_PER_WORKOUT: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Week = 7,
    Month = 30,
}

impl TimeRange {
    #[must_use]
    pub fn days(self) -> u32 {
        self as u32
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    /// The trailing window of `range` days ending with `today`.
    #[must_use]
    pub fn trailing(range: TimeRange, today: NaiveDate) -> Self {
        Interval {
            first: today
                .checked_sub_days(Days::new(u64::from(range.days() - 1)))
                .unwrap_or(today),
            last: today,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take_while(|d| *d <= self.last)
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

/// Count the scheduled workout slots per weekday within `interval`.
///
/// Each calendar day adds the number of workouts recurring on its weekday, so the result counts
/// slot hits and not completed sessions.
#[must_use]
pub fn frequency_by_day(workouts: &[Workout], interval: &Interval) -> BTreeMap<DayOfWeek, u32> {
    let mut per_weekday: BTreeMap<DayOfWeek, u32> =
        DayOfWeek::iter().map(|d| (*d, 0)).collect();
    for workout in workouts {
        *per_weekday.entry(workout.day).or_default() += 1;
    }

    let mut result: BTreeMap<DayOfWeek, u32> = DayOfWeek::iter().map(|d| (*d, 0)).collect();
    for date in interval.days() {
        let day = DayOfWeek::of(date);
        *result.entry(day).or_default() += per_weekday.get(&day).copied().unwrap_or_default();
    }
    result
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub workout_type: WorkoutType,
    pub count: u32,
    pub percentage: f32,
}

/// Number of workouts per type and their share of all workouts.
///
/// Types without any workout are omitted, so the result is empty for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn type_breakdown(workouts: &[Workout]) -> Vec<TypeShare> {
    let total = workouts.len();
    if total == 0 {
        return vec![];
    }
    WorkoutType::iter()
        .filter_map(|workout_type| {
            let count = workouts
                .iter()
                .filter(|w| w.workout_type == *workout_type)
                .count();
            (count > 0).then(|| TypeShare {
                workout_type: *workout_type,
                count: count as u32,
                percentage: count as f32 / total as f32 * 100.,
            })
        })
        .collect()
}

#[must_use]
pub fn estimated_calories_burned(total_workouts: u32) -> u32 {
    total_workouts * CALORIES_PER_WORKOUT
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub range: TimeRange,
    pub frequency_by_day: BTreeMap<DayOfWeek, u32>,
    pub type_breakdown: Vec<TypeShare>,
    pub total_workouts: u32,
    pub avg_per_day: f32,
    pub estimated_calories_burned: u32,
}

impl Progress {
    #[must_use]
    pub fn new(workouts: &[Workout], range: TimeRange, today: NaiveDate) -> Self {
        let frequency_by_day = frequency_by_day(workouts, &Interval::trailing(range, today));
        let total_workouts: u32 = frequency_by_day.values().sum();
        #[allow(clippy::cast_precision_loss)]
        let avg_per_day = total_workouts as f32 / range.days() as f32;
        Self {
            range,
            frequency_by_day,
            type_breakdown: type_breakdown(workouts),
            total_workouts,
            avg_per_day,
            estimated_calories_burned: estimated_calories_burned(total_workouts),
        }
    }

    /// Highest bar of the frequency chart, at least 1 to allow scaling.
    #[must_use]
    pub fn max_frequency(&self) -> u32 {
        self.frequency_by_day
            .values()
            .copied()
            .max()
            .unwrap_or_default()
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Name, ScheduledTime};

    // Wednesday
    static TODAY: std::sync::LazyLock<NaiveDate> =
        std::sync::LazyLock::new(|| NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());

    fn workout(id: &str, day: DayOfWeek, workout_type: WorkoutType) -> Workout {
        Workout {
            id: id.into(),
            name: Name::new("A").unwrap(),
            day,
            time: ScheduledTime::new("07:00 AM").unwrap(),
            workout_type,
            date: None,
        }
    }

    fn frequency(entries: &[(DayOfWeek, u32)]) -> BTreeMap<DayOfWeek, u32> {
        let mut result: BTreeMap<DayOfWeek, u32> = DayOfWeek::iter().map(|d| (*d, 0)).collect();
        result.extend(entries.iter().copied());
        result
    }

    #[rstest]
    #[case(TimeRange::Week, (NaiveDate::from_ymd_opt(2026, 10, 8).unwrap()..=*TODAY).into())]
    #[case(TimeRange::Month, (NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()..=*TODAY).into())]
    fn test_interval_trailing(#[case] range: TimeRange, #[case] expected: Interval) {
        let interval = Interval::trailing(range, *TODAY);
        assert_eq!(interval.days().count(), range.days() as usize);
        assert_eq!(interval, expected);
    }

    #[test]
    fn test_frequency_by_day_single_monday() {
        assert_eq!(
            frequency_by_day(
                &[workout("a", DayOfWeek::Monday, WorkoutType::Strength)],
                &Interval::trailing(TimeRange::Week, *TODAY)
            ),
            frequency(&[(DayOfWeek::Monday, 1)])
        );
    }

    #[test]
    fn test_frequency_by_day_month() {
        // 30 days ending on a Wednesday contain five Tuesdays and Wednesdays
        assert_eq!(
            frequency_by_day(
                &[
                    workout("a", DayOfWeek::Monday, WorkoutType::Strength),
                    workout("b", DayOfWeek::Wednesday, WorkoutType::Cardio),
                    workout("c", DayOfWeek::Wednesday, WorkoutType::Stretching),
                ],
                &Interval::trailing(TimeRange::Month, *TODAY)
            ),
            frequency(&[(DayOfWeek::Monday, 4), (DayOfWeek::Wednesday, 10)])
        );
    }

    #[test]
    fn test_frequency_by_day_empty() {
        assert_eq!(
            frequency_by_day(&[], &Interval::trailing(TimeRange::Week, *TODAY)),
            frequency(&[])
        );
    }

    #[test]
    fn test_type_breakdown() {
        let breakdown = type_breakdown(&[
            workout("a", DayOfWeek::Monday, WorkoutType::Strength),
            workout("b", DayOfWeek::Tuesday, WorkoutType::Cardio),
            workout("c", DayOfWeek::Friday, WorkoutType::Strength),
        ]);

        assert_eq!(
            breakdown
                .iter()
                .map(|s| (s.workout_type, s.count))
                .collect::<Vec<_>>(),
            vec![(WorkoutType::Cardio, 1), (WorkoutType::Strength, 2)]
        );
        assert_approx_eq!(breakdown[0].percentage, 33.333, 0.001);
        assert_approx_eq!(breakdown[1].percentage, 66.667, 0.001);
        assert_approx_eq!(
            breakdown.iter().map(|s| s.percentage).sum::<f32>(),
            100.0,
            0.001
        );
    }

    #[test]
    fn test_type_breakdown_empty() {
        assert_eq!(type_breakdown(&[]), vec![]);
    }

    #[test]
    fn test_progress() {
        let progress = Progress::new(
            &[
                workout("a", DayOfWeek::Monday, WorkoutType::Strength),
                workout("b", DayOfWeek::Monday, WorkoutType::Cardio),
                workout("c", DayOfWeek::Saturday, WorkoutType::Stretching),
            ],
            TimeRange::Week,
            *TODAY,
        );

        assert_eq!(progress.total_workouts, 3);
        assert_approx_eq!(progress.avg_per_day, 3.0 / 7.0, 0.001);
        assert_eq!(progress.estimated_calories_burned, 900);
        assert_eq!(progress.max_frequency(), 2);
        assert_eq!(progress.type_breakdown.len(), 3);
    }

    #[test]
    fn test_progress_without_workouts() {
        let progress = Progress::new(&[], TimeRange::Month, *TODAY);

        assert_eq!(progress.total_workouts, 0);
        assert_approx_eq!(progress.avg_per_day, 0.0, 0.001);
        assert_eq!(progress.estimated_calories_burned, 0);
        assert_eq!(progress.max_frequency(), 1);
        assert!(progress.type_breakdown.is_empty());
    }
}
