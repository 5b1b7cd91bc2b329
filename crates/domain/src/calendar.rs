use chrono::{Datelike, Months, NaiveDate};

use crate::{DayOfWeek, Workout};

static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A displayed month. Always refers to the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(NaiveDate);

impl Month {
    /// Return `None` for an invalid month number (valid range is 1 to 12).
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.0.month();
        self.0.iter_days().take_while(move |d| d.month() == month)
    }

    /// Title like `October 2026`.
    #[must_use]
    pub fn title(self) -> String {
        format!("{} {}", MONTHS[self.0.month0() as usize], self.0.year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub has_workouts: bool,
}

/// Calendar grid of a month with Sunday as first column.
///
/// The first week is padded with `None` up to the weekday of the first day. A day is marked if any
/// workout is scheduled on its weekday, so every occurrence of a weekday in the month is marked.
#[must_use]
pub fn month_grid(month: Month, workouts: &[Workout]) -> Vec<Option<CalendarDay>> {
    let leading_blanks = month.first_day().weekday().num_days_from_sunday() as usize;
    std::iter::repeat_n(None, leading_blanks)
        .chain(month.days().map(|date| {
            Some(CalendarDay {
                date,
                has_workouts: has_workouts(date, workouts),
            })
        }))
        .collect()
}

/// Workouts whose recurring weekday matches the weekday of `date`.
#[must_use]
pub fn workouts_on(date: NaiveDate, workouts: &[Workout]) -> Vec<&Workout> {
    let day = DayOfWeek::of(date);
    workouts.iter().filter(|w| w.day == day).collect()
}

#[must_use]
pub fn has_workouts(date: NaiveDate, workouts: &[Workout]) -> bool {
    let day = DayOfWeek::of(date);
    workouts.iter().any(|w| w.day == day)
}

#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}
