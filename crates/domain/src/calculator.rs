use std::{fmt, slice::Iter, str::FromStr};

use crate::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl FromStr for Sex {
    type Err = SexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(SexError::Invalid(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SexError {
    #[error("Invalid sex: {0}")]
    Invalid(String),
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::Female => "female",
                Sex::Male => "male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl Property for ActivityLevel {
    fn iter() -> Iter<'static, ActivityLevel> {
        static LEVELS: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (intense exercise daily)",
        }
    }
}

impl ActivityLevel {
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Validated calculator input. Height in cm, weight in kg, age in years, all positive.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    height: f32,
    weight: f32,
    age: f32,
    sex: Sex,
    activity_level: ActivityLevel,
}

impl UserStats {
    pub fn new(
        height: f32,
        weight: f32,
        age: f32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Result<Self, BodyMeasureError> {
        Ok(Self {
            height: validate_measure(Measure::Height, height)?,
            weight: validate_measure(Measure::Weight, weight)?,
            age: validate_measure(Measure::Age, age)?,
            sex,
            activity_level,
        })
    }

    /// Parse the calculator form.
    pub fn parse(
        height: &str,
        weight: &str,
        age: &str,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Result<Self, BodyMeasureError> {
        Self::new(
            parse_measure(Measure::Height, height)?,
            parse_measure(Measure::Weight, weight)?,
            parse_measure(Measure::Age, age)?,
            sex,
            activity_level,
        )
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[must_use]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Basal metabolic rate according to the Mifflin-St Jeor equation in kcal/day.
    #[must_use]
    pub fn bmr(&self) -> f32 {
        match self.sex {
            Sex::Male => 88.362 + (13.397 * self.weight) + (4.799 * self.height) - (5.677 * self.age),
            Sex::Female => {
                447.593 + (9.247 * self.weight) + (3.098 * self.height) - (4.330 * self.age)
            }
        }
    }

    #[must_use]
    pub fn tdee(&self) -> f32 {
        self.bmr() * self.activity_level.multiplier()
    }

    #[must_use]
    pub fn energy_expenditure(&self) -> EnergyExpenditure {
        EnergyExpenditure {
            bmr: round_kcal(self.bmr()),
            tdee: round_kcal(self.tdee()),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_kcal(value: f32) -> i32 {
    value.round() as i32
}

/// Rounded calculator result in kcal/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyExpenditure {
    pub bmr: i32,
    pub tdee: i32,
}

impl EnergyExpenditure {
    #[must_use]
    pub fn calorie_targets(&self, offset: i32) -> CalorieTargets {
        CalorieTargets {
            lose: self.tdee.saturating_sub(offset),
            maintain: self.tdee,
            gain: self.tdee.saturating_add(offset),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieTargets {
    pub lose: i32,
    pub maintain: i32,
    pub gain: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Height,
    Weight,
    Age,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Measure::Height => "Height",
                Measure::Weight => "Weight",
                Measure::Age => "Age",
            }
        )
    }
}

fn parse_measure(measure: Measure, value: &str) -> Result<f32, BodyMeasureError> {
    let value = value.replace(',', ".");
    let value = value.trim();
    if value.is_empty() {
        return Err(BodyMeasureError::Missing(measure));
    }
    value
        .parse::<f32>()
        .map_err(|_| BodyMeasureError::NotANumber(measure))
}

fn validate_measure(measure: Measure, value: f32) -> Result<f32, BodyMeasureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BodyMeasureError::NotPositive(measure))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyMeasureError {
    #[error("{0} is required")]
    Missing(Measure),
    #[error("{0} must be a decimal number")]
    NotANumber(Measure),
    #[error("{0} must be a positive number")]
    NotPositive(Measure),
}
