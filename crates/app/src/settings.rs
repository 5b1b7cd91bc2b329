use calroast_domain::TimeRange;
use serde::{Deserialize, Serialize};

/// Calorie difference between maintenance and the loss or gain target.
pub const DEFAULT_CALORIE_OFFSET: i32 = 500;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    /// Return the default settings if none are stored.
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    #[serde(with = "TimeRangeDef")]
    pub progress_range: TimeRange,
    pub calorie_offset: i32,
}

impl Settings {
    /// Resolve [`Theme::System`] using the color scheme preferred by the platform.
    #[must_use]
    pub fn current_theme(&self, prefers_dark_scheme: bool) -> Theme {
        match self.theme {
            Theme::System => {
                if prefers_dark_scheme {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            progress_range: TimeRange::Week,
            calorie_offset: DEFAULT_CALORIE_OFFSET,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    Light,
    Dark,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "TimeRange")]
enum TimeRangeDef {
    Week,
    Month,
}
