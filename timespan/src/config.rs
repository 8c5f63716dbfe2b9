//! Display configuration: day labels and week start.
//!
//! Labels and the week-start offset are per-instance values handed to the
//! renderers, read from a TOML file and optionally overridden from the
//! environment.
//!
//! ```toml
//! week_start_offset = 1
//!
//! [labels]
//! days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
//! weekend = "Weekend"
//! weekdays = "Weekdays"
//! everyday = "Every day"
//! anytime = "Anytime"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DayOfWeek;

/// Path of an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "TIMESPAN_CONFIG";
/// Overrides `week_start_offset` from the file.
pub const WEEK_START_ENV: &str = "TIMESPAN_WEEK_START";

/// Locale strings used by the readable renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabels {
    /// One label per day, in bit order (Sunday first).
    #[serde(default = "default_days")]
    pub days: [String; 7],
    #[serde(default = "default_weekend")]
    pub weekend: String,
    #[serde(default = "default_weekdays")]
    pub weekdays: String,
    #[serde(default = "default_everyday")]
    pub everyday: String,
    /// Shown for an empty collection.
    #[serde(default = "default_anytime")]
    pub anytime: String,
}

fn default_days() -> [String; 7] {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from)
}

fn default_weekend() -> String {
    "Weekend".to_string()
}

fn default_weekdays() -> String {
    "Weekdays".to_string()
}

fn default_everyday() -> String {
    "Every day".to_string()
}

fn default_anytime() -> String {
    "Anytime".to_string()
}

impl Default for DayLabels {
    fn default() -> Self {
        Self {
            days: default_days(),
            weekend: default_weekend(),
            weekdays: default_weekdays(),
            everyday: default_everyday(),
            anytime: default_anytime(),
        }
    }
}

impl DayLabels {
    /// Short label for a single day.
    pub fn day(&self, day: DayOfWeek) -> &str {
        &self.days[day.bit_index() as usize]
    }
}

/// Presentation settings for one widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Bit index of the day shown first (0 = Sunday, 1 = Monday, ...).
    #[serde(default)]
    pub week_start_offset: u8,
    #[serde(default)]
    pub labels: DayLabels,
}

impl DisplayConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, does not parse, or holds
    /// an out-of-range week start.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DisplayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `timespan.toml` in:
    /// 1. Current directory
    /// 2. `timespan/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::from_file(path),
            None => Err(Error::Configuration(
                "No timespan.toml found in standard locations".to_string(),
            )),
        }
    }

    /// Resolve the effective configuration.
    ///
    /// Uses `TIMESPAN_CONFIG` when set, otherwise the default search path,
    /// otherwise built-in defaults; then applies environment overrides.
    pub fn load() -> Result<Self> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match default_config_path() {
                Some(path) => Self::from_file(path)?,
                None => {
                    log::debug!("no timespan.toml found, using default display configuration");
                    Self::default()
                }
            },
        };
        config.with_env_overrides()
    }

    /// Apply `TIMESPAN_WEEK_START` if present.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = env::var(WEEK_START_ENV) {
            self.week_start_offset = raw.trim().parse().map_err(|_| {
                Error::Configuration(format!(
                    "{} must be a day index in 0..=6, got '{}'",
                    WEEK_START_ENV, raw
                ))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the week start is a day index.
    pub fn validate(&self) -> Result<()> {
        if self.week_start_offset > 6 {
            return Err(Error::Configuration(format!(
                "week_start_offset must be in 0..=6, got {}",
                self.week_start_offset
            )));
        }
        Ok(())
    }

    /// Days in the order a day selector lays them out.
    pub fn display_order(&self) -> Vec<DayOfWeek> {
        (0..7u32)
            .filter_map(|i| {
                let index = (self.week_start_offset as u32 + i) % 7;
                DayOfWeek::new(index as i64 + 1).ok()
            })
            .collect()
    }
}

fn default_config_path() -> Option<PathBuf> {
    [
        PathBuf::from("timespan.toml"),
        PathBuf::from("timespan/timespan.toml"),
        PathBuf::from("../timespan.toml"),
    ]
    .into_iter()
    .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = DayLabels::default();
        assert_eq!(labels.day(DayOfWeek::SUNDAY), "Sun");
        assert_eq!(labels.day(DayOfWeek::SATURDAY), "Sat");
        assert_eq!(labels.anytime, "Anytime");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DisplayConfig::from_toml_str(
            r#"
            week_start_offset = 1

            [labels]
            everyday = "Daily"
            "#,
        )
        .unwrap();

        assert_eq!(config.week_start_offset, 1);
        assert_eq!(config.labels.everyday, "Daily");
        assert_eq!(config.labels.weekend, "Weekend");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DisplayConfig::from_toml_str("").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_week_start() {
        let err = DisplayConfig::from_toml_str("week_start_offset = 7").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_rejects_wrong_number_of_day_labels() {
        let err = DisplayConfig::from_toml_str("[labels]\ndays = [\"a\", \"b\"]").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_display_order_respects_week_start() {
        let config = DisplayConfig {
            week_start_offset: 1,
            ..Default::default()
        };
        let order: Vec<u8> = config.display_order().into_iter().map(DayOfWeek::number).collect();
        assert_eq!(order, vec![2, 3, 4, 5, 6, 7, 1]);

        let sunday_first: Vec<u8> = DisplayConfig::default()
            .display_order()
            .into_iter()
            .map(DayOfWeek::number)
            .collect();
        assert_eq!(sunday_first, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
