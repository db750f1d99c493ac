//! Loading holiday calendars and weekend rules from TOML.
//!
//! A configuration file names a jurisdiction whose built-in holidays to
//! start from, optionally replaces the weekend, and lists any extra
//! holidays:
//!
//! ```toml
//! jurisdiction = "GB"
//! weekend = ["Friday", "Saturday"]
//!
//! [[holidays]]
//! name = "Founders' Day"
//! rule = "fixed"
//! month = "June"
//! day = 3
//! observance = "following_monday"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::business::WeekendRule;
use crate::cal::datetime::Weekday;
use crate::error::Error;
use crate::holiday::HolidayCalendar;
use crate::holiday::rule::Holiday;


/// The name given to a calendar whose configuration names no
/// jurisdiction.
const CUSTOM_CALENDAR: &str = "CUSTOM";


/// Something went wrong reading or applying a calendar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {

    /// The configuration file could not be read.
    #[error("failed to read calendar configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration was not valid TOML, or didn’t have the expected
    /// shape.
    #[error("failed to parse calendar configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be written out as TOML.
    #[error("failed to write calendar configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration was well-formed but named an unknown
    /// jurisdiction, an impossible holiday, or an impossible weekend.
    #[error(transparent)]
    Calendar(#[from] Error),
}


/// The settings needed to build a holiday calendar and a weekend rule.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {

    /// The code of the jurisdiction whose built-in holidays to use. With
    /// no jurisdiction, the calendar starts out with no holidays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    /// The weekend days. Saturday and Sunday when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend: Option<Vec<Weekday>>,

    /// Holidays to add on top of the jurisdiction’s own.
    pub holidays: Vec<Holiday>,
}

impl CalendarConfig {

    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Writes this configuration out as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the holiday calendar this configuration describes.
    ///
    /// Fails if the jurisdiction is unknown, or if any of the extra
    /// holidays can never fall on a date.
    pub fn holiday_calendar(&self) -> Result<HolidayCalendar, Error> {
        let mut calendar = match self.jurisdiction {
            Some(ref code) => HolidayCalendar::for_jurisdiction(code)?,
            None           => HolidayCalendar::without_holidays(CUSTOM_CALENDAR),
        };

        for holiday in &self.holidays {
            calendar.add_holiday(holiday.clone())?;
        }

        Ok(calendar)
    }

    /// Builds the weekend rule this configuration describes.
    pub fn weekend_rule(&self) -> Result<WeekendRule, Error> {
        match self.weekend {
            Some(ref days) => WeekendRule::new(days.iter().copied()),
            None           => Ok(WeekendRule::default()),
        }
    }
}
