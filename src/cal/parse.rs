//! Parsing ISO-8601 strings into calendar values.

use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::offset::ZoneOffset;
use crate::cal::zone::TimeZone;
use crate::cal::zoned::ZonedDateTime;
use crate::error::Error;


/// Something that can go wrong while parsing a string.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParseError {

    /// The string was not valid ISO-8601 syntax.
    #[error("parse error: {0}")]
    Parse(String),

    /// The string was well-formed, but named an invalid date or time.
    #[error("parsing resulted in an invalid date: {0}")]
    Date(#[from] Error),
}


impl FromStr for LocalDate {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::date(input).map_err(ParseError::Parse)?;
        Ok(fields_to_date(fields)?)
    }
}

impl FromStr for LocalTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::time(input).map_err(ParseError::Parse)?;
        Ok(fields_to_time(fields)?)
    }
}

impl FromStr for LocalDateTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(ParseError::Parse)?;

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}

/// Parses a date-time with a UTC offset, such as `2001-02-03T04:05:06+07:00`,
/// into a value in a zone fixed at that offset. A missing offset is read
/// as UTC.
impl FromStr for ZonedDateTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(ParseError::Parse)?;

        let offset = ZoneOffset::of_hours_and_minutes(fields.time.tz_offset_hours as i8, fields.time.tz_offset_minutes as i8)?;
        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;

        let zone = if offset.is_utc() { TimeZone::utc() } else { TimeZone::fixed(offset) };
        Ok(Self::from_local(LocalDateTime::new(date, time), zone)?)
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(month as i8)?;
            LocalDate::ymd(year as i64, month_variant, day as i8)
        }
        iso8601::Date::Week { year, ww, d } => {
            let weekday_variant = Weekday::from_one(d as i8)?;
            LocalDate::ywd(year as i64, ww as i64, weekday_variant)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        }
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    let h  = fields.hour as i8;
    let m  = fields.minute as i8;
    let s  = fields.second as i8;
    let ns = fields.millisecond * 1_000_000;

    LocalTime::hms_nano(h, m, s, ns)
}
