//! Amounts of time measured in calendar units.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::duration::Duration;
use crate::error::Error;


/// The largest span of months that can be added to a date while staying
/// in the supported range of years.
const MAX_MONTHS: i64 = 20_000 * 12;

/// The largest span of days that can be added to a date while staying in
/// the supported range of years.
const MAX_DAYS: i64 = 20_000 * 366;

/// The largest exact span, in seconds, that can be added to an instant
/// while staying in the supported range of years.
const MAX_SECONDS: i64 = MAX_DAYS * 86400;


/// An **interval** is an amount of time given in calendar units, such as
/// “1 month and 3 days”, rather than as an exact length.
///
/// How long an interval actually lasts depends on where it’s added: a
/// month can be 28 to 31 days, and a day can be 23 or 25 hours when the
/// clocks change. See `ZonedDateTime::add_interval` for the rules.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Interval {
    pub years:   i64,
    pub months:  i64,
    pub weeks:   i64,
    pub days:    i64,
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Interval {

    /// The empty interval.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn years(years: i64) -> Self {
        Self { years, ..Self::default() }
    }

    pub fn months(months: i64) -> Self {
        Self { months, ..Self::default() }
    }

    pub fn weeks(weeks: i64) -> Self {
        Self { weeks, ..Self::default() }
    }

    pub fn days(days: i64) -> Self {
        Self { days, ..Self::default() }
    }

    pub fn hours(hours: i64) -> Self {
        Self { hours, ..Self::default() }
    }

    pub fn minutes(minutes: i64) -> Self {
        Self { minutes, ..Self::default() }
    }

    pub fn seconds(seconds: i64) -> Self {
        Self { seconds, ..Self::default() }
    }

    /// Returns whether every unit of this interval is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns whether stepping by this interval is guaranteed to move
    /// forward in time: no unit is negative and at least one is positive.
    pub fn is_positive_step(&self) -> bool {
        let units = [ self.years, self.months, self.weeks, self.days, self.hours, self.minutes, self.seconds ];
        units.iter().all(|u| *u >= 0) && units.iter().any(|u| *u > 0)
    }

    /// Splits this interval into the three parts that get applied in turn:
    /// a number of calendar months, a number of wall-clock days, and an
    /// exact duration. Fails if any part would leave the supported range
    /// of years wherever it was applied.
    pub(crate) fn split(&self) -> Result<(i64, i64, Duration), Error> {
        let months = self.years.checked_mul(12)
            .and_then(|m| m.checked_add(self.months))
            .filter(|m| m.unsigned_abs() <= MAX_MONTHS as u64)
            .ok_or_else(|| Error::invalid("year", self.years))?;

        let days = self.weeks.checked_mul(7)
            .and_then(|d| d.checked_add(self.days))
            .filter(|d| d.unsigned_abs() <= MAX_DAYS as u64)
            .ok_or_else(|| Error::invalid("day", self.days))?;

        let seconds = self.hours.checked_mul(3600)
            .and_then(|s| s.checked_add(self.minutes.checked_mul(60)?))
            .and_then(|s| s.checked_add(self.seconds))
            .filter(|s| s.unsigned_abs() <= MAX_SECONDS as u64)
            .ok_or_else(|| Error::invalid("second", self.seconds))?;

        Ok((months, days, Duration::of(seconds)))
    }
}

impl Mul<i64> for Interval {
    type Output = Self;

    /// Multiplies every unit. Values far outside the supported range of
    /// years saturate, and then get rejected when the interval is applied.
    fn mul(self, amount: i64) -> Self {
        Self {
            years:   self.years.saturating_mul(amount),
            months:  self.months.saturating_mul(amount),
            weeks:   self.weeks.saturating_mul(amount),
            days:    self.days.saturating_mul(amount),
            hours:   self.hours.saturating_mul(amount),
            minutes: self.minutes.saturating_mul(amount),
            seconds: self.seconds.saturating_mul(amount),
        }
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interval(P{}Y{}M{}W{}DT{}H{}M{}S)",
               self.years, self.months, self.weeks, self.days,
               self.hours, self.minutes, self.seconds)
    }
}
