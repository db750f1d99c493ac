//! The rules that place holidays on particular dates.

use std::borrow::Cow;

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, Month, Weekday};
use crate::cal::iter::Year;
use crate::error::Error;
use crate::util::RangeExt;


/// What happens to a fixed-date holiday that falls on a Saturday or
/// Sunday.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum Observance {

    /// The holiday is observed on its actual date, weekend or not.
    #[default]
    Actual,

    /// A Saturday holiday is observed on the Friday before, and a Sunday
    /// holiday on the Monday after.
    NearestWeekday,

    /// A weekend holiday is observed on the following Monday.
    FollowingMonday,
}

impl Observance {

    /// Returns the date a holiday that actually falls on the given date is
    /// observed on.
    pub fn observe(self, date: LocalDate) -> Result<LocalDate, Error> {
        match (self, date.weekday()) {
            (Observance::NearestWeekday,  Weekday::Saturday) => date.add_days(-1),
            (Observance::NearestWeekday,  Weekday::Sunday)   => date.add_days(1),
            (Observance::FollowingMonday, Weekday::Saturday) => date.add_days(2),
            (Observance::FollowingMonday, Weekday::Sunday)   => date.add_days(1),
            _                                                => Ok(date),
        }
    }
}


/// A **holiday rule** works out which date a holiday falls on in a given
/// year.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(tag = "rule", rename_all = "snake_case"))]
pub enum HolidayRule {

    /// The same day of the same month every year, such as the 4th of July.
    Fixed {
        month: Month,
        day: i8,
        #[cfg_attr(feature = "serde", serde(default))]
        observance: Observance,
    },

    /// The nth occurrence of a weekday in a month, such as the fourth
    /// Thursday of November. `nth` runs from 1 to 5, and there is no
    /// holiday in years where the month has no such weekday.
    NthWeekday { month: Month, weekday: Weekday, nth: i8 },

    /// The last occurrence of a weekday in a month, such as the last
    /// Monday of May.
    LastWeekday { month: Month, weekday: Weekday },

    /// The last occurrence of a weekday on or before a day of a month,
    /// such as the Monday on or before the 24th of May.
    WeekdayOnOrBefore { month: Month, day: i8, weekday: Weekday },

    /// A number of days before or after Easter Sunday, as computed for the
    /// Gregorian calendar.
    Easter { offset: i64 },

    /// A single date in a single year.
    OnDate { year: i64, month: Month, day: i8 },
}

impl HolidayRule {

    /// Checks that this rule can ever produce a date.
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            HolidayRule::Fixed { month, day, .. }
            | HolidayRule::WeekdayOnOrBefore { month, day, .. } => {
                if day.is_within(1 ..= month.days_in_month(true)) { Ok(()) }
                                                             else { Err(Error::invalid("day", day as i64)) }
            }
            HolidayRule::NthWeekday { nth, .. } => {
                if nth.is_within(1 ..= 5) { Ok(()) }
                                     else { Err(Error::invalid("nth", nth as i64)) }
            }
            HolidayRule::LastWeekday { .. } => Ok(()),
            HolidayRule::Easter { offset } => {
                if offset.is_within(-200 ..= 200) { Ok(()) }
                                             else { Err(Error::invalid("offset", offset)) }
            }
            HolidayRule::OnDate { year, month, day } => {
                LocalDate::ymd(year, month, day).map(|_| ())
            }
        }
    }

    /// How a date produced by this rule is moved off a weekend.
    pub fn observance(&self) -> Observance {
        match *self {
            HolidayRule::Fixed { observance, .. } => observance,
            _                                     => Observance::Actual,
        }
    }

    /// Returns the date this rule gives in the given year, before moving
    /// it off a weekend, or `None` if it gives no date that year.
    ///
    /// ```rust
    /// use calendrical::{HolidayRule, LocalDate, Month, Weekday};
    ///
    /// let thanksgiving = HolidayRule::NthWeekday { month: Month::November, weekday: Weekday::Thursday, nth: 4 };
    /// assert_eq!(thanksgiving.date_in(2024), LocalDate::ymd(2024, Month::November, 28).ok());
    /// ```
    pub fn date_in(&self, year: i64) -> Option<LocalDate> {
        match *self {
            HolidayRule::Fixed { month, day, .. } => {
                Year(year).month(month).day(day).ok()
            }
            HolidayRule::NthWeekday { month, weekday, nth } => {
                let ym = Year(year).month(month);
                let first = ym.day(1).ok()?;
                let day = 1 + first.weekday().days_until(weekday) + 7 * (nth as i64 - 1);
                if day > ym.day_count() as i64 { None }
                                           else { ym.day(day as i8).ok() }
            }
            HolidayRule::LastWeekday { month, weekday } => {
                let last = Year(year).month(month).last_day().ok()?;
                last.add_days(-weekday.days_until(last.weekday())).ok()
            }
            HolidayRule::WeekdayOnOrBefore { month, day, weekday } => {
                let limit = Year(year).month(month).day(day).ok()?;
                limit.add_days(-weekday.days_until(limit.weekday())).ok()
            }
            HolidayRule::Easter { offset } => {
                easter_sunday(year).ok()?.add_days(offset).ok()
            }
            HolidayRule::OnDate { year: on, month, day } => {
                if on == year { LocalDate::ymd(on, month, day).ok() }
                         else { None }
            }
        }
    }
}


/// A named holiday, and the rule for when it falls.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    pub name: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub rule: HolidayRule,
}

impl Holiday {
    pub fn new(name: impl Into<Cow<'static, str>>, rule: HolidayRule) -> Self {
        Self { name: name.into(), rule }
    }

    /// A holiday on the same day every year, observed on that day even at
    /// weekends.
    pub fn fixed(name: impl Into<Cow<'static, str>>, month: Month, day: i8) -> Self {
        Self::new(name, HolidayRule::Fixed { month, day, observance: Observance::Actual })
    }

    /// A holiday on a single date, such as a company away-day.
    pub fn on_date(name: impl Into<Cow<'static, str>>, date: LocalDate) -> Self {
        Self::new(name, HolidayRule::OnDate { year: date.year(), month: date.month(), day: date.day() })
    }

    pub(crate) const fn fixed_static(name: &'static str, month: Month, day: i8, observance: Observance) -> Self {
        Self { name: Cow::Borrowed(name), rule: HolidayRule::Fixed { month, day, observance } }
    }

    pub(crate) const fn rule_static(name: &'static str, rule: HolidayRule) -> Self {
        Self { name: Cow::Borrowed(name), rule }
    }
}


/// Returns the date of Easter Sunday in the given year of the Gregorian
/// calendar, using the anonymous Gregorian algorithm.
pub fn easter_sunday(year: i64) -> Result<LocalDate, Error> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    LocalDate::ymd(year, Month::from_one(month as i8)?, day as i8)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn easter() {
        assert_eq!(easter_sunday(2024), LocalDate::ymd(2024, Month::March, 31));
        assert_eq!(easter_sunday(2025), LocalDate::ymd(2025, Month::April, 20));
        assert_eq!(easter_sunday(2038), LocalDate::ymd(2038, Month::April, 25));
        assert_eq!(easter_sunday(1818), LocalDate::ymd(1818, Month::March, 22));
    }

    #[test]
    fn fifth_weekdays_dont_always_exist() {
        let rule = HolidayRule::NthWeekday { month: Month::February, weekday: Weekday::Monday, nth: 5 };
        assert_eq!(rule.date_in(2023), None);
        assert_eq!(rule.date_in(2016), LocalDate::ymd(2016, Month::February, 29).ok());
    }

    #[test]
    fn last_weekday() {
        let memorial_day = HolidayRule::LastWeekday { month: Month::May, weekday: Weekday::Monday };
        assert_eq!(memorial_day.date_in(2024), LocalDate::ymd(2024, Month::May, 27).ok());
        assert_eq!(memorial_day.date_in(2021), LocalDate::ymd(2021, Month::May, 31).ok());
    }

    #[test]
    fn on_or_before() {
        let victoria_day = HolidayRule::WeekdayOnOrBefore { month: Month::May, day: 24, weekday: Weekday::Monday };
        assert_eq!(victoria_day.date_in(2024), LocalDate::ymd(2024, Month::May, 20).ok());
        assert_eq!(victoria_day.date_in(2021), LocalDate::ymd(2021, Month::May, 24).ok());
    }

    #[test]
    fn leap_day_holidays_skip_common_years() {
        let rule = HolidayRule::Fixed { month: Month::February, day: 29, observance: Observance::Actual };
        assert!(rule.validate().is_ok());
        assert_eq!(rule.date_in(2023), None);
    }

    #[test]
    fn validation() {
        let rule = HolidayRule::Fixed { month: Month::April, day: 31, observance: Observance::Actual };
        assert_eq!(rule.validate(), Err(Error::invalid("day", 31)));

        let rule = HolidayRule::NthWeekday { month: Month::April, weekday: Weekday::Monday, nth: 0 };
        assert_eq!(rule.validate(), Err(Error::invalid("nth", 0)));
    }

    #[test]
    fn observance() {
        let saturday = LocalDate::ymd(2021, Month::December, 25).unwrap();
        assert_eq!(Observance::NearestWeekday.observe(saturday), LocalDate::ymd(2021, Month::December, 24));
        assert_eq!(Observance::FollowingMonday.observe(saturday), LocalDate::ymd(2021, Month::December, 27));
        assert_eq!(Observance::Actual.observe(saturday), Ok(saturday));
    }
}
