//! Business days: dates that are neither weekends nor holidays.

use std::fmt;

use tracing::debug;

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, Month, Weekday};
use crate::cal::iter::Year;
use crate::error::Error;
use crate::holiday::HolidayCalendar;


/// The set of weekdays that make up the weekend.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>"))]
pub struct WeekendRule {
    days: u8,
}

const WHOLE_WEEK: u8 = 0b111_1111;

static WEEKDAYS: &[Weekday] = &[
    Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday,
    Weekday::Friday, Weekday::Saturday, Weekday::Sunday,
];

impl WeekendRule {

    /// The usual weekend of Saturday and Sunday.
    pub fn saturday_sunday() -> Self {
        Self { days: bit(Weekday::Saturday) | bit(Weekday::Sunday) }
    }

    /// A weekend of the given days. At least one day of the week has to
    /// be left over for business.
    ///
    /// ```rust
    /// use calendrical::{WeekendRule, Weekday};
    ///
    /// let weekend = WeekendRule::new([ Weekday::Friday, Weekday::Saturday ]).unwrap();
    /// assert!(weekend.contains(Weekday::Friday));
    /// assert!(!weekend.contains(Weekday::Sunday));
    /// ```
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self, Error> {
        let days = days.into_iter().fold(0, |set, day| set | bit(day));

        if days == WHOLE_WEEK {
            Err(Error::invalid("weekend", days as i64))
        }
        else {
            Ok(Self { days })
        }
    }

    /// No weekend at all: every day of the week is for business.
    pub fn none() -> Self {
        Self { days: 0 }
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.days & bit(weekday) != 0
    }

    /// The weekend days, from Monday onwards.
    pub fn days(self) -> Vec<Weekday> {
        WEEKDAYS.iter().copied().filter(|d| self.contains(*d)).collect()
    }
}

fn bit(weekday: Weekday) -> u8 {
    1 << (weekday.number_from_monday() - 1)
}

impl Default for WeekendRule {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}

impl fmt::Debug for WeekendRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WeekendRule({:?})", self.days())
    }
}

impl TryFrom<Vec<Weekday>> for WeekendRule {
    type Error = Error;

    fn try_from(days: Vec<Weekday>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WeekendRule> for Vec<Weekday> {
    fn from(rule: WeekendRule) -> Self {
        rule.days()
    }
}


/// How to move a date that isn’t a business day.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum BusinessDayConvention {

    /// Leave the date alone.
    Unadjusted,

    /// Move forward to the next business day.
    Following,

    /// Move forward to the next business day, unless that’s in the next
    /// month, in which case move back to the previous one.
    ModifiedFollowing,

    /// Move back to the previous business day.
    Preceding,

    /// Move back to the previous business day, unless that’s in the
    /// previous month, in which case move forward to the next one.
    ModifiedPreceding,
}


/// A **business-day calculator** combines a weekend rule with a holiday
/// calendar to say which dates are business days, and to step and count
/// through them.
///
/// The calculator borrows its holiday calendar, so the calendar has to be
/// finished, holidays added and all, before it’s used. Every query is a
/// function of the date, the weekend rule, and the calendar alone.
#[derive(PartialEq, Debug, Clone)]
pub struct BusinessDayCalculator<'c> {
    calendar: &'c HolidayCalendar,
    weekend: WeekendRule,
}

impl<'c> BusinessDayCalculator<'c> {

    /// A calculator with a Saturday and Sunday weekend.
    pub fn new(calendar: &'c HolidayCalendar) -> Self {
        Self::with_weekend(calendar, WeekendRule::default())
    }

    pub fn with_weekend(calendar: &'c HolidayCalendar, weekend: WeekendRule) -> Self {
        Self { calendar, weekend }
    }

    pub fn weekend(&self) -> WeekendRule {
        self.weekend
    }

    pub fn calendar(&self) -> &'c HolidayCalendar {
        self.calendar
    }

    /// Replaces the weekend days for every later query.
    pub fn set_custom_weekends(&mut self, days: impl IntoIterator<Item = Weekday>) -> Result<(), Error> {
        let weekend = WeekendRule::new(days)?;
        debug!(calendar = %self.calendar.code(), weekend = ?weekend, "Replacing weekend");
        self.weekend = weekend;
        Ok(())
    }

    pub fn is_weekend(&self, date: LocalDate) -> bool {
        self.weekend.contains(date.weekday())
    }

    pub fn is_holiday(&self, date: LocalDate) -> bool {
        self.calendar.is_holiday(date)
    }

    /// Whether the date is neither a weekend day nor a holiday.
    pub fn is_business_day(&self, date: LocalDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Returns the first business day strictly after the given date, even
    /// if the date is a business day itself.
    pub fn next_business_day(&self, date: LocalDate) -> Result<LocalDate, Error> {
        let mut holidays = HolidayCache::new(self.calendar);
        self.step(date, 1, &mut holidays)
    }

    /// Returns the last business day strictly before the given date.
    pub fn previous_business_day(&self, date: LocalDate) -> Result<LocalDate, Error> {
        let mut holidays = HolidayCache::new(self.calendar);
        self.step(date, -1, &mut holidays)
    }

    /// Steps over `days` business days, forwards or backwards. The given
    /// date itself isn’t counted, and adding zero returns it unchanged
    /// whether or not it’s a business day.
    ///
    /// Stepping forwards and then back by the same amount returns to the
    /// original date when it’s a business day. When it isn’t, it lands on
    /// the last business day before it instead.
    pub fn add_business_days(&self, date: LocalDate, days: i64) -> Result<LocalDate, Error> {
        let mut holidays = HolidayCache::new(self.calendar);
        let direction = days.signum();

        let mut date = date;
        for _ in 0 .. days.unsigned_abs() {
            date = self.step(date, direction, &mut holidays)?;
        }

        Ok(date)
    }

    /// Counts the business days after `from`, up to and including `to`.
    /// When `to` comes first, this is the negated count from `to` to
    /// `from`; when they’re the same day, it’s zero.
    ///
    /// ```rust
    /// use calendrical::{BusinessDayCalculator, HolidayCalendar, LocalDate, Month};
    ///
    /// let calendar = HolidayCalendar::without_holidays("NONE");
    /// let calculator = BusinessDayCalculator::new(&calendar);
    ///
    /// let friday = LocalDate::ymd(2024, Month::March, 1).unwrap();
    /// let monday = LocalDate::ymd(2024, Month::March, 4).unwrap();
    /// assert_eq!(calculator.business_days_between(friday, monday), 1);
    /// assert_eq!(calculator.business_days_between(monday, friday), -1);
    /// ```
    pub fn business_days_between(&self, from: LocalDate, to: LocalDate) -> i64 {
        if to < from {
            return -self.business_days_between(to, from);
        }

        let mut holidays = HolidayCache::new(self.calendar);
        let mut count = 0;
        let mut date = from;

        while date < to {
            date = match date.succ() {
                Ok(next) => next,
                Err(_)   => break,
            };

            if self.is_business_day_cached(date, &mut holidays) {
                count += 1;
            }
        }

        count
    }

    /// Counts the business days in a month.
    pub fn business_days_in_month(&self, year: i64, month: Month) -> i64 {
        let mut holidays = HolidayCache::new(self.calendar);

        Year(year).month(month).days(..)
            .filter(|date| self.is_business_day_cached(*date, &mut holidays))
            .count() as i64
    }

    /// Counts the business days in a year.
    pub fn business_days_in_year(&self, year: i64) -> i64 {
        let mut holidays = HolidayCache::new(self.calendar);

        Year(year).days()
            .filter(|date| self.is_business_day_cached(*date, &mut holidays))
            .count() as i64
    }

    /// Moves a date that isn’t a business day according to the given
    /// convention. Business days are never moved.
    pub fn adjust(&self, date: LocalDate, convention: BusinessDayConvention) -> Result<LocalDate, Error> {
        if convention == BusinessDayConvention::Unadjusted || self.is_business_day(date) {
            return Ok(date);
        }

        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following  => self.next_business_day(date),
            BusinessDayConvention::Preceding  => self.previous_business_day(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.next_business_day(date);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _                                  => self.previous_business_day(date),
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.previous_business_day(date);
                match adjusted {
                    Ok(d) if d.month() == date.month() => Ok(d),
                    _                                  => self.next_business_day(date),
                }
            }
        }
    }

    fn is_business_day_cached(&self, date: LocalDate, holidays: &mut HolidayCache) -> bool {
        !self.is_weekend(date) && !holidays.contains(date)
    }

    fn step(&self, date: LocalDate, direction: i64, holidays: &mut HolidayCache) -> Result<LocalDate, Error> {
        let mut date = date.add_days(direction)?;
        while !self.is_business_day_cached(date, holidays) {
            date = date.add_days(direction)?;
        }
        Ok(date)
    }
}


/// The holiday dates of the most recently queried year, so that walking
/// through consecutive days doesn’t resolve the same year’s holidays over
/// and over.
struct HolidayCache<'c> {
    calendar: &'c HolidayCalendar,
    year: Option<i64>,
    dates: Vec<LocalDate>,
}

impl<'c> HolidayCache<'c> {
    fn new(calendar: &'c HolidayCalendar) -> Self {
        Self { calendar, year: None, dates: Vec::new() }
    }

    fn contains(&mut self, date: LocalDate) -> bool {
        if self.year != Some(date.year()) {
            self.dates = self.calendar.holidays(date.year()).into_iter().map(|h| h.date).collect();
            self.year = Some(date.year());
        }

        self.dates.contains(&date)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    #[test]
    fn whole_week_weekends_are_rejected() {
        let everything = WEEKDAYS.iter().copied();
        assert_eq!(WeekendRule::new(everything), Err(Error::invalid("weekend", 127)));
    }

    #[test]
    fn weekend_days_in_order() {
        let weekend = WeekendRule::new([ Weekday::Sunday, Weekday::Friday ]).unwrap();
        assert_eq!(weekend.days(), vec![ Weekday::Friday, Weekday::Sunday ]);
    }

    #[test]
    fn modified_following_stays_in_the_month() {
        let calendar = HolidayCalendar::without_holidays("NONE");
        let calculator = BusinessDayCalculator::new(&calendar);

        // The 30th of November 2024 is a Saturday.
        let saturday = date(2024, Month::November, 30);
        assert_eq!(calculator.adjust(saturday, BusinessDayConvention::Following), Ok(date(2024, Month::December, 2)));
        assert_eq!(calculator.adjust(saturday, BusinessDayConvention::ModifiedFollowing), Ok(date(2024, Month::November, 29)));
        assert_eq!(calculator.adjust(saturday, BusinessDayConvention::Unadjusted), Ok(saturday));
    }

    #[test]
    fn modified_preceding_stays_in_the_month() {
        let calendar = HolidayCalendar::without_holidays("NONE");
        let calculator = BusinessDayCalculator::new(&calendar);

        // The 1st of June 2024 is a Saturday.
        let saturday = date(2024, Month::June, 1);
        assert_eq!(calculator.adjust(saturday, BusinessDayConvention::Preceding), Ok(date(2024, Month::May, 31)));
        assert_eq!(calculator.adjust(saturday, BusinessDayConvention::ModifiedPreceding), Ok(date(2024, Month::June, 3)));
    }

    #[test]
    fn custom_weekends_replace_the_old_ones() {
        let calendar = HolidayCalendar::without_holidays("NONE");
        let mut calculator = BusinessDayCalculator::new(&calendar);
        let friday = date(2024, Month::March, 1);
        let sunday = date(2024, Month::March, 3);

        assert!(calculator.is_business_day(friday));
        calculator.set_custom_weekends([ Weekday::Friday, Weekday::Saturday ]).unwrap();
        assert!(!calculator.is_business_day(friday));
        assert!(calculator.is_business_day(sunday));
    }
}
