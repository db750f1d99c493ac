//! Years and year-months, and walking through the months and days in
//! them.

use std::fmt;
use std::iter::FlatMap;
use std::ops::Deref;
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeFull};
use std::slice::Iter as SliceIter;

use crate::cal::datetime::{LocalDate, Month, Weekday, YMD, UNIX_TO_MARCH_2000, days_to_weekday};
use crate::error::Error;
use crate::util::split_cycles;

use crate::cal::datetime::Month::*;
use crate::cal::datetime::Weekday::*;


/// A year of the proleptic Gregorian calendar.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Whether this year has a 29th of February.
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert!(Year(2024).is_leap_year());
    /// assert!(Year(2000).is_leap_year());
    /// assert!(!Year(2100).is_leap_year());
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year: 366 in a leap year, 365 otherwise.
    pub fn days_in_year(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Whether this ISO-8601 week-numbering year has 53 weeks. That
    /// happens when it starts on a Thursday, or on a Wednesday in a leap
    /// year.
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert!(Year(2015).is_long_year());
    /// assert!(Year(2020).is_long_year());
    /// assert!(!Year(2021).is_long_year());
    /// ```
    pub fn is_long_year(self) -> bool {
        match self.first_weekday() {
            Thursday   => true,
            Wednesday  => self.is_leap_year(),
            _          => false,
        }
    }

    /// The number of ISO-8601 weeks in this year, 52 or 53.
    pub fn iso_weeks(self) -> i64 {
        if self.is_long_year() { 53 } else { 52 }
    }

    /// Iterates over some of the months of this year. The span can be
    /// `..` for all twelve, or a half-open range of months such as
    /// `April ..`, `.. June`, or `April .. June`.
    ///
    /// ```
    /// use calendrical::Year;
    /// use calendrical::Month::{April, June};
    ///
    /// let year = Year(2024);
    /// assert_eq!(year.months(..).count(), 12);
    /// assert_eq!(year.months(April ..).count(), 9);
    /// assert_eq!(year.months(April .. June).count(), 2);
    /// assert_eq!(year.months(.. June).count(), 5);
    /// ```
    pub fn months<S: MonthSpan>(self, span: S) -> YearMonths {
        YearMonths {
            year: self,
            iter: span.get_slice().iter(),
        }
    }

    /// Pairs this year with a month.
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth { year: self, month }
    }

    /// Iterates over every date in this year, from the 1st of January.
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert_eq!(Year(2024).days().count(), 366);
    /// ```
    pub fn days(self) -> YearDays {
        let all_days: fn(YearMonth) -> MonthDays = all_days;
        YearDays { inner: self.months(..).flat_map(all_days) }
    }

    fn first_weekday(self) -> Weekday {
        let jan_1 = YMD { year: self.0, month: January, day: 1 };
        days_to_weekday(jan_1.days_since_unix_epoch() - UNIX_TO_MARCH_2000)
    }

    /// Returns the number of leap years between the year 2000 and this
    /// one, not counting this one, along with whether this one is a leap
    /// year.
    pub(crate) fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;
        let (cycles_of_400, mut remainder) = split_cycles(year, 400);

        let is_leap = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let centuries = remainder / 100;
        remainder -= centuries * 100;

        let elapsed = remainder / 4
            + 97 * cycles_of_400
            + 24 * centuries
            - if is_leap { 1 } else { 0 };

        (elapsed, is_leap)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A span of months within a year. See `Year::months`.
pub trait MonthSpan {

    /// The months in this span, in calendar order.
    fn get_slice(&self) -> &'static [Month];
}

pub(crate) static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

impl MonthSpan for RangeFull {
    fn get_slice(&self) -> &'static [Month] {
        MONTHS
    }
}

impl MonthSpan for RangeFrom<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_january() ..]
    }
}

impl MonthSpan for RangeTo<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[.. self.end.months_from_january()]
    }
}

impl MonthSpan for Range<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_january() .. self.end.months_from_january()]
    }
}


/// The months of a year, as year-months. See `Year::months`.
pub struct YearMonths {
    year: Year,
    iter: SliceIter<'static, Month>,
}

impl Iterator for YearMonths {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        self.iter.next().map(|m| self.year.month(*m))
    }
}

impl DoubleEndedIterator for YearMonths {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|m| self.year.month(*m))
    }
}

impl fmt::Debug for YearMonths {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "YearMonths({}, {:?})", self.year.0, self.iter.as_slice())
    }
}


/// A month in a particular year.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// The number of days in this month, with February’s length depending
    /// on the year.
    ///
    /// ```
    /// use calendrical::Year;
    /// use calendrical::Month::February;
    ///
    /// assert_eq!(Year(2024).month(February).day_count(), 29);
    /// assert_eq!(Year(2100).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Iterates over some of the days of this month. The span can be `..`
    /// for all of them, or a range of day numbers such as `10 ..`,
    /// `.. 20`, `10 .. 20`, or `1 ..= 7`.
    ///
    /// ```
    /// use calendrical::Year;
    /// use calendrical::Month::September;
    ///
    /// let ym = Year(2024).month(September);
    /// assert_eq!(ym.days(..).count(), 30);
    /// assert_eq!(ym.days(10 ..).count(), 21);
    /// assert_eq!(ym.days(10 .. 20).count(), 10);
    /// assert_eq!(ym.days(.. 20).count(), 19);
    /// assert_eq!(ym.days(1 ..= 7).count(), 7);
    /// ```
    pub fn days<S: DaySpan>(&self, span: S) -> MonthDays {
        MonthDays {
            ym: *self,
            range: span.get_range(self)
        }
    }

    /// The given day of this month.
    pub fn day(&self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::ymd(self.year.0, self.month, day)
    }

    /// The last day of this month.
    pub fn last_day(&self) -> Result<LocalDate, Error> {
        self.day(self.day_count())
    }

    /// The year-month that is the given number of months after this one,
    /// or before it when negative. Fails instead of overflowing when the
    /// month count is too large to represent.
    ///
    /// ```
    /// use calendrical::Year;
    /// use calendrical::Month::{November, February};
    ///
    /// assert_eq!(Year(2023).month(November).add_months(3), Ok(Year(2024).month(February)));
    /// assert!(Year(2023).month(November).add_months(i64::MAX).is_err());
    /// ```
    pub fn add_months(&self, months: i64) -> Result<Self, Error> {
        let index = self.year.0.checked_mul(12)
            .and_then(|index| index.checked_add(self.month.months_from_january() as i64))
            .and_then(|index| index.checked_add(months))
            .ok_or(Error::invalid("month", months))?;

        let (year, month) = split_cycles(index, 12);
        Ok(Year(year).month(MONTHS[month as usize]))
    }
}


/// A span of days within a month. See `YearMonth::days`.
pub trait DaySpan {

    /// The day numbers in this span, as a half-open range.
    fn get_range(&self, ym: &YearMonth) -> Range<i8>;
}

impl DaySpan for RangeFull {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        1 .. ym.day_count() + 1
    }
}

impl DaySpan for RangeFrom<i8> {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        self.start .. ym.day_count() + 1
    }
}

impl DaySpan for RangeTo<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        1 .. self.end
    }
}

impl DaySpan for Range<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        self.clone()
    }
}

impl DaySpan for RangeInclusive<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        *self.start() .. self.end().saturating_add(1)
    }
}


/// The days of a month. See `YearMonth::days`.
///
/// Day numbers past the end of the month are skipped.
#[derive(PartialEq, Debug, Clone)]
pub struct MonthDays {
    ym: YearMonth,
    range: Range<i8>,
}

impl Iterator for MonthDays {
    type Item = LocalDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().and_then(|d| self.ym.day(d).ok())
    }
}

impl DoubleEndedIterator for MonthDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().and_then(|d| self.ym.day(d).ok())
    }
}


fn all_days(ym: YearMonth) -> MonthDays {
    ym.days(..)
}

/// Every date in a year. See `Year::days`.
pub struct YearDays {
    inner: FlatMap<YearMonths, MonthDays, fn(YearMonth) -> MonthDays>,
}

impl Iterator for YearDays {
    type Item = LocalDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for YearDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl fmt::Debug for YearDays {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("YearDays { .. }")
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn long_years() {
        let long: Vec<i64> = (2000 ..= 2030).filter(|y| Year(*y).is_long_year()).collect();
        assert_eq!(long, vec![ 2004, 2009, 2015, 2020, 2026 ]);
    }

    #[test]
    fn month_stepping_crosses_years() {
        assert_eq!(Year(2024).month(January).add_months(-1), Ok(Year(2023).month(December)));
        assert_eq!(Year(2024).month(December).add_months(13), Ok(Year(2026).month(January)));
        assert_eq!(Year(0).month(January).add_months(-1), Ok(Year(-1).month(December)));
    }

    #[test]
    fn last_day() {
        let ym = Year(2024).month(February);
        assert_eq!(ym.last_day(), LocalDate::ymd(2024, February, 29));
    }

    #[test]
    fn days_backwards() {
        let ym = Year(2023).month(June);
        let last = ym.days(..).next_back();
        assert_eq!(last, LocalDate::ymd(2023, June, 30).ok());
    }

    #[test]
    fn every_day_of_a_year() {
        let mut days = Year(2023).days();
        assert_eq!(days.next(), LocalDate::ymd(2023, January, 1).ok());
        assert_eq!(days.next_back(), LocalDate::ymd(2023, December, 31).ok());
        assert_eq!(days.count(), 363);
    }

    #[test]
    fn inclusive_spans_stop_at_the_month_end() {
        assert_eq!(Year(2023).month(February).days(25 ..= 31).count(), 4);
    }
}
