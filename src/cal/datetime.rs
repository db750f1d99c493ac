//! Dates, times, datetimes, months, and weekdays.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::iter::{Year, YearMonth, MONTHS};
use crate::duration::{Duration, NANOS_IN_SECOND};
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{RangeExt, split_cycles};

use self::Month::*;
use self::Weekday::*;


/// The earliest year that dates can be constructed in.
pub const MIN_YEAR: i64 = -9999;

/// The latest year that dates can be constructed in.
pub const MAX_YEAR: i64 = 9999;


const DAYS_IN_4Y:   i64 = 365 *   4 +  1;
const DAYS_IN_100Y: i64 = 365 * 100 + 24;
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Leap seconds are not represented anywhere in this crate.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Days from the Unix epoch to the 1st of March 2000.
///
/// Date decomposition counts from this day: it starts a 400-year cycle
/// and puts the leap day at the very end of each year, so the length of
/// February never gets in the way.
pub(crate) const UNIX_TO_MARCH_2000: i64 = 30 * 365 + 7 + 31 + 29;

/// Days into a year that starts in March at which each month begins,
/// from February back to April. Anything earlier is in March.
const MONTH_STARTS_FROM_MARCH: &[i64; 11] = &[
    337, 306, 275, 245, 214, 184, 153, 122, 92, 61, 31,
];


/// A calendar date with no time of day and no time zone, such as the day
/// a holiday falls on.
#[derive(Eq, Clone, Copy, Hash)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A time of day on a wall clock, with no date.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: u32,
}

/// A date and a time of day, as shown on a wall clock in some unnamed
/// time zone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a date from its year, month, and day, failing with an error
    /// that names the day when it doesn’t exist in that month.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(2024, Month::February, 29).unwrap();
    /// assert_eq!(date.yearday(), 60);
    /// assert!(LocalDate::ymd(2023, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        check_year(year)?;

        let ymd = YMD { year, month, day };
        if !ymd.is_valid(Year(year).is_leap_year()) {
            return Err(Error::invalid("day", day as i64));
        }

        Ok(Self::from_days_since_march_2000(ymd.days_since_unix_epoch() - UNIX_TO_MARCH_2000))
    }

    /// Creates a date from its year and its day of the year, counting
    /// 1 January as day 1.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// assert_eq!(LocalDate::yd(2024, 60), LocalDate::ymd(2024, Month::February, 29));
    /// assert!(LocalDate::yd(2023, 366).is_err());
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        check_year(year)?;

        if !yearday.is_within(1 ..= Year(year).days_in_year() as i64) {
            return Err(Error::invalid("yearday", yearday));
        }

        let jan_1 = YMD { year, month: January, day: 1 };
        Ok(Self::from_days_since_march_2000(jan_1.days_since_unix_epoch() + yearday - 1 - UNIX_TO_MARCH_2000))
    }

    /// Creates a date from its ISO week-numbering year, week, and weekday.
    /// Early days of week 1 and late days of week 53 can fall in a
    /// neighbouring calendar year:
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Weekday, Month};
    ///
    /// assert_eq!(LocalDate::ywd(2026, 1, Weekday::Monday), LocalDate::ymd(2025, Month::December, 29));
    /// assert_eq!(LocalDate::ywd(2020, 53, Weekday::Sunday), LocalDate::ymd(2021, Month::January, 3));
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        check_year(year)?;

        if !week.is_within(1 ..= Year(year).iso_weeks()) {
            return Err(Error::invalid("week", week));
        }

        let correction = Year(year).month(January).day(4)?.weekday().number_from_monday() as i64 + 3;
        let yearday = 7 * week + weekday.number_from_monday() as i64 - correction;

        if yearday <= 0 {
            Self::yd(year - 1, Year(year - 1).days_in_year() as i64 + yearday)
        }
        else {
            let days_in_year = Year(year).days_in_year() as i64;

            if yearday > days_in_year {
                Self::yd(year + 1, yearday - days_in_year)
            }
            else {
                Self::yd(year, yearday)
            }
        }
    }

    /// Creates a date from the number of days since **1st January, 1970**,
    /// failing if the result falls outside the supported range of years.
    pub fn from_unix_days(days: i64) -> Result<Self, Error> {
        if days.unsigned_abs() > 5_000_000 {
            return Err(Error::invalid("year", if days < 0 { MIN_YEAR - 1 } else { MAX_YEAR + 1 }));
        }

        let date = Self::from_days_since_march_2000(days - UNIX_TO_MARCH_2000);
        check_year(date.ymd.year)?;
        Ok(date)
    }

    /// Returns the number of days between **1st January, 1970** and this date.
    pub fn unix_days(&self) -> i64 {
        self.ymd.days_since_unix_epoch()
    }

    /// Breaks a day count from the 1st of March 2000 down into a date.
    /// Every other constructor ends up here.
    fn from_days_since_march_2000(days: i64) -> Self {
        let (cycles_400, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // The last century, four-year span, and year of each cycle are a
        // day longer than the rest, so they get capped.
        let centuries = (remainder / DAYS_IN_100Y).min(3);
        remainder -= centuries * DAYS_IN_100Y;

        let cycles_4 = remainder / DAYS_IN_4Y;
        remainder -= cycles_4 * DAYS_IN_4Y;

        let mut years = (remainder / 365).min(3);
        remainder -= years * 365;

        // Whether the January and February at the end of this March-based
        // year belong to a leap year.
        let days_this_year = if years == 0 && !(cycles_4 == 0 && centuries != 0) { 366 }
                                                                          else { 365 };

        // March to December has 306 days.
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;
        }

        years += 4 * cycles_4 + 100 * centuries + 400 * cycles_400;

        let (month_index, day_index) = match MONTH_STARTS_FROM_MARCH.iter().position(|start| *start <= remainder) {
            Some(index) => (11 - index + 2, remainder - MONTH_STARTS_FROM_MARCH[index]),
            None        => (2, remainder),
        };

        let (year_offset, month_index) = if month_index >= 12 { (1, month_index - 12) }
                                                          else { (0, month_index) };

        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  2000 + years + year_offset,
                month: MONTHS[month_index],
                day:   (day_index + 1) as i8,
            },
        }
    }

    /// Returns the date that is the given number of days after (or, if
    /// negative, before) this one.
    pub fn add_days(&self, days: i64) -> Result<Self, Error> {
        let target = self.unix_days().checked_add(days).ok_or(Error::invalid("day", days))?;
        Self::from_unix_days(target)
    }

    /// Returns the following day.
    pub fn succ(&self) -> Result<Self, Error> {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub fn pred(&self) -> Result<Self, Error> {
        self.add_days(-1)
    }

    /// Returns the date that is the given number of calendar months after
    /// (or, if negative, before) this one.
    ///
    /// If the day of the month doesn’t exist in the resulting month, it
    /// gets clamped to that month’s last day, rather than overflowing into
    /// the month after:
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// let date = LocalDate::ymd(2023, Month::January, 31).unwrap();
    /// assert_eq!(date.add_months(1).unwrap(), LocalDate::ymd(2023, Month::February, 28).unwrap());
    /// ```
    pub fn add_months(&self, months: i64) -> Result<Self, Error> {
        let ym = self.year_month().add_months(months)?;
        ym.day(std::cmp::min(self.ymd.day, ym.day_count()))
    }

    /// Returns the number of days from this date until the other one,
    /// which is negative if the other date comes first.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.unix_days() - self.unix_days()
    }

    /// Returns the year-month pair that this date falls in.
    pub fn year_month(&self) -> YearMonth {
        Year(self.ymd.year).month(self.ymd.month)
    }

    /// Returns whether this is the last day of its month.
    pub fn is_last_day_of_month(&self) -> bool {
        self.ymd.day == self.year_month().day_count()
    }

    /// Returns the ISO-8601 week-numbering year and week number of this
    /// date, as a `(year, week)` pair. Week 1 is the week containing the
    /// year’s first Thursday, so the year can differ from the calendar year
    /// for dates near the start or end of a year.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// let date = LocalDate::ymd(2021, Month::January, 3).unwrap();
    /// assert_eq!(date.iso_week(), (2020, 53));
    /// ```
    pub fn iso_week(&self) -> (i64, i64) {
        let year = self.ymd.year;
        let week = (self.yearday as i64 - self.weekday.number_from_monday() as i64 + 10) / 7;

        if week < 1 {
            (year - 1, Year(year - 1).iso_weeks())
        }
        else if week > Year(year).iso_weeks() {
            (year + 1, 1)
        }
        else {
            (year, week)
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub(crate) fn from_seconds_since_midnight(seconds: i64, nanosecond: u32) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            nanosecond,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and nanosecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_nano(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_nano(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error naming the
    /// first offending field.
    pub fn hms_nano(hour: i8, minute: i8, second: i8, nanosecond: u32) -> Result<Self, Error> {
        if !hour.is_within(0 ..= 23) {
            Err(Error::invalid("hour", hour as i64))
        }
        else if !minute.is_within(0 ..= 59) {
            Err(Error::invalid("minute", minute as i64))
        }
        else if !second.is_within(0 ..= 59) {
            Err(Error::invalid("second", second as i64))
        }
        else if nanosecond >= NANOS_IN_SECOND as u32 {
            Err(Error::invalid("nanosecond", nanosecond as i64))
        }
        else {
            Ok(Self { hour, minute, second, nanosecond })
        }
    }

    /// The number of whole seconds since midnight, ignoring nanoseconds.
    /// This is the time-of-day part of `LocalDateTime::to_instant`.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> u32 { self.nanosecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}


impl LocalDateTime {

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter, reading the instant as a UTC wall-clock time.
    pub fn from_instant(instant: Instant) -> Result<Self, Error> {
        let datetime = Self::from_instant_unchecked(instant);
        check_year(datetime.date.ymd.year)?;
        Ok(datetime)
    }

    /// Like `from_instant`, but without checking the supported range of
    /// years, for views of values that have already been checked.
    pub(crate) fn from_instant_unchecked(instant: Instant) -> Self {
        let (days, secs) = split_cycles(instant.seconds(), SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_march_2000(days - UNIX_TO_MARCH_2000),
            time: LocalTime::from_seconds_since_midnight(secs, instant.nanoseconds()),
        }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Returns the instant at which a UTC clock would show this date-time.
    pub fn to_instant(&self) -> Instant {
        let seconds = self.date.unix_days() * SECONDS_IN_DAY + self.time.to_seconds();
        Instant::at_nanos(seconds, self.time.nanosecond as i64)
    }

    /// Returns the date-time an exact duration later (or earlier) on a
    /// UTC clock.
    pub fn checked_add(&self, duration: Duration) -> Result<Self, Error> {
        Self::from_instant(self.to_instant() + duration)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn nanosecond(&self) -> u32 { self.time.nanosecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}

impl From<LocalDateTime> for LocalDate {
    fn from(datetime: LocalDateTime) -> Self {
        datetime.date
    }
}


/// Year, month, and day fields that haven’t been checked. A `LocalDate`
/// only ever holds a valid one.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
pub(crate) struct YMD {
    pub(crate) year:    i64,
    pub(crate) month:   Month,
    pub(crate) day:     i8,
}

impl YMD {

    /// Days since the Unix epoch. Meaningless for an invalid date.
    pub(crate) fn days_since_unix_epoch(&self) -> i64 {
        const UNIX_TO_JANUARY_2000: i64 = 10958;

        let (leap_days, is_leap_year) = Year(self.year).leap_year_calculations();
        let leap_day_this_year = if is_leap_year && self.month >= March { 1 } else { 0 };

        UNIX_TO_JANUARY_2000
            + (self.year - 2000) * 365
            + leap_days
            + self.month.days_before_start() as i64
            + leap_day_this_year
            + (self.day - 1) as i64
    }

    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day.is_within(1 ..= self.month.days_in_month(is_leap_year))
    }
}

fn check_year(year: i64) -> Result<(), Error> {
    if year.is_within(MIN_YEAR ..= MAX_YEAR) { Ok(()) }
                                        else { Err(Error::invalid("year", year)) }
}

/// The weekday of a day counted from the 1st of March 2000, a Wednesday.
pub(crate) fn days_to_weekday(days: i64) -> Weekday {
    WEEKDAYS_FROM_SUNDAY[(days + 3).rem_euclid(7) as usize]
}


/// A month of the year. Casting one to an integer numbers it from
/// January as 1.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// The length of this month in a leap year or a common year.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Days in the year before this month starts, not counting a leap
    /// day.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// The month numbered from January as 1.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1 ..= 12) { Ok(MONTHS[month as usize - 1]) }
                                else { Err(Error::invalid("month", month as i64)) }
    }

    /// The month numbered from January as 0.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0 ..= 11) { Ok(MONTHS[month as usize]) }
                                else { Err(Error::invalid("month", month as i64 + 1)) }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// No Ord: weeks start on different days in different places.
static WEEKDAYS_FROM_SUNDAY: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {

    /// Returns this weekday’s ISO-8601 number, from Monday as 1 to Sunday
    /// as 7.
    pub fn number_from_monday(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use calendrical::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0 ..= 6) { Ok(WEEKDAYS_FROM_SUNDAY[weekday as usize]) }
                                 else { Err(Error::invalid("weekday", weekday as i64)) }
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(1 ..= 7) { Ok(WEEKDAYS_FROM_SUNDAY[weekday as usize % 7]) }
                                 else { Err(Error::invalid("weekday", weekday as i64)) }
    }

    /// Returns the day after this one.
    pub fn succ(self) -> Self {
        WEEKDAYS_FROM_SUNDAY[(self as usize + 1) % 7]
    }

    /// Returns the day before this one.
    pub fn pred(self) -> Self {
        WEEKDAYS_FROM_SUNDAY[(self as usize + 6) % 7]
    }

    /// Returns the number of days forward from this weekday until the
    /// given one, from 0 to 6.
    pub fn days_until(self, other: Self) -> i64 {
        (other as i64 - self as i64).rem_euclid(7)
    }
}
