//! Exact instants paired with the time zone they’re viewed in.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::interval::Interval;
use crate::cal::offset::ZoneOffset;
use crate::cal::zone::TimeZone;
use crate::diff::Diff;
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;


/// A **zoned date-time** is an exact instant on the timeline, along with
/// the time zone it’s being viewed in and the offset that zone had at
/// that instant.
///
/// Values are immutable: every arithmetic method returns a new value.
/// Two zoned date-times are equal, and ordered, by their instants alone,
/// so the same moment viewed from two zones compares equal.
#[derive(Clone)]
pub struct ZonedDateTime {
    instant: Instant,
    offset: ZoneOffset,
    zone: TimeZone,
}

impl ZonedDateTime {

    pub(crate) fn from_parts(instant: Instant, offset: ZoneOffset, zone: TimeZone) -> Self {
        Self { instant, offset, zone }
    }

    /// Views the given instant in the given time zone.
    pub fn from_instant(instant: Instant, zone: TimeZone) -> Result<Self, Error> {
        let offset = zone.offset_at(instant)?;
        let _ = LocalDateTime::from_instant(instant + offset.as_duration())?;
        Ok(Self { instant, offset, zone })
    }

    /// Finds the instant at which a wall clock in the given zone shows the
    /// given local date-time.
    ///
    /// Local times that happen twice, when the clocks go back, resolve to
    /// the earlier instant; local times that never happen, when the clocks
    /// go forward, are shifted forward by the length of the gap. Use
    /// `TimeZone::convert_local` to handle these cases yourself.
    pub fn from_local(local: LocalDateTime, zone: TimeZone) -> Result<Self, Error> {
        Ok(zone.convert_local(local)?.compatible())
    }

    /// Creates a zoned date-time from its calendar fields, as they would be
    /// shown on a wall clock in the given zone.
    ///
    /// ```rust
    /// use calendrical::{ZonedDateTime, TimeZone, Month, DatePiece, TimePiece};
    ///
    /// let then = ZonedDateTime::ymd_hms(2023, Month::January, 15, 10, 0, 0, &TimeZone::utc()).unwrap();
    /// assert_eq!(then.day(), 15);
    /// assert_eq!(then.hour(), 10);
    ///
    /// assert!(ZonedDateTime::ymd_hms(2023, Month::January, 15, 25, 0, 0, &TimeZone::utc()).is_err());
    /// ```
    pub fn ymd_hms(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8, zone: &TimeZone) -> Result<Self, Error> {
        let date = LocalDate::ymd(year, month, day)?;
        let time = LocalTime::hms(hour, minute, second)?;
        Self::from_local(LocalDateTime::new(date, time), zone.clone())
    }

    /// Returns the current instant, viewed in the given zone.
    pub fn now(zone: TimeZone) -> Result<Self, Error> {
        Self::from_instant(Instant::now(), zone)
    }

    /// Starts building a zoned date-time from its fields, beginning at
    /// midnight on the 1st of January, 1970, in UTC.
    pub fn builder() -> DateTimeBuilder {
        DateTimeBuilder::default()
    }

    /// Starts building a zoned date-time from this one’s fields, so that
    /// some of them can be overridden.
    pub fn with(&self) -> DateTimeBuilder {
        let local = self.local();
        DateTimeBuilder {
            year:       local.year(),
            month:      local.month(),
            day:        local.day(),
            hour:       local.hour(),
            minute:     local.minute(),
            second:     local.second(),
            nanosecond: local.nanosecond(),
            zone:       self.zone.clone(),
        }
    }

    /// The exact instant.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// The offset from UTC the zone had at this instant.
    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// The date and time a wall clock in this zone shows at this instant.
    pub fn local(&self) -> LocalDateTime {
        LocalDateTime::from_instant_unchecked(self.instant + self.offset.as_duration())
    }

    pub fn date(&self) -> LocalDate {
        self.local().date()
    }

    pub fn time(&self) -> LocalTime {
        self.local().time()
    }

    /// Views this same instant in a different zone.
    pub fn with_zone(&self, zone: TimeZone) -> Result<Self, Error> {
        Self::from_instant(self.instant, zone)
    }

    /// Returns the instant on the given date at which the wall clock shows
    /// this value’s time of day.
    pub fn with_date(&self, date: LocalDate) -> Result<Self, Error> {
        Self::from_local(LocalDateTime::new(date, self.time()), self.zone.clone())
    }

    /// Returns the instant on this value’s date at which the wall clock
    /// shows the given time of day.
    pub fn with_time(&self, time: LocalTime) -> Result<Self, Error> {
        Self::from_local(LocalDateTime::new(self.date(), time), self.zone.clone())
    }

    /// Returns the first instant of this value’s day.
    pub fn start_of_day(&self) -> Result<Self, Error> {
        self.with_time(LocalTime::midnight())
    }

    /// Adds an amount of calendar units.
    ///
    /// The units are applied in a fixed order:
    ///
    /// 1. Years and months, by the calendar. When the day of the month
    ///    doesn’t exist in the resulting month, it’s clamped to that month’s
    ///    last day, so the 31st of January plus one month is the 28th (or
    ///    29th) of February.
    /// 2. Weeks and days, as wall-clock days: the time of day stays the
    ///    same, even when the zone’s offset changes in between, which makes
    ///    some days 23 or 25 hours long.
    /// 3. Hours, minutes, and seconds, as exact elapsed time.
    ///
    /// Fails only if the result would leave the supported range of years.
    pub fn add_interval(&self, interval: &Interval) -> Result<Self, Error> {
        let (months, days, exact) = interval.split()?;

        let calendar = if months == 0 && days == 0 {
            self.clone()
        }
        else {
            let local = self.local();
            let date = local.date().add_months(months)?.add_days(days)?;
            Self::from_local(LocalDateTime::new(date, local.time()), self.zone.clone())?
        };

        if exact.is_zero() {
            Ok(calendar)
        }
        else {
            Self::from_instant(calendar.instant + exact, self.zone.clone())
        }
    }

    /// Subtracts an amount of calendar units, which is the same as adding
    /// the negated amount.
    pub fn sub_interval(&self, interval: &Interval) -> Result<Self, Error> {
        self.add_interval(&-*interval)
    }

    /// Adds the given numbers of calendar units. See `add_interval` for the
    /// order in which they apply.
    ///
    /// ```rust
    /// use calendrical::{ZonedDateTime, TimeZone, Month, DatePiece};
    ///
    /// let date = ZonedDateTime::ymd_hms(2023, Month::January, 31, 0, 0, 0, &TimeZone::utc()).unwrap();
    /// let later = date.add_calendar_units(0, 1, 0, 0, 0, 0).unwrap();
    /// assert_eq!(later.month(), Month::February);
    /// assert_eq!(later.day(), 28);
    /// ```
    pub fn add_calendar_units(&self, years: i64, months: i64, days: i64, hours: i64, minutes: i64, seconds: i64) -> Result<Self, Error> {
        self.add_interval(&Interval { years, months, weeks: 0, days, hours, minutes, seconds })
    }

    /// Adds an exact amount of elapsed time.
    pub fn add_duration(&self, duration: Duration) -> Result<Self, Error> {
        if duration.abs() > Duration::days(20_000 * 366) {
            return Err(Error::invalid("second", duration.whole_seconds()));
        }

        Self::from_instant(self.instant + duration, self.zone.clone())
    }

    /// Returns the difference from this value until the other one.
    pub fn diff(&self, other: &Self) -> Diff {
        Diff::between(self.clone(), other.clone())
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i64 { self.local().year() }
    fn month(&self) -> Month { self.local().month() }
    fn day(&self) -> i8 { self.local().day() }
    fn yearday(&self) -> i16 { self.local().yearday() }
    fn weekday(&self) -> Weekday { self.local().weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.local().hour() }
    fn minute(&self) -> i8 { self.local().minute() }
    fn second(&self) -> i8 { self.local().second() }
    fn nanosecond(&self) -> u32 { self.local().nanosecond() }
}

impl PartialEq for ZonedDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for ZonedDateTime {}

impl PartialOrd for ZonedDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for ZonedDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state)
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}[{}]", self.local(), self.offset, self.zone.id())
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZonedDateTime({})", self)
    }
}


/// A builder for zoned date-times, which collects field values and then
/// resolves them all at once with `build`.
///
/// Each method consumes the builder and returns a new one, so a partly
/// filled builder can be cloned and finished in different ways. Field
/// values are only checked by `build`.
///
/// ```rust
/// use calendrical::{ZonedDateTime, Month};
///
/// let date = ZonedDateTime::builder()
///     .year(2024).month(Month::March).day(20)
///     .hour(14).minute(30)
///     .build()
///     .unwrap();
///
/// assert_eq!(date.to_string(), "2024-03-20T14:30:00+00:00[UTC]");
/// ```
#[derive(PartialEq, Debug, Clone)]
pub struct DateTimeBuilder {
    year: i64,
    month: Month,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    nanosecond: u32,
    zone: TimeZone,
}

impl Default for DateTimeBuilder {
    fn default() -> Self {
        Self {
            year: 1970,
            month: Month::January,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
            zone: TimeZone::utc(),
        }
    }
}

impl DateTimeBuilder {
    pub fn year(self, year: i64) -> Self {
        Self { year, ..self }
    }

    pub fn month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    pub fn day(self, day: i8) -> Self {
        Self { day, ..self }
    }

    pub fn hour(self, hour: i8) -> Self {
        Self { hour, ..self }
    }

    pub fn minute(self, minute: i8) -> Self {
        Self { minute, ..self }
    }

    pub fn second(self, second: i8) -> Self {
        Self { second, ..self }
    }

    pub fn nanosecond(self, nanosecond: u32) -> Self {
        Self { nanosecond, ..self }
    }

    /// Sets the date fields all at once.
    pub fn date(self, date: LocalDate) -> Self {
        Self { year: date.year(), month: date.month(), day: date.day(), ..self }
    }

    /// Sets the time fields all at once.
    pub fn time(self, time: LocalTime) -> Self {
        Self { hour: time.hour(), minute: time.minute(), second: time.second(), nanosecond: time.nanosecond(), ..self }
    }

    /// Sets the zone that the fields are read in.
    pub fn zone(self, zone: TimeZone) -> Self {
        Self { zone, ..self }
    }

    /// Checks the fields, and resolves them to an instant in the zone.
    pub fn build(self) -> Result<ZonedDateTime, Error> {
        let date = LocalDate::ymd(self.year, self.month, self.day)?;
        let time = LocalTime::hms_nano(self.hour, self.minute, self.second, self.nanosecond)?;
        ZonedDateTime::from_local(LocalDateTime::new(date, time), self.zone)
    }
}
