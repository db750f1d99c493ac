//! Spans of time between two zoned date-times.

use crate::cal::interval::Interval;
use crate::cal::zoned::ZonedDateTime;
use crate::diff::Diff;
use crate::duration::Duration;
use crate::error::Error;


/// A **period** is the span of time from a start to an end.
///
/// A period can be created with its endpoints in either order. Operations
/// that need them in order, such as checking containment or iterating,
/// return `Error::InvalidPeriod` rather than guessing; call `normalized`
/// first to accept either order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Period {
    start: ZonedDateTime,
    end: ZonedDateTime,
}

impl Period {

    /// Creates a period between two endpoints, in any order.
    pub fn new(start: ZonedDateTime, end: ZonedDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a period, failing if the start comes after the end.
    pub fn ordered(start: ZonedDateTime, end: ZonedDateTime) -> Result<Self, Error> {
        Self::new(start, end).validate()
    }

    pub fn start(&self) -> &ZonedDateTime {
        &self.start
    }

    pub fn end(&self) -> &ZonedDateTime {
        &self.end
    }

    /// Whether the start comes no later than the end.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns this period with its endpoints swapped if they were out of
    /// order.
    pub fn normalized(&self) -> Self {
        if self.is_ordered() {
            self.clone()
        }
        else {
            Self::new(self.end.clone(), self.start.clone())
        }
    }

    fn validate(self) -> Result<Self, Error> {
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> Result<(), Error> {
        if self.is_ordered() {
            Ok(())
        }
        else {
            Err(Error::InvalidPeriod { start: self.start.instant(), end: self.end.instant() })
        }
    }

    /// Whether the given moment lies within this period, endpoints
    /// included.
    pub fn contains(&self, moment: &ZonedDateTime) -> Result<bool, Error> {
        self.check()?;
        Ok(self.start <= *moment && *moment <= self.end)
    }

    /// Whether this period and the other share at least one moment,
    /// endpoints included.
    pub fn overlaps(&self, other: &Self) -> Result<bool, Error> {
        self.check()?;
        other.check()?;
        Ok(self.start <= other.end && other.start <= self.end)
    }

    /// The exact time from the start to the end.
    pub fn duration(&self) -> Duration {
        self.end.instant() - self.start.instant()
    }

    /// The difference from the start to the end.
    pub fn diff(&self) -> Diff {
        Diff::between(self.start.clone(), self.end.clone())
    }

    /// Returns an iterator over the moments `start`, `start + interval`,
    /// `start + 2 × interval`, and so on, for as long as they don’t pass the
    /// end. Each moment is computed from the start, so clamped month-ends
    /// don’t drift: stepping monthly from the 31st gives the 31st of each
    /// month that has one.
    ///
    /// ```rust
    /// use calendrical::{Period, Interval, ZonedDateTime, TimeZone, Month};
    ///
    /// let utc = TimeZone::utc();
    /// let start = ZonedDateTime::ymd_hms(2024, Month::January, 31, 9, 0, 0, &utc).unwrap();
    /// let end = ZonedDateTime::ymd_hms(2024, Month::April, 30, 9, 0, 0, &utc).unwrap();
    ///
    /// let days: Vec<i8> = Period::new(start, end).iter(Interval::months(1)).unwrap()
    ///     .map(|d| calendrical::DatePiece::day(&d))
    ///     .collect();
    /// assert_eq!(days, vec![ 31, 29, 31, 30 ]);
    /// ```
    pub fn iter(&self, interval: Interval) -> Result<PeriodIter, Error> {
        self.check()?;

        if !interval.is_positive_step() {
            return Err(Error::invalid("interval", 0));
        }

        Ok(PeriodIter {
            start: self.start.clone(),
            end: self.end.clone(),
            interval,
            index: 0,
            done: false,
        })
    }

    /// Returns an iterator over the same time of day on each day of this
    /// period.
    pub fn days(&self) -> Result<PeriodIter, Error> {
        self.iter(Interval::days(1))
    }

    /// Returns an iterator that splits this period into consecutive
    /// sub-periods of the given interval. The last one is cut short at the
    /// end of this period.
    pub fn sub_periods(&self, interval: Interval) -> Result<SubPeriods, Error> {
        let mut starts = self.iter(interval)?;
        let next_start = starts.next();

        Ok(SubPeriods {
            starts,
            next_start,
            end: self.end.clone(),
        })
    }
}


/// An iterator over evenly-stepped moments in a period. See `Period::iter`.
#[derive(Debug, Clone)]
pub struct PeriodIter {
    start: ZonedDateTime,
    end: ZonedDateTime,
    interval: Interval,
    index: i64,
    done: bool,
}

impl Iterator for PeriodIter {
    type Item = ZonedDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.start.add_interval(&(self.interval * self.index)) {
            Ok(moment) if moment <= self.end => {
                self.index += 1;
                Some(moment)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}


/// An iterator over consecutive sub-periods. See `Period::sub_periods`.
#[derive(Debug, Clone)]
pub struct SubPeriods {
    starts: PeriodIter,
    next_start: Option<ZonedDateTime>,
    end: ZonedDateTime,
}

impl Iterator for SubPeriods {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start.take()?;
        if start >= self.end {
            return None;
        }

        self.next_start = self.starts.next();
        let end = match self.next_start {
            Some(ref next) => next.clone(),
            None           => self.end.clone(),
        };

        Some(Period::new(start, end))
    }
}
