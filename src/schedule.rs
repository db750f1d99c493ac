//! Recurring schedules that avoid weekends and holidays.

use tracing::{debug, instrument};

use crate::business::{BusinessDayCalculator, BusinessDayConvention};
use crate::cal::interval::Interval;
use crate::cal::zoned::ZonedDateTime;
use crate::error::Error;


/// One occurrence of a schedule: the moment the arithmetic sequence gave,
/// and the moment it was moved to so that it falls on a business day.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Occurrence {

    /// The moment before adjustment.
    pub nominal: ZonedDateTime,

    /// The moment after adjustment, with the same time of day as the
    /// nominal one.
    pub scheduled: ZonedDateTime,
}

impl Occurrence {

    /// Whether this occurrence had to be moved off a non-business day.
    pub fn was_shifted(&self) -> bool {
        self.nominal.date() != self.scheduled.date()
    }
}


/// A **scheduler** generates sequences of moments that land on business
/// days, according to a business-day calculator.
///
/// It keeps no state between calls: generating the same schedule twice
/// gives the same occurrences.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler<'a> {
    calculator: &'a BusinessDayCalculator<'a>,
}

impl<'a> Scheduler<'a> {
    pub fn new(calculator: &'a BusinessDayCalculator<'a>) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &'a BusinessDayCalculator<'a> {
        self.calculator
    }

    /// Generates `count` occurrences at `anchor`, `anchor + interval`,
    /// `anchor + 2 × interval`, and so on, moving each one that isn’t on a
    /// business day forward to the next business day at the same time of
    /// day.
    ///
    /// Every occurrence is computed from the anchor, so moving one of them
    /// never moves the ones after it.
    ///
    /// ```rust
    /// use calendrical::{BusinessDayCalculator, HolidayCalendar, Interval, Month, Scheduler, TimeZone, ZonedDateTime, DatePiece};
    ///
    /// let calendar = HolidayCalendar::without_holidays("NONE");
    /// let calculator = BusinessDayCalculator::new(&calendar);
    /// let scheduler = Scheduler::new(&calculator);
    ///
    /// // Friday the 1st of March 2024, then every day.
    /// let anchor = ZonedDateTime::ymd_hms(2024, Month::March, 1, 9, 0, 0, &TimeZone::utc()).unwrap();
    /// let days: Vec<i8> = scheduler.recurring(&anchor, Interval::days(1), 4).unwrap()
    ///     .iter().map(|o| o.scheduled.day()).collect();
    /// assert_eq!(days, vec![ 1, 4, 4, 4 ]);
    /// ```
    pub fn recurring(&self, anchor: &ZonedDateTime, interval: Interval, count: usize) -> Result<Vec<Occurrence>, Error> {
        self.generate(anchor, interval, count, BusinessDayConvention::Following)
    }

    /// Generates `count` occurrences on the last day of each month,
    /// starting with the anchor’s month, at the anchor’s time of day. Each
    /// one that isn’t on a business day moves back to the last business day
    /// before it.
    #[instrument(level = "debug", skip(self, anchor), fields(anchor = %anchor))]
    pub fn monthly_end_of_month(&self, anchor: &ZonedDateTime, count: usize) -> Result<Vec<Occurrence>, Error> {
        let first_month = anchor.date().year_month();
        let mut occurrences = Vec::new();

        for index in 0 .. count {
            let last_day = first_month.add_months(index as i64)?.last_day()?;
            let nominal = anchor.with_date(last_day)?;
            occurrences.push(self.occurrence(nominal, BusinessDayConvention::Preceding)?);
        }

        Ok(occurrences)
    }

    /// Generates `count` occurrences stepped by `interval` from the anchor,
    /// moving each one by the given convention.
    ///
    /// Fails with an `InvalidCalendarValue` for the `interval` field when
    /// the interval doesn’t move forwards.
    #[instrument(level = "debug", skip(self, anchor, interval), fields(anchor = %anchor))]
    pub fn generate(&self, anchor: &ZonedDateTime, interval: Interval, count: usize, convention: BusinessDayConvention) -> Result<Vec<Occurrence>, Error> {
        if !interval.is_positive_step() {
            return Err(Error::invalid("interval", 0));
        }

        let mut occurrences = Vec::new();

        for index in 0 .. count {
            let nominal = anchor.add_interval(&(interval * index as i64))?;
            occurrences.push(self.occurrence(nominal, convention)?);
        }

        Ok(occurrences)
    }

    fn occurrence(&self, nominal: ZonedDateTime, convention: BusinessDayConvention) -> Result<Occurrence, Error> {
        let date = nominal.date();
        let adjusted = self.calculator.adjust(date, convention)?;

        if adjusted == date {
            return Ok(Occurrence { scheduled: nominal.clone(), nominal });
        }

        debug!(nominal = %date, scheduled = %adjusted, "Moving occurrence off a non-business day");
        let scheduled = nominal.with_date(adjusted)?;
        Ok(Occurrence { nominal, scheduled })
    }
}
