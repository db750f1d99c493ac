#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar-aware date arithmetic, holiday calendars, and business-day
//! scheduling.
//!
//! # Examples
//!
//! ```
//! use calendrical::{BusinessDayCalculator, HolidayCalendar, Interval, Month, Scheduler, TimeZone, ZonedDateTime};
//!
//! let start = ZonedDateTime::ymd_hms(2023, Month::January, 15, 10, 0, 0, &TimeZone::utc()).unwrap();
//! let end = start.add_calendar_units(1, 2, 10, 4, 30, 0).unwrap();
//! assert_eq!(start.diff(&end).compact(), "1y2mo1w3d4h30m");
//!
//! let us = HolidayCalendar::for_jurisdiction("US").unwrap();
//! let calculator = BusinessDayCalculator::new(&us);
//! let paydays = Scheduler::new(&calculator).monthly_end_of_month(&start, 12).unwrap();
//! assert_eq!(paydays.len(), 12);
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, MIN_YEAR, MAX_YEAR};
pub use crate::cal::interval::Interval;
pub use crate::cal::iter::{Year, YearDays, YearMonth, YearMonths, MonthDays, MonthSpan, DaySpan};
pub use crate::cal::offset::ZoneOffset;
pub use crate::cal::zone::{TimeZone, ZoneResolver, UtcResolver, FixedResolver, LocalTimes};
pub use crate::cal::zone::{StaticTimeZone, FixedTimespanSet, FixedTimespan};
pub use crate::cal::zoned::{ZonedDateTime, DateTimeBuilder};

#[cfg(feature = "parse")]
pub use crate::cal::parse::ParseError;

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod diff;
pub use crate::diff::{Diff, Unit, Components, UnitNames};

mod period;
pub use crate::period::{Period, PeriodIter, SubPeriods};

mod holiday;
pub use crate::holiday::{HolidayCalendar, ObservedHoliday};
pub use crate::holiday::jurisdiction::{Jurisdiction, jurisdictions};
pub use crate::holiday::rule::{Holiday, HolidayRule, Observance, easter_sunday};

mod business;
pub use crate::business::{BusinessDayCalculator, BusinessDayConvention, WeekendRule};

mod schedule;
pub use crate::schedule::{Occurrence, Scheduler};

#[cfg(feature = "config")]
mod config;
#[cfg(feature = "config")]
pub use crate::config::{CalendarConfig, ConfigError};

mod error;
pub use crate::error::Error;

mod system;
mod util;
