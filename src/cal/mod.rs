//! Wall-clock calendar values, and the zones that tie them to exact
//! instants.

pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod interval;
pub(crate) mod iter;
pub(crate) mod offset;
#[cfg(feature="parse")] pub(crate) mod parse;
pub mod zone;
pub(crate) mod zoned;

use self::datetime::{Weekday, Month};


/// Values with a proleptic Gregorian date: local dates, local date-times,
/// and zoned date-times, which report the date on their zone’s wall
/// clock.
pub trait DatePiece {

    /// The year, such as 2024. Years before 1 CE count down through zero,
    /// so 1 BCE is the year 0.
    fn year(&self) -> i64;

    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    fn weekday(&self) -> Weekday;

    /// Whether this date falls on a Saturday or a Sunday. Business-day
    /// calculations use their own weekend rule instead.
    fn is_saturday_or_sunday(&self) -> bool {
        matches!(self.weekday(), Weekday::Saturday | Weekday::Sunday)
    }
}


/// Values with a time of day on a wall clock.
pub trait TimePiece {

    /// The hour, from 0 to 23.
    fn hour(&self) -> i8;

    fn minute(&self) -> i8;

    /// The second, from 0 to 59. Leap seconds aren’t represented.
    fn second(&self) -> i8;

    /// The nanosecond of the second.
    fn nanosecond(&self) -> u32;

    /// The millisecond of the second, truncated.
    fn millisecond(&self) -> i16 { (self.nanosecond() / 1_000_000) as i16 }
}
