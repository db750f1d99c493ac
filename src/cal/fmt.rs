//! ISO-8601 rendering of calendar values.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use crate::cal::offset::ZoneOffset;
use crate::util::RangeExt;


impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 ..= 9999) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;

        match self.nanosecond() {
            0                             => Ok(()),
            ns if ns % 1_000_000 == 0     => write!(f, ".{:03}", ns / 1_000_000),
            ns                            => write!(f, ".{:09}", ns),
        }
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.seconds() < 0 { '-' } else { '+' };
        let total = self.seconds().abs();
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

        if seconds == 0 {
            write!(f, "{}{:02}:{:02}", sign, hours, minutes)
        }
        else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
        }
    }
}
