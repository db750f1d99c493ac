//! The error type shared by every fallible operation in this crate.

use crate::instant::Instant;


/// Everything that can go wrong when constructing or manipulating dates,
/// calendars, and periods.
///
/// Every variant carries the value that caused it, so callers can report
/// *which* field was wrong rather than just that something was.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum Error {

    /// A calendar field (year, month, day, hour, offset, and so on) was
    /// outside its valid range, or an operation would have produced a date
    /// outside the supported range of years.
    #[error("invalid calendar value for {field}: {value}")]
    InvalidCalendarValue {
        /// The name of the offending field.
        field: &'static str,
        /// The value that was rejected.
        value: i64,
    },

    /// A holiday calendar was requested for a jurisdiction code that has no
    /// holiday table.
    #[error("unknown jurisdiction: {0:?}")]
    UnknownJurisdiction(String),

    /// A range operation was invoked on a period whose start comes after
    /// its end.
    #[error("invalid period: start {start:?} is after end {end:?}")]
    InvalidPeriod {
        /// The start of the period.
        start: Instant,
        /// The end of the period.
        end: Instant,
    },

    /// The zone resolver has no data for the given zone identifier.
    #[error("unknown time zone: {0:?}")]
    UnknownZone(String),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: i64) -> Self {
        Error::InvalidCalendarValue { field, value }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_the_field() {
        let err = Error::invalid("month", 13);
        assert_eq!(err.to_string(), "invalid calendar value for month: 13");
    }

    #[test]
    fn names_the_jurisdiction() {
        let err = Error::UnknownJurisdiction("XX".into());
        assert_eq!(err.to_string(), "unknown jurisdiction: \"XX\"");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
