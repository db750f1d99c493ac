//! Offsets from UTC.

use std::fmt;

use crate::duration::Duration;
use crate::error::Error;
use crate::util::RangeExt;


/// A **zone offset** is the amount of time that a wall clock in some zone
/// is ahead of UTC at a particular instant, in seconds east of UTC,
/// together with whether any daylight-saving time contributes to it.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct ZoneOffset {
    seconds: i32,
    is_dst: bool,
}

impl ZoneOffset {

    /// The zero offset of UTC itself.
    pub const fn utc() -> Self {
        Self { seconds: 0, is_dst: false }
    }

    /// Creates a standard-time offset of the given number of seconds east
    /// of UTC, which must lie within a day either side of zero.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        Self::with_dst(seconds, false)
    }

    /// Creates an offset, flagging whether daylight-saving time is in
    /// effect.
    pub fn with_dst(seconds: i32, is_dst: bool) -> Result<Self, Error> {
        if seconds.is_within(-86400 ..= 86400) {
            Ok(Self { seconds, is_dst })
        }
        else {
            Err(Error::invalid("offset", seconds as i64))
        }
    }

    /// Creates an offset from hours and minutes, which must have the same
    /// sign (or be zero).
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::invalid("minute", minutes as i64))
        }
        else if !hours.is_within(-23 ..= 23) {
            Err(Error::invalid("hour", hours as i64))
        }
        else if !minutes.is_within(-59 ..= 59) {
            Err(Error::invalid("minute", minutes as i64))
        }
        else {
            Self::of_seconds(hours as i32 * 3600 + minutes as i32 * 60)
        }
    }

    /// The total offset from UTC, in seconds.
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Whether daylight-saving time contributes to this offset.
    pub fn is_dst(self) -> bool {
        self.is_dst
    }

    pub fn is_utc(self) -> bool {
        self.seconds == 0
    }

    /// The offset as a signed duration.
    pub fn as_duration(self) -> Duration {
        Duration::of(self.seconds as i64)
    }
}

impl fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_dst {
            write!(f, "ZoneOffset({} DST)", self)
        }
        else {
            write!(f, "ZoneOffset({})", self)
        }
    }
}


#[cfg(test)]
mod test {
    use super::ZoneOffset;

    #[test]
    fn fixed_seconds() {
        assert!(ZoneOffset::of_seconds(1234).is_ok());
    }

    #[test]
    fn fixed_seconds_out_of_range() {
        assert!(ZoneOffset::of_seconds(100_000).is_err());
    }

    #[test]
    fn fixed_hm() {
        assert_eq!(ZoneOffset::of_hours_and_minutes(5, 30).map(|o| o.seconds()), Ok(19800));
    }

    #[test]
    fn fixed_hm_negative() {
        assert_eq!(ZoneOffset::of_hours_and_minutes(-3, -45).map(|o| o.seconds()), Ok(-13500));
    }

    #[test]
    fn fixed_hm_err() {
        assert!(ZoneOffset::of_hours_and_minutes(8, 60).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert!(ZoneOffset::of_hours_and_minutes(-4, 30).is_err());
    }

    #[test]
    fn fixed_hm_signs_zero() {
        assert!(ZoneOffset::of_hours_and_minutes(4, 0).is_ok());
    }

    #[test]
    fn debug_zulu() {
        let debugged = format!("{:?}", ZoneOffset::utc());
        assert_eq!(debugged, "ZoneOffset(+00:00)");
    }

    #[test]
    fn debug_offset() {
        let offset = ZoneOffset::with_dst(-25 * 60 - 21, true).unwrap();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "ZoneOffset(-00:25:21 DST)");
    }
}
