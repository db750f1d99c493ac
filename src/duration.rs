//! Lengths of time on the timeline.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};

pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with nanosecond precision.
///
/// Internally this is a whole number of seconds (which may be negative)
/// plus a nanosecond part that is always in `0 .. 1_000_000_000`, so
/// minus one and a half seconds is stored as `-2s + 500_000_000ns`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Default)]
pub struct Duration {
    seconds: i64,
    nanoseconds: u32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub const fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub const fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new duration from a whole number of seconds and an extra
    /// (possibly negative, possibly oversized) number of nanoseconds.
    pub fn of_nanos(seconds: i64, nanoseconds: i64) -> Self {
        let total = seconds as i128 * NANOS_IN_SECOND as i128 + nanoseconds as i128;
        Self::from_total_nanos(total)
    }

    /// Create a new duration that’s the given number of minutes long.
    pub const fn minutes(minutes: i64) -> Self {
        Self::of(minutes * 60)
    }

    /// Create a new duration that’s the given number of hours long.
    pub const fn hours(hours: i64) -> Self {
        Self::of(hours * 3600)
    }

    /// Create a new duration that’s the given number of 24-hour days long.
    pub const fn days(days: i64) -> Self {
        Self::of(days * 86400)
    }

    pub(crate) fn from_total_nanos(total: i128) -> Self {
        let nanos = NANOS_IN_SECOND as i128;
        Self {
            seconds:     total.div_euclid(nanos) as i64,
            nanoseconds: total.rem_euclid(nanos) as u32,
        }
    }

    pub(crate) fn total_nanos(self) -> i128 {
        self.seconds as i128 * NANOS_IN_SECOND as i128 + self.nanoseconds as i128
    }

    /// Return the seconds and nanoseconds portions of the duration as a
    /// 2-element tuple. The nanosecond part is never negative.
    pub fn lengths(&self) -> (i64, u32) {
        (self.seconds, self.nanoseconds)
    }

    // I’ve done it like this instead of having separate seconds() and
    // nanoseconds() functions, because I think there’s a danger that
    // people will think that nanoseconds() returns the *total* length
    // in nanoseconds, rather than just this particular portion. This
    // way, it’s clear that there are two separate values being returned.

    /// The number of whole seconds in this duration, truncated towards
    /// zero, so minus one and a half seconds gives `-1`.
    pub fn whole_seconds(&self) -> i64 {
        if self.seconds < 0 && self.nanoseconds > 0 { self.seconds + 1 }
                                               else { self.seconds }
    }

    /// The length of this duration in (fractional) seconds.
    pub fn as_seconds_f64(&self) -> f64 {
        self.seconds as f64 + self.nanoseconds as f64 / NANOS_IN_SECOND as f64
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanoseconds == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns this duration without its sign.
    pub fn abs(self) -> Self {
        if self.is_negative() { -self } else { self }
    }

    /// Compares the *magnitudes* of two durations, ignoring their signs.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.abs().cmp(&other.abs())
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.abs();
        write!(f, "Duration({}{}.{:09}s)", sign, abs.seconds, abs.nanoseconds)
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_total_nanos(self.total_nanos() + rhs.total_nanos())
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_total_nanos(self.total_nanos() - rhs.total_nanos())
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::from_total_nanos(self.total_nanos() * amount as i128)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_total_nanos(-self.total_nanos())
    }
}
