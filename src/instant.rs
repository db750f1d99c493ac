//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of nanoseconds into that second. Two
/// instants compare by their position on the timeline alone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: u32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, plus a number of nanoseconds, which gets normalised into
    /// the range of a single second.
    pub fn at_nanos(seconds: i64, nanoseconds: i64) -> Self {
        Self::at_epoch() + Duration::of_nanos(seconds, nanoseconds)
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = sys_time();
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant
    pub fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    /// Returns the length of time elapsed since the epoch.
    pub fn since_epoch(&self) -> Duration {
        Duration::of_nanos(self.seconds, self.nanoseconds as i64)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = (self.since_epoch() + duration).lengths();
        Self { seconds, nanoseconds }
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + -duration
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, earlier: Self) -> Duration {
        self.since_epoch() - earlier.since_epoch()
    }
}
