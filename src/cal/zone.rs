//! Time zones, and the resolvers that find their offsets from UTC.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::ZoneOffset;
use crate::cal::zoned::ZonedDateTime;
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;


/// Something that knows the UTC offset in effect for a zone at any
/// instant.
///
/// This is the one capability the calendar arithmetic needs from a time
/// zone database. Implementors should return `Error::UnknownZone` for zone
/// identifiers they don’t know about.
pub trait ZoneResolver: fmt::Debug + Send + Sync {

    /// Returns the offset from UTC that the zone with the given identifier
    /// has at the given instant.
    fn resolve(&self, instant: Instant, zone_id: &str) -> Result<ZoneOffset, Error>;
}

/// The resolver behind `TimeZone::utc`, which is always at offset zero.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct UtcResolver;

impl ZoneResolver for UtcResolver {
    fn resolve(&self, _instant: Instant, _zone_id: &str) -> Result<ZoneOffset, Error> {
        Ok(ZoneOffset::utc())
    }
}

/// A resolver for a zone that never changes its offset.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct FixedResolver(pub ZoneOffset);

impl ZoneResolver for FixedResolver {
    fn resolve(&self, _instant: Instant, _zone_id: &str) -> Result<ZoneOffset, Error> {
        Ok(self.0)
    }
}


/// A **time zone** handle: a zone identifier, and the resolver that knows
/// its offsets. Cloning one is cheap, and two handles are equal when
/// their identifiers are.
#[derive(Clone)]
pub struct TimeZone {
    id: Arc<str>,
    resolver: Arc<dyn ZoneResolver>,
}

impl TimeZone {

    /// The UTC time zone.
    pub fn utc() -> Self {
        Self::new("UTC", Arc::new(UtcResolver))
    }

    /// A zone fixed at the given offset, named after it, such as `+05:30`.
    pub fn fixed(offset: ZoneOffset) -> Self {
        Self::new(offset.to_string(), Arc::new(FixedResolver(offset)))
    }

    /// A zone with the given identifier, whose offsets come from the given
    /// resolver.
    pub fn new(id: impl Into<Arc<str>>, resolver: Arc<dyn ZoneResolver>) -> Self {
        Self { id: id.into(), resolver }
    }

    /// A zone backed by a static table of transitions, using the table’s
    /// name as its identifier.
    pub fn from_static(zone: &'static StaticTimeZone<'static>) -> Self {
        Self::new(zone.name, Arc::new(zone))
    }

    /// This zone’s identifier, such as “Europe/London”.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the offset from UTC in effect in this zone at the given
    /// instant.
    pub fn offset_at(&self, instant: Instant) -> Result<ZoneOffset, Error> {
        self.resolver.resolve(instant, &self.id)
    }

    /// Converts a local datetime, as it would be shown on a wall clock in
    /// this zone, into the exact instants at which the clock shows it.
    ///
    /// This can find 0, 1, or 2 instants, depending on whether the
    /// datetime falls in the gap when clocks go forward (an impossible
    /// time), or the overlap when they go back (an ambiguous time). The
    /// result will *almost* always be precise, but there are edge cases
    /// you need to watch out for.
    pub fn convert_local(&self, local: LocalDateTime) -> Result<LocalTimes, Error> {
        let wall = local.to_instant();

        // The offsets a day either side are the only ones that can apply,
        // as zones change their offset at most once around any one time.
        let before = self.offset_at(wall - Duration::days(1))?;
        let after  = self.offset_at(wall + Duration::days(1))?;

        let mut candidates = Vec::with_capacity(2);
        for offset in [ before, after ] {
            let instant = wall - offset.as_duration();
            let actual = self.offset_at(instant)?;

            if actual.seconds() == offset.seconds() && !candidates.iter().any(|&(i, _)| i == instant) {
                candidates.push((instant, actual));
            }
        }
        candidates.sort_by_key(|&(instant, _)| instant);

        let zonify = |(instant, offset): (Instant, ZoneOffset)| ZonedDateTime::from_parts(instant, offset, self.clone());

        match candidates.len() {
            0 => {
                trace!(zone = %self.id, local = %local, "local time falls in a gap");
                let instant = wall - before.as_duration();
                let offset = self.offset_at(instant)?;
                Ok(LocalTimes::Impossible { shifted: zonify((instant, offset)) })
            }
            1 => {
                Ok(LocalTimes::Precise(zonify(candidates[0])))
            }
            _ => {
                trace!(zone = %self.id, local = %local, "local time is ambiguous");
                Ok(LocalTimes::Ambiguous {
                    earlier: zonify(candidates[0]),
                    later:   zonify(candidates[candidates.len() - 1]),
                })
            }
        }
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TimeZone {}

impl fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimeZone({})", self.id)
    }
}


/// The result of converting a *local* time to a *zoned* time with the same
/// time components. See `TimeZone::convert_local` for more information.
#[derive(PartialEq, Debug, Clone)]
pub enum LocalTimes {

    /// This local time is impossible, as it falls between two timespans
    /// and should never be shown on a wall clock. `shifted` is the time
    /// the wall clock shows after moving it forward by the length of the
    /// gap.
    Impossible { shifted: ZonedDateTime },

    /// This local time can be defined unambiguously.
    Precise(ZonedDateTime),

    /// This local time is ambiguous, as it overlaps two timespans and
    /// happens twice on a wall clock rather than once.
    Ambiguous { earlier: ZonedDateTime, later: ZonedDateTime },
}

impl LocalTimes {

    /// Extracts the *precise* zoned date time, if present.
    pub fn precise(self) -> Option<ZonedDateTime> {
        match self {
            LocalTimes::Precise(p)  => Some(p),
            _                       => None,
        }
    }

    /// Picks a single zoned time, shifting impossible times forward across
    /// the gap and taking the earlier of two ambiguous ones.
    pub fn compatible(self) -> ZonedDateTime {
        match self {
            LocalTimes::Impossible { shifted }  => shifted,
            LocalTimes::Precise(p)              => p,
            LocalTimes::Ambiguous { earlier, .. } => earlier,
        }
    }

    /// Returns whether this local times result is impossible.
    pub fn is_impossible(&self) -> bool {
        matches!(*self, LocalTimes::Impossible { .. })
    }

    /// Returns whether this local times result is ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        matches!(*self, LocalTimes::Ambiguous { .. })
    }
}


/// A zone whose offsets are listed in a fixed table of timespans, such as
/// one compiled into a program or a test.
#[derive(PartialEq, Debug)]
pub struct StaticTimeZone<'a> {

    /// This zone’s name in the zoneinfo database, such as “America/New_York”.
    pub name: &'a str,

    /// The set of timespans used in this time zone.
    pub fixed_timespans: FixedTimespanSet<'a>,
}

impl<'a> StaticTimeZone<'a> {

    /// Returns the time zone abbreviation that this zone uses at the given
    /// instant. As always, abbreviations are notoriously vague, and should
    /// only be used when referring to a known zone.
    pub fn abbreviation_at(&self, instant: Instant) -> &str {
        &self.fixed_timespans.find(instant.seconds()).name
    }

    /// Whether this time zone is “fixed”: a fixed time zone has no
    /// transitions, meaning it will always be at the same offset from UTC.
    pub fn is_fixed(&self) -> bool {
        self.fixed_timespans.rest.is_empty()
    }
}

impl ZoneResolver for StaticTimeZone<'static> {
    fn resolve(&self, instant: Instant, zone_id: &str) -> Result<ZoneOffset, Error> {
        if zone_id != self.name {
            return Err(Error::UnknownZone(zone_id.to_owned()));
        }

        let timespan = self.fixed_timespans.find(instant.seconds());
        let seconds = i32::try_from(timespan.offset).map_err(|_| Error::invalid("offset", timespan.offset))?;
        ZoneOffset::with_dst(seconds, timespan.is_dst)
    }
}

impl ZoneResolver for &'static StaticTimeZone<'static> {
    fn resolve(&self, instant: Instant, zone_id: &str) -> Result<ZoneOffset, Error> {
        (**self).resolve(instant, zone_id)
    }
}


/// A set of timespans, separated by the instances at which the timespans
/// change over. There will always be one more timespan than transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespanSet<'a> {

    /// The first timespan, which is assumed to have been in effect up until
    /// the initial transition instant (if any). Each set has to have at
    /// least one timespan.
    pub first: FixedTimespan<'a>,

    /// The rest of the timespans, as a slice of tuples, each containing:
    ///
    /// 1. A transition instant at which the previous timespan ends and the
    ///    next one begins, stored as a Unix timestamp;
    /// 2. The actual timespan to transition into.
    pub rest: &'a [ (i64, FixedTimespan<'a>) ],
}

/// An individual timespan with a fixed offset.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespan<'a> {

    /// The *total* offset in effect during this timespan, in seconds. This
    /// is the sum of the standard offset from UTC (the zone’s standard
    /// time), and any extra daylight-saving offset.
    pub offset: i64,

    /// Whether there was any daylight-saving offset in effect during this
    /// timespan.
    pub is_dst: bool,

    /// The abbreviation in use during this timespan, such as “GMT” or
    /// “PDT”.
    pub name: Cow<'a, str>,
}

impl<'a> FixedTimespanSet<'a> {

    /// Finds the timespan in effect at the given Unix timestamp. A
    /// transition instant belongs to the timespan it starts.
    fn find(&self, time: i64) -> &FixedTimespan<'a> {
        match self.rest.iter().take_while(|t| t.0 <= time).last() {
            None     => &self.first,
            Some(zd) => &zd.1,
        }
    }
}
