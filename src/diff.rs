//! Differences between two zoned date-times, both as exact elapsed time
//! and as whole calendar units.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::DatePiece;
use crate::cal::interval::Interval;
use crate::cal::zoned::ZonedDateTime;
use crate::duration::Duration;
use crate::period::Period;


/// The nominal length of a month, in days, used by `Diff::in_months`.
pub const NOMINAL_DAYS_IN_MONTH: f64 = 30.44;

/// The nominal length of a year, in days, used by `Diff::in_years`.
pub const NOMINAL_DAYS_IN_YEAR: f64 = 365.25;

const SECONDS_IN_DAY: f64 = 86400.0;


/// A unit that a difference can be counted in.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub enum Unit {
    Year, Month, Week, Day, Hour, Minute, Second,
}

impl Unit {

    /// Every unit, from the largest to the smallest.
    pub const ALL: [Unit; 7] = [
        Unit::Year, Unit::Month, Unit::Week, Unit::Day,
        Unit::Hour, Unit::Minute, Unit::Second,
    ];
}


/// The **difference** from one zoned date-time until another.
///
/// A diff can be viewed in two ways: as the exact elapsed time between its
/// endpoints (`duration`), or as a count of whole calendar units (`years`,
/// `months`, `days`, and so on), found by stepping by that unit from the
/// start towards the end without passing it. Each count is taken over the
/// whole span on its own, so `months` is the *total* number of whole
/// months, not what’s left over after `years`. Use `components` for the
/// breakdown where each unit holds what the larger ones leave.
///
/// The counts are negative (or zero) when the end comes before the start.
/// They are *not* merely the negation of the reverse diff’s counts, since
/// stepping backwards by months can clamp days differently than stepping
/// forwards: `invert` recomputes them from the other end.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Diff {
    start: ZonedDateTime,
    end: ZonedDateTime,
}

/// A breakdown of a difference, where each unit holds whatever the larger
/// units leave. All fields share the sign of the difference.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default)]
pub struct Components {
    pub years:   i64,
    pub months:  i64,
    pub weeks:   i64,
    pub days:    i64,
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Components {

    /// Returns the amount of the given unit.
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year    => self.years,
            Unit::Month   => self.months,
            Unit::Week    => self.weeks,
            Unit::Day     => self.days,
            Unit::Hour    => self.hours,
            Unit::Minute  => self.minutes,
            Unit::Second  => self.seconds,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Diff {

    /// Returns the difference from `start` until `end`.
    pub fn between(start: ZonedDateTime, end: ZonedDateTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &ZonedDateTime {
        &self.start
    }

    pub fn end(&self) -> &ZonedDateTime {
        &self.end
    }

    /// The exact elapsed time from the start until the end, which is
    /// negative if the end comes first.
    pub fn duration(&self) -> Duration {
        self.end.instant() - self.start.instant()
    }

    /// The number of whole years, which is the number of whole months
    /// divided by twelve.
    pub fn years(&self) -> i64 {
        self.months() / 12
    }

    /// The number of whole calendar months that can be added to the start
    /// without passing the end.
    pub fn months(&self) -> i64 {
        let start = self.start.local();
        let end = self.end.local();
        let estimate = (end.year() - start.year()) * 12
                     + (end.month() as i64 - start.month() as i64);

        whole_steps(&self.start, &self.end, estimate, Interval::months)
    }

    /// The number of whole weeks, which is the number of whole days divided
    /// by seven.
    pub fn weeks(&self) -> i64 {
        self.days() / 7
    }

    /// The number of whole wall-clock days that can be added to the start
    /// without passing the end. A day that’s 23 or 25 hours long, because
    /// the clocks changed, still counts as one day.
    pub fn days(&self) -> i64 {
        let estimate = self.start.date().days_until(&self.end.date());
        whole_steps(&self.start, &self.end, estimate, Interval::days)
    }

    /// The number of whole hours of elapsed time.
    pub fn hours(&self) -> i64 {
        self.duration().whole_seconds() / 3600
    }

    /// The number of whole minutes of elapsed time.
    pub fn minutes(&self) -> i64 {
        self.duration().whole_seconds() / 60
    }

    /// The number of whole seconds of elapsed time.
    pub fn seconds(&self) -> i64 {
        self.duration().whole_seconds()
    }

    /// The elapsed time, in fractional seconds.
    pub fn in_seconds(&self) -> f64 {
        self.duration().as_seconds_f64()
    }

    pub fn in_minutes(&self) -> f64 {
        self.in_seconds() / 60.0
    }

    pub fn in_hours(&self) -> f64 {
        self.in_seconds() / 3600.0
    }

    /// The elapsed time in 24-hour days.
    pub fn in_days(&self) -> f64 {
        self.in_seconds() / SECONDS_IN_DAY
    }

    pub fn in_weeks(&self) -> f64 {
        self.in_days() / 7.0
    }

    /// The elapsed time in months of a nominal 30.44 days each. This is an
    /// approximation, and can disagree with `months`.
    pub fn in_months(&self) -> f64 {
        self.in_days() / NOMINAL_DAYS_IN_MONTH
    }

    /// The elapsed time in years of a nominal 365.25 days each. This is an
    /// approximation, and can disagree with `years`.
    pub fn in_years(&self) -> f64 {
        self.in_days() / NOMINAL_DAYS_IN_YEAR
    }

    /// Returns the difference with its endpoints swapped.
    pub fn invert(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }

    /// Returns a non-negative difference over the same span, with its
    /// calendar counts recomputed from the earlier endpoint.
    pub fn abs(&self) -> Self {
        if self.is_negative() { self.invert() } else { self.clone() }
    }

    pub fn is_zero(&self) -> bool {
        self.duration().is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.duration().is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.duration().is_negative()
    }

    /// Whether this difference spans less time than the other, ignoring
    /// their directions.
    pub fn shorter_than(&self, other: &Self) -> bool {
        self.duration().cmp_magnitude(&other.duration()) == Ordering::Less
    }

    /// Whether this difference spans more time than the other, ignoring
    /// their directions.
    pub fn longer_than(&self, other: &Self) -> bool {
        self.duration().cmp_magnitude(&other.duration()) == Ordering::Greater
    }

    /// Whether this difference spans as much time as the other, ignoring
    /// their directions.
    pub fn equal_to(&self, other: &Self) -> bool {
        self.duration().cmp_magnitude(&other.duration()) == Ordering::Equal
    }

    /// Breaks the difference down into years, months, weeks, days, hours,
    /// minutes, and seconds, taking the largest units first.
    ///
    /// Years and months are stepped by the calendar from the start; weeks
    /// and days as wall-clock days from there; and the rest is the exact
    /// time left over.
    pub fn components(&self) -> Components {
        let months = self.months();
        let after_months = self.start.add_interval(&Interval::months(months))
                                     .unwrap_or_else(|_| self.start.clone());

        let estimate = after_months.date().days_until(&self.end.date());
        let days = whole_steps(&after_months, &self.end, estimate, Interval::days);
        let after_days = after_months.add_interval(&Interval::days(days))
                                     .unwrap_or(after_months);

        let rest = (self.end.instant() - after_days.instant()).whole_seconds();

        Components {
            years:   months / 12,
            months:  months % 12,
            weeks:   days / 7,
            days:    days % 7,
            hours:   rest / 3600,
            minutes: rest / 60 % 60,
            seconds: rest % 60,
        }
    }

    /// Picks the units to describe this difference with: the non-zero
    /// units of its breakdown, largest first, keeping at most `max` of
    /// them. Amounts are magnitudes. A zero difference is described as
    /// zero seconds.
    ///
    /// ```rust
    /// use calendrical::{ZonedDateTime, TimeZone, Month, Unit};
    ///
    /// let utc = TimeZone::utc();
    /// let start = ZonedDateTime::ymd_hms(2023, Month::January, 15, 10, 0, 0, &utc).unwrap();
    /// let end = ZonedDateTime::ymd_hms(2024, Month::March, 20, 14, 30, 0, &utc).unwrap();
    ///
    /// let units = start.diff(&end).significant_units(2);
    /// assert_eq!(units, vec![ (1, Unit::Year), (2, Unit::Month) ]);
    /// ```
    pub fn significant_units(&self, max: usize) -> Vec<(i64, Unit)> {
        let components = self.components();

        let units: Vec<(i64, Unit)> = Unit::ALL.iter()
            .map(|unit| (components.get(*unit).abs(), *unit))
            .filter(|(amount, _)| *amount != 0)
            .take(max.max(1))
            .collect();

        if units.is_empty() { vec![ (0, Unit::Second) ] }
                       else { units }
    }

    /// Describes this difference by its largest unit, such as “2 years”.
    pub fn for_humans(&self) -> String {
        self.for_humans_with(&UnitNames::english())
    }

    pub fn for_humans_with(&self, names: &UnitNames) -> String {
        let units = self.significant_units(1);
        names.amount(units[0].0, units[0].1)
    }

    /// Describes this difference by its largest unit, relative to the
    /// start, such as “2 years ago” or “3 days from now”.
    pub fn for_humans_comparison(&self) -> String {
        self.for_humans_comparison_with(&UnitNames::english())
    }

    pub fn for_humans_comparison_with(&self, names: &UnitNames) -> String {
        if self.is_zero() {
            return names.now.to_string();
        }

        let amount = self.for_humans_with(names);
        let template = if self.is_negative() { names.past } else { names.future };
        template.replace("{}", &amount)
    }

    /// Describes every non-zero unit of this difference densely, such as
    /// “1y2mo1w3d”, with a leading minus sign when it’s negative.
    pub fn compact(&self) -> String {
        self.compact_with(&UnitNames::english())
    }

    pub fn compact_with(&self, names: &UnitNames) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }

        for (amount, unit) in self.significant_units(Unit::ALL.len()) {
            out.push_str(&amount.to_string());
            out.push_str(names.compact[unit as usize]);
        }

        out
    }

    /// Describes every non-zero unit of this difference in a sentence,
    /// such as “1 year, 2 months and 5 days”.
    pub fn sentence_with(&self, names: &UnitNames) -> String {
        let parts: Vec<String> = self.significant_units(Unit::ALL.len())
            .into_iter()
            .map(|(amount, unit)| names.amount(amount, unit))
            .collect();

        match parts.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} {} {}", rest.join(", "), names.conjunction, last),
            Some((last, _))                        => last.clone(),
            None                                   => String::new(),
        }
    }

    /// Returns the period from the start until the end.
    pub fn period(&self) -> Period {
        Period::new(self.start.clone(), self.end.clone())
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.sentence_with(&UnitNames::english()))
    }
}


/// Counts how many whole steps of a unit can be taken from `origin`
/// towards `end` without passing it, starting the search at `estimate`.
fn whole_steps(origin: &ZonedDateTime, end: &ZonedDateTime, estimate: i64, step: fn(i64) -> Interval) -> i64 {
    let forward = end >= origin;
    let sign = if forward { 1 } else { -1 };

    let passes = |n: i64| match origin.add_interval(&step(n)) {
        Ok(stepped) => if forward { stepped > *end } else { stepped < *end },
        Err(_)      => true,
    };

    let mut n = if estimate.signum() == -sign { 0 } else { estimate };
    while n != 0 && passes(n) {
        n -= sign;
    }
    while !passes(n + sign) {
        n += sign;
    }

    n
}


/// The words used to describe differences.
///
/// Every formatting method that takes one of these has a counterpart that
/// uses `UnitNames::english()`; pass a different value to describe
/// differences in another language.
#[derive(PartialEq, Debug, Clone)]
pub struct UnitNames {

    /// Each unit’s name for an amount of one, from years to seconds.
    pub singular: [&'static str; 7],

    /// Each unit’s name for other amounts, from years to seconds.
    pub plural: [&'static str; 7],

    /// Each unit’s suffix in the compact form, from years to seconds.
    pub compact: [&'static str; 7],

    /// The phrase for a difference into the future, with `{}` standing in
    /// for the amount.
    pub future: &'static str,

    /// The phrase for a difference into the past, with `{}` standing in
    /// for the amount.
    pub past: &'static str,

    /// The phrase for no difference at all.
    pub now: &'static str,

    /// The word joining the last two parts of a sentence.
    pub conjunction: &'static str,
}

impl UnitNames {
    pub fn english() -> Self {
        Self {
            singular: [ "year", "month", "week", "day", "hour", "minute", "second" ],
            plural:   [ "years", "months", "weeks", "days", "hours", "minutes", "seconds" ],
            compact:  [ "y", "mo", "w", "d", "h", "m", "s" ],
            future: "{} from now",
            past: "{} ago",
            now: "just now",
            conjunction: "and",
        }
    }

    fn amount(&self, amount: i64, unit: Unit) -> String {
        let name = if amount == 1 { self.singular[unit as usize] }
                             else { self.plural[unit as usize] };
        format!("{} {}", amount, name)
    }
}

impl Default for UnitNames {
    fn default() -> Self {
        Self::english()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;
    use crate::cal::zone::TimeZone;

    fn utc(year: i64, month: Month, day: i8, hour: i8, minute: i8) -> ZonedDateTime {
        ZonedDateTime::ymd_hms(year, month, day, hour, minute, 0, &TimeZone::utc()).unwrap()
    }

    #[test]
    fn clamped_months_still_count() {
        let diff = Diff::between(utc(2023, Month::January, 31, 0, 0), utc(2023, Month::February, 28, 0, 0));
        assert_eq!(diff.months(), 1);
        assert_eq!(diff.days(), 28);
    }

    #[test]
    fn backwards_counts_are_recomputed() {
        // Forwards, the 31st of January clamps onto the 28th of February;
        // backwards, the 28th of February steps to the 28th of January,
        // which passes the 31st.
        let diff = Diff::between(utc(2023, Month::January, 31, 0, 0), utc(2023, Month::February, 28, 0, 0));
        assert_eq!(diff.months(), 1);
        assert_eq!(diff.invert().months(), 0);
        assert_eq!(diff.invert().days(), -28);
    }

    #[test]
    fn estimate_far_off() {
        let diff = Diff::between(utc(2000, Month::December, 31, 23, 0), utc(2001, Month::January, 1, 1, 0));
        assert_eq!(diff.months(), 0);
        assert_eq!(diff.days(), 0);
        assert_eq!(diff.hours(), 2);
    }

    #[test]
    fn components() {
        let diff = Diff::between(utc(2023, Month::January, 15, 10, 0), utc(2024, Month::March, 25, 14, 30));
        assert_eq!(diff.components(), Components {
            years: 1, months: 2, weeks: 1, days: 3, hours: 4, minutes: 30, seconds: 0,
        });
    }

    #[test]
    fn zero_units() {
        let date = utc(2023, Month::January, 15, 10, 0);
        let diff = Diff::between(date.clone(), date);
        assert_eq!(diff.significant_units(3), vec![ (0, Unit::Second) ]);
        assert_eq!(diff.for_humans_comparison(), "just now");
        assert_eq!(diff.compact(), "0s");
    }

    #[test]
    fn sentences() {
        let diff = Diff::between(utc(2023, Month::January, 15, 10, 0), utc(2024, Month::March, 25, 14, 30));
        assert_eq!(diff.to_string(), "1 year, 2 months, 1 week, 3 days, 4 hours and 30 minutes");
        assert_eq!(diff.compact(), "1y2mo1w3d4h30m");
    }
}
