//! Small numeric helpers shared by the calendar code.

use std::ops::RangeInclusive;


pub(crate) trait RangeExt {

    /// Whether this value lies within the inclusive range.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        range.contains(self)
    }
}


/// Splits a count into whole cycles and the leftover, which is never
/// negative: `-1` day is one week back plus six days.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}
