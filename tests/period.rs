use std::borrow::Cow;

use calendrical::{StaticTimeZone, FixedTimespanSet, FixedTimespan, TimeZone};
use calendrical::{Duration, Error, Interval, Month, Period, ZonedDateTime, DatePiece, TimePiece};


static LONDON_2010: StaticTimeZone<'static> = StaticTimeZone {
    name: "Test/London",
    fixed_timespans: FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("GMT"),
        },
        rest: &[
            (1269738000, FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("BST"),
            }),
            (1288486800, FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("GMT"),
            }),
        ]
    }
};

fn london(month: Month, day: i8, hour: i8) -> ZonedDateTime {
    ZonedDateTime::ymd_hms(2010, month, day, hour, 0, 0, &TimeZone::from_static(&LONDON_2010)).unwrap()
}

fn utc(year: i64, month: Month, day: i8, hour: i8) -> ZonedDateTime {
    ZonedDateTime::ymd_hms(year, month, day, hour, 0, 0, &TimeZone::utc()).unwrap()
}


mod iteration {
    use super::*;

    #[test]
    fn monthly_from_the_end_of_a_month() {
        let period = Period::new(utc(2023, Month::October, 31, 0), utc(2024, Month::March, 31, 0));
        let moments: Vec<ZonedDateTime> = period.iter(Interval::months(1)).unwrap().collect();

        assert_eq!(moments, vec![
            utc(2023, Month::October,  31, 0),
            utc(2023, Month::November, 30, 0),
            utc(2023, Month::December, 31, 0),
            utc(2024, Month::January,  31, 0),
            utc(2024, Month::February, 29, 0),
            utc(2024, Month::March,    31, 0),
        ]);
    }

    #[test]
    fn days_keep_their_wall_clock_time() {
        let period = Period::new(london(Month::March, 26, 9), london(Month::March, 30, 9));
        let days: Vec<ZonedDateTime> = period.days().unwrap().collect();

        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| d.hour() == 9));

        let lengths: Vec<Duration> = days.windows(2).map(|w| w[1].instant() - w[0].instant()).collect();
        assert_eq!(lengths, vec![ Duration::hours(24), Duration::hours(23), Duration::hours(24), Duration::hours(24) ]);
    }

    #[test]
    fn the_end_is_included_when_reached_exactly() {
        let period = Period::new(utc(2024, Month::March, 1, 0), utc(2024, Month::March, 1, 12));
        assert_eq!(period.iter(Interval::hours(6)).unwrap().count(), 3);
        assert_eq!(period.iter(Interval::hours(5)).unwrap().count(), 3);
        assert_eq!(period.iter(Interval::hours(13)).unwrap().count(), 1);
    }

    #[test]
    fn empty_periods_give_their_start() {
        let moment = utc(2024, Month::March, 1, 0);
        let period = Period::new(moment.clone(), moment.clone());
        assert_eq!(period.days().unwrap().collect::<Vec<_>>(), vec![ moment ]);
        assert_eq!(period.sub_periods(Interval::days(1)).unwrap().count(), 0);
    }
}


mod splitting {
    use super::*;

    #[test]
    fn into_months() {
        let period = Period::new(utc(2024, Month::January, 15, 0), utc(2024, Month::April, 1, 0));
        let months: Vec<Period> = period.sub_periods(Interval::months(1)).unwrap().collect();

        assert_eq!(months, vec![
            Period::new(utc(2024, Month::January,  15, 0), utc(2024, Month::February, 15, 0)),
            Period::new(utc(2024, Month::February, 15, 0), utc(2024, Month::March,    15, 0)),
            Period::new(utc(2024, Month::March,    15, 0), utc(2024, Month::April,    1,  0)),
        ]);
    }

    #[test]
    fn pieces_cover_the_whole_period() {
        let period = Period::new(london(Month::March, 20, 0), london(Month::April, 3, 0));
        let weeks: Vec<Period> = period.sub_periods(Interval::weeks(1)).unwrap().collect();

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].end(), weeks[1].start());
        assert_eq!(weeks[0].duration() + weeks[1].duration(), period.duration());
        assert_eq!(weeks[1].duration(), Duration::hours(7 * 24 - 1));
    }
}


mod relations {
    use super::*;

    #[test]
    fn overlapping() {
        let march = Period::new(utc(2024, Month::March, 1, 0), utc(2024, Month::April, 1, 0));
        let april = Period::new(utc(2024, Month::April, 1, 0), utc(2024, Month::May, 1, 0));
        let may = Period::new(utc(2024, Month::May, 2, 0), utc(2024, Month::June, 1, 0));

        assert_eq!(march.overlaps(&april), Ok(true));
        assert_eq!(april.overlaps(&march), Ok(true));
        assert_eq!(march.overlaps(&may), Ok(false));
    }

    #[test]
    fn containment_across_zones() {
        let period = Period::new(london(Month::July, 1, 9), london(Month::July, 1, 17));
        assert_eq!(period.contains(&utc(2010, Month::July, 1, 8)), Ok(true));
        assert_eq!(period.contains(&utc(2010, Month::July, 1, 16)), Ok(true));
        assert_eq!(period.contains(&utc(2010, Month::July, 1, 17)), Ok(false));
    }

    #[test]
    fn backwards_periods() {
        let start = utc(2024, Month::May, 1, 0);
        let end = utc(2024, Month::March, 1, 0);
        let backwards = Period::new(start.clone(), end.clone());
        let error = Error::InvalidPeriod { start: start.instant(), end: end.instant() };

        assert!(!backwards.is_ordered());
        assert_eq!(backwards.overlaps(&backwards.normalized()), Err(error.clone()));
        assert_eq!(backwards.sub_periods(Interval::days(1)).err(), Some(error));
        assert!(backwards.duration().is_negative());
        assert_eq!(backwards.diff().months(), -2);
    }

    #[test]
    fn differences() {
        let period = Period::new(utc(2024, Month::January, 31, 0), utc(2024, Month::March, 1, 12));
        let diff = period.diff();

        assert_eq!(diff.months(), 1);
        assert_eq!(diff.days(), 30);
        assert_eq!(period.duration(), Duration::hours(30 * 24 + 12));
    }
}
