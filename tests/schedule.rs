use std::borrow::Cow;

use calendrical::{StaticTimeZone, FixedTimespanSet, FixedTimespan, TimeZone};
use calendrical::{BusinessDayCalculator, BusinessDayConvention, Duration, Error, HolidayCalendar, Interval, LocalDate, Month, Occurrence, Scheduler, ZonedDateTime};
use calendrical::{DatePiece, TimePiece};


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

fn date(year: i64, month: Month, day: i8) -> LocalDate {
    LocalDate::ymd(year, month, day).unwrap()
}

fn utc(year: i64, month: Month, day: i8, hour: i8) -> ZonedDateTime {
    ZonedDateTime::ymd_hms(year, month, day, hour, 0, 0, &TimeZone::utc()).unwrap()
}

fn scheduled_dates(occurrences: &[Occurrence]) -> Vec<LocalDate> {
    occurrences.iter().map(|o| o.scheduled.date()).collect()
}


mod recurring {
    use super::*;

    #[test]
    fn weekly_over_thanksgiving() {
        let us = HolidayCalendar::for_jurisdiction("US").unwrap();
        let calculator = BusinessDayCalculator::new(&us);
        let scheduler = Scheduler::new(&calculator);

        let occurrences = scheduler.recurring(&utc(2024, Month::November, 14, 9), Interval::weeks(1), 4).unwrap();

        assert_eq!(scheduled_dates(&occurrences), vec![
            date(2024, Month::November, 14),
            date(2024, Month::November, 21),
            date(2024, Month::November, 29),
            date(2024, Month::December, 5),
        ]);
        assert_eq!(occurrences[2].nominal.date(), date(2024, Month::November, 28));
        assert_eq!(occurrences.iter().filter(|o| o.was_shifted()).count(), 1);
        assert_eq!(occurrences[2].scheduled, utc(2024, Month::November, 29, 9));
    }

    #[test]
    fn wall_clock_time_survives_daylight_saving() {
        let gb = HolidayCalendar::for_jurisdiction("GB").unwrap();
        let calculator = BusinessDayCalculator::new(&gb);
        let scheduler = Scheduler::new(&calculator);

        // Saturdays, moved to Mondays, and past Easter Monday in 2010.
        let zone = TimeZone::from_static(&LONDON_2010);
        let anchor = ZonedDateTime::ymd_hms(2010, Month::March, 20, 9, 0, 0, &zone).unwrap();
        let occurrences = scheduler.recurring(&anchor, Interval::weeks(1), 4).unwrap();

        assert_eq!(scheduled_dates(&occurrences), vec![
            date(2010, Month::March, 22),
            date(2010, Month::March, 29),
            date(2010, Month::April, 6),
            date(2010, Month::April, 12),
        ]);
        assert!(occurrences.iter().all(|o| o.scheduled.hour() == 9 && o.scheduled.minute() == 0));
        assert_eq!(occurrences[1].scheduled.instant() - occurrences[0].scheduled.instant(), Duration::hours(7 * 24 - 1));
    }

    #[test]
    fn the_same_schedule_twice() {
        let us = HolidayCalendar::for_jurisdiction("US").unwrap();
        let calculator = BusinessDayCalculator::new(&us);
        let scheduler = Scheduler::new(&calculator);
        let anchor = utc(2024, Month::January, 1, 12);

        let first = scheduler.recurring(&anchor, Interval::days(10), 40).unwrap();
        let second = scheduler.recurring(&anchor, Interval::days(10), 40).unwrap();

        assert_eq!(first, second);
        assert!(first.iter().all(|o| calculator.is_business_day(o.scheduled.date())));
        assert!(first.windows(2).all(|w| w[0].scheduled < w[1].scheduled));
    }

    #[test]
    fn intervals_have_to_move_forwards() {
        let calendar = HolidayCalendar::without_holidays("NONE");
        let calculator = BusinessDayCalculator::new(&calendar);
        let scheduler = Scheduler::new(&calculator);
        let anchor = utc(2024, Month::January, 1, 12);

        let error = Err(Error::InvalidCalendarValue { field: "interval", value: 0 });
        assert_eq!(scheduler.recurring(&anchor, Interval::weeks(-1), 3), error);
        assert_eq!(scheduler.recurring(&anchor, Interval::zero(), 0), error);
    }

    #[test]
    fn endless_schedules_run_out_of_years() {
        let calendar = HolidayCalendar::without_holidays("NONE");
        let calculator = BusinessDayCalculator::new(&calendar);
        let scheduler = Scheduler::new(&calculator);
        let anchor = utc(2024, Month::January, 1, 12);

        let error = Err(Error::InvalidCalendarValue { field: "year", value: 10000 });
        assert_eq!(scheduler.recurring(&anchor, Interval::years(1), usize::MAX), error);
        assert_eq!(scheduler.monthly_end_of_month(&anchor, usize::MAX), error);
    }
}


mod monthly {
    use super::*;

    #[test]
    fn month_ends_in_2024() {
        let us = HolidayCalendar::for_jurisdiction("US").unwrap();
        let calculator = BusinessDayCalculator::new(&us);
        let scheduler = Scheduler::new(&calculator);

        let occurrences = scheduler.monthly_end_of_month(&utc(2024, Month::January, 1, 18), 12).unwrap();

        assert_eq!(scheduled_dates(&occurrences), vec![
            date(2024, Month::January,   31),
            date(2024, Month::February,  29),
            date(2024, Month::March,     29),
            date(2024, Month::April,     30),
            date(2024, Month::May,       31),
            date(2024, Month::June,      28),
            date(2024, Month::July,      31),
            date(2024, Month::August,    30),
            date(2024, Month::September, 30),
            date(2024, Month::October,   31),
            date(2024, Month::November,  29),
            date(2024, Month::December,  31),
        ]);
        assert!(occurrences.iter().all(|o| o.scheduled.hour() == 18));
    }

    #[test]
    fn modified_following_keeps_to_the_month() {
        let us = HolidayCalendar::for_jurisdiction("US").unwrap();
        let calculator = BusinessDayCalculator::new(&us);
        let scheduler = Scheduler::new(&calculator);

        let anchor = utc(2024, Month::November, 30, 9);
        let occurrences = scheduler.generate(&anchor, Interval::months(1), 3, BusinessDayConvention::ModifiedFollowing).unwrap();

        assert_eq!(scheduled_dates(&occurrences), vec![
            date(2024, Month::November, 29),
            date(2024, Month::December, 30),
            date(2025, Month::January,  30),
        ]);
    }

    #[test]
    fn unadjusted_schedules_are_left_alone() {
        let us = HolidayCalendar::for_jurisdiction("US").unwrap();
        let calculator = BusinessDayCalculator::new(&us);
        let scheduler = Scheduler::new(&calculator);

        let occurrences = scheduler.generate(&utc(2024, Month::November, 28, 9), Interval::years(1), 2, BusinessDayConvention::Unadjusted).unwrap();
        assert!(occurrences.iter().all(|o| !o.was_shifted()));
        assert_eq!(occurrences[1].scheduled.year(), 2025);
    }
}
