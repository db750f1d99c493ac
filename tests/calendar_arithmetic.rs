use std::borrow::Cow;

use calendrical::{StaticTimeZone, FixedTimespanSet, FixedTimespan, TimeZone};
use calendrical::{Duration, Error, Interval, LocalDate, LocalTime, Month, ZonedDateTime, DatePiece, TimePiece};


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

fn utc(year: i64, month: Month, day: i8) -> ZonedDateTime {
    ZonedDateTime::ymd_hms(year, month, day, 0, 0, 0, &TimeZone::utc()).unwrap()
}


mod daylight_saving {
    use super::*;

    #[test]
    fn a_day_when_the_clocks_go_forward() {
        let before = london(Month::March, 27, 12);
        let after = before.add_interval(&Interval::days(1)).unwrap();

        assert_eq!(after, london(Month::March, 28, 12));
        assert_eq!(after.instant() - before.instant(), Duration::hours(23));
    }

    #[test]
    fn a_day_when_the_clocks_go_back() {
        let before = london(Month::October, 30, 12);
        let after = before.add_interval(&Interval::days(1)).unwrap();

        assert_eq!(after.hour(), 12);
        assert_eq!(after.instant() - before.instant(), Duration::hours(25));
    }

    #[test]
    fn hours_are_exact() {
        let before = london(Month::March, 27, 12);
        let after = before.add_interval(&Interval::hours(24)).unwrap();

        assert_eq!(after.day(), 28);
        assert_eq!(after.hour(), 13);
    }

    #[test]
    fn durations_are_exact() {
        let before = london(Month::October, 30, 12);
        let after = before.add_duration(Duration::days(1)).unwrap();

        assert_eq!(after.day(), 31);
        assert_eq!(after.hour(), 11);
    }

    #[test]
    fn start_of_day() {
        let midday = london(Month::June, 1, 12);
        let start = midday.start_of_day().unwrap();

        assert_eq!(start.time(), LocalTime::midnight());
        assert_eq!(midday.instant() - start.instant(), Duration::hours(12));
    }
}


mod months {
    use super::*;

    #[test]
    fn clamp_to_the_end_of_the_month() {
        let date = utc(2024, Month::January, 31).add_interval(&Interval::months(1)).unwrap();
        assert_eq!(date.date(), LocalDate::ymd(2024, Month::February, 29).unwrap());
    }

    #[test]
    fn months_before_days() {
        let interval = Interval { months: 1, days: 1, ..Interval::zero() };
        let date = utc(2024, Month::January, 31).add_interval(&interval).unwrap();
        assert_eq!(date.date(), LocalDate::ymd(2024, Month::March, 1).unwrap());
    }

    #[test]
    fn leap_years() {
        let date = utc(2024, Month::February, 29).add_calendar_units(1, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(date.date(), LocalDate::ymd(2025, Month::February, 28).unwrap());
    }

    #[test]
    fn subtraction() {
        let date = utc(2024, Month::March, 31).sub_interval(&Interval::months(1)).unwrap();
        assert_eq!(date.date(), LocalDate::ymd(2024, Month::February, 29).unwrap());
    }

    #[test]
    fn weeks() {
        let date = utc(2024, Month::February, 26).add_interval(&Interval::weeks(1)).unwrap();
        assert_eq!(date.date(), LocalDate::ymd(2024, Month::March, 4).unwrap());
    }
}


mod limits {
    use super::*;

    #[test]
    fn leaving_the_supported_years() {
        let date = utc(9999, Month::December, 1);
        assert_eq!(date.add_interval(&Interval::months(1)).err(), Some(Error::InvalidCalendarValue { field: "year", value: 10000 }));
    }

    #[test]
    fn enormous_intervals() {
        let date = utc(2024, Month::January, 1);
        assert!(date.add_interval(&Interval::years(i64::MAX)).is_err());
        assert!(date.add_interval(&Interval::seconds(i64::MIN)).is_err());
    }

    #[test]
    fn stepping_dates_by_enormous_amounts() {
        let date = LocalDate::ymd(2024, Month::March, 1).unwrap();
        assert_eq!(date.add_days(i64::MAX), Err(Error::InvalidCalendarValue { field: "day", value: i64::MAX }));
        assert_eq!(date.add_days(i64::MIN), Err(Error::InvalidCalendarValue { field: "year", value: -10000 }));
        assert_eq!(date.add_months(i64::MAX), Err(Error::InvalidCalendarValue { field: "month", value: i64::MAX }));
        assert!(date.add_months(i64::MIN).is_err());
    }

    #[test]
    fn stepping_dates_off_the_end() {
        let date = LocalDate::ymd(9999, Month::December, 31).unwrap();
        assert_eq!(date.add_months(1), Err(Error::InvalidCalendarValue { field: "year", value: 10000 }));
        assert_eq!(date.add_days(-7).unwrap(), LocalDate::ymd(9999, Month::December, 24).unwrap());
    }
}


mod builder {
    use super::*;

    #[test]
    fn defaults_to_the_epoch() {
        let date = ZonedDateTime::builder().build().unwrap();
        assert_eq!(date.instant().seconds(), 0);
    }

    #[test]
    fn replacing_fields() {
        let date = london(Month::June, 1, 12);
        let changed = date.with().day(15).hour(9).build().unwrap();

        assert_eq!(changed, london(Month::June, 15, 9));
    }

    #[test]
    fn midnight_is_not_24_oclock() {
        let result = ZonedDateTime::builder().hour(24).build();
        assert_eq!(result, Err(Error::InvalidCalendarValue { field: "hour", value: 24 }));
    }
}
