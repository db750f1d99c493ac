use std::borrow::Cow;
use std::sync::Arc;

use calendrical::{StaticTimeZone, FixedTimespanSet, FixedTimespan, TimeZone, ZoneResolver, ZoneOffset};
use calendrical::{Error, Instant, LocalDateTime, LocalDate, LocalTime, Month, ZonedDateTime, DatePiece, TimePiece};


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

fn local(month: Month, day: i8, hour: i8, minute: i8) -> LocalDateTime {
    LocalDateTime::new(
        LocalDate::ymd(2010, month, day).unwrap(),
        LocalTime::hm(hour, minute).unwrap(),
    )
}


#[test]
fn construction() {
    let zone = TimeZone::from_static(&LONDON_2010);
    let wall = local(Month::June, 9, 15, 15);

    let zoned = zone.convert_local(wall).unwrap().precise().unwrap();
    assert_eq!(zoned.year(), 2010);
    assert_eq!(zoned.hour(), 15);
    assert_eq!(zoned.offset(), ZoneOffset::with_dst(3600, true).unwrap());
    assert_eq!(zoned.instant(), local(Month::June, 9, 14, 15).to_instant());
}

#[test]
fn abbreviations() {
    assert_eq!(LONDON_2010.abbreviation_at(Instant::at(1269737999)), "GMT");
    assert_eq!(LONDON_2010.abbreviation_at(Instant::at(1269738000)), "BST");
    assert!(!LONDON_2010.is_fixed());
}

#[test]
fn ambiguity() {
    let zone = TimeZone::from_static(&LONDON_2010);
    let converted = zone.convert_local(local(Month::October, 31, 1, 15)).unwrap();
    assert!(converted.is_ambiguous(), "Local time {:?} should be ambiguous", converted);

    let chosen = converted.compatible();
    assert_eq!(chosen.instant(), Instant::at(1288484100));
    assert!(chosen.offset().is_dst());
}

#[test]
fn impossible() {
    let zone = TimeZone::from_static(&LONDON_2010);
    let converted = zone.convert_local(local(Month::March, 28, 1, 15)).unwrap();
    assert!(converted.is_impossible(), "Local time {:?} should be impossible", converted);

    let shifted = converted.compatible();
    assert_eq!(shifted.instant(), Instant::at(1269738900));
    assert_eq!((shifted.hour(), shifted.minute()), (2, 15));
}

#[test]
fn the_same_instant_elsewhere() {
    let london = ZonedDateTime::from_local(local(Month::July, 1, 12, 0), TimeZone::from_static(&LONDON_2010)).unwrap();
    let utc = london.with_zone(TimeZone::utc()).unwrap();

    assert_eq!(utc.hour(), 11);
    assert_eq!(utc, london);
    assert_eq!(utc.to_string(), "2010-07-01T11:00:00+00:00[UTC]");
    assert_eq!(london.to_string(), "2010-07-01T12:00:00+01:00[Test/London]");
}

#[test]
fn fixed_offsets() {
    let zone = TimeZone::fixed(ZoneOffset::of_hours_and_minutes(-5, -30).unwrap());
    assert_eq!(zone.id(), "-05:30");

    let zoned = ZonedDateTime::from_instant(Instant::at(0), zone).unwrap();
    assert_eq!(zoned.date(), LocalDate::ymd(1969, Month::December, 31).unwrap());
    assert_eq!((zoned.hour(), zoned.minute()), (18, 30));
}


#[derive(Debug)]
struct Nowhere;

impl ZoneResolver for Nowhere {
    fn resolve(&self, _instant: Instant, zone_id: &str) -> Result<ZoneOffset, Error> {
        Err(Error::UnknownZone(zone_id.to_owned()))
    }
}

#[test]
fn resolver_failures_are_passed_on() {
    let zone = TimeZone::new("Nowhere/Special", Arc::new(Nowhere));
    assert_eq!(ZonedDateTime::from_instant(Instant::at(0), zone.clone()), Err(Error::UnknownZone("Nowhere/Special".into())));
    assert!(zone.convert_local(local(Month::June, 1, 0, 0)).is_err());
}

#[test]
fn static_zones_check_their_name() {
    let zone = TimeZone::new("Somewhere/Else", Arc::new(&LONDON_2010));
    assert_eq!(zone.offset_at(Instant::at(0)), Err(Error::UnknownZone("Somewhere/Else".into())));
}
