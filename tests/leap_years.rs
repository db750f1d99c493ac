use calendrical::Year;


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(!Year(1900).is_leap_year());
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(!Year(2038).is_leap_year());
}

#[test]
fn year_before_zero() {
    assert!(Year(-4).is_leap_year());
    assert!(!Year(-100).is_leap_year());
}

#[test]
fn days_in_year() {
    assert_eq!(Year(2023).days_in_year(), 365);
    assert_eq!(Year(2024).days_in_year(), 366);
}

#[test]
fn long_years() {
    let long: Vec<i64> = (2000 ..= 2030).filter(|y| Year(*y).is_long_year()).collect();
    assert_eq!(long, vec![ 2004, 2009, 2015, 2020, 2026 ]);
    assert_eq!(Year(2020).iso_weeks(), 53);
    assert_eq!(Year(2021).iso_weeks(), 52);
}
