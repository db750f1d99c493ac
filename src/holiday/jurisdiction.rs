//! The built-in tables of public holidays.

use std::fmt;
use std::str::FromStr;

use crate::cal::datetime::Month::*;
use crate::cal::datetime::Weekday::*;
use crate::error::Error;
use crate::holiday::rule::{Holiday, HolidayRule, Observance};

use self::Observance::{Actual, FollowingMonday, NearestWeekday};


/// A jurisdiction with a built-in holiday table.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Jurisdiction {

    /// The United States, with its federal holidays.
    US,

    /// The United Kingdom, with the bank holidays of England and Wales.
    GB,

    /// Canada, with its federal statutory holidays.
    CA,

    /// Germany, with its nationwide public holidays.
    DE,

    /// France, with its public holidays.
    FR,
}

static JURISDICTIONS: &[Jurisdiction] = &[
    Jurisdiction::US, Jurisdiction::GB, Jurisdiction::CA, Jurisdiction::DE, Jurisdiction::FR,
];

/// Lists every jurisdiction with a built-in holiday table.
pub fn jurisdictions() -> &'static [Jurisdiction] {
    JURISDICTIONS
}

impl Jurisdiction {

    /// Looks up a jurisdiction by its ISO 3166-1 code, ignoring case.
    /// `UK` is accepted as another name for `GB`.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code.trim().to_ascii_uppercase().as_str() {
            "US"         => Ok(Jurisdiction::US),
            "GB" | "UK"  => Ok(Jurisdiction::GB),
            "CA"         => Ok(Jurisdiction::CA),
            "DE"         => Ok(Jurisdiction::DE),
            "FR"         => Ok(Jurisdiction::FR),
            _            => Err(Error::UnknownJurisdiction(code.to_owned())),
        }
    }

    /// This jurisdiction’s ISO 3166-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Jurisdiction::US => "US",
            Jurisdiction::GB => "GB",
            Jurisdiction::CA => "CA",
            Jurisdiction::DE => "DE",
            Jurisdiction::FR => "FR",
        }
    }

    /// The holidays observed in this jurisdiction.
    pub fn holidays(self) -> &'static [Holiday] {
        match self {
            Jurisdiction::US => US,
            Jurisdiction::GB => GB,
            Jurisdiction::CA => CA,
            Jurisdiction::DE => DE,
            Jurisdiction::FR => FR,
        }
    }
}

impl FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}


static US: &[Holiday] = &[
    Holiday::fixed_static("New Year's Day", January, 1, NearestWeekday),
    Holiday::rule_static("Martin Luther King Jr. Day", HolidayRule::NthWeekday { month: January, weekday: Monday, nth: 3 }),
    Holiday::rule_static("Washington's Birthday", HolidayRule::NthWeekday { month: February, weekday: Monday, nth: 3 }),
    Holiday::rule_static("Memorial Day", HolidayRule::LastWeekday { month: May, weekday: Monday }),
    Holiday::fixed_static("Juneteenth", June, 19, NearestWeekday),
    Holiday::fixed_static("Independence Day", July, 4, NearestWeekday),
    Holiday::rule_static("Labor Day", HolidayRule::NthWeekday { month: September, weekday: Monday, nth: 1 }),
    Holiday::rule_static("Columbus Day", HolidayRule::NthWeekday { month: October, weekday: Monday, nth: 2 }),
    Holiday::fixed_static("Veterans Day", November, 11, NearestWeekday),
    Holiday::rule_static("Thanksgiving Day", HolidayRule::NthWeekday { month: November, weekday: Thursday, nth: 4 }),
    Holiday::fixed_static("Christmas Day", December, 25, NearestWeekday),
];

static GB: &[Holiday] = &[
    Holiday::fixed_static("New Year's Day", January, 1, FollowingMonday),
    Holiday::rule_static("Good Friday", HolidayRule::Easter { offset: -2 }),
    Holiday::rule_static("Easter Monday", HolidayRule::Easter { offset: 1 }),
    Holiday::rule_static("Early May Bank Holiday", HolidayRule::NthWeekday { month: May, weekday: Monday, nth: 1 }),
    Holiday::rule_static("Spring Bank Holiday", HolidayRule::LastWeekday { month: May, weekday: Monday }),
    Holiday::rule_static("Summer Bank Holiday", HolidayRule::LastWeekday { month: August, weekday: Monday }),
    Holiday::fixed_static("Christmas Day", December, 25, FollowingMonday),
    Holiday::fixed_static("Boxing Day", December, 26, FollowingMonday),
];

static CA: &[Holiday] = &[
    Holiday::fixed_static("New Year's Day", January, 1, FollowingMonday),
    Holiday::rule_static("Good Friday", HolidayRule::Easter { offset: -2 }),
    Holiday::rule_static("Victoria Day", HolidayRule::WeekdayOnOrBefore { month: May, day: 24, weekday: Monday }),
    Holiday::fixed_static("Canada Day", July, 1, FollowingMonday),
    Holiday::rule_static("Labour Day", HolidayRule::NthWeekday { month: September, weekday: Monday, nth: 1 }),
    Holiday::fixed_static("National Day for Truth and Reconciliation", September, 30, FollowingMonday),
    Holiday::rule_static("Thanksgiving", HolidayRule::NthWeekday { month: October, weekday: Monday, nth: 2 }),
    Holiday::fixed_static("Remembrance Day", November, 11, FollowingMonday),
    Holiday::fixed_static("Christmas Day", December, 25, FollowingMonday),
    Holiday::fixed_static("Boxing Day", December, 26, FollowingMonday),
];

static DE: &[Holiday] = &[
    Holiday::fixed_static("New Year's Day", January, 1, Actual),
    Holiday::rule_static("Good Friday", HolidayRule::Easter { offset: -2 }),
    Holiday::rule_static("Easter Monday", HolidayRule::Easter { offset: 1 }),
    Holiday::fixed_static("Labour Day", May, 1, Actual),
    Holiday::rule_static("Ascension Day", HolidayRule::Easter { offset: 39 }),
    Holiday::rule_static("Whit Monday", HolidayRule::Easter { offset: 50 }),
    Holiday::fixed_static("German Unity Day", October, 3, Actual),
    Holiday::fixed_static("Christmas Day", December, 25, Actual),
    Holiday::fixed_static("St. Stephen's Day", December, 26, Actual),
];

static FR: &[Holiday] = &[
    Holiday::fixed_static("New Year's Day", January, 1, Actual),
    Holiday::rule_static("Easter Monday", HolidayRule::Easter { offset: 1 }),
    Holiday::fixed_static("Labour Day", May, 1, Actual),
    Holiday::fixed_static("Victory in Europe Day", May, 8, Actual),
    Holiday::rule_static("Ascension Day", HolidayRule::Easter { offset: 39 }),
    Holiday::rule_static("Whit Monday", HolidayRule::Easter { offset: 50 }),
    Holiday::fixed_static("Bastille Day", July, 14, Actual),
    Holiday::fixed_static("Assumption of Mary", August, 15, Actual),
    Holiday::fixed_static("All Saints' Day", November, 1, Actual),
    Holiday::fixed_static("Armistice Day", November, 11, Actual),
    Holiday::fixed_static("Christmas Day", December, 25, Actual),
];


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_ignore_case() {
        assert_eq!(Jurisdiction::from_code("us"), Ok(Jurisdiction::US));
        assert_eq!(Jurisdiction::from_code("UK"), Ok(Jurisdiction::GB));
        assert_eq!("XX".parse::<Jurisdiction>(), Err(Error::UnknownJurisdiction("XX".into())));
    }

    #[test]
    fn every_table_is_valid() {
        for jurisdiction in jurisdictions() {
            for holiday in jurisdiction.holidays() {
                assert_eq!(holiday.rule.validate(), Ok(()), "{} in {}", holiday.name, jurisdiction);
            }
        }
    }
}
