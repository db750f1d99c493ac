//! Holiday calendars: named holidays per jurisdiction, resolved to dates.

use std::borrow::Cow;

use tracing::debug;

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, Month, MAX_YEAR};
use crate::error::Error;

pub mod jurisdiction;
pub mod rule;

use self::jurisdiction::Jurisdiction;
use self::rule::{Holiday, HolidayRule};


/// A holiday resolved to the date it’s observed on in a particular year.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct ObservedHoliday {

    /// The holiday’s name.
    pub name: Cow<'static, str>,

    /// The date the holiday is observed on.
    pub date: LocalDate,

    /// The date the holiday actually falls on, which differs from `date`
    /// when it was moved off a weekend or off another holiday.
    pub nominal: LocalDate,
}

impl ObservedHoliday {

    /// Whether this holiday is observed on a different day to the one it
    /// actually falls on.
    pub fn is_substitute(&self) -> bool {
        self.date != self.nominal
    }
}


/// A **holiday calendar** holds the holidays of one jurisdiction, along
/// with any extra holidays added to this particular calendar.
///
/// The built-in holiday tables are shared and never change: adding a
/// holiday only affects the calendar it was added to.
#[derive(PartialEq, Debug, Clone)]
pub struct HolidayCalendar {
    code: Cow<'static, str>,
    base: &'static [Holiday],
    extra: Vec<Holiday>,
}

impl HolidayCalendar {

    /// Returns the calendar for the jurisdiction with the given code, such
    /// as `US` or `GB`.
    ///
    /// ```rust
    /// use calendrical::{HolidayCalendar, Error};
    ///
    /// assert!(HolidayCalendar::for_jurisdiction("us").is_ok());
    /// assert_eq!(HolidayCalendar::for_jurisdiction("XX"), Err(Error::UnknownJurisdiction("XX".into())));
    /// ```
    pub fn for_jurisdiction(code: &str) -> Result<Self, Error> {
        Ok(Self::from(Jurisdiction::from_code(code)?))
    }

    /// Returns a calendar with no holidays of its own, to which holidays
    /// can be added.
    pub fn without_holidays(name: impl Into<Cow<'static, str>>) -> Self {
        Self { code: name.into(), base: &[], extra: Vec::new() }
    }

    /// The code of this calendar’s jurisdiction.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Every holiday in this calendar, built-in ones first.
    pub fn rules(&self) -> impl Iterator<Item = &Holiday> {
        self.base.iter().chain(self.extra.iter())
    }

    /// Adds a holiday to this calendar only.
    pub fn add_holiday(&mut self, holiday: Holiday) -> Result<(), Error> {
        holiday.rule.validate()?;
        debug!(calendar = %self.code, holiday = %holiday.name, rule = ?holiday.rule, "Adding holiday");
        self.extra.push(holiday);
        Ok(())
    }

    /// Returns every holiday observed in the given year, in date order.
    ///
    /// Holidays that fall on a weekend can be observed on a nearby
    /// weekday, depending on their rule. When that weekday already has a
    /// holiday, they move on to the next free weekday instead. A holiday
    /// can be observed in a different year to the one it falls in, such as
    /// a Saturday New Year’s Day observed on the Friday before, and is
    /// listed in the year it’s observed.
    pub fn holidays(&self, year: i64) -> Vec<ObservedHoliday> {
        let mut placed = Vec::new();
        let mut moved = Vec::new();

        for nominal_year in year - 1 ..= year + 1 {
            for holiday in self.rules() {
                let Some(nominal) = holiday.rule.date_in(nominal_year) else { continue };
                let Ok(observed) = holiday.rule.observance().observe(nominal) else { continue };

                let observed = ObservedHoliday { name: holiday.name.clone(), date: observed, nominal };
                if observed.is_substitute() { moved.push(observed) }
                                       else { placed.push(observed) }
            }
        }

        for mut holiday in moved {
            while placed.iter().any(|p: &ObservedHoliday| p.date == holiday.date) {
                match next_weekday(holiday.date) {
                    Ok(date) => holiday.date = date,
                    Err(_)   => break,
                }
            }

            debug!(calendar = %self.code, holiday = %holiday.name, nominal = %holiday.nominal, observed = %holiday.date, "Holiday moved");
            placed.push(holiday);
        }

        placed.retain(|h| h.date.year() == year);
        placed.sort_by_key(|h| h.date);
        placed
    }

    /// Returns the holidays observed in the given month.
    pub fn holidays_in_month(&self, year: i64, month: Month) -> Vec<ObservedHoliday> {
        self.holidays(year)
            .into_iter()
            .filter(|h| h.date.month() == month)
            .collect()
    }

    /// Returns the next `count` holidays observed strictly after the given
    /// date, in date order, looking as many years ahead as necessary.
    pub fn upcoming(&self, from: LocalDate, count: usize) -> Vec<ObservedHoliday> {
        let recurring = self.rules().any(|h| !matches!(h.rule, HolidayRule::OnDate { .. }));
        let last_year = if recurring {
            MAX_YEAR
        }
        else {
            self.rules()
                .filter_map(|h| match h.rule { HolidayRule::OnDate { year, .. } => Some(year + 1), _ => None })
                .max()
                .unwrap_or(from.year())
                .min(MAX_YEAR)
        };

        let mut found = Vec::new();
        for year in from.year() ..= last_year {
            if found.len() >= count {
                break;
            }

            found.extend(self.holidays(year).into_iter().filter(|h| h.date > from));
        }

        found.truncate(count);
        found
    }

    /// Returns the holiday observed on the given date, if any.
    pub fn holiday_on(&self, date: LocalDate) -> Option<ObservedHoliday> {
        self.holidays(date.year())
            .into_iter()
            .find(|h| h.date == date)
    }

    /// Whether a holiday is observed on the given date.
    pub fn is_holiday(&self, date: LocalDate) -> bool {
        self.holiday_on(date).is_some()
    }
}

impl From<Jurisdiction> for HolidayCalendar {
    fn from(jurisdiction: Jurisdiction) -> Self {
        Self {
            code: Cow::Borrowed(jurisdiction.code()),
            base: jurisdiction.holidays(),
            extra: Vec::new(),
        }
    }
}

/// The weekday after the given date, skipping Saturdays and Sundays.
fn next_weekday(date: LocalDate) -> Result<LocalDate, Error> {
    let mut date = date.succ()?;
    while date.is_saturday_or_sunday() {
        date = date.succ()?;
    }
    Ok(date)
}
