use std::env;

use calendrical::{BusinessDayCalculator, CalendarConfig, HolidayCalendar, Interval, TimeZone, WeekendRule, ZonedDateTime};

fn main() {
    let arg = env::args().nth(1).unwrap_or_else(|| "US".to_owned());

    let (calendar, weekend) = if arg.ends_with(".toml") {
        let config = match CalendarConfig::load(&arg) {
            Ok(c) => c,
            Err(e) => { println!("Error: {}", e); return },
        };

        match (config.holiday_calendar(), config.weekend_rule()) {
            (Ok(c), Ok(w)) => (c, w),
            (Err(e), _) | (_, Err(e)) => { println!("Error: {}", e); return },
        }
    }
    else {
        match HolidayCalendar::for_jurisdiction(&arg) {
            Ok(c) => (c, WeekendRule::default()),
            Err(e) => { println!("Error: {}", e); return },
        }
    };

    let now = ZonedDateTime::now(TimeZone::utc()).unwrap();
    let today = now.date();
    let calculator = BusinessDayCalculator::with_weekend(&calendar, weekend);
    let scheduler = calendrical::Scheduler::new(&calculator);

    println!("It is {} ({})", now, calendar.code());
    println!("Today is {}a business day", if calculator.is_business_day(today) { "" } else { "not " });
    println!("The next business day is {}", calculator.next_business_day(today).unwrap());
    println!("Ten business days from now is {}", calculator.add_business_days(today, 10).unwrap());

    println!();
    println!("Upcoming holidays:");
    for holiday in calendar.upcoming(today, 5) {
        let until = now.diff(&now.with_date(holiday.date).unwrap());
        println!("  {}  {:<30} {}", holiday.date, holiday.name, until.for_humans_comparison());
    }

    println!();
    println!("Month-end paydays:");
    for occurrence in scheduler.monthly_end_of_month(&now, 6).unwrap() {
        let note = if occurrence.was_shifted() { " (moved)" } else { "" };
        println!("  {}{}", occurrence.scheduled.date(), note);
    }

    println!();
    println!("Fortnightly meetings:");
    for occurrence in scheduler.recurring(&now, Interval::weeks(2), 6).unwrap() {
        println!("  {}", occurrence.scheduled);
    }
}
