//! Date code generation, one function per era.
//!
//! Each generator validates its inputs against the era's documented ranges and returns the
//! stamp as a `String`. The `*_for_date` variants take a calendar date instead of a
//! pre-computed month or week.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::{error::Error, types::FactoryLocationCode};

/// Years whose January 1 and January 3 were historically stamped with the previous year's
/// digits.
const PREVIOUS_YEAR_DIGIT_YEARS: [i32; 2] = [2016, 2017];
const PREVIOUS_YEAR_DIGIT_DAYS: [u32; 2] = [1, 3];

/// Last year whose two-digit form decodes back to the same year.
pub(crate) const LAST_2007_ERA_YEAR: u32 = 2099;

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), Error> {
    if value < min || value > max {
        debug!(target: "datecode::generator", field, value, min, max, "value out of range");
        return Err(Error::range(field, value));
    }
    Ok(())
}

fn location(code: &str) -> Result<FactoryLocationCode, Error> {
    FactoryLocationCode::parse(code).inspect_err(|e| {
        debug!(target: "datecode::generator", code, error = %e, "rejected location code");
    })
}

/// Interleaves two numbers below 100 as `A1 B1 A2 B2`.
fn interleave(a: u32, b: u32) -> String {
    format!("{}{}{}{}", a / 10, b / 10, a % 10, b % 10)
}

/// Week ceiling for the numeric 2007+ generator: 53 every fifth year, 52 otherwise.
pub fn week_ceiling(year: u32) -> u32 {
    if year % 5 == 0 { 53 } else { 52 }
}

/// Generates an early-1980s code: year digits followed by the month, no location.
///
/// ```rust
/// assert_eq!(datecode::generate_early_1980_code(1985, 3).unwrap(), "853");
/// assert_eq!(datecode::generate_early_1980_code(1985, 12).unwrap(), "8512");
/// ```
pub fn generate_early_1980_code(year: u32, month: u32) -> Result<String, Error> {
    check_range("year", year, 1980, 1989)?;
    check_range("month", month, 1, 12)?;
    Ok(format!("{}{}", year % 100, month))
}

/// Generates a late-1980s code: location, year digits, then the month.
///
/// ```rust
/// assert_eq!(datecode::generate_late_1980_code("sd", 1987, 9).unwrap(), "SD879");
/// ```
pub fn generate_late_1980_code(location_code: &str, year: u32, month: u32) -> Result<String, Error> {
    check_range("year", year, 1980, 1989)?;
    check_range("month", month, 1, 12)?;
    let location = location(location_code)?;
    Ok(format!("{}{}{}", location, year % 100, month))
}

/// Generates a 1990–2006 code: location followed by month and year digits interleaved.
///
/// ```rust
/// assert_eq!(datecode::generate_1990_code("SD", 1997, 3).unwrap(), "SD0937");
/// ```
pub fn generate_1990_code(location_code: &str, year: u32, month: u32) -> Result<String, Error> {
    check_range("year", year, 1990, 2006)?;
    check_range("month", month, 1, 12)?;
    let location = location(location_code)?;
    Ok(format!("{}{}", location, interleave(month, year % 100)))
}

/// Generates a 2007+ code: location followed by week and year digits interleaved.
///
/// Week 53 is only accepted in years divisible by five.
pub fn generate_2007_code(location_code: &str, year: u32, week: u32) -> Result<String, Error> {
    check_range("year", year, 2007, LAST_2007_ERA_YEAR)?;
    check_range("week", week, 1, week_ceiling(year))?;
    let location = location(location_code)?;
    Ok(format!("{}{}", location, interleave(week, year % 100)))
}

fn date_year(date: &NaiveDate) -> Result<u32, Error> {
    u32::try_from(date.year()).map_err(|_| Error::range("year", 0))
}

pub fn generate_early_1980_code_for_date(date: NaiveDate) -> Result<String, Error> {
    generate_early_1980_code(date_year(&date)?, date.month())
}

pub fn generate_late_1980_code_for_date(location_code: &str, date: NaiveDate) -> Result<String, Error> {
    generate_late_1980_code(location_code, date_year(&date)?, date.month())
}

pub fn generate_1990_code_for_date(location_code: &str, date: NaiveDate) -> Result<String, Error> {
    generate_1990_code(location_code, date_year(&date)?, date.month())
}

/// Generates a 2007+ code from a calendar date using its ISO-8601 week number.
///
/// A late-December date that ISO places in week 1 of the next year is counted as week 53 of
/// its own year. The week ceiling here follows the calendar: 53 in leap years, 52 otherwise,
/// so such dates only encode in leap years. January 1 and
/// January 3 of 2016 and 2017 are encoded with the previous year's digits, matching stamps
/// found on real goods.
///
/// ```rust
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
/// assert_eq!(datecode::generate_2007_code_for_date("SD", date).unwrap(), "SD5135");
/// ```
pub fn generate_2007_code_for_date(location_code: &str, date: NaiveDate) -> Result<String, Error> {
    let year = date_year(&date)?;
    check_range("year", year, 2007, LAST_2007_ERA_YEAR)?;

    // Days at the end of December that ISO counts into week 1 of the next year stay in the
    // last week of their own year.
    let iso_week = date.iso_week();
    let week = if iso_week.year() > date.year() { 53 } else { iso_week.week() };
    let leap_year = NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some();
    let ceiling = if leap_year { 53 } else { 52 };
    check_range("week", week, 1, ceiling)?;

    let location = location(location_code)?;

    let encoded_year = if date.month() == 1
        && PREVIOUS_YEAR_DIGIT_DAYS.contains(&date.day())
        && PREVIOUS_YEAR_DIGIT_YEARS.contains(&date.year())
    {
        debug!(target: "datecode::generator", %date, "encoding previous year digits");
        year - 1
    } else {
        year
    };

    Ok(format!("{}{}", location, interleave(week, encoded_year % 100)))
}
