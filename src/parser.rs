//! Date code parsing, one function per era.
//!
//! Every parser checks the shape of the code first ([`Error::Format`]), then resolves the
//! factory location ([`Error::UnknownLocation`]), then the recovered numbers
//! ([`Error::Range`]). Nothing outside an era's grammar is coerced into a date.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    error::Error,
    generator::week_ceiling,
    options::ParseOptions,
    types::{Country, DecodedDateCode, FactoryLocationCode, Period},
};

lazy_static! {
    static ref EARLY_1980_REGEX: Regex = Regex::new(r"^8[0-9](1[0-2]|[1-9])$").unwrap();
}

/// 2007+ codes whose digits decode but that are known never to have been stamped.
const REJECTED_2007_CODES: [&str; 3] = ["RI5137", "RI5138", "RI5139"];

fn reject(code: &str, error: Error) -> Error {
    debug!(target: "datecode::parser", code, error = %error, "rejected date code");
    error
}

/// Empty and non-ASCII input is turned away before any slicing.
fn check_input(code: &str) -> Result<(), Error> {
    if code.is_empty() {
        return Err(Error::MissingInput("date code"));
    }
    if !code.is_ascii() {
        return Err(reject(code, Error::format("date code must be ASCII")));
    }
    Ok(())
}

fn check_length(code: &str) -> Result<(), Error> {
    if code.len() != 5 && code.len() != 6 {
        return Err(reject(
            code,
            Error::format(format!("expected 5 or 6 characters, got {}", code.len())),
        ));
    }
    Ok(())
}

fn parse_digits(code: &str, digits: &str) -> Result<u32, Error> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject(
            code,
            Error::format(format!("expected digits, got `{}`", digits)),
        ));
    }
    digits
        .parse()
        .map_err(|_| reject(code, Error::format(format!("expected digits, got `{}`", digits))))
}

fn resolve_location(
    code: &str,
    location: &str,
) -> Result<(FactoryLocationCode, BTreeSet<Country>), Error> {
    let location = FactoryLocationCode::parse(location).map_err(|e| reject(code, e))?;
    let countries = location.countries();
    if countries.is_empty() {
        return Err(reject(code, Error::UnknownLocation(location.to_string())));
    }
    Ok((location, countries))
}

fn check_range(code: &str, field: &'static str, value: u32, min: u32, max: u32) -> Result<(), Error> {
    if value < min || value > max {
        return Err(reject(code, Error::range(field, value)));
    }
    Ok(())
}

/// Splits a four-digit interleaved group `A1 B1 A2 B2` back into `(A, B)`.
///
/// A three-digit group reads as if it had a leading zero.
fn deinterleave(number: u32) -> (u32, u32) {
    let (d1, d2, d3, d4) = (number / 1000, number / 100 % 10, number / 10 % 10, number % 10);
    (d1 * 10 + d3, d2 * 10 + d4)
}

/// Parses an early-1980s code such as `853` or `8512`.
///
/// ```rust
/// let decoded = datecode::parse_early_1980_code("8512").unwrap();
/// assert_eq!((decoded.year, decoded.month()), (1985, Some(12)));
/// assert!(decoded.location.is_none());
/// ```
pub fn parse_early_1980_code(code: &str) -> Result<DecodedDateCode, Error> {
    check_input(code)?;
    if !EARLY_1980_REGEX.is_match(code) {
        return Err(reject(
            code,
            Error::format(format!("`{}` is not an early-1980s date code", code)),
        ));
    }
    let value = parse_digits(code, code)?;

    let (year, month) = if value < 1000 {
        (1900 + value / 10, value % 10)
    } else {
        (1900 + value / 100, value % 100)
    };

    Ok(DecodedDateCode {
        location: None,
        countries: BTreeSet::new(),
        year,
        period: Period::Month(month),
    })
}

pub fn parse_late_1980_code(code: &str) -> Result<DecodedDateCode, Error> {
    parse_late_1980_code_with(code, &ParseOptions::default())
}

/// Parses a late-1980s code.
///
/// Both the historical stamp layout with a trailing location (`879SD`) and the layout produced
/// by [`crate::generate_late_1980_code`] with a leading location (`SD879`) are accepted.
pub fn parse_late_1980_code_with(
    code: &str,
    options: &ParseOptions,
) -> Result<DecodedDateCode, Error> {
    check_input(code)?;
    check_length(code)?;

    let bytes = code.as_bytes();
    let (location, digits) = if bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphabetic() {
        (&code[..2], &code[2..])
    } else {
        let split = code.len() - 2;
        (&code[split..], &code[..split])
    };
    let number = parse_digits(code, digits)?;
    let (location, countries) = resolve_location(code, location)?;

    let (year, month) = if code.len() == 5 {
        if number <= 800 || number >= 900 {
            return Err(reject(code, Error::range("date number", number)));
        }
        (1900 + number / 10, number % 10)
    } else {
        if number % 100 > 12 {
            return Err(reject(code, Error::range("month", number % 100)));
        }
        if number <= 800 || number >= 9000 {
            return Err(reject(code, Error::range("date number", number)));
        }
        (1900 + number / 100, number % 100)
    };

    if options.strict {
        check_range(code, "month", month, 1, 12)?;
        check_range(code, "year", year, 1980, 1989)?;
    }

    Ok(DecodedDateCode {
        location: Some(location),
        countries,
        year,
        period: Period::Month(month),
    })
}

/// Parses a 1990–2006 code such as `SD0937`.
///
/// Two-digit years below 90 belong to the 2000s. Years 07 through 89 are never valid.
///
/// ```rust
/// let decoded = datecode::parse_1990_code("SD0937").unwrap();
/// assert_eq!((decoded.year, decoded.month()), (1997, Some(3)));
/// ```
pub fn parse_1990_code(code: &str) -> Result<DecodedDateCode, Error> {
    check_input(code)?;
    check_length(code)?;

    let number = parse_digits(code, &code[2..])?;
    let (location, countries) = resolve_location(code, &code[..2])?;

    let (month, short_year) = deinterleave(number);
    check_range(code, "month", month, 1, 12)?;
    if short_year > 6 && short_year < 90 {
        return Err(reject(code, Error::range("year", short_year)));
    }
    let year = if short_year < 90 {
        2000 + short_year
    } else {
        1900 + short_year
    };

    Ok(DecodedDateCode {
        location: Some(location),
        countries,
        year,
        period: Period::Month(month),
    })
}

pub fn parse_2007_code(code: &str) -> Result<DecodedDateCode, Error> {
    parse_2007_code_with(code, &ParseOptions::default())
}

/// Parses a 2007+ code such as `SD0189`.
///
/// `RI5137`, `RI5138` and `RI5139` are always rejected.
pub fn parse_2007_code_with(code: &str, options: &ParseOptions) -> Result<DecodedDateCode, Error> {
    check_input(code)?;
    check_length(code)?;

    let number = parse_digits(code, &code[2..])?;
    let normalized = code.to_ascii_uppercase();
    if REJECTED_2007_CODES.contains(&normalized.as_str()) {
        return Err(reject(
            code,
            Error::format(format!("`{}` is a known invalid date code", normalized)),
        ));
    }
    let (location, countries) = resolve_location(code, &code[..2])?;

    let (week, short_year) = deinterleave(number);
    check_range(code, "week", week, 1, 53)?;
    if short_year < 7 {
        return Err(reject(code, Error::range("year", short_year)));
    }
    let year = 2000 + short_year;

    if options.strict {
        check_range(code, "week", week, 1, week_ceiling(year))?;
    }

    Ok(DecodedDateCode {
        location: Some(location),
        countries,
        year,
        period: Period::Week(week),
    })
}
