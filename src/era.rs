//! The four date code eras and era-generic dispatch.

use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    generator, parser,
    options::ParseOptions,
    types::{DecodedDateCode, Period},
};

/// Represents the four historical date code layouts.
///
/// The era is always chosen by the caller; codes from different eras can look alike
/// (`SD0937` is valid both as a 1990–2006 and as a 2007+ code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    /// Year and month digits only, 1980–1989.
    #[serde(rename = "early-1980s")]
    Early1980,
    /// Location plus year and month digits, 1980–1989.
    #[serde(rename = "late-1980s")]
    Late1980,
    /// Location plus interleaved month and year, 1990–2006.
    #[serde(rename = "1990-2006")]
    From1990,
    /// Location plus interleaved week and year, 2007 onwards.
    #[serde(rename = "2007+")]
    From2007,
}

/// Implements [`std::fmt::Display`] for [`Era`].
///
/// # Example
/// ```rust
/// use datecode::Era;
/// assert_eq!(Era::Early1980.to_string(), "early-1980s");
/// assert_eq!(Era::From2007.to_string(), "2007+");
/// ```
impl Display for Era {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Era::Early1980 => write!(f, "early-1980s"),
            Era::Late1980 => write!(f, "late-1980s"),
            Era::From1990 => write!(f, "1990-2006"),
            Era::From2007 => write!(f, "2007+"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`Era`].
///
/// Accepts the following case-insensitive strings:
/// - `"early1980"`, `"early-1980s"` → `Era::Early1980`
/// - `"late1980"`, `"late-1980s"` → `Era::Late1980`
/// - `"1990"`, `"1990-2006"` → `Era::From1990`
/// - `"2007"`, `"2007+"` → `Era::From2007`
///
/// # Example
/// ```rust
/// use datecode::Era;
/// assert_eq!("Late-1980s".parse::<Era>().unwrap(), Era::Late1980);
/// assert_eq!("2007".parse::<Era>().unwrap(), Era::From2007);
/// assert!("1970".parse::<Era>().is_err());
/// ```
impl FromStr for Era {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "early1980" | "early-1980s" => Ok(Era::Early1980),
            "late1980" | "late-1980s" => Ok(Era::Late1980),
            "1990" | "1990-2006" => Ok(Era::From1990),
            "2007" | "2007+" => Ok(Era::From2007),
            "" => Err(Error::MissingInput("era")),
            other => Err(Error::format(format!("unknown era `{}`", other))),
        }
    }
}

impl Era {
    pub const ALL: [Era; 4] = [Era::Early1980, Era::Late1980, Era::From1990, Era::From2007];

    /// Manufacturing years the era's generator accepts.
    pub fn years(&self) -> RangeInclusive<u32> {
        match self {
            Era::Early1980 | Era::Late1980 => 1980..=1989,
            Era::From1990 => 1990..=2006,
            Era::From2007 => 2007..=generator::LAST_2007_ERA_YEAR,
        }
    }

    pub fn has_location(&self) -> bool {
        !matches!(self, Era::Early1980)
    }

    /// Wraps a month or week number in the period unit this era uses.
    pub fn period(&self, value: u32) -> Period {
        match self {
            Era::From2007 => Period::Week(value),
            _ => Period::Month(value),
        }
    }

    /// Generates a date code for this era.
    ///
    /// `location` is ignored for [`Era::Early1980`] and required by every other era.
    /// `period` must be a week for [`Era::From2007`] and a month otherwise.
    ///
    /// # Example
    /// ```rust
    /// use datecode::{Era, Period};
    /// let code = Era::From1990.generate(Some("sd"), 1997, Period::Month(3)).unwrap();
    /// assert_eq!(code, "SD0937");
    /// ```
    pub fn generate(&self, location: Option<&str>, year: u32, period: Period) -> Result<String, Error> {
        let value = period.value();
        let expected = self.period(value);
        if period != expected {
            return Err(Error::format(format!(
                "{} codes carry a {}, got {}",
                self,
                match expected {
                    Period::Month(_) => "month",
                    Period::Week(_) => "week",
                },
                period
            )));
        }

        let location = match (self.has_location(), location) {
            (true, None) => return Err(Error::MissingInput("factory location code")),
            (_, location) => location.unwrap_or_default(),
        };
        match self {
            Era::Early1980 => generator::generate_early_1980_code(year, value),
            Era::Late1980 => generator::generate_late_1980_code(location, year, value),
            Era::From1990 => generator::generate_1990_code(location, year, value),
            Era::From2007 => generator::generate_2007_code(location, year, value),
        }
    }

    /// Parses a date code as belonging to this era, using default options.
    pub fn parse(&self, code: &str) -> Result<DecodedDateCode, Error> {
        self.parse_with(code, &ParseOptions::default())
    }

    pub fn parse_with(&self, code: &str, options: &ParseOptions) -> Result<DecodedDateCode, Error> {
        match self {
            Era::Early1980 => parser::parse_early_1980_code(code),
            Era::Late1980 => parser::parse_late_1980_code_with(code, options),
            Era::From1990 => parser::parse_1990_code(code),
            Era::From2007 => parser::parse_2007_code_with(code, options),
        }
    }
}
