//! Core value types shared by the generators and parsers.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::Error, location};

lazy_static! {
    static ref LOCATION_CODE_REGEX: Regex = Regex::new(r"^[a-zA-Z]{2}$").unwrap();
}

/// Country a factory location code was operated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    France,
    Germany,
    Italy,
    Spain,
    Switzerland,
    USA,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::France,
        Country::Germany,
        Country::Italy,
        Country::Spain,
        Country::Switzerland,
        Country::USA,
    ];
}

impl Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::France => write!(f, "France"),
            Country::Germany => write!(f, "Germany"),
            Country::Italy => write!(f, "Italy"),
            Country::Spain => write!(f, "Spain"),
            Country::Switzerland => write!(f, "Switzerland"),
            Country::USA => write!(f, "USA"),
        }
    }
}

impl FromStr for Country {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "france" => Ok(Country::France),
            "germany" => Ok(Country::Germany),
            "italy" => Ok(Country::Italy),
            "spain" => Ok(Country::Spain),
            "switzerland" => Ok(Country::Switzerland),
            "usa" | "us" => Ok(Country::USA),
            other => Err(Error::format(format!("unknown country `{}`", other))),
        }
    }
}

/// A two-letter factory location code, normalized to uppercase.
///
/// The same code may be shared by factories in several countries; see
/// [`FactoryLocationCode::countries`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FactoryLocationCode(String);

impl FactoryLocationCode {
    /// Validates `code` as exactly two ASCII letters, in either case.
    ///
    /// Returns [`Error::MissingInput`] for an empty string and [`Error::Format`] for anything
    /// else that is not two letters. Does not consult the location table.
    pub fn parse(code: &str) -> Result<Self, Error> {
        if code.is_empty() {
            return Err(Error::MissingInput("factory location code"));
        }
        if !LOCATION_CODE_REGEX.is_match(code) {
            return Err(Error::format(format!(
                "factory location code must be two letters, got `{}`",
                code
            )));
        }
        Ok(FactoryLocationCode(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Countries registered under this code; empty when the code is unknown.
    pub fn countries(&self) -> BTreeSet<Country> {
        location::lookup_country(&self.0)
    }
}

impl AsRef<str> for FactoryLocationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for FactoryLocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FactoryLocationCode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FactoryLocationCode {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FactoryLocationCode> for String {
    fn from(code: FactoryLocationCode) -> Self {
        code.0
    }
}

/// The sub-year unit a date code carries: a month before 2007, a week afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month(u32),
    Week(u32),
}

impl Period {
    pub fn value(&self) -> u32 {
        match self {
            Period::Month(v) | Period::Week(v) => *v,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month(m) => write!(f, "month {}", m),
            Period::Week(w) => write!(f, "week {}", w),
        }
    }
}

/// Everything recovered from a date code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedDateCode {
    /// `None` for early-1980s codes, which carry no location.
    pub location: Option<FactoryLocationCode>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    #[serde(default)]
    pub countries: BTreeSet<Country>,

    pub year: u32,

    pub period: Period,
}

impl DecodedDateCode {
    pub fn month(&self) -> Option<u32> {
        match self.period {
            Period::Month(m) => Some(m),
            Period::Week(_) => None,
        }
    }

    pub fn week(&self) -> Option<u32> {
        match self.period {
            Period::Week(w) => Some(w),
            Period::Month(_) => None,
        }
    }
}
