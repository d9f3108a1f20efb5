#![forbid(unsafe_code)]
//! Encoder and decoder for manufacturing date codes.
//!
//! A date code packs a two-letter factory location, a year and a month or week into a short
//! stamp. Four layouts have been used over time and the caller always picks which one applies:
//!
//! | Era | Years | Example |
//! |---|---|---|
//! | early-1980s | 1980–1989 | `853` (March 1985) |
//! | late-1980s | 1980–1989 | `SD879` / `879SD` (September 1987) |
//! | 1990–2006 | 1990–2006 | `SD0937` (March 1997) |
//! | 2007+ | 2007 onwards | `SD0189` (week 8 of 2019) |
//!
//! # Quick Start
//!
//! ```rust
//! use datecode::{Country, generate_1990_code, parse_1990_code};
//!
//! let code = generate_1990_code("sd", 1997, 3)?;
//! assert_eq!(code, "SD0937");
//!
//! let decoded = parse_1990_code(&code)?;
//! assert_eq!(decoded.year, 1997);
//! assert_eq!(decoded.month(), Some(3));
//! assert!(decoded.countries.contains(&Country::USA));
//! # Ok::<(), datecode::Error>(())
//! ```
//!
//! All functions are pure. The factory location table is built once on first use and shared
//! read-only between threads.

pub mod era;
pub mod error;
pub mod generator;
pub mod location;
pub mod options;
pub mod parser;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    era::Era,
    error::{Error, ErrorKind},
    generator::{
        generate_1990_code, generate_1990_code_for_date, generate_2007_code,
        generate_2007_code_for_date, generate_early_1980_code, generate_early_1980_code_for_date,
        generate_late_1980_code, generate_late_1980_code_for_date,
    },
    location::lookup_country,
    options::ParseOptions,
    parser::{
        parse_1990_code, parse_2007_code, parse_2007_code_with, parse_early_1980_code,
        parse_late_1980_code, parse_late_1980_code_with,
    },
    types::{Country, DecodedDateCode, FactoryLocationCode, Period},
};
