use std::collections::BTreeSet;

use chrono::NaiveDate;
use datecode::{
    Country, DecodedDateCode, Era, Error, ErrorKind, FactoryLocationCode, Period,
    generate_1990_code, generate_2007_code, generate_2007_code_for_date, generate_early_1980_code,
    generate_late_1980_code, lookup_country, parse_1990_code, parse_2007_code,
    parse_early_1980_code, parse_late_1980_code,
};

struct ParseCase {
    era: Era,
    code: &'static str,
    location: Option<&'static str>,
    year: u32,
    period: Period,
}

fn parse_cases() -> Vec<ParseCase> {
    vec![
        ParseCase { era: Era::Early1980, code: "853", location: None, year: 1985, period: Period::Month(3) },
        ParseCase { era: Era::Early1980, code: "8912", location: None, year: 1989, period: Period::Month(12) },
        ParseCase { era: Era::Late1980, code: "879SD", location: Some("SD"), year: 1987, period: Period::Month(9) },
        ParseCase { era: Era::Late1980, code: "8610LA", location: Some("LA"), year: 1986, period: Period::Month(10) },
        ParseCase { era: Era::Late1980, code: "VI834", location: Some("VI"), year: 1983, period: Period::Month(4) },
        ParseCase { era: Era::From1990, code: "SD0937", location: Some("SD"), year: 1997, period: Period::Month(3) },
        ParseCase { era: Era::From1990, code: "TH1000", location: Some("TH"), year: 2000, period: Period::Month(10) },
        ParseCase { era: Era::From1990, code: "ca0095", location: Some("CA"), year: 2005, period: Period::Month(9) },
        ParseCase { era: Era::From2007, code: "SD0189", location: Some("SD"), year: 2019, period: Period::Week(8) },
        ParseCase { era: Era::From2007, code: "FL5130", location: Some("FL"), year: 2010, period: Period::Week(53) },
    ]
}

#[test]
fn parses_known_codes() {
    for case in parse_cases() {
        let decoded = case
            .era
            .parse(case.code)
            .unwrap_or_else(|e| panic!("{} as {}: {}", case.code, case.era, e));
        assert_eq!(
            decoded.location.as_ref().map(|l| l.as_str()),
            case.location,
            "{}",
            case.code
        );
        assert_eq!(decoded.year, case.year, "{}", case.code);
        assert_eq!(decoded.period, case.period, "{}", case.code);
        assert_eq!(decoded.countries.is_empty(), case.location.is_none(), "{}", case.code);
    }
}

#[test]
fn generates_documented_examples() {
    assert_eq!(generate_early_1980_code(1985, 3).unwrap(), "853");
    assert_eq!(generate_early_1980_code(1985, 12).unwrap(), "8512");
    assert_eq!(generate_late_1980_code("SD", 1987, 9).unwrap(), "SD879");
    assert_eq!(generate_1990_code("SD", 1997, 3).unwrap(), "SD0937");
}

#[test]
fn century_resolution_for_1990_codes() {
    assert_eq!(parse_1990_code(&generate_1990_code("SD", 1997, 6).unwrap()).unwrap().year, 1997);
    assert_eq!(parse_1990_code(&generate_1990_code("SD", 2005, 6).unwrap()).unwrap().year, 2005);
    assert_eq!(parse_1990_code(&generate_1990_code("SD", 2006, 6).unwrap()).unwrap().year, 2006);
}

#[test]
fn week_53_only_every_fifth_year() {
    assert!(generate_2007_code("SD", 2010, 53).is_ok());
    assert!(generate_2007_code("SD", 2015, 53).is_ok());
    let err = generate_2007_code("SD", 2011, 53).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn january_2016_uses_previous_year_digits() {
    let date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    let code = generate_2007_code_for_date("SD", date).unwrap();
    assert_eq!(code, "SD5135");
    let decoded = parse_2007_code(&code).unwrap();
    assert_eq!(decoded.year, 2015);
}

#[test]
fn year_boundary_dates_decode_to_their_own_year() {
    struct BoundaryCase {
        date: (i32, u32, u32),
        code: &'static str,
        year: u32,
        week: u32,
    }

    let cases = [
        // Saturday, ISO week 52 of 2021.
        BoundaryCase { date: (2022, 1, 1), code: "SD5222", year: 2022, week: 52 },
        // Wednesday, ISO week 1 of 2025.
        BoundaryCase { date: (2025, 1, 1), code: "SD0125", year: 2025, week: 1 },
        // Thursday, ISO week 53 of 2020.
        BoundaryCase { date: (2020, 12, 31), code: "SD5230", year: 2020, week: 53 },
        // Monday, ISO week 1 of 2025, kept in 2024.
        BoundaryCase { date: (2024, 12, 30), code: "SD5234", year: 2024, week: 53 },
    ];

    for case in cases {
        let (y, m, d) = case.date;
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let code = generate_2007_code_for_date("SD", date).unwrap();
        assert_eq!(code, case.code, "{}", date);
        let decoded = parse_2007_code(&code).unwrap();
        assert_eq!((decoded.year, decoded.week()), (case.year, Some(case.week)), "{}", date);
    }
}

#[test]
fn late_december_in_next_iso_year_is_rejected_without_week_53() {
    for (y, m, d) in [(2018, 12, 31), (2019, 12, 30)] {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(
            generate_2007_code_for_date("SD", date).unwrap_err(),
            Error::range("week", 53),
            "{}",
            date
        );
    }
}

#[test]
fn rejects_invalid_2007_literals() {
    assert_eq!(parse_2007_code("RI5137").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(parse_2007_code("RI5138").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(parse_2007_code("RI5139").unwrap_err().kind(), ErrorKind::Format);
}

#[test]
fn shared_location_codes() {
    let sa = lookup_country("SA");
    assert!(sa.contains(&Country::France));
    assert!(sa.contains(&Country::Italy));
    assert!(lookup_country("ZZ").is_empty());
}

#[test]
fn unknown_location_rejected() {
    assert_eq!(
        parse_1990_code("ZZ0199").unwrap_err(),
        Error::UnknownLocation("ZZ".to_string())
    );
    assert_eq!(
        parse_late_1980_code("879ZZ").unwrap_err().kind(),
        ErrorKind::UnknownLocation
    );
}

#[test]
fn dead_zone_rejected() {
    // Month 05, year 50.
    let err = parse_1990_code("SD0550").unwrap_err();
    assert_eq!(err, Error::range("year", 50));
}

#[test]
fn empty_input_is_missing() {
    for era in Era::ALL {
        assert_eq!(era.parse("").unwrap_err().kind(), ErrorKind::MissingInput, "{}", era);
    }
    assert_eq!(
        generate_1990_code("", 1997, 3).unwrap_err().kind(),
        ErrorKind::MissingInput
    );
}

#[test]
fn early_codes_carry_no_location() {
    let decoded = parse_early_1980_code("8110").unwrap();
    assert_eq!(decoded.location, None);
    assert_eq!(decoded.countries, BTreeSet::new());
}

#[test]
fn decoded_serializes_to_json() {
    let decoded = parse_1990_code("SA0937").unwrap();
    let json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "location": "SA",
            "countries": ["France", "Italy"],
            "year": 1997,
            "period": { "month": 3 }
        })
    );

    let back: DecodedDateCode = serde_json::from_value(json).unwrap();
    assert_eq!(back, decoded);

    let bad = serde_json::json!({ "location": "S1", "year": 1997, "period": { "month": 3 } });
    assert!(serde_json::from_value::<DecodedDateCode>(bad).is_err());
}

#[test]
fn location_code_type_matches_lookup() {
    let code: FactoryLocationCode = "bc".parse().unwrap();
    assert_eq!(code.countries(), lookup_country("BC"));
    assert_eq!(
        code.countries().into_iter().collect::<Vec<_>>(),
        vec![Country::Italy, Country::Spain]
    );
}

#[test]
fn era_serializes_like_display() {
    for era in Era::ALL {
        let json = serde_json::to_string(&era).unwrap();
        assert_eq!(json, format!("\"{}\"", era));
        assert_eq!(serde_json::from_str::<Era>(&json).unwrap(), era);
    }
    assert_eq!(serde_json::to_string(&Era::From1990).unwrap(), "\"1990-2006\"");
}
