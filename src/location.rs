//! Factory location code → country lookup.

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;

use crate::types::Country;

lazy_static! {
    /// Static mapping from factory location code → countries that stamped goods under it.
    static ref LOCATION_TABLE: BTreeMap<&'static str, BTreeSet<Country>> = {
        use Country::*;
        let mut m: BTreeMap<&'static str, BTreeSet<Country>> = BTreeMap::new();

        fn add(m: &mut BTreeMap<&'static str, BTreeSet<Country>>, country: Country, codes: &[&'static str]) {
            for code in codes {
                m.entry(*code).or_default().insert(country);
            }
        }

        // A0, A1, A2 and AAS are legacy stamps that are not two letters; only
        // `lookup_country` can reach them.
        add(&mut m, France, &[
            "A0","A1","A2","AA","AAS","AH","AN","AR","AS","BA","BJ","BU","DR","DU","DT",
            "CO","CT","CX","ET","FL","LA","LW","MB","MI","NO","RA","RI","SA","SD","SF",
            "SL","SN","SP","SR","TA","TJ","TH","TN","TR","TS","VI","VX",
        ]);

        add(&mut m, Germany, &["LP","OL"]);

        add(&mut m, Italy, &[
            "BC","BO","CE","FN","FO","MA","NZ","OB","PL","RC","RE","SA","TD",
        ]);

        add(&mut m, Spain, &["BC","CA","LO","LB","LM","LW","GI","UB"]);

        add(&mut m, Switzerland, &["DI","FA"]);

        add(&mut m, USA, &["FC","FH","LA","OS","SD","FL","TX"]);

        m
    };
}

/// Returns the countries associated with a factory location code.
///
/// Matching is exact after ASCII uppercasing. An unknown code yields an empty set; callers
/// decide whether that is fatal.
pub fn lookup_country(code: &str) -> BTreeSet<Country> {
    LOCATION_TABLE
        .get(code.to_ascii_uppercase().as_str())
        .cloned()
        .unwrap_or_default()
}

pub fn is_known(code: &str) -> bool {
    LOCATION_TABLE.contains_key(code.to_ascii_uppercase().as_str())
}

/// Every code in the table, sorted.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    LOCATION_TABLE.keys().copied()
}

/// Codes registered for `country`, sorted.
pub fn codes_for_country(country: Country) -> Vec<&'static str> {
    LOCATION_TABLE
        .iter()
        .filter(|(_, countries)| countries.contains(&country))
        .map(|(code, _)| *code)
        .collect()
}
