//! Embedded IBAN reference data and country lookup.
//!
//! One record per country code participating in IBAN, transcribed from the
//! SWIFT IBAN Registry plus the iban.com experimental list for countries not
//! in the registry. The table is immutable, sorted by country code for binary
//! search, and versioned; regenerate it whenever the registry updates.

use chrono::NaiveDate;

use crate::iban::Iban;

/// The `yyyy-MM-dd` datestamp the embedded reference data was last updated.
pub const LAST_UPDATE_DATE: &str = "2024-05-25";

/// The SWIFT IBAN Registry revision the embedded reference data matches.
pub const LAST_UPDATE_REVISION: &str = "97";

/// Reference data for one country's IBAN format.
///
/// The bank and branch identifier offsets index into the plain (unformatted)
/// IBAN string; `begin == end == 0` means the sub-field is not defined for
/// the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    /// Two-letter uppercase country code (ISO 3166-1 alpha-2).
    pub country_code: &'static str,
    /// Total IBAN length for this country.
    pub iban_length: u8,
    /// Whether the country participates in SEPA.
    pub sepa: bool,
    /// Whether this record is sourced from the SWIFT IBAN Registry.
    pub swift_registry: bool,
    /// Start offset of the bank identifier (inclusive).
    pub bank_id_begin: u8,
    /// End offset of the bank identifier (exclusive).
    pub bank_id_end: u8,
    /// Start offset of the branch identifier (inclusive).
    pub branch_id_begin: u8,
    /// End offset of the branch identifier (exclusive).
    pub branch_id_end: u8,
}

impl CountryRecord {
    /// The bank identifier offsets, if defined for this country.
    pub fn bank_id_range(&self) -> Option<std::ops::Range<usize>> {
        (self.bank_id_begin != 0)
            .then(|| self.bank_id_begin as usize..self.bank_id_end as usize)
    }

    /// The branch identifier offsets, if defined for this country.
    pub fn branch_id_range(&self) -> Option<std::ops::Range<usize>> {
        (self.branch_id_begin != 0)
            .then(|| self.branch_id_begin as usize..self.branch_id_end as usize)
    }
}

const fn rec(
    country_code: &'static str,
    iban_length: u8,
    sepa: bool,
    swift_registry: bool,
    bank_id: (u8, u8),
    branch_id: (u8, u8),
) -> CountryRecord {
    CountryRecord {
        country_code,
        iban_length,
        sepa,
        swift_registry,
        bank_id_begin: bank_id.0,
        bank_id_end: bank_id.1,
        branch_id_begin: branch_id.0,
        branch_id_end: branch_id.1,
    }
}

/// The reference data table. Sorted by country code for binary search.
/// Columns: code, length, SEPA, SWIFT registry, bank id offsets, branch id offsets.
#[rustfmt::skip]
const REGISTRY: &[CountryRecord] = &[
    rec("AD", 24, true,  true,  (4, 8),   (8, 12)),
    rec("AE", 23, false, true,  (4, 7),   (0, 0)),
    rec("AL", 28, false, true,  (4, 12),  (7, 11)),
    rec("AO", 25, false, false, (0, 0),   (0, 0)),
    rec("AT", 20, true,  true,  (4, 9),   (0, 0)),
    rec("AZ", 28, false, true,  (4, 8),   (0, 0)),
    rec("BA", 20, false, true,  (4, 7),   (7, 10)),
    rec("BE", 16, true,  true,  (4, 7),   (0, 0)),
    rec("BF", 28, false, false, (0, 0),   (0, 0)),
    rec("BG", 22, true,  true,  (4, 8),   (8, 12)),
    rec("BH", 22, false, true,  (4, 8),   (0, 0)),
    rec("BI", 27, false, true,  (4, 9),   (9, 14)),
    rec("BJ", 28, false, false, (0, 0),   (0, 0)),
    rec("BR", 29, false, true,  (4, 12),  (12, 17)),
    rec("BY", 28, false, true,  (4, 8),   (0, 0)),
    rec("CF", 27, false, false, (0, 0),   (0, 0)),
    rec("CG", 27, false, false, (0, 0),   (0, 0)),
    rec("CH", 21, true,  true,  (4, 9),   (0, 0)),
    rec("CI", 28, false, false, (0, 0),   (0, 0)),
    rec("CM", 27, false, false, (0, 0),   (0, 0)),
    rec("CR", 22, false, true,  (4, 8),   (0, 0)),
    rec("CV", 25, false, false, (0, 0),   (0, 0)),
    rec("CY", 28, true,  true,  (4, 7),   (7, 12)),
    rec("CZ", 24, true,  true,  (4, 8),   (0, 0)),
    rec("DE", 22, true,  true,  (4, 12),  (0, 0)),
    rec("DJ", 27, false, true,  (4, 9),   (9, 14)),
    rec("DK", 18, true,  true,  (4, 8),   (0, 0)),
    rec("DO", 28, false, true,  (4, 8),   (0, 0)),
    rec("DZ", 26, false, false, (0, 0),   (0, 0)),
    rec("EE", 20, true,  true,  (4, 6),   (0, 0)),
    rec("EG", 29, false, true,  (4, 8),   (8, 12)),
    rec("ES", 24, true,  true,  (4, 8),   (8, 12)),
    rec("FI", 18, true,  true,  (4, 7),   (0, 0)),
    rec("FK", 18, false, true,  (4, 6),   (0, 0)),
    rec("FO", 18, false, true,  (4, 8),   (0, 0)),
    rec("FR", 27, true,  true,  (4, 9),   (9, 14)),
    rec("GA", 27, false, false, (0, 0),   (0, 0)),
    rec("GB", 22, true,  true,  (4, 8),   (8, 14)),
    rec("GE", 22, false, true,  (4, 6),   (0, 0)),
    rec("GI", 23, true,  true,  (4, 8),   (0, 0)),
    rec("GL", 18, false, true,  (4, 8),   (0, 0)),
    rec("GQ", 27, false, false, (0, 0),   (0, 0)),
    rec("GR", 27, true,  true,  (4, 7),   (7, 11)),
    rec("GT", 28, false, true,  (4, 8),   (0, 0)),
    rec("GW", 25, false, false, (0, 0),   (0, 0)),
    rec("HN", 28, false, false, (0, 0),   (0, 0)),
    rec("HR", 21, true,  true,  (4, 11),  (0, 0)),
    rec("HU", 28, true,  true,  (4, 7),   (7, 11)),
    rec("IE", 22, true,  true,  (4, 8),   (8, 14)),
    rec("IL", 23, false, true,  (4, 7),   (7, 10)),
    rec("IQ", 23, false, true,  (4, 8),   (8, 11)),
    rec("IR", 26, false, false, (0, 0),   (0, 0)),
    rec("IS", 26, true,  true,  (4, 6),   (6, 8)),
    rec("IT", 27, true,  true,  (5, 10),  (10, 15)),
    rec("JO", 30, false, true,  (4, 8),   (0, 0)),
    rec("KM", 27, false, false, (0, 0),   (0, 0)),
    rec("KW", 30, false, true,  (4, 8),   (0, 0)),
    rec("KZ", 20, false, true,  (4, 7),   (0, 0)),
    rec("LB", 28, false, true,  (4, 8),   (0, 0)),
    rec("LC", 32, false, true,  (4, 8),   (0, 0)),
    rec("LI", 21, true,  true,  (4, 9),   (0, 0)),
    rec("LT", 20, true,  true,  (4, 9),   (0, 0)),
    rec("LU", 20, true,  true,  (4, 7),   (0, 0)),
    rec("LV", 21, true,  true,  (4, 8),   (0, 0)),
    rec("LY", 25, false, true,  (4, 7),   (7, 10)),
    rec("MA", 28, false, false, (0, 0),   (0, 0)),
    rec("MC", 27, true,  true,  (4, 9),   (9, 14)),
    rec("MD", 24, false, true,  (4, 6),   (0, 0)),
    rec("ME", 22, false, true,  (4, 7),   (0, 0)),
    rec("MG", 27, false, false, (0, 0),   (0, 0)),
    rec("MK", 19, false, true,  (4, 7),   (0, 0)),
    rec("ML", 28, false, false, (0, 0),   (0, 0)),
    rec("MN", 20, false, true,  (4, 8),   (0, 0)),
    rec("MR", 27, false, true,  (4, 9),   (9, 14)),
    rec("MT", 31, true,  true,  (4, 8),   (8, 13)),
    rec("MU", 30, false, true,  (4, 10),  (10, 12)),
    rec("MZ", 25, false, false, (0, 0),   (0, 0)),
    rec("NE", 28, false, false, (0, 0),   (0, 0)),
    rec("NI", 28, false, true,  (4, 8),   (0, 0)),
    rec("NL", 18, true,  true,  (4, 8),   (0, 0)),
    rec("NO", 15, true,  true,  (4, 8),   (0, 0)),
    rec("OM", 23, false, true,  (4, 7),   (0, 0)),
    rec("PK", 24, false, true,  (4, 8),   (0, 0)),
    rec("PL", 28, true,  true,  (0, 0),   (4, 12)),
    rec("PS", 29, false, true,  (4, 8),   (0, 0)),
    rec("PT", 25, true,  true,  (4, 8),   (0, 0)),
    rec("QA", 29, false, true,  (4, 8),   (0, 0)),
    rec("RO", 24, true,  true,  (4, 8),   (0, 0)),
    rec("RS", 22, false, true,  (4, 7),   (0, 0)),
    rec("RU", 33, false, true,  (4, 13),  (13, 18)),
    rec("SA", 24, false, true,  (4, 6),   (0, 0)),
    rec("SC", 31, false, true,  (4, 10),  (10, 12)),
    rec("SD", 18, false, true,  (4, 6),   (0, 0)),
    rec("SE", 24, true,  true,  (4, 7),   (0, 0)),
    rec("SI", 19, true,  true,  (4, 9),   (0, 0)),
    rec("SK", 24, true,  true,  (4, 8),   (0, 0)),
    rec("SM", 27, true,  true,  (5, 10),  (10, 15)),
    rec("SN", 28, false, false, (0, 0),   (0, 0)),
    rec("SO", 23, false, true,  (4, 8),   (8, 11)),
    rec("ST", 25, false, true,  (4, 8),   (8, 12)),
    rec("SV", 28, false, true,  (4, 8),   (0, 0)),
    rec("TD", 27, false, false, (0, 0),   (0, 0)),
    rec("TG", 28, false, false, (0, 0),   (0, 0)),
    rec("TL", 23, false, true,  (4, 7),   (0, 0)),
    rec("TN", 24, false, true,  (4, 6),   (6, 9)),
    rec("TR", 26, false, true,  (4, 9),   (0, 0)),
    rec("UA", 29, false, true,  (4, 10),  (0, 0)),
    rec("VA", 22, true,  true,  (4, 7),   (0, 0)),
    rec("VG", 24, false, true,  (4, 8),   (0, 0)),
    rec("XK", 20, false, true,  (4, 6),   (6, 8)),
];

const fn length_bounds() -> (usize, usize) {
    let mut min = usize::MAX;
    let mut max = 0;
    let mut i = 0;
    while i < REGISTRY.len() {
        let length = REGISTRY[i].iban_length as usize;
        if length < min {
            min = length;
        }
        if length > max {
            max = length;
        }
        i += 1;
    }
    (min, max)
}

/// The shortest IBAN length in the reference data.
pub const SHORTEST_IBAN_LENGTH: usize = length_bounds().0;

/// The longest IBAN length in the reference data.
pub const LONGEST_IBAN_LENGTH: usize = length_bounds().1;

/// Returns the table index of the given country code by binary search.
pub fn index_of(country_code: &str) -> Option<usize> {
    REGISTRY
        .binary_search_by(|record| record.country_code.cmp(country_code))
        .ok()
}

/// Returns the reference data record for the given country code, if known.
pub fn lookup(country_code: &str) -> Option<&'static CountryRecord> {
    index_of(country_code).map(|index| &REGISTRY[index])
}

/// Returns the expected IBAN length for the given country code, or `None`
/// if the code is unknown.
pub fn length_for_country_code(country_code: &str) -> Option<usize> {
    lookup(country_code).map(|record| record.iban_length as usize)
}

/// Returns whether the given country participates in SEPA. Unknown country
/// codes read as `false`.
pub fn is_sepa_country(country_code: &str) -> bool {
    lookup(country_code).is_some_and(|record| record.sepa)
}

/// Returns whether the given country's reference data is sourced from the
/// SWIFT IBAN Registry. Unknown country codes read as `false`.
pub fn is_in_swift_registry(country_code: &str) -> bool {
    lookup(country_code).is_some_and(|record| record.swift_registry)
}

/// Returns whether the given string is a known country code: exactly two
/// characters, case-sensitive (`"nl"` is not known even though `"NL"` is).
pub fn is_known_country_code(country_code: &str) -> bool {
    country_code.len() == 2 && index_of(country_code).is_some()
}

/// Returns the bank identifier embedded in the given IBAN, or `None` if the
/// reference data does not define bank identifier offsets for its country.
pub fn bank_identifier(iban: &Iban) -> Option<&str> {
    let record = lookup(iban.country_code())?;
    record.bank_id_range().map(|range| &iban.as_str()[range])
}

/// Returns the branch identifier embedded in the given IBAN, or `None` if
/// the reference data does not define branch identifier offsets for its
/// country.
pub fn branch_identifier(iban: &Iban) -> Option<&str> {
    let record = lookup(iban.country_code())?;
    record.branch_id_range().map(|range| &iban.as_str()[range])
}

/// Returns all known country codes, uppercase, in ascending order.
pub fn known_country_codes() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|record| record.country_code)
}

/// Returns the date the embedded reference data was last updated.
pub fn last_update_date() -> NaiveDate {
    // Evaluated at compile time; an invalid datestamp cannot build.
    const DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 5, 25) {
        Some(date) => date,
        None => panic!("embedded datestamp is not a valid date"),
    };
    DATE
}
