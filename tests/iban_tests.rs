//! Integration tests for the `Iban` value type: construction, formatting,
//! decomposition, ordering, and error reporting.

use std::collections::HashSet;

use ibankit::{Iban, IbanError, compare_nullable, modulo97, registry};

const VALID_IBAN: &str = "NL91ABNA0417164300";

// --- Parsing ---

#[test]
fn parse_accepts_plain_input() {
    let iban = Iban::parse(VALID_IBAN).unwrap();
    assert_eq!(iban.to_plain_string(), VALID_IBAN);
    assert_eq!(iban.country_code(), "NL");
    assert_eq!(iban.check_digits(), "91");
}

#[test]
fn parse_accepts_formatted_input() {
    let iban = Iban::parse("NL91 ABNA 0417 1643 00").unwrap();
    assert_eq!(iban.to_plain_string(), "NL91ABNA0417164300");
    assert_eq!(iban.country_code(), "NL");
    assert_eq!(iban.check_digits(), "91");
}

#[test]
fn parse_tolerates_irregular_interior_grouping() {
    let iban = Iban::parse("NL91ABNA 04171 6 4300").unwrap();
    assert_eq!(iban.to_plain_string(), VALID_IBAN);
}

#[test]
fn parse_sets_registry_flags() {
    let nl = Iban::parse(VALID_IBAN).unwrap();
    assert!(nl.is_sepa());
    assert!(nl.is_in_swift_registry());

    // United Arab Emirates: SWIFT registry, not SEPA.
    let ae = Iban::parse("AE070331234567890123456").unwrap();
    assert!(!ae.is_sepa());
    assert!(ae.is_in_swift_registry());

    // Angola: experimental list only.
    let ao = Iban::parse("AO06004400006729503010102").unwrap();
    assert!(!ao.is_sepa());
    assert!(!ao.is_in_swift_registry());
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!(Iban::parse(""), Err(IbanError::EmptyInput));
}

#[test]
fn parse_rejects_leading_whitespace() {
    assert_eq!(
        Iban::parse(&format!(" {VALID_IBAN}")),
        Err(IbanError::InvalidBoundaryCharacter {
            input: format!(" {VALID_IBAN}"),
        })
    );
}

#[test]
fn parse_rejects_trailing_whitespace() {
    assert!(matches!(
        Iban::parse(&format!("{VALID_IBAN} ")),
        Err(IbanError::InvalidBoundaryCharacter { .. })
    ));
}

#[test]
fn parse_rejects_non_alphanumeric_boundary() {
    assert!(matches!(
        Iban::parse("Shenanigans!"),
        Err(IbanError::InvalidBoundaryCharacter { .. })
    ));
    assert!(matches!(
        Iban::parse("-NL91ABNA0417164300"),
        Err(IbanError::InvalidBoundaryCharacter { .. })
    ));
}

#[test]
fn parse_rejects_too_short_input() {
    assert_eq!(
        Iban::parse("NL91"),
        Err(IbanError::TooShort {
            input: "NL91".into(),
        })
    );
}

#[test]
fn parse_rejects_non_digit_check_digit_positions() {
    assert_eq!(
        Iban::parse("NL9AABNA0417164300"),
        Err(IbanError::MalformedCheckDigits {
            input: "NL9AABNA0417164300".into(),
        })
    );
}

#[test]
fn parse_rejects_unknown_country_code() {
    assert_eq!(
        Iban::parse("UU345678345543234"),
        Err(IbanError::UnknownCountryCode {
            country_code: "UU".into(),
        })
    );
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(
        Iban::parse("NL91ABNA04171643"),
        Err(IbanError::LengthMismatch {
            iban: "NL91ABNA04171643".into(),
            expected: 18,
            actual: 16,
        })
    );
}

#[test]
fn parse_rejects_wrong_check_digits() {
    assert_eq!(
        Iban::parse("NL92ABNA0417164300"),
        Err(IbanError::ChecksumFailure {
            iban: "NL92ABNA0417164300".into(),
        })
    );
}

#[test]
fn error_messages_name_the_offending_value() {
    let err = Iban::parse("UU345678345543234").unwrap_err();
    assert_eq!(err.to_string(), "unknown country code: \"UU\"");
    let err = Iban::parse("NL92ABNA0417164300").unwrap_err();
    assert!(err.to_string().contains("NL92ABNA0417164300"));
}

// --- value_of ---

#[test]
fn value_of_maps_absent_input_to_none() {
    assert_eq!(Iban::value_of(None), Ok(None));
}

#[test]
fn value_of_parses_present_input() {
    let iban = Iban::value_of(Some(VALID_IBAN)).unwrap().unwrap();
    assert_eq!(iban.to_plain_string(), VALID_IBAN);
}

#[test]
fn value_of_does_not_swallow_validation_errors() {
    assert!(matches!(
        Iban::value_of(Some("NL92ABNA0417164300")),
        Err(IbanError::ChecksumFailure { .. })
    ));
}

#[test]
fn value_of_accepts_display_output() {
    let original = Iban::parse(VALID_IBAN).unwrap();
    let pretty = original.to_string();
    let copy = Iban::value_of(Some(pretty.as_str())).unwrap().unwrap();
    assert_eq!(copy, original);
}

// --- compose ---

#[test]
fn compose_derives_check_digits() {
    let composed = Iban::compose("NL", "ABNA0417164300").unwrap();
    assert_eq!(composed, Iban::parse("NL91ABNA0417164300").unwrap());
    assert_eq!(composed.check_digits(), "91");
}

#[test]
fn compose_zero_pads_single_digit_results() {
    // Check digits under ten must render as "0x".
    let composed = Iban::compose("XK", "1212012345678906").unwrap();
    assert_eq!(composed.check_digits(), "05");
    assert_eq!(composed.to_plain_string(), "XK051212012345678906");
}

#[test]
fn compose_rejects_unknown_country_code() {
    assert!(matches!(
        Iban::compose("UU", "12345678901234"),
        Err(IbanError::UnknownCountryCode { .. })
    ));
}

#[test]
fn compose_rejects_wrong_bban_length() {
    assert!(matches!(
        Iban::compose("NL", "ABNA04171643"),
        Err(IbanError::LengthMismatch { .. })
    ));
}

#[test]
fn compose_rejects_malformed_country_code_argument() {
    assert!(matches!(
        Iban::compose("NLD", "ABNA0417164300"),
        Err(IbanError::InvalidCountryCode { .. })
    ));
    assert!(matches!(
        Iban::compose("N ", "ABNA0417164300"),
        Err(IbanError::InvalidCountryCode { .. })
    ));
}

// --- Formatting ---

#[test]
fn display_groups_by_four() {
    let iban = Iban::parse(VALID_IBAN).unwrap();
    assert_eq!(iban.to_string(), "NL91 ABNA 0417 1643 00");
}

#[test]
fn display_last_group_may_be_short() {
    // Norway has the shortest IBAN in the registry: 15 characters.
    let iban = Iban::parse("NO9386011117947").unwrap();
    assert_eq!(iban.to_string(), "NO93 8601 1117 947");
}

#[test]
fn to_plain_strips_all_whitespace() {
    assert_eq!(Iban::to_plain("NL91 ABNA 0417 1643 00"), VALID_IBAN);
    assert_eq!(Iban::to_plain(" N L91\tABNA 041716 4300 "), VALID_IBAN);
}

#[test]
fn to_pretty_regroups_arbitrary_input() {
    assert_eq!(Iban::to_pretty("NL91ABNA0417164300"), "NL91 ABNA 0417 1643 00");
    assert_eq!(Iban::to_pretty("NL 91ABNA04 17164300"), "NL91 ABNA 0417 1643 00");
    // Not validated: useful for correcting malformed input before re-parsing.
    assert_eq!(Iban::to_pretty("NL92ABNA"), "NL92 ABNA");
}

#[test]
fn to_pretty_is_idempotent() {
    let once = Iban::to_pretty(VALID_IBAN);
    assert_eq!(Iban::to_pretty(&once), once);
}

#[test]
fn round_trip_through_both_forms() {
    let plain = Iban::parse(VALID_IBAN).unwrap();
    let pretty = Iban::parse(&Iban::to_pretty(VALID_IBAN)).unwrap();
    assert_eq!(plain, pretty);
    assert_eq!(pretty.to_plain_string(), Iban::to_plain(VALID_IBAN));
}

// --- Decomposition ---

#[test]
fn bank_and_branch_identifiers() {
    let de = Iban::parse("DE89370400440532013000").unwrap();
    assert_eq!(registry::bank_identifier(&de), Some("37040044"));
    assert_eq!(registry::branch_identifier(&de), None);

    let gb = Iban::parse("GB29NWBK60161331926819").unwrap();
    assert_eq!(registry::bank_identifier(&gb), Some("NWBK"));
    assert_eq!(registry::branch_identifier(&gb), Some("601613"));

    // Poland defines a branch identifier but no bank identifier.
    let pl = Iban::parse("PL61109010140000071219812874").unwrap();
    assert_eq!(registry::bank_identifier(&pl), None);
    assert_eq!(registry::branch_identifier(&pl), Some("10901014"));
}

// --- Equality, ordering, hashing ---

#[test]
fn equality_is_on_canonical_value() {
    let a = Iban::parse(VALID_IBAN).unwrap();
    let b = Iban::parse("NL91 ABNA 0417 1643 00").unwrap();
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn natural_ordering_is_lexicographic_on_plain_value() {
    let mut ibans = vec![
        Iban::parse("NL68BANK0000000001").unwrap(),
        Iban::parse("DK3400000000000003").unwrap(),
        Iban::parse("NL41BANK0000000002").unwrap(),
    ];
    ibans.sort();
    let sorted: Vec<_> = ibans.iter().map(Iban::to_plain_string).collect();
    assert_eq!(
        sorted,
        ["DK3400000000000003", "NL41BANK0000000002", "NL68BANK0000000001"]
    );
}

#[test]
fn nullable_comparator_sorts_none_first() {
    use std::cmp::Ordering;

    let iban = Iban::parse(VALID_IBAN).unwrap();
    assert_eq!(compare_nullable(None, Some(&iban)), Ordering::Less);
    assert_eq!(compare_nullable(Some(&iban), None), Ordering::Greater);
    assert_eq!(compare_nullable(None, None), Ordering::Equal);
    assert_eq!(compare_nullable(Some(&iban), Some(&iban)), Ordering::Equal);
}

// --- Trait integrations ---

#[test]
fn from_str_delegates_to_parse() {
    let iban: Iban = "DE89370400440532013000".parse().unwrap();
    assert_eq!(iban.country_code(), "DE");
    assert!("DE00370400440532013000".parse::<Iban>().is_err());
}

#[test]
fn serde_round_trip_uses_plain_form() {
    let iban = Iban::parse("NL91 ABNA 0417 1643 00").unwrap();
    let json = serde_json::to_string(&iban).unwrap();
    assert_eq!(json, "\"NL91ABNA0417164300\"");
    let back: Iban = serde_json::from_str(&json).unwrap();
    assert_eq!(back, iban);
}

#[test]
fn serde_rejects_invalid_values() {
    assert!(serde_json::from_str::<Iban>("\"NL92ABNA0417164300\"").is_err());
    assert!(serde_json::from_str::<Iban>("\"\"").is_err());
}

// --- Checksum invariant ---

#[test]
fn every_parsed_iban_checksums_to_one() {
    for input in [
        VALID_IBAN,
        "DE89370400440532013000",
        "NO9386011117947",
        "RU0304452522540817810538091310419",
    ] {
        let iban = Iban::parse(input).unwrap();
        assert_eq!(modulo97::checksum(iban.to_plain_string()).unwrap(), 1);
        assert_eq!(
            iban.to_plain_string().len(),
            registry::length_for_country_code(iban.country_code()).unwrap()
        );
    }
}
