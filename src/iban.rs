//! The validated IBAN value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IbanError;
use crate::{modulo97, registry};

/// The technically shortest possible IBAN: country code, check digits, and a
/// one-character BBAN. See [`registry::SHORTEST_IBAN_LENGTH`] for the
/// shortest length in the actual reference data.
pub const SHORTEST_POSSIBLE_IBAN: usize = 5;

/// An immutable, validated International Bank Account Number.
///
/// Every constructed instance has correct check digits and the valid length
/// for its country code; no country-specific BBAN validation beyond length
/// is performed, and unknown country codes are rejected. Instances are only
/// created through the validating factories [`Iban::parse`],
/// [`Iban::value_of`], and [`Iban::compose`].
///
/// Equality, hashing, and ordering are defined on the canonical plain form.
///
/// # Examples
///
/// ```
/// use ibankit::Iban;
///
/// let iban = Iban::parse("NL91 ABNA 0417 1643 00")?;
/// assert_eq!(iban.to_plain_string(), "NL91ABNA0417164300");
/// assert_eq!(iban.country_code(), "NL");
/// assert_eq!(iban.check_digits(), "91");
/// assert!(iban.is_sepa());
/// assert_eq!(iban.to_string(), "NL91 ABNA 0417 1643 00");
/// # Ok::<(), ibankit::IbanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iban {
    /// Canonical plain form: uppercase letters and digits, no separators.
    value: String,
    /// Pretty form, computed once at construction.
    pretty: String,
    sepa: bool,
    swift_registry: bool,
}

impl Iban {
    /// Parses the given string into an IBAN and confirms the check digits.
    ///
    /// The input may be plain (`"CC11ABCD123..."`) or formatted with interior
    /// space characters (`"CC11 ABCD 123. .."`); leading or trailing
    /// separators are rejected. The first violated rule is returned as its
    /// distinct [`IbanError`].
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return Err(IbanError::EmptyInput);
        };
        let last = chars.next_back().unwrap_or(first);
        if !first.is_alphanumeric() || !last.is_alphanumeric() {
            return Err(IbanError::InvalidBoundaryCharacter {
                input: input.to_owned(),
            });
        }
        Self::validate_plain(Self::to_plain(input))
    }

    /// Like [`Iban::parse`], but maps absent input to `Ok(None)`. Input that
    /// is present but invalid still fails with the same error `parse` would
    /// return.
    pub fn value_of(input: Option<&str>) -> Result<Option<Self>, IbanError> {
        input.map(Self::parse).transpose()
    }

    /// Composes an IBAN from the given country code and BBAN, computing the
    /// check digits.
    ///
    /// The result is routed through the full validation pipeline, so this
    /// fails for an unknown country code or a BBAN of the wrong length for
    /// the country, even though the checksum computation itself succeeds for
    /// any well-formed input.
    ///
    /// ```
    /// use ibankit::Iban;
    ///
    /// let composed = Iban::compose("NL", "ABNA0417164300")?;
    /// assert_eq!(composed, Iban::parse("NL91ABNA0417164300")?);
    /// # Ok::<(), ibankit::IbanError>(())
    /// ```
    pub fn compose(country_code: &str, bban: &str) -> Result<Self, IbanError> {
        let check_digits = modulo97::calculate_check_digits_for(country_code, bban)?;
        Self::parse(&format!("{country_code}{check_digits:02}{bban}"))
    }

    /// The country code embedded in the IBAN.
    pub fn country_code(&self) -> &str {
        &self.value[0..2]
    }

    /// The two check digits of the IBAN.
    pub fn check_digits(&self) -> &str {
        &self.value[2..4]
    }

    /// Whether this IBAN belongs to a SEPA participating country.
    pub fn is_sepa(&self) -> bool {
        self.sepa
    }

    /// Whether this IBAN's reference data is from the SWIFT IBAN Registry.
    pub fn is_in_swift_registry(&self) -> bool {
        self.swift_registry
    }

    /// The IBAN without formatting.
    pub fn to_plain_string(&self) -> &str {
        &self.value
    }

    /// The IBAN without formatting.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Removes all whitespace from the input, converting it to a plain IBAN.
    /// The input is not validated.
    pub fn to_plain(input: &str) -> String {
        input.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Reformats the input with a space every four characters (the last
    /// group may be shorter), first stripping any whitespace it already
    /// contains. The input is not validated, which makes this useful for
    /// correcting malformed user input before re-parsing.
    pub fn to_pretty(input: &str) -> String {
        add_spaces(&Self::to_plain(input))
    }

    /// Runs the invariant pipeline over a plain (whitespace-free) candidate.
    /// Single source of truth for validity; every factory routes through it.
    fn validate_plain(value: String) -> Result<Self, IbanError> {
        if value.len() < SHORTEST_POSSIBLE_IBAN {
            return Err(IbanError::TooShort { input: value });
        }
        let bytes = value.as_bytes();
        if !(bytes[2].is_ascii_digit() && bytes[3].is_ascii_digit()) {
            return Err(IbanError::MalformedCheckDigits { input: value });
        }
        let Some(record) = registry::lookup(&value[0..2]) else {
            return Err(IbanError::UnknownCountryCode {
                country_code: value[0..2].to_owned(),
            });
        };
        let expected = record.iban_length as usize;
        if value.len() != expected {
            return Err(IbanError::LengthMismatch {
                actual: value.len(),
                expected,
                iban: value,
            });
        }
        if modulo97::checksum(&value)? != 1 {
            return Err(IbanError::ChecksumFailure { iban: value });
        }
        let pretty = add_spaces(&value);
        Ok(Self {
            value,
            pretty,
            sepa: record.sepa,
            swift_registry: record.swift_registry,
        })
    }
}

/// Inserts a space after every fourth character of a plain IBAN.
fn add_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Compares two optional IBANs, ordering `None` before any value. This is
/// the ordering legacy callers expect from a null-tolerant comparator; the
/// natural [`Ord`] on `Iban` itself never sees absent values.
pub fn compare_nullable(a: Option<&Iban>, b: Option<&Iban>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl fmt::Display for Iban {
    /// Renders the IBAN in standard formatting, with a space every four
    /// characters. Use [`Iban::to_plain_string`] for the unformatted value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Iban {}

impl Hash for Iban {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Iban {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iban {
    /// Natural ordering is lexicographic on the canonical plain form.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
