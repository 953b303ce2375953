//! ISO 7064 MOD-97-10 checksum engine.
//!
//! Computes the modulo-97 checksum used by IBAN numbers (ISO 13616) and
//! derives or verifies the two check digits at offsets 2–3.

use crate::error::IbanError;

/// Largest number of decimal digits that fits a chunk: the running remainder
/// (at most two digits) prepended to a 17-digit chunk stays below
/// `97 * 10^17 < u64::MAX`.
const CHUNK_DIGITS: usize = 17;

/// Calculates the raw MOD-97 checksum for a given input.
///
/// The input may contain space characters, which are skipped. Any character
/// outside `[A-Za-z0-9 ]` is a contract violation and returns
/// [`IbanError::InvalidCharacter`]; fewer than five non-space characters
/// returns [`IbanError::TooShort`].
///
/// The first four characters (the country code and check digit positions of
/// an IBAN) are rotated to the end before the checksum is taken. Letters are
/// mapped case-insensitively to two-digit numerals (`A` = 10 … `Z` = 35).
/// The resulting digit string, which for an IBAN exceeds native integer
/// precision, is reduced modulo 97 in fixed-size chunks, carrying the
/// running remainder into the next chunk. This is arithmetically identical
/// to reducing the full decimal expansion as one big integer.
///
/// A return value of `1` indicates a valid checksum. If the characters at
/// offsets 2–3 are `"00"`, the result is the value that, subtracted from 98,
/// yields valid check digits; see [`calculate_check_digits`].
///
/// # Examples
///
/// ```
/// assert_eq!(ibankit::modulo97::checksum("NL91 ABNA 0417 1643 00").unwrap(), 1);
/// ```
pub fn checksum(input: &str) -> Result<u32, IbanError> {
    if input.chars().filter(|c| *c != ' ').count() < 5 {
        return Err(IbanError::TooShort {
            input: input.to_owned(),
        });
    }
    // Worst case every character expands to two digits.
    let mut digits = Vec::with_capacity(input.len() * 2);
    let (prefix, rest) = split_rotation(input);
    transform(rest, input, &mut digits)?;
    transform(prefix, input, &mut digits)?;

    let mut remainder: u64 = 0;
    for chunk in digits.chunks(CHUNK_DIGITS) {
        for &digit in chunk {
            remainder = remainder * 10 + u64::from(digit);
        }
        remainder %= 97;
    }
    Ok(remainder as u32)
}

/// Calculates the check digits to be used in a MOD-97 checked string.
///
/// The characters at offsets 2 and 3 must be `'0'`, otherwise
/// [`IbanError::MalformedCheckDigits`] is returned. The result is the
/// two-digit value to substitute at offsets 2–3 to make the input verify.
///
/// ```
/// assert_eq!(ibankit::modulo97::calculate_check_digits("NL00ABNA0417164300").unwrap(), 91);
/// ```
pub fn calculate_check_digits(input: &str) -> Result<u32, IbanError> {
    let bytes = input.as_bytes();
    if bytes.len() < 5 || bytes[2] != b'0' || bytes[3] != b'0' {
        return Err(IbanError::MalformedCheckDigits {
            input: input.to_owned(),
        });
    }
    Ok(98 - checksum(input)?)
}

/// Calculates the check digits for a given country code and BBAN.
///
/// The country code must be exactly two characters and contain no space,
/// otherwise [`IbanError::InvalidCountryCode`] is returned. Neither argument
/// is validated against the reference data; this builds `CC + "00" + bban`
/// and delegates to [`calculate_check_digits`].
pub fn calculate_check_digits_for(country_code: &str, bban: &str) -> Result<u32, IbanError> {
    if country_code.chars().count() != 2 || country_code.contains(' ') {
        return Err(IbanError::InvalidCountryCode {
            country_code: country_code.to_owned(),
        });
    }
    calculate_check_digits(&format!("{country_code}00{bban}"))
}

/// Determines whether the given input has a valid MOD-97 checksum.
///
/// Contract violations (invalid characters, too-short input) propagate as
/// errors rather than reading as `false`.
pub fn verify_check_digits(input: &str) -> Result<bool, IbanError> {
    Ok(checksum(input)? == 1)
}

/// Splits the input after its fourth character, so the country+check-digit
/// prefix can be moved to the tail.
fn split_rotation(input: &str) -> (&str, &str) {
    match input.char_indices().nth(4) {
        Some((cut, _)) => input.split_at(cut),
        // Unreachable after the five-character precondition, but harmless.
        None => (input, ""),
    }
}

/// Appends the numeric transformation of `src` to `digits`, skipping spaces.
/// `full` is the complete original input, used only for error reporting.
fn transform(src: &str, full: &str, digits: &mut Vec<u8>) -> Result<(), IbanError> {
    for c in src.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            'A'..='Z' => {
                let value = 10 + (c as u8 - b'A');
                digits.push(value / 10);
                digits.push(value % 10);
            }
            'a'..='z' => {
                let value = 10 + (c as u8 - b'a');
                digits.push(value / 10);
                digits.push(value % 10);
            }
            ' ' => {}
            _ => {
                return Err(IbanError::InvalidCharacter {
                    character: c,
                    input: full.to_owned(),
                });
            }
        }
    }
    Ok(())
}
