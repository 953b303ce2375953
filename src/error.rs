use thiserror::Error;

/// Errors raised by IBAN validation, composition, and checksum computation.
///
/// Every variant carries the offending value so callers can report exactly
/// which rule was violated. Validation never coerces a failure into a
/// default result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// The input string was empty.
    #[error("input is empty")]
    EmptyInput,

    /// The input begins or ends in a character that is not a letter or digit.
    /// Interior separators are tolerated; leading or trailing ones are not.
    #[error("input begins or ends in an invalid character: {input:?}")]
    InvalidBoundaryCharacter {
        /// The rejected input.
        input: String,
    },

    /// The input has fewer than five non-space characters.
    #[error("length is too short to be an IBAN: {input:?}")]
    TooShort {
        /// The rejected input.
        input: String,
    },

    /// The two-letter country code is not present in the reference data.
    #[error("unknown country code: {country_code:?}")]
    UnknownCountryCode {
        /// The unrecognized country code.
        country_code: String,
    },

    /// The input length does not match the expected IBAN length for its country.
    #[error("wrong length {actual} for {iban:?}, expected {expected}")]
    LengthMismatch {
        /// The rejected input, in plain form.
        iban: String,
        /// The length the country's IBAN format requires.
        expected: usize,
        /// The length the input actually has.
        actual: usize,
    },

    /// The MOD-97 checksum did not verify to 1.
    #[error("wrong check sum for {iban:?}")]
    ChecksumFailure {
        /// The rejected input, in plain form.
        iban: String,
    },

    /// The characters at offsets 2 and 3 are not the digits required there:
    /// ASCII digits when parsing, the `"00"` placeholder when calculating
    /// check digits.
    #[error("characters at offsets 2 and 3 must be digits: {input:?}")]
    MalformedCheckDigits {
        /// The rejected input.
        input: String,
    },

    /// The checksum engine encountered a character outside `[A-Za-z0-9 ]`.
    #[error("invalid character {character:?} in {input:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The input it appeared in.
        input: String,
    },

    /// A country code argument was not exactly two space-free characters.
    #[error("country code must be two characters without spaces: {country_code:?}")]
    InvalidCountryCode {
        /// The rejected country code argument.
        country_code: String,
    },
}
