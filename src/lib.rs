//! # ibankit
//!
//! Validation, parsing, formatting, and decomposition of International Bank
//! Account Numbers (IBANs) per ISO 13616 and the SWIFT IBAN Registry.
//! A pure, synchronous computation library with no network or database
//! access.
//!
//! Every successfully constructed [`Iban`] is guaranteed valid: known
//! country code, exact length for that country, and a verifying ISO 7064
//! MOD-97-10 checksum. The embedded reference data covers every country in
//! the SWIFT IBAN Registry plus the experimental list of non-registry
//! countries, and carries per-country SEPA membership and bank/branch
//! sub-field offsets.
//!
//! ## Quick Start
//!
//! ```rust
//! use ibankit::{Iban, registry};
//!
//! let iban = Iban::parse("DE89 3704 0044 0532 0130 00")?;
//! assert_eq!(iban.to_plain_string(), "DE89370400440532013000");
//! assert_eq!(iban.country_code(), "DE");
//! assert!(iban.is_sepa());
//! assert_eq!(registry::bank_identifier(&iban), Some("37040044"));
//! assert_eq!(registry::branch_identifier(&iban), None);
//!
//! // Compose from country code and BBAN; check digits are derived.
//! let composed = Iban::compose("DE", "370400440532013000")?;
//! assert_eq!(composed, iban);
//! # Ok::<(), ibankit::IbanError>(())
//! ```
//!
//! The reference data is versioned ([`registry::LAST_UPDATE_DATE`],
//! [`registry::LAST_UPDATE_REVISION`]) and regenerated when the registry
//! publishes an update.

mod error;
mod iban;
pub mod modulo97;
pub mod registry;

pub use error::IbanError;
pub use iban::{Iban, SHORTEST_POSSIBLE_IBAN, compare_nullable};
