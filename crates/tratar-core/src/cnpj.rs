//! # CNPJ Newtype
//!
//! Domain-primitive newtype for the Brazilian company registry number
//! (Cadastro Nacional da Pessoa Jurídica). The canonical storage format
//! is 14 digits without punctuation; the display format is the masked
//! `DD.DDD.DDD/DDDD-DD` grouping.
//!
//! ## Validation
//!
//! Format is validated at construction time. Check-digit verification is
//! a separate, opt-in query: registry extracts in the wild contain
//! formally invalid numbers that still need to round-trip, so
//! [`Cnpj::new`] checks shape only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::normalize::format_cnpj_digits;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Brazilian company registry number (CNPJ).
///
/// The constructor accepts both:
/// - `"12345678000195"` (14 digits)
/// - `"12.345.678/0001-95"` (canonical mask: 2.3.3/4-2)
///
/// # Validation
///
/// - Must be exactly 14 digits after stripping the mask
/// - If punctuation is present, it must sit in the canonical positions
///
/// Arbitrary interleaved punctuation is deliberately rejected here; the
/// lenient cleanup path for raw pipeline data is
/// [`normalize_cnpj`](crate::normalize_cnpj).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from a string value, validating format.
    ///
    /// Stores in the canonical 14-digit format (mask stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if the format is invalid.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

        // Must be exactly 14 digits
        if digits.len() != 14 {
            return Err(ValidationError::InvalidCnpj(raw));
        }

        // If anything beyond digits is present, it must be the canonical
        // mask in the canonical positions.
        if trimmed.len() != digits.len() && trimmed != format_cnpj_digits(&digits) {
            return Err(ValidationError::InvalidCnpj(raw));
        }

        // Store canonical form (digits only)
        Ok(Self(digits))
    }

    /// Access the CNPJ in canonical 14-digit format (no mask).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CNPJ in masked form: `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        format_cnpj_digits(&self.0)
    }

    /// Verify the two mod-11 check digits.
    ///
    /// A CNPJ's last two digits are computed from the first twelve; this
    /// checks that the stored value is arithmetically consistent. Shape
    /// validation in [`Cnpj::new`] does not imply this holds.
    pub fn check_digits_valid(&self) -> bool {
        let digits: Vec<u32> = self
            .0
            .chars()
            .map(|c| c.to_digit(10).unwrap_or(0))
            .collect();

        let first = Self::check_digit(&digits[..12]);
        let second = Self::check_digit(&digits[..13]);
        digits[12] == first && digits[13] == second
    }

    /// Compute one mod-11 check digit over a digit prefix.
    ///
    /// Left-to-right weights descend from `prefix_len - 7` down to 2
    /// (5..2 for the first digit, 6..2 for the second), restarting at 9
    /// after 2.
    fn check_digit(prefix: &[u32]) -> u32 {
        let mut weight = (prefix.len() - 7) as u32;
        let mut sum = 0u32;
        for &d in prefix {
            sum += d * weight;
            weight = if weight == 2 { 9 } else { weight - 1 };
        }

        let rem = sum % 11;
        if rem < 2 {
            0
        } else {
            11 - rem
        }
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
