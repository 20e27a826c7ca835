//! Validated one-time code length.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of decimal digits in a generated code.
///
/// [RFC 4226][4226] requires at least 6 digits and allows 7 or 8, with Appendix E adding 9.
/// Provisioning URLs in the wild also carry shorter and 10-digit lengths, so this type accepts
/// anything in `1..=10`. Dynamic truncation yields a 31-bit value, and the reduction modulus is
/// computed in 64 bits, so a 10-digit code never overflows.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digits(u8);

impl Digits {
    /// Fewest digits accepted.
    pub const MIN: u8 = 1;
    /// Most digits accepted.
    pub const MAX: u8 = 10;

    /// Checks that `digits` lies within [`Digits::MIN`]..=[`Digits::MAX`].
    pub fn new(digits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            log::debug!("rejected code length of {} digits", digits);
            Err(Error::InvalidParameter(format!(
                "digits must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                digits
            )))
        }
    }

    /// The digit count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// `10^digits`, the modulus applied to a truncated digest.
    pub fn modulus(self) -> u64 {
        10_u64.pow(u32::from(self.0))
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(6)
    }
}

impl TryFrom<u8> for Digits {
    type Error = Error;
    fn try_from(digits: u8) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<Digits> for u8 {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
