//! HMAC digest types and traits.

use core::fmt;
use core::str::FromStr;

use ring::hmac::{self, Key as HmacKey, Tag};
use serde::{Deserialize, Serialize};

use crate::digits::Digits;
use crate::error::{Error, Result};

/// Hash function underlying the HMAC.
///
/// [RFC 4226][4226] prescribes HMAC-SHA1. [RFC 6238][6238] extends TOTP to HMAC-SHA256 and
/// HMAC-SHA512. No other algorithm is accepted anywhere in this crate.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl Algorithm {
    /// Upper-case name as it appears in `otpauth://` URLs.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }

    /// Length in bytes of the HMAC output.
    pub fn output_len(self) -> usize {
        self.ring_algorithm().digest_algorithm().output_len()
    }

    fn ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => hmac::HMAC_SHA256,
            Algorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses exactly `SHA1`, `SHA256` or `SHA512`.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA512" => Ok(Algorithm::Sha512),
            _ => {
                log::debug!("rejected unsupported algorithm {:?}", name);
                Err(Error::UnsupportedAlgorithm(name.to_owned()))
            }
        }
    }
}

/// A numeric one-time code together with its length.
///
/// `Display` renders the value left-padded with zeros to exactly [`Digits`] characters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    value: u32,
    digits: Digits,
}

impl Token {
    /// The code as an integer, already reduced modulo `10^digits`.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Length the code is rendered at.
    pub fn digits(self) -> Digits {
        self.digits
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = usize::from(self.digits.get()))
    }
}

/// HMAC output produced by [`compute`].
#[derive(Clone, Debug)]
pub struct HmacDigest(Tag);

impl AsRef<[u8]> for HmacDigest {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Digest for HmacDigest {}

/// Trait enabling dynamic truncation of any digest.
///
/// Every [`Algorithm`] yields at least 20 bytes, so [`HmacDigest`] always satisfies the length
/// requirement below. The trait is kept separate so that externally computed digests (such as
/// the worked example in RFC 4226 section 5.4) can be truncated the same way.
///
/// # Notes
///
/// Implementors should take care that their digests are always at least 19 bytes long, or
/// [`Digest::truncate` will panic](#panics).
pub trait Digest: AsRef<[u8]> {
    /// Truncate an HMAC digest to a code of the given length.
    ///
    /// # Panics
    ///
    /// Truncating a digest shorter than 19 bytes unconditionally panics. This never happens for
    /// [`HmacDigest`].
    fn truncate(&self, digits: Digits) -> Token {
        let digest = self.as_ref();
        let len = digest.len();
        // The offset is at most 15 and four bytes are read from it.
        assert!(len >= 19);
        let index = usize::from(digest[len - 1] & 0xf);
        let bytes = [
            // Strip leading bit to remove signed/unsigned ambiguity
            digest[index] & 0x7f,
            digest[index + 1],
            digest[index + 2],
            digest[index + 3],
        ];

        let num = u64::from(u32::from_be_bytes(bytes));
        Token {
            value: (num % digits.modulus()) as u32,
            digits,
        }
    }
}

impl Digest for [u8] {}

/// Computes `HMAC(key, message)` with the selected hash.
///
/// The output is 20, 32 or 64 bytes long for SHA-1, SHA-256 and SHA-512 respectively.
pub fn compute(algorithm: Algorithm, key: &[u8], message: &[u8]) -> HmacDigest {
    let key = HmacKey::new(algorithm.ring_algorithm(), key);
    HmacDigest(hmac::sign(&key, message))
}

/// Like [`compute`], with the hash selected by name (`"SHA1"`, `"SHA256"`, `"SHA512"`).
///
/// # Errors
///
/// Returns [`Error::UnsupportedAlgorithm`] for any other name.
pub fn compute_named(algorithm: &str, key: &[u8], message: &[u8]) -> Result<HmacDigest> {
    Ok(compute(algorithm.parse()?, key, message))
}
