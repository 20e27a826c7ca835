//! Shared secret container.
//!
//! As per [RFC 4226][4226], "each HOTP generator has a different and unique secret." A [`Secret`]
//! owns those bytes and converts them to and from the textual encodings secrets travel in.
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226

use core::fmt;

use ring::rand::{SecureRandom, SystemRandom};

use crate::base32;
use crate::config::Defaults;
use crate::error::{Error, Result};

/// Immutable byte buffer holding a shared secret.
///
/// `Debug` prints only the length so that secrets do not leak into logs.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Byte length of generated secrets when none is requested (160 bits, the RFC 4226
    /// recommendation).
    pub const DEFAULT_LENGTH: usize = 20;

    /// Longest secret [`Secret::generate`] will draw, in bytes.
    pub const MAX_LENGTH: usize = 1024;

    /// Wraps the given bytes as-is. Any length, including zero, is accepted.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Draws `length` bytes from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `length` exceeds [`Secret::MAX_LENGTH`], and
    /// [`Error::RandomnessFailure`] if the source cannot supply the bytes. There is no fallback
    /// to a weaker generator.
    pub fn generate(length: usize) -> Result<Self> {
        let mut bytes = vec![0u8; check_length(length)?];
        SystemRandom::new().fill(&mut bytes).map_err(|err| {
            log::debug!("secure random source failed for {} bytes", length);
            Error::from(err)
        })?;
        log::debug!("generated {}-byte secret", length);
        Ok(Self { bytes })
    }

    /// [`Secret::generate`] with [`Secret::DEFAULT_LENGTH`].
    pub fn generate_default() -> Result<Self> {
        Self::generate(Self::DEFAULT_LENGTH)
    }

    /// One byte per character; fails for characters above U+00FF.
    pub fn from_latin1(text: &str) -> Result<Self> {
        text.chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| {
                    Error::InvalidSecretEncoding(format!("{:?} is not a Latin-1 character", c))
                })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self::new)
    }

    /// The UTF-8 bytes of `text`.
    pub fn from_utf8(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Decodes Base32 text, skipping characters outside the alphabet.
    pub fn from_base32(text: &str) -> Self {
        Self::new(base32::decode(text))
    }

    /// Decodes an even-length string of hex digits, in either case.
    pub fn from_hex(text: &str) -> Result<Self> {
        Ok(Self::new(hex::decode(text)?))
    }

    /// Each byte as the character with the same code point.
    pub fn to_latin1(&self) -> String {
        self.bytes.iter().map(|&b| char::from(b)).collect()
    }

    /// The bytes as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSecretEncoding`] if the bytes are not valid UTF-8, since a Rust
    /// string cannot hold them losslessly.
    pub fn to_utf8(&self) -> Result<String> {
        String::from_utf8(self.bytes.clone())
            .map_err(|err| Error::InvalidSecretEncoding(err.to_string()))
    }

    /// Padded Base32.
    pub fn to_base32(&self) -> String {
        base32::encode(&self.bytes)
    }

    /// Upper-case hex.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    /// The raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length secret.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub(crate) fn check_length(length: usize) -> Result<usize> {
    if length > Secret::MAX_LENGTH {
        log::debug!("rejected secret length of {} bytes", length);
        return Err(Error::InvalidParameter(format!(
            "secret length must be at most {} bytes, got {}",
            Secret::MAX_LENGTH,
            length
        )));
    }
    Ok(length)
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Secret {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Generates a fresh `length`-byte secret and returns it as unpadded, upper-case Base32.
///
/// This is the form handed to users and embedded in provisioning URLs.
pub fn generate_secret(length: usize) -> Result<String> {
    Ok(base32::clean(&Secret::generate(length)?.to_base32()))
}

/// [`generate_secret`] with the length configured in `defaults`.
pub fn generate_secret_with(defaults: &Defaults) -> Result<String> {
    generate_secret(defaults.secret_length)
}
