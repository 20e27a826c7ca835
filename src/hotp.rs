//! HMAC-based one-time passwords ([RFC 4226][4226]).
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226

use subtle::ConstantTimeEq;

use crate::base32;
use crate::config::{Defaults, HotpOptions};
use crate::digest::{self, Algorithm, Digest as _, Token};
use crate::digits::Digits;
use crate::error::{Error, Result};

/// Synchronized moving counter.
///
/// [RFC 4226][4226] describes an "8-byte synchronized moving counter." The counter is always fed
/// to the HMAC as eight big-endian bytes.
///
/// `Counter` is implemented for `u64` and for raw `[u8; 8]` arrays, which are read big-endian.
///
/// [4226]: https://tools.ietf.org/html/rfc4226
pub trait Counter {
    /// The counter value as an eight-byte, big-endian, unsigned integer.
    fn value(&self) -> u64;
}

impl Counter for u64 {
    fn value(&self) -> u64 {
        *self
    }
}

impl Counter for [u8; 8] {
    fn value(&self) -> u64 {
        u64::from_be_bytes(*self)
    }
}

/// Decodes a Base32 secret into HMAC key bytes.
///
/// Decoding itself is permissive, but a secret with no Base32 content at all is rejected rather
/// than used as an empty key.
pub(crate) fn decode_key(secret: &str) -> Result<Vec<u8>> {
    let key = base32::decode(secret);
    if key.is_empty() {
        log::debug!("rejected secret with no Base32 data");
        return Err(Error::InvalidSecretEncoding(
            "secret contains no Base32 data".into(),
        ));
    }
    Ok(key)
}

/// Computes the HOTP token for raw key bytes.
pub fn token<C: Counter>(key: &[u8], counter: C, digits: Digits, algorithm: Algorithm) -> Token {
    digest::compute(algorithm, key, &counter.value().to_be_bytes()).truncate(digits)
}

/// Computes an HOTP code for a Base32 secret, zero-padded to `digits` characters.
///
/// # Errors
///
/// Fails if `digits` is outside `1..=10` or the secret decodes to no bytes.
pub fn generate<C: Counter>(
    secret: &str,
    counter: C,
    digits: u8,
    algorithm: Algorithm,
) -> Result<String> {
    let digits = Digits::new(digits)?;
    let key = decode_key(secret)?;
    Ok(token(&key, counter, digits, algorithm).to_string())
}

/// Checks `code` against every counter in `[counter - window, counter + window]`.
///
/// Counters that would fall below zero or beyond `u64::MAX` are skipped. A mismatch is
/// `Ok(false)`, not an error.
///
/// # Errors
///
/// Fails if `digits` is outside `1..=10` or the secret decodes to no bytes.
pub fn validate(
    secret: &str,
    code: &str,
    counter: u64,
    digits: u8,
    algorithm: Algorithm,
    window: u32,
) -> Result<bool> {
    let digits = Digits::new(digits)?;
    let key = decode_key(secret)?;
    Ok(matches_window(&key, code, counter, digits, algorithm, window))
}

/// Every offset in the window is computed and compared, even after a match.
pub(crate) fn matches_window(
    key: &[u8],
    code: &str,
    counter: u64,
    digits: Digits,
    algorithm: Algorithm,
    window: u32,
) -> bool {
    let window = i64::from(window);
    log::trace!(
        "checking counters {}..={} around {}",
        -window,
        window,
        counter
    );
    let mut matched = false;
    for offset in -window..=window {
        let Some(candidate) = counter.checked_add_signed(offset) else {
            continue;
        };
        let expected = token(key, candidate, digits, algorithm).to_string();
        matched |= bool::from(expected.as_bytes().ct_eq(code.as_bytes()));
    }
    matched
}

/// [`generate`] with parameters merged from `options` over `defaults`.
pub fn generate_with(secret: &str, options: &HotpOptions, defaults: &Defaults) -> Result<String> {
    let params = options.resolve(defaults)?;
    let key = decode_key(secret)?;
    Ok(token(&key, params.counter, params.digits, params.algorithm).to_string())
}

/// [`validate`] with parameters merged from `options` over `defaults`.
pub fn validate_with(
    secret: &str,
    code: &str,
    options: &HotpOptions,
    defaults: &Defaults,
) -> Result<bool> {
    let params = options.resolve(defaults)?;
    let key = decode_key(secret)?;
    Ok(matches_window(
        &key,
        code,
        params.counter,
        params.digits,
        params.algorithm,
        params.window,
    ))
}
