//! Time-based one-time passwords ([RFC 6238][6238]).
//!
//! TOTP is HOTP with the counter replaced by the number of whole periods elapsed since the Unix
//! epoch (`T0 = 0`). The current time is always a parameter so that results are reproducible;
//! [`now`] reads the system clock for callers that want it.
//!
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{check_period, Defaults, TotpOptions};
use crate::digest::Algorithm;
use crate::error::Result;
use crate::hotp::{self, decode_key, matches_window};

/// Seconds since the Unix epoch. A clock set before 1970 reads as zero.
pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// The HOTP counter for `time`: `floor(time / period)`.
pub fn time_step(time: u64, period: u64) -> Result<u64> {
    Ok(time / check_period(period)?)
}

/// Seconds until the code valid at `time` expires, in `1..=period`.
pub fn seconds_remaining(time: u64, period: u64) -> Result<u64> {
    let period = check_period(period)?;
    Ok(period - time % period)
}

/// Fraction of the current period already elapsed, in `[0, 1)`.
pub fn progress(time: u64, period: u64) -> Result<f64> {
    let period = check_period(period)?;
    Ok((time % period) as f64 / period as f64)
}

/// Computes the TOTP code for a Base32 secret at `time`.
///
/// # Errors
///
/// Fails if `period` is zero, `digits` is outside `1..=10`, or the secret decodes to no bytes.
pub fn generate(
    secret: &str,
    period: u64,
    digits: u8,
    algorithm: Algorithm,
    time: u64,
) -> Result<String> {
    hotp::generate(secret, time_step(time, period)?, digits, algorithm)
}

/// Checks `code` against the time steps `window` periods either side of `time`.
///
/// # Errors
///
/// Fails if `period` is zero, `digits` is outside `1..=10`, or the secret decodes to no bytes.
pub fn validate(
    secret: &str,
    code: &str,
    period: u64,
    digits: u8,
    algorithm: Algorithm,
    window: u32,
    time: u64,
) -> Result<bool> {
    hotp::validate(
        secret,
        code,
        time_step(time, period)?,
        digits,
        algorithm,
        window,
    )
}

/// [`generate`] with parameters merged from `options` over `defaults`.
pub fn generate_with(secret: &str, options: &TotpOptions, defaults: &Defaults) -> Result<String> {
    let params = options.resolve(defaults)?;
    let key = decode_key(secret)?;
    let counter = params.current_time / params.period;
    Ok(hotp::token(&key, counter, params.digits, params.algorithm).to_string())
}

/// [`validate`] with parameters merged from `options` over `defaults`.
pub fn validate_with(
    secret: &str,
    code: &str,
    options: &TotpOptions,
    defaults: &Defaults,
) -> Result<bool> {
    let params = options.resolve(defaults)?;
    let key = decode_key(secret)?;
    Ok(matches_window(
        &key,
        code,
        params.current_time / params.period,
        params.digits,
        params.algorithm,
        params.window,
    ))
}

/// Seconds until the code generated for `options` expires.
pub fn expires_in(options: &TotpOptions, defaults: &Defaults) -> Result<u64> {
    let params = options.resolve(defaults)?;
    seconds_remaining(params.current_time, params.period)
}
