//! Default parameters and per-call overrides.
//!
//! A [`Defaults`] value is built once, typically at startup or from a configuration file, and
//! then only ever borrowed. Each call supplies partial options that [`HotpOptions::resolve`] or
//! [`TotpOptions::resolve`] merge over those defaults, producing a fully-resolved, validated
//! parameter set for the engines.

use serde::{Deserialize, Deserializer, Serialize};

use crate::digest::Algorithm;
use crate::digits::Digits;
use crate::error::{Error, Result};
use crate::secret::{self, Secret};
use crate::totp;

/// Process-wide default parameters.
///
/// Every field has a default, so a partially specified configuration deserializes cleanly:
///
/// ```
/// let defaults: otpkit::Defaults = serde_json::from_str(r#"{ "digits": 8 }"#).unwrap();
/// assert_eq!(defaults.digits.get(), 8);
/// assert_eq!(defaults.period, 30);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Length of generated codes.
    pub digits: Digits,
    /// TOTP time step, in seconds.
    pub period: u64,
    /// HMAC hash.
    pub algorithm: Algorithm,
    /// HOTP counter.
    pub counter: u64,
    /// Steps checked on each side of the expected counter during validation.
    pub window: u32,
    /// Byte length of generated secrets, at most [`Secret::MAX_LENGTH`].
    #[serde(deserialize_with = "deserialize_secret_length")]
    pub secret_length: usize,
    /// Account label used in provisioning URLs.
    pub label: String,
    /// Issuer used in provisioning URLs; empty means none.
    pub issuer: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            digits: Digits::default(),
            period: 30,
            algorithm: Algorithm::Sha1,
            counter: 0,
            window: 1,
            secret_length: Secret::DEFAULT_LENGTH,
            label: "OTPAuth".to_owned(),
            issuer: String::new(),
        }
    }
}

fn deserialize_secret_length<'de, D>(deserializer: D) -> core::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let length = usize::deserialize(deserializer)?;
    secret::check_length(length).map_err(serde::de::Error::custom)
}

pub(crate) fn check_period(period: u64) -> Result<u64> {
    if period == 0 {
        log::debug!("rejected zero TOTP period");
        return Err(Error::InvalidParameter(
            "period must be greater than zero".into(),
        ));
    }
    Ok(period)
}

/// Per-call HOTP overrides. `None` falls back to [`Defaults`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotpOptions {
    pub counter: Option<u64>,
    pub digits: Option<u8>,
    pub algorithm: Option<Algorithm>,
    pub window: Option<u32>,
}

/// Fully-resolved HOTP parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HotpParams {
    pub counter: u64,
    pub digits: Digits,
    pub algorithm: Algorithm,
    pub window: u32,
}

impl HotpOptions {
    /// Fills unset fields from `defaults` and validates the result.
    pub fn resolve(&self, defaults: &Defaults) -> Result<HotpParams> {
        Ok(HotpParams {
            counter: self.counter.unwrap_or(defaults.counter),
            digits: self.digits.map_or(Ok(defaults.digits), Digits::new)?,
            algorithm: self.algorithm.unwrap_or(defaults.algorithm),
            window: self.window.unwrap_or(defaults.window),
        })
    }
}

/// Per-call TOTP overrides. `None` falls back to [`Defaults`]; a missing `current_time` means
/// the system clock.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpOptions {
    pub period: Option<u64>,
    pub digits: Option<u8>,
    pub algorithm: Option<Algorithm>,
    pub window: Option<u32>,
    /// Seconds since the Unix epoch.
    pub current_time: Option<u64>,
}

/// Fully-resolved TOTP parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TotpParams {
    pub period: u64,
    pub digits: Digits,
    pub algorithm: Algorithm,
    pub window: u32,
    pub current_time: u64,
}

impl TotpOptions {
    /// Fills unset fields from `defaults` and validates the result.
    pub fn resolve(&self, defaults: &Defaults) -> Result<TotpParams> {
        Ok(TotpParams {
            period: check_period(self.period.unwrap_or(defaults.period))?,
            digits: self.digits.map_or(Ok(defaults.digits), Digits::new)?,
            algorithm: self.algorithm.unwrap_or(defaults.algorithm),
            window: self.window.unwrap_or(defaults.window),
            current_time: self.current_time.unwrap_or_else(totp::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let defaults = Defaults::default();
        assert_eq!(defaults.digits.get(), 6);
        assert_eq!(defaults.period, 30);
        assert_eq!(defaults.algorithm, Algorithm::Sha1);
        assert_eq!(defaults.counter, 0);
        assert_eq!(defaults.window, 1);
        assert_eq!(defaults.secret_length, 20);
        assert_eq!(defaults.label, "OTPAuth");
        assert_eq!(defaults.issuer, "");
    }

    #[test]
    fn deserialize_partial() {
        let defaults: Defaults =
            serde_json::from_str(r#"{"algorithm": "SHA256", "window": 2, "issuer": "Acme"}"#)
                .unwrap();
        assert_eq!(defaults.algorithm, Algorithm::Sha256);
        assert_eq!(defaults.window, 2);
        assert_eq!(defaults.issuer, "Acme");
        assert_eq!(defaults.digits.get(), 6);
        assert_eq!(defaults.label, "OTPAuth");
    }

    #[test]
    fn deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<Defaults>(r#"{"digits": 12}"#).is_err());
        assert!(serde_json::from_str::<Defaults>(r#"{"algorithm": "MD5"}"#).is_err());
        assert!(serde_json::from_str::<Defaults>(r#"{"algorithm": "sha1"}"#).is_err());
    }

    #[test]
    fn deserialize_bounds_secret_length() {
        let defaults: Defaults = serde_json::from_str(r#"{"secret_length": 1024}"#).unwrap();
        assert_eq!(defaults.secret_length, Secret::MAX_LENGTH);
        assert!(serde_json::from_str::<Defaults>(r#"{"secret_length": 1025}"#).is_err());
        assert!(
            serde_json::from_str::<Defaults>(r#"{"secret_length": 18446744073709551615}"#)
                .is_err()
        );
    }

    #[test]
    fn serialize_round_trip() {
        let defaults = Defaults {
            algorithm: Algorithm::Sha512,
            ..Defaults::default()
        };
        let json = serde_json::to_string(&defaults).unwrap();
        assert!(json.contains(r#""algorithm":"SHA512""#));
        assert!(json.contains(r#""digits":6"#));
        assert_eq!(serde_json::from_str::<Defaults>(&json).unwrap(), defaults);
    }

    #[test]
    fn hotp_overrides_win() {
        let defaults = Defaults::default();
        let params = HotpOptions {
            counter: Some(9),
            digits: Some(8),
            algorithm: Some(Algorithm::Sha256),
            window: Some(0),
        }
        .resolve(&defaults)
        .unwrap();
        assert_eq!(params.counter, 9);
        assert_eq!(params.digits.get(), 8);
        assert_eq!(params.algorithm, Algorithm::Sha256);
        assert_eq!(params.window, 0);
    }

    #[test]
    fn hotp_falls_back_to_defaults() {
        let defaults = Defaults {
            counter: 4,
            window: 3,
            ..Defaults::default()
        };
        let params = HotpOptions::default().resolve(&defaults).unwrap();
        assert_eq!(params.counter, 4);
        assert_eq!(params.window, 3);
        assert_eq!(params.digits.get(), 6);
    }

    #[test]
    fn hotp_rejects_bad_digits() {
        let options = HotpOptions {
            digits: Some(0),
            ..HotpOptions::default()
        };
        assert!(matches!(
            options.resolve(&Defaults::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn totp_rejects_zero_period() {
        let options = TotpOptions {
            period: Some(0),
            current_time: Some(0),
            ..TotpOptions::default()
        };
        assert!(matches!(
            options.resolve(&Defaults::default()),
            Err(Error::InvalidParameter(_))
        ));
        let defaults = Defaults {
            period: 0,
            ..Defaults::default()
        };
        assert!(TotpOptions::default().resolve(&defaults).is_err());
    }

    #[test]
    fn totp_uses_given_time() {
        let options = TotpOptions {
            period: Some(60),
            current_time: Some(1234),
            ..TotpOptions::default()
        };
        let params = options.resolve(&Defaults::default()).unwrap();
        assert_eq!(params.period, 60);
        assert_eq!(params.current_time, 1234);
    }

    #[test]
    fn totp_defaults_to_clock() {
        let before = totp::now();
        let params = TotpOptions::default()
            .resolve(&Defaults::default())
            .unwrap();
        assert!(params.current_time >= before);
    }
}
