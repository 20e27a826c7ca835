//! `otpauth://` provisioning URLs, in the [Key URI format][kuf] read by authenticator apps.
//!
//! ```text
//! otpauth://totp/ISSUER:LABEL?issuer=ISSUER&secret=SECRET&algorithm=SHA1&digits=6&period=30
//! ```
//!
//! Label, issuer and secret are percent-encoded byte-wise; only ASCII letters, digits and
//! `- _ . ~` are left as-is.
//!
//! [kuf]: https://github.com/google/google-authenticator/wiki/Key-Uri-Format

use core::fmt;

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config::{check_period, Defaults};
use crate::digest::Algorithm;
use crate::digits::Digits;
use crate::error::{Error, Result};

/// Which engine the URL provisions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpKind {
    Hotp,
    Totp,
}

impl fmt::Display for OtpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OtpKind::Hotp => "hotp",
            OtpKind::Totp => "totp",
        })
    }
}

/// Everything that goes into a provisioning URL. Unset fields fall back to [`Defaults`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUrlOptions {
    /// Base32 secret. Required.
    pub secret: String,
    /// Account name.
    pub label: Option<String>,
    /// Service or provider name.
    pub issuer: Option<String>,
    /// Prefix the label with `issuer:`.
    pub issuer_in_label: bool,
    /// HMAC hash.
    pub algorithm: Option<Algorithm>,
    /// Code length.
    pub digits: Option<u8>,
    /// Used for TOTP only.
    pub period: Option<u64>,
    /// Used for HOTP only.
    pub counter: Option<u64>,
}

impl AuthUrlOptions {
    /// Options for `secret` with everything else left to [`Defaults`](crate::Defaults).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Sets the account label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Chooses whether the label is prefixed with `issuer:`.
    pub fn with_issuer_in_label(mut self, issuer_in_label: bool) -> Self {
        self.issuer_in_label = issuer_in_label;
        self
    }

    /// Sets the HMAC hash.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the code length.
    pub fn with_digits(mut self, digits: u8) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Sets the TOTP period in seconds.
    pub fn with_period(mut self, period: u64) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the HOTP counter.
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = Some(counter);
        self
    }
}

/// Builds an `otpauth://hotp/...` or `otpauth://totp/...` URL.
///
/// Query parameters are emitted in a fixed order: `issuer` (only when non-empty), `secret`,
/// `algorithm`, `digits`, then `counter` for HOTP or `period` for TOTP.
///
/// # Errors
///
/// Fails with [`Error::InvalidParameter`] if the secret is empty, `digits` is outside `1..=10`,
/// or a TOTP period is zero.
pub fn build(kind: OtpKind, options: &AuthUrlOptions, defaults: &Defaults) -> Result<String> {
    if options.secret.is_empty() {
        return Err(Error::InvalidParameter("secret is required".into()));
    }

    let label = options.label.as_deref().unwrap_or(&defaults.label);
    let issuer = options.issuer.as_deref().unwrap_or(&defaults.issuer);
    let algorithm = options.algorithm.unwrap_or(defaults.algorithm);
    let digits = options.digits.map_or(Ok(defaults.digits), Digits::new)?;

    let mut url = format!("otpauth://{}/", kind);

    if issuer.is_empty() {
        url.push_str(&format!("{}?", encode(label)));
    } else {
        if options.issuer_in_label {
            url.push_str(&format!("{}:", encode(issuer)));
        }
        url.push_str(&format!("{}?issuer={}&", encode(label), encode(issuer)));
    }

    url.push_str(&format!(
        "secret={}&algorithm={}&digits={}",
        encode(&options.secret),
        encode(algorithm.name()),
        digits
    ));

    match kind {
        OtpKind::Hotp => {
            let counter = options.counter.unwrap_or(defaults.counter);
            url.push_str(&format!("&counter={}", counter));
        }
        OtpKind::Totp => {
            let period = check_period(options.period.unwrap_or(defaults.period))?;
            url.push_str(&format!("&period={}", period));
        }
    }

    Ok(url)
}
