//! One-time passwords: HOTP ([RFC 4226][4226]) and TOTP ([RFC 6238][6238]), Base32 secrets, and
//! `otpauth://` provisioning URLs.
//!
//! Every engine is a plain function of its inputs. Defaults live in a [`Defaults`] value that the
//! caller owns and lends to the `*_with` entry points; nothing in this crate holds global state.
//!
//! ```
//! use otpkit::{hotp, totp, Algorithm};
//!
//! // "12345678901234567890" in Base32
//! let secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
//! assert_eq!(hotp::generate(secret, 0u64, 6, Algorithm::Sha1).unwrap(), "755224");
//! assert_eq!(totp::generate(secret, 30, 8, Algorithm::Sha1, 59).unwrap(), "94287082");
//! assert!(totp::validate(secret, "287082", 30, 6, Algorithm::Sha1, 1, 59).unwrap());
//! ```
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

pub mod auth_url;
pub mod base32;
pub mod config;
pub mod digest;
pub mod digits;
pub mod error;
pub mod format;
pub mod hotp;
pub mod secret;
pub mod totp;

pub use auth_url::{AuthUrlOptions, OtpKind};
pub use config::{Defaults, HotpOptions, HotpParams, TotpOptions, TotpParams};
pub use digest::{Algorithm, Digest, HmacDigest, Token};
pub use digits::Digits;
pub use error::{Error, Result};
pub use hotp::Counter;
pub use secret::{generate_secret, generate_secret_with, Secret};
