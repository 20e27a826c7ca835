//! Error types shared by every engine in this crate.

use thiserror::Error;

/// Result type alias for OTP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by generation, validation, secret handling and URL building.
///
/// A code that simply does not match is not an error; validation returns `Ok(false)`.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum Error {
    /// The hash algorithm name is not one of `SHA1`, `SHA256` or `SHA512`.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Malformed hex, Latin-1, UTF-8 or Base32 input.
    #[error("Invalid secret encoding: {0}")]
    InvalidSecretEncoding(String),

    /// A numeric parameter is out of range or a required field is missing.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The system's secure random source could not supply bytes.
    #[error("Secure random source failed to produce bytes")]
    RandomnessFailure,
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidSecretEncoding(err.to_string())
    }
}

impl From<ring::error::Unspecified> for Error {
    fn from(_: ring::error::Unspecified) -> Self {
        Error::RandomnessFailure
    }
}
