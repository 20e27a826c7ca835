//! Presentation helpers for codes and secret keys.
//!
//! These only reshape strings for display or input; they never touch key material.

use crate::digits::Digits;

/// True if `otp` contains exactly `digits` decimal digits, ignoring any other characters.
pub fn is_otp_valid(otp: &str, digits: Digits) -> bool {
    otp.chars().filter(char::is_ascii_digit).count() == usize::from(digits.get())
}

/// Inserts a space after every run of three digits that is followed by another digit.
///
/// `"123456"` becomes `"123 456"` and `"12345678"` becomes `"123 456 78"`. Codes that fail
/// [`is_otp_valid`] are returned unchanged.
pub fn format_otp(otp: &str, digits: Digits) -> String {
    if !is_otp_valid(otp, digits) {
        return otp.to_owned();
    }

    let chars: Vec<char> = otp.chars().collect();
    let mut out = String::with_capacity(otp.len() + chars.len() / 3);
    let mut i = 0;
    while i < chars.len() {
        let group = chars.get(i..i + 4);
        if group.map_or(false, |g| g.iter().all(char::is_ascii_digit)) {
            out.extend(&chars[i..i + 3]);
            out.push(' ');
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// True if `key` has exactly `length` characters once hyphens are removed.
pub fn is_secret_key_valid(key: &str, length: usize) -> bool {
    key.chars().filter(|&c| c != '-').count() == length
}

/// Hyphenates the first sixteen characters of a valid key as `AAAA-BBBB-CCCC-DDDD`.
///
/// Existing hyphens are discarded first and anything past the sixteenth character is appended
/// as-is. Keys shorter than sixteen characters come back without hyphens. Keys that fail
/// [`is_secret_key_valid`] are returned unchanged.
pub fn format_secret_key(key: &str, length: usize) -> String {
    if !is_secret_key_valid(key, length) {
        return key.to_owned();
    }

    let chars: Vec<char> = key.chars().filter(|&c| c != '-').collect();
    if chars.len() < 16 {
        return chars.into_iter().collect();
    }
    let mut out: String = chars[..16]
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-");
    out.extend(&chars[16..]);
    out
}

/// Removes the hyphens from a valid key. Keys that fail [`is_secret_key_valid`] are returned
/// unchanged.
pub fn parse_secret_key(key: &str, length: usize) -> String {
    if !is_secret_key_valid(key, length) {
        return key.to_owned();
    }
    key.replace('-', "")
}
