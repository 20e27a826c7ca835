//! RFC 4648 Base32 codec.
//!
//! Shared secrets are almost always exchanged as Base32 text, frequently with stray spaces,
//! hyphens or lower-case letters. [`decode`] is therefore permissive: characters outside the
//! alphabet are skipped rather than rejected, and decoding stops at the first `=`. Nothing else
//! in this crate recovers silently from malformed input.

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xff;

/// Maps every byte to its 5-bit value, or [`INVALID`]. Both letter cases are accepted.
static LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encodes bytes as padded Base32.
///
/// Bits are consumed most-significant first across byte boundaries, and the output is padded
/// with `=` to a multiple of eight characters. An empty input yields an empty string.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() + 4) / 5 * 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(ALPHABET[((buffer >> bits) & 0x1f) as usize]));
        }
        buffer &= (1 << bits) - 1;
    }

    // Flush the remaining 1-4 bits, zero-filled on the right
    if bits > 0 {
        out.push(char::from(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize]));
    }

    while out.len() % 8 != 0 {
        out.push('=');
    }

    out
}

/// Decodes Base32 text, case-insensitively.
///
/// Decoding stops at the first `=`. Characters outside the alphabet (whitespace, hyphens,
/// anything else) are skipped. Trailing bits that do not fill a whole byte are discarded.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for byte in text.bytes() {
        if byte == b'=' {
            break;
        }
        let value = LOOKUP[usize::from(byte)];
        if value == INVALID {
            continue;
        }
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    out
}

/// Upper-cases `text` and drops every character outside the Base32 alphabet, padding included.
pub fn clean(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii() && ALPHABET.contains(&(*c as u8)))
        .collect()
}
