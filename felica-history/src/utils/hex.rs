//! Hexadecimal helpers for diagnostic output of request/response frames.
//!
//! Output is uppercase with two characters per byte. `parse_hex` accepts
//! either case and ignores ASCII whitespace so fixtures can be written as
//! spaced dumps.

use crate::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX_DIGITS[(b >> 4) as usize] as char);
        s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    s
}

/// Uppercase hex with a single space between bytes.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        s.push_str(&bytes_to_hex(std::slice::from_ref(b)));
    }
    s
}

/// Parse a hex string into bytes, skipping ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidInput("hex string has odd length".to_string()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0].to_digit(16);
            let lo = pair[1].to_digit(16);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok(((hi << 4) | lo) as u8),
                _ => Err(Error::InvalidInput(format!(
                    "invalid hex pair '{}{}'",
                    pair[0], pair[1]
                ))),
            }
        })
        .collect()
}
