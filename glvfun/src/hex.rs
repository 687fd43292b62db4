//! Utility module for decoding hex encoded integers such as curve constants
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;

/// Error representing a failed conversion from hex into an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The string contained a character that is not a hex digit.
    InvalidHex,
    /// The string had no digits.
    Empty,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use HexError::*;
        match self {
            InvalidHex => write!(f, "invalid hex string"),
            Empty => write!(f, "hex string had no digits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

fn hex_val(c: u8) -> Result<u8, HexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(HexError::InvalidHex),
    }
}

/// Decode a big-endian hex string into an unsigned integer.
///
/// An optional `0x` prefix is accepted and the string may have an odd number of digits.
///
/// # Examples
/// ```
/// use glvfun::hex;
/// use num_bigint::BigUint;
/// assert_eq!(hex::decode_uint("0x1f").unwrap(), BigUint::from(31u32));
/// assert_eq!(hex::decode_uint("abc").unwrap(), BigUint::from(0xabcu32));
/// assert!(hex::decode_uint("0xzz").is_err());
/// ```
pub fn decode_uint(hex: &str) -> Result<BigUint, HexError> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if hex.is_empty() {
        return Err(HexError::Empty);
    }
    let digits = hex
        .as_bytes()
        .iter()
        .map(|c| hex_val(*c))
        .collect::<Result<Vec<u8>, _>>()?;

    BigUint::from_radix_be(&digits, 16).ok_or(HexError::InvalidHex)
}
