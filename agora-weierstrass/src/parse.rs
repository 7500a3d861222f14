use crate::{Error, InputError};

use num_bigint::{BigInt, BigUint, Sign};

/// Parses a signed integer written either in decimal or as `0x`-prefixed
/// hexadecimal, surrounding whitespace ignored.
pub fn parse_int(text: &str) -> Result<BigInt, Error> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };
    // NOTE this check rejects signs that `parse_bytes` would accept after ours
    if digits.is_empty() || digits.starts_with(|c| c == '+' || c == '-') {
        return Err(InputError::Parse(text.to_string()).into());
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| InputError::Parse(text.to_string()))?;

    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}

/// Converts a signed integer into a scalar, rejecting negative values.
pub fn to_scalar(value: &BigInt) -> Result<BigUint, Error> {
    value
        .to_biguint()
        .ok_or_else(|| InputError::NegativeScalar(value.clone()).into())
}

/// Parses a non-negative scalar from decimal or `0x` hex text.
pub fn parse_scalar(text: &str) -> Result<BigUint, Error> {
    to_scalar(&parse_int(text)?)
}

/// Number of hex digits needed for values of `bits` bits, padded to whole
/// bytes.
pub fn hex_width(bits: u64) -> usize {
    (bits.div_ceil(8) * 2) as usize
}

/// Lowercase `0x`-prefixed hex, left padded with zeros to `width` digits.
pub fn to_hex(value: &BigInt, width: usize) -> String {
    let digits = value.magnitude().to_str_radix(16);
    let sign = if value.sign() == Sign::Minus { "-" } else { "" };
    let padding = "0".repeat(width.saturating_sub(digits.len()));
    format!("{}0x{}{}", sign, padding, digits)
}

/// Serde adapter storing a `BigInt` as a hex string and reading it back from
/// hex or decimal text.
pub mod int_string {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(value, 0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_int(&text).map_err(de::Error::custom)
    }
}

/// Same as [`int_string`] for non-negative values.
pub mod uint_string {
    use num_bigint::{BigInt, BigUint};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(&BigInt::from(value.clone()), 0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_scalar(&text).map_err(de::Error::custom)
    }
}
