//! Byte quantities as they appear in Oracle size clauses.
//!
//! A size clause is either a plain byte count, a number with a binary unit
//! suffix (`100M`, `0.5G`), or the literal `unlimited`. See
//! <https://docs.oracle.com/en/database/oracle/oracle-database/19/sqlrf/size_clause.html>.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Errors raised when a size literal cannot be turned into a [`Size`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    #[error("unrecognized size literal: {0:?}")]
    Unrecognized(String),
    #[error("size literal out of range: {0:?}")]
    OutOfRange(String),
}

/// A byte quantity with an `unlimited` sentinel.
///
/// The magnitude is a `u128` so that every unit the suffix grammar accepts
/// stays representable (`1024E` is 2^70 bytes). When `unlimited` is set the
/// magnitude carries no meaning.
#[derive(Debug, Clone, Copy)]
pub struct Size {
    bytes: u128,
    unlimited: bool,
}

impl Size {
    pub const UNLIMITED: Self = Self {
        bytes: 0,
        unlimited: true,
    };

    pub const fn from_bytes(bytes: u128) -> Self {
        Self {
            bytes,
            unlimited: false,
        }
    }

    pub const fn is_unlimited(&self) -> bool {
        self.unlimited
    }

    /// Finite magnitude in bytes, `None` for the unlimited sentinel.
    pub const fn as_bytes(&self) -> Option<u128> {
        if self.unlimited { None } else { Some(self.bytes) }
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Ok(bytes) = raw.parse::<u128>() {
            return Ok(Self::from_bytes(bytes));
        }
        if raw.eq_ignore_ascii_case("unlimited") {
            return Ok(Self::UNLIMITED);
        }

        let mut chars = raw.chars();
        let unit = chars
            .next_back()
            .ok_or_else(|| SizeParseError::Unrecognized(raw.to_owned()))?;
        let number = chars.as_str();
        let rank = UNITS
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(&unit))
            .ok_or_else(|| SizeParseError::Unrecognized(raw.to_owned()))?;
        let scale = 1024u128.pow(rank as u32 + 1);

        // Integral magnitudes stay in exact integer arithmetic so that
        // formatting and reparsing a size is lossless; fractional ones go
        // through f64 before truncation (`0.5M` is 512K).
        if let Ok(whole) = number.parse::<u128>() {
            let bytes = whole
                .checked_mul(scale)
                .ok_or_else(|| SizeParseError::OutOfRange(raw.to_owned()))?;
            return Ok(Self::from_bytes(bytes));
        }
        if !is_decimal(number) {
            return Err(SizeParseError::Unrecognized(raw.to_owned()));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| SizeParseError::Unrecognized(raw.to_owned()))?;
        let scaled = value * scale as f64;
        if !scaled.is_finite() || scaled > u128::MAX as f64 {
            return Err(SizeParseError::OutOfRange(raw.to_owned()));
        }
        Ok(Self::from_bytes(scaled as u128))
    }
}

/// `<digits>` or `<digits>.<digits>`, nothing else.
fn is_decimal(number: &str) -> bool {
    let mut parts = number.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next();
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for Size {
    /// Canonical form: divide by 1024 while evenly divisible and emit the
    /// unit matching the number of divisions. A magnitude that survives a
    /// seventh division gets the `Z` suffix, which is an artifact of the
    /// loop rather than a unit the parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unlimited {
            return f.write_str("unlimited");
        }
        if self.bytes == 0 {
            return f.write_str("0");
        }
        let mut num = self.bytes;
        for unit in ["", "K", "M", "G", "T", "P", "E"] {
            if num % 1024 != 0 {
                return write!(f, "{num}{unit}");
            }
            num /= 1024;
        }
        write!(f, "{num}Z")
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        if self.unlimited || other.unlimited {
            self.unlimited && other.unlimited
        } else {
            self.bytes == other.bytes
        }
    }
}

impl Eq for Size {}

impl PartialOrd for Size {
    /// Unlimited dominates every finite size. Two unlimited sizes compare
    /// equal, so reflexive `<` and `>` are both false.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.unlimited, other.unlimited) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => self.bytes.partial_cmp(&other.bytes),
        }
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(raw: &str) -> Size {
        raw.parse().unwrap()
    }

    #[test]
    fn to_string_unlimited() {
        assert_eq!("unlimited", size("unlimited").to_string());
        assert_eq!("unlimited", size("UNLIMITED").to_string());
    }

    #[test]
    fn to_string_int() {
        assert_eq!("123", Size::from_bytes(123).to_string());
        assert_eq!("123K", Size::from_bytes(125952).to_string());
        assert_eq!("0", Size::from_bytes(0).to_string());
    }

    #[test]
    fn to_string_oracle_format() {
        assert_eq!("15M", size("15M").to_string());
        assert_eq!("123M", size("125952K").to_string());
        assert_eq!("512K", size("0.5M").to_string());
        assert_eq!("1Z", size("1024E").to_string());
        assert_eq!("1280K", size("1280K").to_string());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(size("15m"), size("15M"));
        assert_eq!(size("1g"), Size::from_bytes(1024 * 1024 * 1024));
    }

    #[test]
    fn parse_fractional() {
        assert_eq!(Some(512 * 1024), size("0.5M").as_bytes());
        assert_eq!(size("1.5M"), Size::from_bytes(1572864));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "foo".parse::<Size>(),
            Err(SizeParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "".parse::<Size>(),
            Err(SizeParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "10X".parse::<Size>(),
            Err(SizeParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "1.2.3M".parse::<Size>(),
            Err(SizeParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "1Z".parse::<Size>(),
            Err(SizeParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn parse_rejects_overflow() {
        let raw = format!("{}K", u128::MAX);
        assert!(matches!(
            raw.parse::<Size>(),
            Err(SizeParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn equals() {
        assert_eq!(size("10M"), size("10M"));
        assert_ne!(size("10M"), size("20M"));
        assert_ne!(size("10M"), size("unlimited"));
        assert_eq!(size("unlimited"), size("unlimited"));
        assert_ne!(size("unlimited"), Size::from_bytes(0));
    }

    #[test]
    fn compare() {
        let one = size("1M");
        let one_and_a_half = size("1.5M");
        assert!(one < one_and_a_half);
        assert!(one_and_a_half > one);
        assert!(!(one < one));
        assert!(!(one > one));
        let unlimited = size("unlimited");
        assert!(unlimited > one_and_a_half);
        assert!(!(unlimited < one_and_a_half));
        assert!(one_and_a_half < unlimited);
        assert!(!(one_and_a_half > unlimited));
        assert!(!(unlimited < unlimited));
        assert!(!(unlimited > unlimited));
    }

    #[test]
    fn format_roundtrip() {
        for bytes in [
            0u128,
            1,
            123,
            1023,
            1024,
            1280 * 1024,
            125952,
            100 * 1024 * 1024,
            32 * 1024 * 1024 * 1024,
            (1 << 63) + 1024,
        ] {
            let original = Size::from_bytes(bytes);
            let reparsed: Size = original.to_string().parse().unwrap();
            assert_eq!(original, reparsed, "roundtrip of {bytes} bytes");
        }
    }

    #[test]
    fn serializes_as_canonical_string() {
        assert_eq!(
            "\"100M\"",
            serde_json::to_string(&size("100M")).unwrap()
        );
        assert_eq!(
            "\"unlimited\"",
            serde_json::to_string(&Size::UNLIMITED).unwrap()
        );
    }
}
