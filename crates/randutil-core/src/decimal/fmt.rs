//! Text and serde representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Decimal, DecimalError, MAGNITUDE_LIMIT, MAX_SCALE};

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude.to_string();
        let scale = self.scale as usize;
        let mut out = String::with_capacity(digits.len() + scale + 3);
        if self.negative {
            out.push('-');
        }
        if scale == 0 {
            out.push_str(&digits);
        } else if digits.len() > scale {
            let (whole, fraction) = digits.split_at(digits.len() - scale);
            out.push_str(whole);
            out.push('.');
            out.push_str(fraction);
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', scale - digits.len()));
            out.push_str(&digits);
        }
        f.pad(&out)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

/// Parses plain positional notation: an optional sign, digits, and an
/// optional fractional part of at most 28 digits.
impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(DecimalError::Parse(format!("no digits in {text:?}")));
        }

        let scale = u32::try_from(fraction.len()).unwrap_or(u32::MAX);
        if scale > MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(scale));
        }

        let mut magnitude: u128 = 0;
        for ch in whole.chars().chain(fraction.chars()) {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| DecimalError::Parse(format!("invalid digit {ch:?} in {text:?}")))?;
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u128::from(digit)))
                .filter(|m| *m < MAGNITUDE_LIMIT)
                .ok_or(DecimalError::Overflow)?;
        }
        Ok(Self::raw(magnitude, scale, negative))
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::decimal::{Decimal, DecimalError};

    #[test]
    fn test_display_positions_decimal_point() {
        assert_eq!(Decimal::try_new(12_345, 2).unwrap().to_string(), "123.45");
        assert_eq!(Decimal::try_new(-5, 3).unwrap().to_string(), "-0.005");
        assert_eq!(Decimal::try_new(7, 0).unwrap().to_string(), "7");
        assert_eq!(Decimal::try_new(0, 2).unwrap().to_string(), "0.00");
        assert_eq!(Decimal::MAX.to_string(), "79228162514264337593543950335");
    }

    #[test]
    fn test_display_respects_width() {
        let value = Decimal::try_new(15, 1).unwrap();
        assert_eq!(format!("{value:>6}"), "   1.5");
    }

    #[test]
    fn test_parse_accepts_signs_and_bare_points() {
        assert_eq!("+1.5".parse::<Decimal>().unwrap(), Decimal::try_new(15, 1).unwrap());
        assert_eq!("-.25".parse::<Decimal>().unwrap(), Decimal::try_new(-25, 2).unwrap());
        assert_eq!("3.".parse::<Decimal>().unwrap(), Decimal::from(3));
        assert_eq!(" 10.25 ".parse::<Decimal>().unwrap().scale(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!("".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("-".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("1.2.3".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert!(matches!("1e5".parse::<Decimal>(), Err(DecimalError::Parse(_))));
        assert_eq!(
            "0.00000000000000000000000000001".parse::<Decimal>(),
            Err(DecimalError::ScaleOutOfRange(29))
        );
        assert_eq!(
            "79228162514264337593543950336".parse::<Decimal>(),
            Err(DecimalError::Overflow)
        );
    }

    #[test]
    fn test_serde_uses_string_form() {
        let value = Decimal::try_new(-75, 2).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-0.75\"");
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<Decimal>("\"abc\"").is_err());
    }

    proptest! {
        #[test]
        fn display_then_parse_is_lossless(mantissa in -(1i128 << 95)..(1i128 << 95), scale in 0u32..=28) {
            let value = Decimal::try_new(mantissa, scale).unwrap();
            let parsed: Decimal = value.to_string().parse().unwrap();
            prop_assert_eq!(parsed, value);
            prop_assert_eq!(parsed.scale(), value.scale());
        }
    }
}
