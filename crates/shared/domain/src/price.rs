use crate::error::DomainParseError;
use crate::quota::{group_thousands, parse_grouped};
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A USD amount held as integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self * factor`, saturating.
    #[must_use]
    pub const fn times(self, factor: u32) -> Self {
        Self(self.0.saturating_mul(factor as u64))
    }

    /// `self / divisor`, rounded half-up to the cent. A zero divisor yields zero.
    #[must_use]
    pub const fn split(self, divisor: u32) -> Self {
        if divisor == 0 {
            return Self::ZERO;
        }
        let d = divisor as u64;
        Self((self.0 + d / 2) / d)
    }

    /// Plain decimal amount without symbol or grouping (`"1990.00"`).
    #[must_use]
    pub fn amount(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    /// Parses a pricing-sheet cell, returning the price and whether it was marked as a
    /// starting price with a trailing `+` (e.g. `$499+`).
    ///
    /// # Errors
    /// Returns [`DomainParseError::InvalidPrice`] when the text is not an amount.
    pub fn parse_cell(cell: &str) -> Result<(Self, bool), DomainParseError> {
        let raw = cell.trim();
        let (body, floor) =
            raw.strip_suffix('+').map_or((raw, false), |stripped| (stripped.trim_end(), true));
        let body = body.split_whitespace().next().unwrap_or_default();
        Ok((body.parse::<Self>().map_err(|_| DomainParseError::InvalidPrice(raw.to_owned()))?, floor))
    }
}

impl fmt::Display for Price {
    /// Sheet style: `$0`, `$29`, `$1,990`, `$12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = group_thousands(self.0 / 100);
        match self.0 % 100 {
            0 => write!(f, "${dollars}"),
            cents => write!(f, "${dollars}.{cents:02}"),
        }
    }
}

impl FromStr for Price {
    type Err = DomainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("free") {
            return Ok(Self::ZERO);
        }
        let invalid = || DomainParseError::InvalidPrice(raw.to_owned());
        let digits = raw.strip_prefix('$').unwrap_or(raw);
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let dollars = parse_grouped(whole).ok_or_else(invalid)?;
        let cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse::<u64>().map_err(|_| invalid())?,
        };
        dollars.checked_mul(100).and_then(|c| c.checked_add(cents)).map(Self).ok_or_else(invalid)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.amount())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a USD amount as a string (\"29.00\") or a whole number of dollars")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<Price>().map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                v.checked_mul(100).map(Price).ok_or_else(|| E::custom("price overflow"))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom("price cannot be negative"))
                    .and_then(|v| self.visit_u64(v))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}
