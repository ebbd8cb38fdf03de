use crate::error::DomainParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A usage allowance printed on the pricing sheet.
///
/// `Unlimited` orders above every limited value. On the wire it is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quota {
    Limited(u64),
    Unlimited,
}

impl Quota {
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The numeric limit, `None` when unlimited.
    #[must_use]
    pub const fn limit(self) -> Option<u64> {
        match self {
            Self::Limited(n) => Some(n),
            Self::Unlimited => None,
        }
    }
}

impl From<u64> for Quota {
    fn from(value: u64) -> Self {
        Self::Limited(value)
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => f.write_str(&group_thousands(*n)),
            Self::Unlimited => f.write_str("Unlimited"),
        }
    }
}

impl FromStr for Quota {
    type Err = DomainParseError;

    /// Accepts `Unlimited`, `-1`, or a grouped number optionally followed by a unit
    /// (`10,000`, `200 MB`, `30 days`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("unlimited") || raw == "-1" || raw == "∞" {
            return Ok(Self::Unlimited);
        }
        let number = raw.split_whitespace().next().unwrap_or_default();
        parse_grouped(number)
            .map(Self::Limited)
            .ok_or_else(|| DomainParseError::InvalidQuota(raw.to_owned()))
    }
}

impl Serialize for Quota {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Limited(n) => serializer.serialize_u64(*n),
            Self::Unlimited => serializer.serialize_i64(-1),
        }
    }
}

impl<'de> Deserialize<'de> for Quota {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        match value {
            -1 => Ok(Self::Unlimited),
            n if n >= 0 => Ok(Self::Limited(n.unsigned_abs())),
            n => Err(serde::de::Error::custom(format!("quota must be >= 0 or -1, got {n}"))),
        }
    }
}

/// Formats an integer with `,` thousands separators.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`group_thousands`]: plain digits, or `1,234,567` with well-formed groups.
///
/// Signs, empty groups and misplaced separators are rejected.
#[must_use]
pub fn parse_grouped(text: &str) -> Option<u64> {
    let mut groups = text.split(',');
    let head = groups.next()?;
    let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(head) {
        return None;
    }
    let mut digits = head.to_owned();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return None;
        }
        grouped = true;
        digits.push_str(group);
    }
    if grouped && head.len() > 3 {
        return None;
    }
    digits.parse().ok()
}
