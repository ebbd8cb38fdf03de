use crate::error::DomainParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Support channel included with a tier, ordered from least to most involved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Community,
    Email,
    Priority,
    Dedicated,
}

impl FromStr for SupportLevel {
    type Err = DomainParseError;

    /// Matches on the first word so that sheet cells such as `Email (48h)` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.split_whitespace().next().unwrap_or_default();
        Self::iter()
            .find(|level| {
                let name: &'static str = (*level).into();
                name.eq_ignore_ascii_case(word)
            })
            .ok_or_else(|| DomainParseError::UnknownSupportLevel(s.trim().to_owned()))
    }
}
