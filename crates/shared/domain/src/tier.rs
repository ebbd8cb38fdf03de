use crate::constants::SKU_PREFIX;
use crate::error::DomainParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A pricing tier.
///
/// Declaration order is the upgrade order: `Free < Starter < ... < Enterprise`.
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
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Free,
    Starter,
    Professional,
    Business,
    Enterprise,
}

impl Tier {
    /// All tiers in upgrade order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::iter()
    }

    /// Lowercase identifier used in files, SKUs and the CLI.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        self.into()
    }

    /// Capitalised name as printed on the pricing sheet.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Starter => "Starter",
            Self::Professional => "Professional",
            Self::Business => "Business",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Zero-based position in the upgrade order.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// The next tier up, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::iter().nth(self.rank() + 1)
    }

    /// The conventional marketplace SKU for this tier (`author-<tier>`).
    #[must_use]
    pub fn default_sku(self) -> String {
        format!("{SKU_PREFIX}{}", self.wire_name())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Tier {
    type Err = DomainParseError;

    /// Accepts either the wire name or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::iter()
            .find(|tier| tier.wire_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainParseError::UnknownTier(needle.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_upgrade_path() {
        let tiers: Vec<Tier> = Tier::all().collect();
        assert_eq!(tiers.len(), Tier::COUNT);
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Tier::Free.next(), Some(Tier::Starter));
        assert_eq!(Tier::Enterprise.next(), None);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("professional".parse::<Tier>().unwrap(), Tier::Professional);
        assert_eq!(" Enterprise ".parse::<Tier>().unwrap(), Tier::Enterprise);
        assert_eq!("STARTER".parse::<Tier>().unwrap(), Tier::Starter);
        assert_eq!(
            "platinum".parse::<Tier>().unwrap_err(),
            DomainParseError::UnknownTier("platinum".to_owned())
        );
    }

    #[test]
    fn default_skus_follow_marketplace_convention() {
        assert_eq!(Tier::Free.default_sku(), "author-free");
        assert_eq!(Tier::Professional.default_sku(), "author-professional");
        assert_eq!(Tier::Enterprise.to_string(), "Enterprise");
    }
}
