use crate::error::DomainParseError;
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Platform capabilities and service guarantees bundled with a tier.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u16 {
        const SCHEDULING = 1 << 0;
        const API_ACCESS = 1 << 1;
        const WEBHOOKS = 1 << 2;
        const TEAM_COLLABORATION = 1 << 3;
        const AUDIT_LOGS = 1 << 4;
        const PRIORITY_EXECUTION = 1 << 5;
        const CUSTOM_INTEGRATIONS = 1 << 6;
        const SSO = 1 << 7;
        const DEDICATED_SUPPORT = 1 << 8;
        const SLA_GUARANTEE = 1 << 9;
        const WHITE_LABEL = 1 << 10;
        const CUSTOM_BRANDING = 1 << 11;

        const ALL = (1 << 12) - 1;
    }
}

const FEATURES: [(FeatureSet, &str, &str); 12] = [
    (FeatureSet::SCHEDULING, "scheduling", "Scheduling"),
    (FeatureSet::API_ACCESS, "api_access", "API Access"),
    (FeatureSet::WEBHOOKS, "webhooks", "Webhooks"),
    (FeatureSet::TEAM_COLLABORATION, "team_collaboration", "Team Collaboration"),
    (FeatureSet::AUDIT_LOGS, "audit_logs", "Audit Logs"),
    (FeatureSet::PRIORITY_EXECUTION, "priority_execution", "Priority Execution"),
    (FeatureSet::CUSTOM_INTEGRATIONS, "custom_integrations", "Custom Integrations"),
    (FeatureSet::SSO, "sso", "SSO"),
    (FeatureSet::DEDICATED_SUPPORT, "dedicated_support", "Dedicated Support"),
    (FeatureSet::SLA_GUARANTEE, "sla_guarantee", "SLA Guarantee"),
    (FeatureSet::WHITE_LABEL, "white_label", "White Label"),
    (FeatureSet::CUSTOM_BRANDING, "custom_branding", "Custom Branding"),
];

impl FeatureSet {
    /// Parses a single feature by wire name or label, or `all` / `*`.
    ///
    /// # Errors
    /// Returns [`DomainParseError::UnknownFeature`] for names that match nothing.
    pub fn parse_name(name: &str) -> Result<Self, DomainParseError> {
        let needle = name.trim();
        if needle == "*" || needle.eq_ignore_ascii_case("all") {
            return Ok(Self::ALL);
        }
        FEATURES
            .iter()
            .find(|(_, wire, label)| {
                wire.eq_ignore_ascii_case(needle) || label.eq_ignore_ascii_case(needle)
            })
            .map(|(flag, _, _)| *flag)
            .ok_or_else(|| DomainParseError::UnknownFeature(needle.to_owned()))
    }

    /// Parses a comma-separated list of feature names or labels.
    ///
    /// # Errors
    /// Fails on the first unknown name.
    pub fn parse_list(list: &str) -> Result<Self, DomainParseError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .try_fold(Self::empty(), |acc, name| Ok(acc | Self::parse_name(name)?))
    }

    /// Single-feature flags in canonical order with their wire names.
    pub fn catalog() -> impl Iterator<Item = (Self, &'static str)> {
        FEATURES.iter().map(|(flag, wire, _)| (*flag, *wire))
    }

    /// Wire names of the contained features, in canonical order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        FEATURES.iter().filter(move |(flag, _, _)| self.contains(*flag)).map(|(_, wire, _)| *wire)
    }

    /// Pricing-sheet labels of the contained features, in canonical order.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        FEATURES.iter().filter(move |(flag, _, _)| self.contains(*flag)).map(|(_, _, l)| *l)
    }

    /// Label of a single-feature flag.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        FEATURES.iter().find(|(flag, _, _)| *flag == self).map(|(_, _, label)| *label)
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.labels().collect();
        f.write_str(&labels.join(", "))
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.count() as usize))?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of feature names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = FeatureSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= FeatureSet::parse_name(&name).map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(NamesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_listed_feature() {
        let union = FeatureSet::catalog().fold(FeatureSet::empty(), |acc, (flag, _)| acc | flag);
        assert_eq!(union, FeatureSet::ALL);
        assert_eq!(FeatureSet::ALL.count(), 12);
    }

    #[test]
    fn labels_and_names_resolve() {
        assert_eq!(FeatureSet::parse_name("SSO").unwrap(), FeatureSet::SSO);
        assert_eq!(FeatureSet::parse_name("team_collaboration").unwrap(), FeatureSet::TEAM_COLLABORATION);
        assert_eq!(FeatureSet::WEBHOOKS.label(), Some("Webhooks"));
        assert!(FeatureSet::parse_name("time travel").is_err());
    }

    #[test]
    fn display_lists_labels() {
        let set = FeatureSet::SCHEDULING | FeatureSet::API_ACCESS;
        assert_eq!(set.to_string(), "Scheduling, API Access");
        assert_eq!(FeatureSet::empty().to_string(), "");
    }
}
