use crate::error::DomainParseError;
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Functional modules a tier unlocks.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u16 {
        const SPREADSHEET = 1 << 0;
        const FILES = 1 << 1;
        const PDF = 1 << 2;
        const DOCS = 1 << 3;
        const SCRAPER = 1 << 4;
        const API = 1 << 5;
        const DATABASE = 1 << 6;
        const DESKTOP = 1 << 7;
        const WORKFLOW = 1 << 8;
        const EMAIL = 1 << 9;

        /// Entry-level document and file handling.
        const BASIC = Self::SPREADSHEET.bits() | Self::FILES.bits() | Self::PDF.bits() | Self::DOCS.bits();
        /// Basic plus data acquisition.
        const STANDARD = Self::BASIC.bits() | Self::SCRAPER.bits() | Self::API.bits() | Self::DATABASE.bits();
        /// Standard plus orchestration, mail and desktop automation.
        const ADVANCED = Self::STANDARD.bits() | Self::WORKFLOW.bits() | Self::EMAIL.bits() | Self::DESKTOP.bits();

        const ALL = Self::ADVANCED.bits();
    }
}

/// Canonical order, wire name and pricing-sheet label of every module.
const MODULES: [(ModuleSet, &str, &str); 10] = [
    (ModuleSet::SPREADSHEET, "spreadsheet", "Spreadsheet"),
    (ModuleSet::FILES, "files", "File Processing"),
    (ModuleSet::PDF, "pdf", "PDF"),
    (ModuleSet::DOCS, "docs", "Documentation"),
    (ModuleSet::SCRAPER, "scraper", "Web Scraper"),
    (ModuleSet::API, "api", "API Integration"),
    (ModuleSet::DATABASE, "database", "Database"),
    (ModuleSet::DESKTOP, "desktop", "Desktop Automation"),
    (ModuleSet::WORKFLOW, "workflow", "Workflow"),
    (ModuleSet::EMAIL, "email", "Email"),
];

impl ModuleSet {
    /// Parses a single module name (wire name or label) or `all` / `*`.
    ///
    /// # Errors
    /// Returns [`DomainParseError::UnknownModule`] for names that match nothing.
    pub fn parse_name(name: &str) -> Result<Self, DomainParseError> {
        let needle = name.trim();
        if needle == "*" || needle.eq_ignore_ascii_case("all") {
            return Ok(Self::ALL);
        }
        MODULES
            .iter()
            .find(|(_, wire, label)| {
                wire.eq_ignore_ascii_case(needle) || label.eq_ignore_ascii_case(needle)
            })
            .map(|(flag, _, _)| *flag)
            .ok_or_else(|| DomainParseError::UnknownModule(needle.to_owned()))
    }

    /// Parses a comma-separated list of module names.
    ///
    /// # Errors
    /// Fails on the first unknown name.
    pub fn parse_list(list: &str) -> Result<Self, DomainParseError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .try_fold(Self::empty(), |acc, name| Ok(acc | Self::parse_name(name)?))
    }

    /// Single-module flags in canonical order with their wire names.
    pub fn catalog() -> impl Iterator<Item = (Self, &'static str)> {
        MODULES.iter().map(|(flag, wire, _)| (*flag, *wire))
    }

    /// Wire names of the contained modules, in canonical order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        MODULES.iter().filter(move |(flag, _, _)| self.contains(*flag)).map(|(_, wire, _)| *wire)
    }

    /// Pricing-sheet labels of the contained modules, in canonical order.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        MODULES.iter().filter(move |(flag, _, _)| self.contains(*flag)).map(|(_, _, label)| *label)
    }

    /// Label of a single-module flag.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        MODULES.iter().find(|(flag, _, _)| *flag == self).map(|(_, _, label)| *label)
    }

    /// Number of individual modules contained.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

impl fmt::Display for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join(", "))
    }
}

impl Serialize for ModuleSet {
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

impl<'de> Deserialize<'de> for ModuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = ModuleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of module names or \"*\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                ModuleSet::parse_list(v).map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = ModuleSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= ModuleSet::parse_name(&name).map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(NamesVisitor)
    }
}
