//! # Domain Models
//!
//! Pure pricing types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, no lookups, no rules. Just data and simple helpers.
//!
//! * [`Tier`]: the ordered pricing tiers.
//! * [`ModuleSet`] / [`FeatureSet`]: bitsets of what a tier includes.
//! * [`Quota`], [`Price`], [`SupportLevel`]: the attribute value types.
//! * [`Plan`]: one row of the pricing sheet.

pub mod config;
pub mod constants;
mod error;
pub mod features;
pub mod marketplace;
pub mod modules;
pub mod plan;
pub mod price;
pub mod quota;
pub mod support;
pub mod tier;

pub use crate::error::DomainParseError;
pub use crate::features::FeatureSet;
pub use crate::marketplace::{Contacts, ListingKind, Marketplace, MarketplaceListing};
pub use crate::modules::ModuleSet;
pub use crate::plan::{Plan, TierLimits};
pub use crate::price::Price;
pub use crate::quota::Quota;
pub use crate::support::SupportLevel;
pub use crate::tier::Tier;
