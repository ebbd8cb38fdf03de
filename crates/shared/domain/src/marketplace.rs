use crate::constants::{SALES_EMAIL, SUPPORT_EMAIL};
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Cloud marketplaces the product is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    #[strum(to_string = "Azure Marketplace")]
    Azure,
    #[strum(to_string = "IBM Cloud")]
    IbmCloud,
}

/// What a marketplace identifier provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tier", rename_all = "snake_case")]
pub enum ListingKind {
    /// A per-tier SKU.
    Tier(Tier),
    /// A single catalog entry covering every tier.
    Catalog,
}

/// One marketplace identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub marketplace: Marketplace,
    pub id: String,
    #[serde(flatten)]
    pub kind: ListingKind,
}

/// Published contact endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub sales: String,
    pub support: String,
    pub repository: Option<String>,
}

impl Default for Contacts {
    fn default() -> Self {
        Self { sales: SALES_EMAIL.to_owned(), support: SUPPORT_EMAIL.to_owned(), repository: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_flat() {
        let listing = MarketplaceListing {
            marketplace: Marketplace::Azure,
            id: "author-business".to_owned(),
            kind: ListingKind::Tier(Tier::Business),
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["marketplace"], "azure");
        assert_eq!(value["kind"], "tier");
        assert_eq!(value["tier"], "business");
    }

    #[test]
    fn marketplace_names() {
        assert_eq!(Marketplace::Azure.to_string(), "Azure Marketplace");
        assert_eq!(Marketplace::IbmCloud.to_string(), "IBM Cloud");
        assert_eq!(Contacts::default().sales, "sales@avidsolutions.com");
    }
}
