//! Fixed identifiers published on the pricing sheet.

/// Product name as printed on the pricing sheet.
pub const PRODUCT_NAME: &str = "Autho.R";

/// Prefix shared by every per-tier marketplace SKU.
pub const SKU_PREFIX: &str = "author-";

/// IBM Cloud catalog identifier (one listing for all tiers).
pub const IBM_CATALOG_ID: &str = "author-framework";

pub const SALES_EMAIL: &str = "sales@avidsolutions.com";
pub const SUPPORT_EMAIL: &str = "support@avidsolutions.com";

/// Annual billing is priced at this many monthly payments.
pub const ANNUAL_MONTHS_BILLED: u32 = 10;

/// Marker used in the comparison matrix for an included item.
pub const CHECK_MARK: &str = "✓";
