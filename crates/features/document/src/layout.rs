//! Headings, columns and labels of the canonical pricing sheet.

pub const OVERVIEW: &str = "Overview";
pub const PRICING_SUMMARY: &str = "Pricing Summary";
pub const TIER_DETAILS: &str = "Tier Details";
pub const MARKETPLACE: &str = "Marketplace Availability";
pub const FEATURE_MATRIX: &str = "Feature Comparison Matrix";
pub const CONTACT: &str = "Contact";

/// H2 sections every pricing sheet carries, in document order.
pub const REQUIRED_SECTIONS: [&str; 6] =
    [OVERVIEW, PRICING_SUMMARY, TIER_DETAILS, MARKETPLACE, FEATURE_MATRIX, CONTACT];

pub const SUMMARY_COLUMNS: [&str; 6] = ["Tier", "Monthly", "Annual", "Tasks/Month", "Modules", "Support"];

/// Marks the recommended plan in the summary table.
pub const POPULAR_MARK: &str = "⭐";

/// Matrix cell for a capability a tier lacks.
pub const ABSENT_MARK: &str = "-";

pub const AZURE_SUBSECTION: &str = "Azure Marketplace";
pub const IBM_SUBSECTION: &str = "IBM Cloud";

/// `Limit` column labels of the per-tier table.
pub mod limits {
    pub const TASKS: &str = "Tasks per month";
    pub const WORKFLOWS: &str = "Workflows per month";
    pub const API_CALLS: &str = "API calls per day";
    pub const FILE_SIZE: &str = "Max file size";
    pub const CONCURRENCY: &str = "Concurrent workflows";
    pub const RETENTION: &str = "Data retention";
    pub const SUPPORT: &str = "Support";
}

/// `**Label:**` field names.
pub mod fields {
    pub const MODULES: &str = "Modules";
    pub const FEATURES: &str = "Features";
    pub const AZURE_SKU: &str = "Azure SKU";
    pub const CATALOG_ID: &str = "Catalog ID";
    pub const SALES: &str = "Sales";
    pub const SUPPORT: &str = "Support";
    pub const REPOSITORY: &str = "Repository";
}
