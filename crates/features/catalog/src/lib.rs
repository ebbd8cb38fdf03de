//! # Autho.R pricing catalog
//!
//! Holds the five subscription plans, resolves them by tier, name or marketplace SKU, and
//! moves them in and out of TOML / JSON files.
//!
//! ```
//! use autho_catalog::Catalog;
//! use autho_domain::Tier;
//!
//! let catalog = Catalog::builtin();
//! let plan = catalog.plan_by_sku("author-starter").unwrap();
//! assert_eq!(plan.tier, Tier::Starter);
//! assert_eq!(catalog.listings().len(), 6);
//! ```

mod builtin;
mod catalog;
mod error;
mod table;

pub use builtin::builtin_plans;
pub use catalog::{Catalog, CatalogFile, CatalogFormat};
pub use error::{CatalogError, CatalogErrorExt};
pub use table::PricingRow;
