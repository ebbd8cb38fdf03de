//! # Pricing document
//!
//! Reads a `PRICING.md` pricing sheet, checks it against a [`Catalog`](autho_catalog::Catalog),
//! and renders the canonical sheet from one.
//!
//! ```
//! use autho_catalog::Catalog;
//! use autho_document::{CheckOptions, PricingDocument, check, render};
//! use autho_domain::Contacts;
//!
//! let catalog = Catalog::builtin();
//! let markdown = render(&catalog, &Contacts::default());
//! let doc = PricingDocument::parse(&markdown);
//!
//! assert_eq!(doc.summary().unwrap().len(), 5);
//! assert!(check(&doc, &catalog, &CheckOptions::default()).is_clean());
//! ```

pub mod check;
mod error;
pub mod layout;
mod parser;
mod render;
mod views;

pub use check::{CheckOptions, check};
pub use error::{DocumentError, DocumentErrorExt};
pub use parser::{Block, Field, PricingDocument, Section, Subsection, Table};
pub use render::render;
pub use views::{DocumentContacts, FeatureMatrix, MatrixRow, SummaryRow, TierDetail, leading_tier};
