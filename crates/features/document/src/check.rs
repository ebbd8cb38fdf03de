//! Drift checks between a pricing sheet and a catalog.
//!
//! Findings reuse the catalog lint types so both reports read the same. Rule identifiers
//! are prefixed with `doc-`.

use crate::error::DocumentError;
use crate::layout::REQUIRED_SECTIONS;
use crate::parser::PricingDocument;
use crate::views::{DocumentContacts, FeatureMatrix, SummaryRow, TierDetail};
use autho_catalog::Catalog;
use autho_domain::config::AppConfig;
use autho_domain::constants::{ANNUAL_MONTHS_BILLED, CHECK_MARK};
use autho_domain::{Contacts, FeatureSet, ListingKind, ModuleSet, Plan, Quota};
use autho_lint::{Finding, LintReport};
use tracing::{debug, instrument};

pub const SECTIONS: &str = "doc-sections";
pub const STRUCTURE: &str = "doc-structure";
pub const SUMMARY: &str = "doc-summary";
pub const ANNUAL: &str = "doc-annual";
pub const DETAILS: &str = "doc-details";
pub const MATRIX_MONOTONIC: &str = "doc-matrix-monotonic";
pub const MATRIX: &str = "doc-matrix";
pub const MARKETPLACE: &str = "doc-marketplace";
pub const CONTACTS: &str = "doc-contacts";

/// What the document is checked against besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Months charged for a year of annual billing.
    pub annual_multiplier: u32,
    /// Published contact details.
    pub contacts: Contacts,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { annual_multiplier: ANNUAL_MONTHS_BILLED, contacts: Contacts::default() }
    }
}

impl From<&AppConfig> for CheckOptions {
    fn from(config: &AppConfig) -> Self {
        Self { annual_multiplier: config.lint.annual_multiplier, contacts: config.contacts.clone() }
    }
}

/// Checks a pricing sheet for internal consistency and drift against `catalog`.
///
/// Sections that are missing are reported once under `doc-sections` and their content
/// checks are skipped; sections that are present but unreadable are reported under
/// `doc-structure`.
#[instrument(skip_all, fields(plans = catalog.len()))]
pub fn check(doc: &PricingDocument, catalog: &Catalog, options: &CheckOptions) -> LintReport {
    let mut out = Vec::new();

    for title in REQUIRED_SECTIONS {
        if doc.section(title).is_none() {
            out.push(Finding::error(SECTIONS, None, format!("missing section `## {title}`")));
        }
    }

    if let Some(rows) = readable(doc.summary(), &mut out) {
        check_summary(&rows, catalog, options, &mut out);
    }
    if let Some(details) = readable(doc.tier_details(), &mut out) {
        check_details(&details, catalog, &mut out);
    }
    if let Some(matrix) = readable(doc.feature_matrix(), &mut out) {
        check_matrix(&matrix, catalog, &mut out);
    }
    if doc.section(crate::layout::MARKETPLACE).is_some() {
        check_marketplace(doc, catalog, &mut out);
    }
    if doc.section(crate::layout::CONTACT).is_some() {
        check_contacts(&doc.contacts(), &options.contacts, &mut out);
    }

    debug!(findings = out.len(), "Document checked");
    LintReport::new(out)
}

/// Turns view errors into findings; a missing section was already reported.
fn readable<T>(view: Result<T, DocumentError>, out: &mut Vec<Finding>) -> Option<T> {
    match view {
        Ok(value) => Some(value),
        Err(DocumentError::MissingSection { .. }) => None,
        Err(err) => {
            out.push(Finding::error(STRUCTURE, None, err.to_string()));
            None
        },
    }
}

// --- Pricing Summary ---

fn check_summary(
    rows: &[SummaryRow],
    catalog: &Catalog,
    options: &CheckOptions,
    out: &mut Vec<Finding>,
) {
    for (idx, row) in rows.iter().enumerate() {
        if let (Some(monthly), Some(annual)) = (row.monthly, row.annual) {
            let expected = monthly.times(options.annual_multiplier);
            if annual != expected {
                out.push(Finding::error(
                    ANNUAL,
                    Some(row.tier),
                    format!(
                        "annual {annual} should be {} x {monthly} = {expected}",
                        options.annual_multiplier
                    ),
                ));
            }
        }
        let first = rows.iter().position(|other| other.tier == row.tier) == Some(idx);
        if first && rows.iter().filter(|other| other.tier == row.tier).count() > 1 {
            out.push(Finding::error(SUMMARY, Some(row.tier), "tier listed more than once"));
        }
        if first && catalog.plan(row.tier).is_none() {
            out.push(Finding::error(SUMMARY, Some(row.tier), "tier is not in the catalog"));
        }
    }

    for plan in catalog {
        let Some(row) = rows.iter().find(|row| row.tier == plan.tier) else {
            out.push(Finding::error(SUMMARY, Some(plan.tier), "tier missing from the summary"));
            continue;
        };
        let mut differs = |what: &str, doc: String, cat: String| {
            if doc != cat {
                out.push(Finding::error(
                    SUMMARY,
                    Some(plan.tier),
                    format!("{what} is {doc}, catalog says {cat}"),
                ));
            }
        };
        if let Some(monthly) = row.monthly {
            differs("monthly price", monthly.to_string(), plan.monthly.to_string());
        }
        if let Some(annual) = row.annual {
            differs("annual price", annual.to_string(), plan.annual.to_string());
        }
        if row.monthly.is_some() || row.annual.is_some() {
            differs(
                "starting-price marker",
                row.starting_price.to_string(),
                plan.starting_price.to_string(),
            );
        }
        differs(
            "tasks per month",
            row.tasks_per_month.to_string(),
            plan.limits.tasks_per_month.to_string(),
        );
        differs("module count", row.module_count.to_string(), plan.module_count().to_string());
        differs("support", row.support.to_string(), plan.limits.support.to_string());

        if row.popular != plan.popular {
            out.push(Finding::warning(
                SUMMARY,
                Some(plan.tier),
                if plan.popular { "popular badge missing" } else { "unexpected popular badge" },
            ));
        }
    }
}

// --- Tier Details ---

fn check_details(details: &[TierDetail], catalog: &Catalog, out: &mut Vec<Finding>) {
    for plan in catalog {
        let Some(detail) = details.iter().find(|d| d.tier == plan.tier) else {
            out.push(Finding::error(DETAILS, Some(plan.tier), "tier has no `###` details block"));
            continue;
        };

        for (label, doc, cat) in limit_pairs(detail, plan) {
            if doc != cat {
                out.push(Finding::error(
                    DETAILS,
                    Some(plan.tier),
                    format!("{label} is {doc}, catalog says {cat}"),
                ));
            }
        }

        if detail.limits.support != plan.limits.support {
            out.push(Finding::error(
                DETAILS,
                Some(plan.tier),
                format!("support is {}, catalog says {}", detail.limits.support, plan.limits.support),
            ));
        }
        if detail.modules != plan.modules {
            out.push(Finding::error(
                DETAILS,
                Some(plan.tier),
                set_drift(
                    "modules",
                    &detail.modules.labels().collect::<Vec<_>>(),
                    &plan.modules.labels().collect::<Vec<_>>(),
                ),
            ));
        }
        if detail.features != plan.features {
            out.push(Finding::error(
                DETAILS,
                Some(plan.tier),
                set_drift(
                    "features",
                    &detail.features.labels().collect::<Vec<_>>(),
                    &plan.features.labels().collect::<Vec<_>>(),
                ),
            ));
        }
        if let Some(sku) = detail.sku.as_deref().filter(|sku| *sku != plan.sku) {
            out.push(Finding::error(
                DETAILS,
                Some(plan.tier),
                format!("Azure SKU is `{sku}`, catalog says `{}`", plan.sku),
            ));
        }
        if detail.description.as_deref().is_some_and(|d| d != plan.description) {
            out.push(Finding::warning(DETAILS, Some(plan.tier), "description differs from the catalog"));
        }
    }
}

fn limit_pairs(detail: &TierDetail, plan: &Plan) -> [(&'static str, Quota, Quota); 6] {
    let (doc, cat) = (&detail.limits, &plan.limits);
    let size = |mb: u32| Quota::Limited(u64::from(mb));
    [
        ("tasks per month", doc.tasks_per_month, cat.tasks_per_month),
        ("workflows per month", doc.workflows_per_month, cat.workflows_per_month),
        ("API calls per day", doc.api_calls_per_day, cat.api_calls_per_day),
        ("max file size (MB)", size(doc.max_file_size_mb), size(cat.max_file_size_mb)),
        (
            "concurrent workflows",
            size(doc.max_concurrent_workflows),
            size(cat.max_concurrent_workflows),
        ),
        ("data retention (days)", doc.data_retention_days, cat.data_retention_days),
    ]
}

fn set_drift(what: &str, doc: &[&str], cat: &[&str]) -> String {
    let extra: Vec<&str> = doc.iter().copied().filter(|d| !cat.contains(d)).collect();
    let missing: Vec<&str> = cat.iter().copied().filter(|c| !doc.contains(c)).collect();

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing {}", missing.join(", ")));
    }
    if !extra.is_empty() {
        parts.push(format!("not in catalog: {}", extra.join(", ")));
    }
    format!("{what} differ from the catalog ({})", parts.join("; "))
}

// --- Feature Comparison Matrix ---

/// A matrix row resolved to a catalog capability.
#[derive(Debug, Clone, Copy)]
enum Capability {
    Module(ModuleSet),
    Feature(FeatureSet),
}

impl Capability {
    fn resolve(label: &str) -> Option<Self> {
        // `all` / `*` parse as the full set, which is not a row.
        let single = |bits: u32| bits == 1;
        ModuleSet::parse_name(label)
            .ok()
            .filter(|m| single(m.count()))
            .map(Self::Module)
            .or_else(|| {
                FeatureSet::parse_name(label).ok().filter(|f| single(f.count())).map(Self::Feature)
            })
    }

    const fn included_in(self, plan: &Plan) -> bool {
        match self {
            Self::Module(module) => plan.modules.contains(module),
            Self::Feature(feature) => plan.features.contains(feature),
        }
    }
}

fn check_matrix(matrix: &FeatureMatrix, catalog: &Catalog, out: &mut Vec<Finding>) {
    if matrix.tiers.windows(2).any(|pair| pair[0] >= pair[1]) {
        out.push(Finding::error(
            STRUCTURE,
            None,
            "matrix tier columns must run from the lowest to the highest tier",
        ));
        return;
    }

    for row in &matrix.rows {
        // A tick in a lower tier implies a tick in every higher tier.
        if let Some(first) = row.included.iter().position(|ticked| *ticked) {
            for (tier, ticked) in matrix.tiers.iter().zip(&row.included).skip(first + 1) {
                if !ticked {
                    out.push(Finding::error(
                        MATRIX_MONOTONIC,
                        Some(*tier),
                        format!(
                            "`{}` is {CHECK_MARK} for {} but not for {tier}",
                            row.label, matrix.tiers[first]
                        ),
                    ));
                }
            }
        }

        let Some(capability) = Capability::resolve(&row.label) else {
            out.push(Finding::warning(MATRIX, None, format!("unknown capability `{}`", row.label)));
            continue;
        };
        for (tier, ticked) in matrix.tiers.iter().zip(&row.included) {
            let Some(plan) = catalog.plan(*tier) else { continue };
            let expected = capability.included_in(plan);
            if *ticked != expected {
                out.push(Finding::error(
                    MATRIX,
                    Some(*tier),
                    format!(
                        "`{}` is {} in the matrix, catalog says {}",
                        row.label,
                        included_word(*ticked),
                        included_word(expected)
                    ),
                ));
            }
        }
    }

    for tier in catalog.tiers().filter(|tier| !matrix.tiers.contains(tier)) {
        out.push(Finding::error(MATRIX, Some(tier), "tier has no matrix column"));
    }

    let offered_modules = catalog.plans().iter().fold(ModuleSet::empty(), |acc, p| acc | p.modules);
    let offered_features =
        catalog.plans().iter().fold(FeatureSet::empty(), |acc, p| acc | p.features);
    for label in offered_modules.labels().chain(offered_features.labels()) {
        if matrix.row(label).is_none() {
            out.push(Finding::warning(MATRIX, None, format!("`{label}` has no matrix row")));
        }
    }
}

const fn included_word(ticked: bool) -> &'static str {
    if ticked { "included" } else { "not included" }
}

// --- Marketplace Availability ---

fn check_marketplace(doc: &PricingDocument, catalog: &Catalog, out: &mut Vec<Finding>) {
    match doc.azure_skus() {
        Ok(listings) => {
            for plan in catalog {
                let listed = listings.iter().find(|l| l.kind == ListingKind::Tier(plan.tier));
                match listed {
                    None => out.push(Finding::error(
                        MARKETPLACE,
                        Some(plan.tier),
                        format!("Azure SKU `{}` is not listed", plan.sku),
                    )),
                    Some(listing) if listing.id != plan.sku => out.push(Finding::error(
                        MARKETPLACE,
                        Some(plan.tier),
                        format!("Azure SKU is `{}`, catalog says `{}`", listing.id, plan.sku),
                    )),
                    Some(_) => {},
                }
            }
        },
        Err(err) => out.push(Finding::error(STRUCTURE, None, err.to_string())),
    }

    match doc.ibm_catalog_id() {
        None => out.push(Finding::error(MARKETPLACE, None, "IBM Cloud catalog ID is missing")),
        Some(id) if id != catalog.ibm_catalog_id() => out.push(Finding::error(
            MARKETPLACE,
            None,
            format!("IBM Cloud catalog ID is `{id}`, catalog says `{}`", catalog.ibm_catalog_id()),
        )),
        Some(_) => {},
    }
}

// --- Contact ---

fn check_contacts(found: &DocumentContacts, expected: &Contacts, out: &mut Vec<Finding>) {
    let pairs = [("sales", &found.sales, &expected.sales), ("support", &found.support, &expected.support)];
    for (what, found, expected) in pairs {
        match found {
            None => out.push(Finding::error(CONTACTS, None, format!("{what} contact is missing"))),
            Some(address) if address != expected => out.push(Finding::error(
                CONTACTS,
                None,
                format!("{what} contact is {address}, expected {expected}"),
            )),
            Some(_) => {},
        }
    }

    if expected.repository.is_some() && found.repository.is_none() {
        out.push(Finding::warning(CONTACTS, None, "repository link is missing"));
    }
}
