//! Typed readings of the individual sections.

use crate::error::{DocumentError, DocumentErrorExt};
use crate::layout::{
    AZURE_SUBSECTION, CONTACT, FEATURE_MATRIX, IBM_SUBSECTION, MARKETPLACE, POPULAR_MARK,
    PRICING_SUMMARY, TIER_DETAILS, fields, limits,
};
use crate::parser::{Block, PricingDocument, Section, Table};
use autho_domain::constants::CHECK_MARK;
use autho_domain::{
    DomainParseError, FeatureSet, ListingKind, Marketplace, MarketplaceListing, ModuleSet, Price, Quota, SupportLevel,
    Tier, TierLimits,
};
use serde::Serialize;
use std::borrow::Cow;

/// One row of the Pricing Summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub tier: Tier,
    /// `None` when the cell offers no price (`Custom`, `Contact sales`, `-`).
    pub monthly: Option<Price>,
    /// `None` when the tier has no annual option.
    pub annual: Option<Price>,
    /// The prices carry a `+` ("starting at").
    pub starting_price: bool,
    pub tasks_per_month: Quota,
    pub module_count: u32,
    pub support: SupportLevel,
    pub popular: bool,
}

/// The `### <Tier>` block under Tier Details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDetail {
    pub tier: Tier,
    pub description: Option<String>,
    pub limits: TierLimits,
    pub modules: ModuleSet,
    pub features: FeatureSet,
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub label: String,
    /// One flag per tier column.
    pub included: Vec<bool>,
}

/// The Feature Comparison Matrix: capability rows by tier columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    pub tiers: Vec<Tier>,
    pub rows: Vec<MatrixRow>,
}

impl FeatureMatrix {
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.label.eq_ignore_ascii_case(label))
    }

    /// Whether `label` is ticked for `tier`; `None` when either is not in the matrix.
    #[must_use]
    pub fn includes(&self, label: &str, tier: Tier) -> Option<bool> {
        let column = self.tiers.iter().position(|t| *t == tier)?;
        self.row(label).and_then(|row| row.included.get(column).copied())
    }
}

/// Contact details as written in the Contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentContacts {
    pub sales: Option<String>,
    pub support: Option<String>,
    pub repository: Option<String>,
}

impl PricingDocument {
    /// Rows of the Pricing Summary table, in document order.
    ///
    /// # Errors
    /// Fails when the section, the table or a column is missing, or a cell does not parse.
    pub fn summary(&self) -> Result<Vec<SummaryRow>, DocumentError> {
        let section = self.require_section(PRICING_SUMMARY)?;
        let table = section.table_with(&["Tier"]).ok_or_else(|| missing_table(PRICING_SUMMARY))?;
        table.rows.iter().map(|row| summary_row(table, row)).collect()
    }

    /// Every `### <Tier>` block under Tier Details. Subsections that do not name a tier are
    /// skipped.
    ///
    /// # Errors
    /// Fails when the section is missing or a tier block is incomplete or malformed.
    pub fn tier_details(&self) -> Result<Vec<TierDetail>, DocumentError> {
        let section = self.require_section(TIER_DETAILS)?;
        section
            .subsections
            .iter()
            .filter_map(|sub| leading_tier(&sub.title).map(|tier| (tier, &sub.content)))
            .map(|(tier, block)| tier_detail(tier, block))
            .collect()
    }

    /// Per-tier Azure Marketplace SKUs.
    ///
    /// # Errors
    /// Fails when the section or the `Tier | SKU` table is missing, or a tier does not parse.
    pub fn azure_skus(&self) -> Result<Vec<MarketplaceListing>, DocumentError> {
        let section = self.require_section(MARKETPLACE)?;
        let table = section
            .subsection(AZURE_SUBSECTION)
            .and_then(|sub| sub.content.table_with(&["Tier", "SKU"]))
            .or_else(|| section.table_with(&["Tier", "SKU"]))
            .ok_or_else(|| missing_table(AZURE_SUBSECTION))?;

        table
            .rows
            .iter()
            .map(|row| {
                let tier = parse_tier(cell(table, row, "Tier", AZURE_SUBSECTION)?, AZURE_SUBSECTION)?;
                let sku = cell(table, row, "SKU", AZURE_SUBSECTION)?;
                Ok(MarketplaceListing {
                    marketplace: Marketplace::Azure,
                    id: sku.to_owned(),
                    kind: ListingKind::Tier(tier),
                })
            })
            .collect()
    }

    /// The IBM Cloud `**Catalog ID:**` value, if present.
    #[must_use]
    pub fn ibm_catalog_id(&self) -> Option<&str> {
        let section = self.section(MARKETPLACE)?;
        section
            .subsection(IBM_SUBSECTION)
            .and_then(|sub| sub.content.field(fields::CATALOG_ID))
            .or_else(|| section.field(fields::CATALOG_ID))
            .filter(|id| !id.is_empty())
    }

    /// The Feature Comparison Matrix.
    ///
    /// # Errors
    /// Fails when the section or table is missing, or a tier column header does not parse.
    pub fn feature_matrix(&self) -> Result<FeatureMatrix, DocumentError> {
        let section = self.require_section(FEATURE_MATRIX)?;
        let table = section.table_with(&["Feature"]).ok_or_else(|| missing_table(FEATURE_MATRIX))?;
        matrix(table)
    }

    /// Sales, support and repository contacts. Falls back to the first e-mail addresses in
    /// the Contact section when the labelled fields are absent.
    #[must_use]
    pub fn contacts(&self) -> DocumentContacts {
        let Some(section) = self.section(CONTACT) else { return DocumentContacts::default() };
        let field = |label: &str| section.field(label).map(|v| v.trim().to_owned());

        DocumentContacts {
            sales: field(fields::SALES).or_else(|| section_email(self, section, "sales")),
            support: field(fields::SUPPORT).or_else(|| section_email(self, section, "support")),
            repository: field(fields::REPOSITORY),
        }
    }
}

// --- Row parsers ---

fn summary_row(table: &Table, row: &[String]) -> Result<SummaryRow, DocumentError> {
    let tier_cell = cell(table, row, "Tier", PRICING_SUMMARY)?;
    let tier = parse_tier(tier_cell, PRICING_SUMMARY)?;
    let ctx = || format!("{PRICING_SUMMARY}, {tier} row");

    let (monthly, monthly_floor) =
        price_cell(cell(table, row, "Monthly", PRICING_SUMMARY)?).context(ctx())?;
    let (annual, annual_floor) =
        price_cell(cell(table, row, "Annual", PRICING_SUMMARY)?).context(ctx())?;
    let tasks_per_month =
        cell(table, row, "Tasks/Month", PRICING_SUMMARY)?.parse::<Quota>().context(ctx())?;
    let module_cell = cell(table, row, "Modules", PRICING_SUMMARY)?;
    let module_count = module_cell.parse::<u32>().map_err(|_| DocumentError::InvalidCell {
        message: format!("module count `{module_cell}` is not a number").into(),
        context: Some(ctx().into()),
    })?;
    let support = cell(table, row, "Support", PRICING_SUMMARY)?.parse::<SupportLevel>().context(ctx())?;

    Ok(SummaryRow {
        tier,
        monthly,
        annual,
        starting_price: monthly_floor || annual_floor,
        tasks_per_month,
        module_count,
        support,
        popular: tier_cell.contains(POPULAR_MARK),
    })
}

fn tier_detail(tier: Tier, block: &Block) -> Result<TierDetail, DocumentError> {
    let ctx = format!("{TIER_DETAILS}, {tier}");
    let table = block.table_with(&["Limit", "Value"]).ok_or_else(|| DocumentError::MissingTable {
        message: "`Limit | Value` table".into(),
        context: Some(ctx.clone().into()),
    })?;
    let rows = LimitTable { table, ctx: &ctx };

    let limits = TierLimits {
        tasks_per_month: rows.quota(limits::TASKS)?,
        workflows_per_month: rows.quota(limits::WORKFLOWS)?,
        api_calls_per_day: rows.quota(limits::API_CALLS)?,
        max_file_size_mb: rows.bounded(limits::FILE_SIZE)?,
        max_concurrent_workflows: rows.bounded(limits::CONCURRENCY)?,
        data_retention_days: rows.quota(limits::RETENTION)?,
        support: rows.value(limits::SUPPORT)?.parse::<SupportLevel>().context(ctx.clone())?,
    };

    let modules =
        block.field(fields::MODULES).ok_or_else(|| missing_entry("**Modules:** line", &ctx))?;
    let features =
        block.field(fields::FEATURES).ok_or_else(|| missing_entry("**Features:** line", &ctx))?;

    Ok(TierDetail {
        tier,
        description: block.paragraphs.first().cloned(),
        limits,
        modules: ModuleSet::parse_list(modules).context(ctx.clone())?,
        features: if is_none_marker(features) {
            FeatureSet::empty()
        } else {
            FeatureSet::parse_list(features).context(ctx.clone())?
        },
        sku: block.field(fields::AZURE_SKU).map(str::to_owned),
    })
}

/// The `Limit | Value` table of one tier.
struct LimitTable<'t> {
    table: &'t Table,
    ctx: &'t str,
}

impl<'t> LimitTable<'t> {
    fn value(&self, label: &str) -> Result<&'t str, DocumentError> {
        let table = self.table;
        table
            .rows
            .iter()
            .find(|row| table.get(row, "Limit").is_some_and(|l| l.eq_ignore_ascii_case(label)))
            .and_then(|row| table.get(row, "Value"))
            .ok_or_else(|| missing_entry(format!("`{label}` row"), self.ctx))
    }

    fn quota(&self, label: &str) -> Result<Quota, DocumentError> {
        self.value(label)?.parse::<Quota>().context(format!("{}, {label}", self.ctx))
    }

    /// A limit that cannot be unlimited (file size, concurrency).
    fn bounded(&self, label: &str) -> Result<u32, DocumentError> {
        self.quota(label)?.limit().and_then(|n| u32::try_from(n).ok()).ok_or_else(|| {
            DocumentError::InvalidCell {
                message: format!("{label} must be a finite number").into(),
                context: Some(self.ctx.to_owned().into()),
            }
        })
    }
}

fn matrix(table: &Table) -> Result<FeatureMatrix, DocumentError> {
    let label_column = table.column("Feature").unwrap_or_default();
    let tier_columns: Vec<(usize, Tier)> = table
        .header
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_column)
        .map(|(idx, title)| parse_tier(title, FEATURE_MATRIX).map(|tier| (idx, tier)))
        .collect::<Result<_, _>>()?;

    let rows = table
        .rows
        .iter()
        .filter_map(|row| {
            let label = row.get(label_column)?.trim();
            let included = tier_columns
                .iter()
                .map(|(idx, _)| row.get(*idx).is_some_and(|c| c.contains(CHECK_MARK)))
                .collect();
            Some(MatrixRow { label: label.to_owned(), included })
        })
        .collect();

    Ok(FeatureMatrix { tiers: tier_columns.into_iter().map(|(_, tier)| tier).collect(), rows })
}

// --- Helpers ---

/// Tier named by the first word of a heading or cell (`Professional ⭐` -> Professional).
pub fn leading_tier(text: &str) -> Option<Tier> {
    text.split_whitespace().next().and_then(|word| word.parse().ok())
}

fn parse_tier(text: &str, ctx: &'static str) -> Result<Tier, DocumentError> {
    let word = text.split_whitespace().next().unwrap_or_default();
    word.parse::<Tier>().context(ctx)
}

fn cell<'a>(
    table: &Table,
    row: &'a [String],
    column: &'static str,
    ctx: &'static str,
) -> Result<&'a str, DocumentError> {
    table.get(row, column).ok_or_else(|| missing_entry(format!("`{column}` column"), ctx))
}

fn missing_table(section: &'static str) -> DocumentError {
    DocumentError::MissingTable { message: section.into(), context: None }
}

fn missing_entry(what: impl Into<Cow<'static, str>>, ctx: &str) -> DocumentError {
    DocumentError::MissingEntry { message: what.into(), context: Some(ctx.to_owned().into()) }
}

/// Cell texts that stand for "no price offered".
const NO_PRICE_MARKERS: [&str; 5] = ["-", "\u{2014}", "N/A", "Custom", "Contact sales"];

/// A price cell, or `None` for a tier without that billing option.
fn price_cell(text: &str) -> Result<(Option<Price>, bool), DomainParseError> {
    let text = text.trim();
    if text.is_empty() || NO_PRICE_MARKERS.iter().any(|m| text.eq_ignore_ascii_case(m)) {
        return Ok((None, false));
    }
    Price::parse_cell(text).map(|(price, floor)| (Some(price), floor))
}

fn is_none_marker(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "-" || value.eq_ignore_ascii_case("none")
}

/// A document address starting with `prefix` that is mentioned inside `section`.
fn section_email(doc: &PricingDocument, section: &Section, prefix: &str) -> Option<String> {
    let mentioned = |email: &str| {
        section.blocks().any(|block| {
            block
                .paragraphs
                .iter()
                .chain(block.fields.iter().map(|f| &f.value))
                .any(|text| text.contains(email))
        })
    };
    doc.emails()
        .iter()
        .find(|email| email.starts_with(prefix) && mentioned(email.as_str()))
        .cloned()
}
