//! Canonical `PRICING.md` rendering.

use crate::layout::{
    ABSENT_MARK, AZURE_SUBSECTION, CONTACT, FEATURE_MATRIX, IBM_SUBSECTION, MARKETPLACE, OVERVIEW,
    POPULAR_MARK, PRICING_SUMMARY, SUMMARY_COLUMNS, TIER_DETAILS, fields, limits,
};
use autho_catalog::Catalog;
use autho_domain::constants::{CHECK_MARK, PRODUCT_NAME};
use autho_domain::{Contacts, FeatureSet, ModuleSet, Plan, Price, Quota};

/// Renders the pricing sheet for `catalog`.
///
/// The output parses back into a document that checks clean against the same catalog and
/// contacts.
#[must_use]
pub fn render(catalog: &Catalog, contacts: &Contacts) -> String {
    let mut doc = Markdown::default();

    doc.line(format!("# {PRODUCT_NAME} Pricing"));

    doc.heading(2, OVERVIEW);
    doc.line(overview(catalog));

    doc.heading(2, PRICING_SUMMARY);
    doc.table(&SUMMARY_COLUMNS, catalog.plans().iter().map(summary_row));
    if catalog.plans().iter().any(|plan| plan.starting_price) {
        doc.blank();
        doc.line("Prices marked `+` are starting prices; contact sales for a quote.");
    }

    doc.heading(2, TIER_DETAILS);
    for plan in catalog {
        tier_block(&mut doc, plan);
    }

    doc.heading(2, MARKETPLACE);
    doc.heading(3, AZURE_SUBSECTION);
    doc.table(
        &["Tier", "SKU"],
        catalog.plans().iter().map(|plan| vec![plan.tier.display_name().to_owned(), code(&plan.sku)]),
    );
    doc.heading(3, IBM_SUBSECTION);
    doc.field(fields::CATALOG_ID, &code(catalog.ibm_catalog_id()));

    doc.heading(2, FEATURE_MATRIX);
    let mut header = vec!["Feature"];
    header.extend(catalog.tiers().map(|tier| tier.display_name()));
    let mut rows = Vec::new();
    for (module, _) in ModuleSet::catalog() {
        if let Some(label) = module.label() {
            rows.push(matrix_row(label, catalog, |plan| plan.modules.contains(module)));
        }
    }
    for (feature, _) in FeatureSet::catalog() {
        if let Some(label) = feature.label() {
            rows.push(matrix_row(label, catalog, |plan| plan.features.contains(feature)));
        }
    }
    doc.table(&header, rows);

    doc.heading(2, CONTACT);
    doc.item(fields::SALES, &contacts.sales);
    doc.item(fields::SUPPORT, &contacts.support);
    if let Some(repository) = &contacts.repository {
        doc.item(fields::REPOSITORY, repository);
    }

    doc.finish()
}

fn overview(catalog: &Catalog) -> String {
    let tiers: Vec<_> = catalog.tiers().map(|tier| tier.display_name()).collect();
    let mut text = format!(
        "{PRODUCT_NAME} is offered in {} tiers: {}.",
        tiers.len(),
        tiers.join(", ")
    );
    if let Some(savings) = catalog.plans().iter().find_map(Plan::annual_savings_percent) {
        text.push_str(&format!(" Annual billing saves about {savings}% over paying monthly."));
    }
    text
}

fn summary_row(plan: &Plan) -> Vec<String> {
    let mut tier = format!("**{}**", plan.tier.display_name());
    if plan.popular {
        tier.push(' ');
        tier.push_str(POPULAR_MARK);
    }
    vec![
        tier,
        price(plan.monthly, plan.starting_price),
        price(plan.annual, plan.starting_price),
        plan.limits.tasks_per_month.to_string(),
        plan.module_count().to_string(),
        plan.limits.support.to_string(),
    ]
}

fn matrix_row(label: &str, catalog: &Catalog, included: impl Fn(&Plan) -> bool) -> Vec<String> {
    let mut row = vec![label.to_owned()];
    row.extend(
        catalog
            .plans()
            .iter()
            .map(|plan| if included(plan) { CHECK_MARK } else { ABSENT_MARK }.to_owned()),
    );
    row
}

fn tier_block(doc: &mut Markdown, plan: &Plan) {
    let l = &plan.limits;
    doc.heading(3, plan.tier.display_name());
    doc.line(&plan.description);
    doc.blank();
    doc.table(
        &["Limit", "Value"],
        [
            (limits::TASKS, l.tasks_per_month.to_string()),
            (limits::WORKFLOWS, l.workflows_per_month.to_string()),
            (limits::API_CALLS, l.api_calls_per_day.to_string()),
            (limits::FILE_SIZE, format!("{} MB", Quota::from(u64::from(l.max_file_size_mb)))),
            (limits::CONCURRENCY, Quota::from(u64::from(l.max_concurrent_workflows)).to_string()),
            (limits::RETENTION, days(l.data_retention_days)),
            (limits::SUPPORT, l.support.to_string()),
        ]
        .into_iter()
        .map(|(label, value)| vec![label.to_owned(), value]),
    );
    doc.blank();

    let modules: Vec<_> = plan.modules.labels().collect();
    let features: Vec<_> = plan.features.labels().collect();
    doc.line(format!("**{}:** {}", fields::MODULES, modules.join(", ")));
    doc.line(format!(
        "**{}:** {}",
        fields::FEATURES,
        if features.is_empty() { "None".to_owned() } else { features.join(", ") }
    ));
    doc.line(format!("**{}:** {}", fields::AZURE_SKU, code(&plan.sku)));
}

fn price(price: Price, floor: bool) -> String {
    if floor { format!("{price}+") } else { price.to_string() }
}

fn days(quota: Quota) -> String {
    match quota {
        Quota::Unlimited => quota.to_string(),
        Quota::Limited(_) => format!("{quota} days"),
    }
}

fn code(text: &str) -> String {
    format!("`{text}`")
}

/// Line-oriented markdown writer.
#[derive(Debug, Default)]
struct Markdown {
    lines: Vec<String>,
}

impl Markdown {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn heading(&mut self, level: usize, title: &str) {
        self.blank();
        self.lines.push(format!("{} {title}", "#".repeat(level)));
        self.blank();
    }

    fn field(&mut self, label: &str, value: &str) {
        self.lines.push(format!("**{label}:** {value}"));
    }

    fn item(&mut self, label: &str, value: &str) {
        self.lines.push(format!("- **{label}:** {value}"));
    }

    fn table(&mut self, header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) {
        self.lines.push(format!("| {} |", header.join(" | ")));
        self.lines.push(format!("|{}", "---|".repeat(header.len())));
        for row in rows {
            self.lines.push(format!("| {} |", row.join(" | ")));
        }
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
