use autho_catalog::Catalog;
use autho_document::{CheckOptions, DocumentError, PricingDocument, check, layout, render};
use autho_domain::{Contacts, FeatureSet, ModuleSet, Price, Quota, SupportLevel, Tier};
use autho_lint::{LintReport, Severity};
use std::fs;
use tempfile::tempdir;

fn canonical() -> String {
    render(&Catalog::builtin(), &Contacts::default())
}

fn check_text(markdown: &str) -> LintReport {
    check(&PricingDocument::parse(markdown), &Catalog::builtin(), &CheckOptions::default())
}

fn edited(from: &str, to: &str) -> String {
    let text = canonical();
    assert!(text.contains(from), "canonical sheet has no `{from}`");
    text.replacen(from, to, 1)
}

fn rules(report: &LintReport) -> Vec<&'static str> {
    report.findings.iter().map(|f| f.rule).collect()
}

#[test]
fn rendered_sheet_checks_clean() {
    let report = check_text(&canonical());
    assert!(report.is_clean(), "{report}");
}

#[test]
fn rendered_sheet_has_every_section() {
    let doc = PricingDocument::parse(&canonical());
    assert_eq!(doc.title(), Some("Autho.R Pricing"));
    let titles: Vec<_> = doc.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, layout::REQUIRED_SECTIONS);
}

#[test]
fn summary_view_reads_the_table() {
    let rows = PricingDocument::parse(&canonical()).summary().unwrap();
    let tiers: Vec<_> = rows.iter().map(|r| r.tier).collect();
    assert_eq!(tiers, Tier::all().collect::<Vec<_>>());

    let professional = &rows[2];
    assert!(professional.popular);
    assert_eq!(professional.monthly, Some(Price::from_dollars(79)));
    assert_eq!(professional.module_count, 10);

    let enterprise = &rows[4];
    assert!(enterprise.starting_price);
    assert_eq!(enterprise.annual, Some(Price::from_dollars(4_990)));
    assert_eq!(enterprise.tasks_per_month, Quota::Unlimited);
    assert_eq!(enterprise.support, SupportLevel::Dedicated);
}

#[test]
fn tier_details_view_reads_limits_and_sets() {
    let details = PricingDocument::parse(&canonical()).tier_details().unwrap();
    assert_eq!(details.len(), 5);

    let free = &details[0];
    assert_eq!(free.description.as_deref(), Some("Get started with basic automation"));
    assert_eq!(free.limits.max_file_size_mb, 10);
    assert_eq!(free.limits.data_retention_days, Quota::Limited(7));
    assert_eq!(free.modules, ModuleSet::BASIC);
    assert!(free.features.is_empty());
    assert_eq!(free.sku.as_deref(), Some("author-free"));

    let enterprise = &details[4];
    assert_eq!(enterprise.limits.max_file_size_mb, 2_000);
    assert_eq!(enterprise.limits.data_retention_days, Quota::Unlimited);
    assert_eq!(enterprise.features, FeatureSet::ALL);
}

#[test]
fn marketplace_and_contact_views() {
    let doc = PricingDocument::parse(&canonical());
    let skus: Vec<_> = doc.azure_skus().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(
        skus,
        ["author-free", "author-starter", "author-professional", "author-business", "author-enterprise"]
    );
    assert_eq!(doc.ibm_catalog_id(), Some("author-framework"));

    let contacts = doc.contacts();
    assert_eq!(contacts.sales.as_deref(), Some("sales@avidsolutions.com"));
    assert_eq!(contacts.support.as_deref(), Some("support@avidsolutions.com"));
    assert_eq!(doc.emails(), ["sales@avidsolutions.com", "support@avidsolutions.com"]);
}

#[test]
fn feature_matrix_view() {
    let matrix = PricingDocument::parse(&canonical()).feature_matrix().unwrap();
    assert_eq!(matrix.tiers.len(), 5);
    assert_eq!(matrix.rows.len(), 22);
    assert_eq!(matrix.includes("Webhooks", Tier::Starter), Some(false));
    assert_eq!(matrix.includes("Webhooks", Tier::Professional), Some(true));
    assert_eq!(matrix.includes("White Label", Tier::Business), Some(false));
    assert_eq!(matrix.includes("Teleportation", Tier::Free), None);
}

#[test]
fn wrong_annual_price_is_reported_twice() {
    let report = check_text(&edited("| **Starter** | $29 | $290 |", "| **Starter** | $29 | $300 |"));
    assert_eq!(rules(&report), ["doc-annual", "doc-summary"]);
    assert_eq!(report.findings[0].message, "annual $300 should be 10 x $29 = $290");
    assert_eq!(report.findings[1].message, "annual price is $300, catalog says $290");
}

#[test]
fn tier_without_annual_option_skips_the_annual_check() {
    let doc = PricingDocument::parse(&edited("| **Free** | $0 | $0 |", "| **Free** | $0 | - |"));
    let rows = doc.summary().unwrap();
    assert_eq!(rows[0].annual, None);
    assert_eq!(rows[0].monthly, Some(Price::ZERO));
    assert!(check(&doc, &Catalog::builtin(), &CheckOptions::default()).is_clean());
}

#[test]
fn custom_pricing_keeps_the_other_rows_checked() {
    let text = edited("| **Enterprise** | $499+ | $4,990+ |", "| **Enterprise** | Custom | Contact sales |")
        .replacen("| **Starter** | $29 | $290 |", "| **Starter** | $29 | $300 |", 1);
    let doc = PricingDocument::parse(&text);
    let enterprise = &doc.summary().unwrap()[4];
    assert_eq!((enterprise.monthly, enterprise.annual), (None, None));

    let report = check(&doc, &Catalog::builtin(), &CheckOptions::default());
    assert_eq!(rules(&report), ["doc-annual", "doc-summary"]);
    assert!(report.findings.iter().all(|f| f.tier == Some(Tier::Starter)));
}

#[test]
fn duplicated_tier_row_is_reported_once() {
    let row = "| **Starter** | $29 | $290 | 1,000 | 7 | Email |\n";
    let text = edited(row, &format!("{row}{row}"));
    let report = check_text(&text);
    assert_eq!(rules(&report), ["doc-summary"]);
    assert_eq!(report.findings[0].message, "tier listed more than once");
}

#[test]
fn dropped_check_mark_breaks_the_matrix() {
    let report = check_text(&edited("| Webhooks | - | - | ✓ | ✓ | ✓ |", "| Webhooks | - | - | ✓ | - | ✓ |"));
    assert_eq!(rules(&report), ["doc-matrix-monotonic", "doc-matrix"]);
    assert!(report.findings.iter().all(|f| f.tier == Some(Tier::Business)));
    assert_eq!(
        report.findings[0].message,
        "`Webhooks` is ✓ for Professional but not for Business"
    );
}

#[test]
fn limit_drift_in_tier_details() {
    let report = check_text(&edited("| Tasks per month | 1,000 |", "| Tasks per month | 2,000 |"));
    assert_eq!(rules(&report), ["doc-details"]);
    assert_eq!(report.findings[0].tier, Some(Tier::Starter));
    assert_eq!(report.findings[0].message, "tasks per month is 2,000, catalog says 1,000");
}

#[test]
fn module_drift_in_tier_details() {
    let report = check_text(&edited(
        "**Modules:** Spreadsheet, File Processing, PDF, Documentation\n",
        "**Modules:** Spreadsheet, File Processing, PDF, Email\n",
    ));
    assert_eq!(rules(&report), ["doc-details"]);
    assert_eq!(
        report.findings[0].message,
        "modules differ from the catalog (missing Documentation; not in catalog: Email)"
    );
}

#[test]
fn missing_section_is_reported_once() {
    let text = canonical();
    let cut = text.find("## Contact").unwrap();
    let report = check_text(&text[..cut]);
    assert_eq!(rules(&report), ["doc-sections"]);
    assert_eq!(report.findings[0].message, "missing section `## Contact`");
}

#[test]
fn marketplace_identifiers_must_match() {
    let report = check_text(&edited("`author-framework`", "`author-platform`"));
    assert_eq!(rules(&report), ["doc-marketplace"]);

    let report = check_text(&edited("| Business | `author-business` |", "| Business | `author-biz` |"));
    assert_eq!(rules(&report), ["doc-marketplace"]);
    assert_eq!(report.findings[0].tier, Some(Tier::Business));
}

#[test]
fn unreadable_cells_become_structure_findings() {
    let report = check_text(&edited("| **Business** | $199 |", "| **Business** | about $199 |"));
    assert_eq!(rules(&report), ["doc-structure"]);
    assert!(report.findings[0].message.starts_with("Invalid value (Pricing Summary, Business row)"));
}

#[test]
fn contacts_are_compared() {
    let report = check_text(&edited("sales@avidsolutions.com", "sales@example.com"));
    assert_eq!(rules(&report), ["doc-contacts"]);

    let expected = Contacts { repository: Some("https://example.com/autho".to_owned()), ..Contacts::default() };
    let options = CheckOptions { contacts: expected, ..CheckOptions::default() };
    let report = check(&PricingDocument::parse(&canonical()), &Catalog::builtin(), &options);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].severity, Severity::Warning);
}

#[test]
fn repository_is_rendered_when_known() {
    let contacts = Contacts { repository: Some("https://example.com/autho".to_owned()), ..Contacts::default() };
    let text = render(&Catalog::builtin(), &contacts);
    assert!(text.contains("- **Repository:** https://example.com/autho"));

    let options = CheckOptions { contacts, ..CheckOptions::default() };
    assert!(check(&PricingDocument::parse(&text), &Catalog::builtin(), &options).is_clean());
}

#[test]
fn empty_document_lists_every_section() {
    let report = check_text("# Nothing here\n");
    assert_eq!(report.findings.len(), 6);
    assert!(report.findings.iter().all(|f| f.rule == "doc-sections"));
}

#[test]
fn load_reads_from_disk() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("PRICING.md");
    fs::write(&path, canonical())?;
    let doc = PricingDocument::load(&path)?;
    assert_eq!(doc.sections().len(), 6);

    let err = PricingDocument::load(dir.path().join("missing.md")).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }));
    Ok(())
}
