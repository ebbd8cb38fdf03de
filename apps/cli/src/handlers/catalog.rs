use super::{Outcome, Session, print_json};
use crate::models::args::ExportFormat;
use autho::catalog::{CatalogFormat, PricingRow};
use autho::document::layout::{POPULAR_MARK, fields, limits};
use autho::domain::{ListingKind, Plan, Price, Quota};
use tracing::info;

/// Prints the pricing table.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_plans(session: &Session) -> anyhow::Result<Outcome> {
    let rows = session.catalog.pricing_table();
    if session.json {
        print_json(&rows)?;
        return Ok(Outcome::Success);
    }

    println!(
        "{:<16} {:>9} {:>9} {:>12} {:>8}  {:<12} {:<22}",
        "Tier", "Monthly", "Annual", "Tasks/Month", "Modules", "Support", "Azure SKU"
    );
    println!("{:-<95}", "");
    for row in &rows {
        let mut name = row.name.clone();
        if row.popular {
            name.push_str(" *");
        }
        println!(
            "{:<16} {:>9} {:>9} {:>12} {:>8}  {:<12} {:<22}",
            name,
            price(row.monthly_price, row.starting_price),
            price(row.annual_price, row.starting_price),
            row.limits.tasks_per_month.to_string(),
            row.modules.count(),
            row.limits.support.to_string(),
            row.marketplace_sku,
        );
    }
    if rows.iter().any(|row| row.popular) {
        println!("\n* most popular");
    }
    Ok(Outcome::Success)
}

/// Shows one plan in detail.
///
/// # Errors
/// Returns an error for an unknown tier name or a failed JSON serialization.
pub fn show_plan(session: &Session, tier: &str) -> anyhow::Result<Outcome> {
    let Some(plan) = session.catalog.plan_by_name(tier) else {
        let known: Vec<_> = session.catalog.tiers().map(|t| t.wire_name()).collect();
        anyhow::bail!("Unknown tier '{tier}' (expected one of: {})", known.join(", "));
    };

    if session.json {
        print_json(&PricingRow::from(plan))?;
    } else {
        print_plan(plan);
        if let Some(next) = plan.tier.next().and_then(|tier| session.catalog.plan(tier)) {
            println!("\nNext tier: {} at {}/month", next.name, price(next.monthly, next.starting_price));
        }
    }
    Ok(Outcome::Success)
}

fn print_plan(plan: &Plan) {
    let l = &plan.limits;
    let mut title = format!("{} ({})", plan.name, plan.tier.wire_name());
    if plan.popular {
        title.push(' ');
        title.push_str(POPULAR_MARK);
    }
    println!("{title}");
    println!("{}\n", plan.description);

    let mut annual = price(plan.annual, plan.starting_price);
    if let Some(savings) = plan.annual_savings_percent() {
        annual.push_str(&format!(
            " ({}/month, save {savings}%)",
            plan.annual_monthly_equivalent()
        ));
    }

    let modules: Vec<_> = plan.modules.labels().collect();
    let features: Vec<_> = plan.features.labels().collect();
    let lines = [
        ("Monthly", price(plan.monthly, plan.starting_price)),
        ("Annual", annual),
        (limits::TASKS, l.tasks_per_month.to_string()),
        (limits::WORKFLOWS, l.workflows_per_month.to_string()),
        (limits::API_CALLS, l.api_calls_per_day.to_string()),
        (limits::FILE_SIZE, format!("{} MB", Quota::from(u64::from(l.max_file_size_mb)))),
        (limits::CONCURRENCY, l.max_concurrent_workflows.to_string()),
        (limits::RETENTION, retention(l.data_retention_days)),
        (limits::SUPPORT, l.support.to_string()),
        (fields::MODULES, modules.join(", ")),
        (fields::FEATURES, if features.is_empty() { "None".to_owned() } else { features.join(", ") }),
        (fields::AZURE_SKU, plan.sku.clone()),
    ];
    for (label, value) in lines {
        println!("{label:<22} {value}");
    }
}

/// Resolves a marketplace identifier.
///
/// Unknown identifiers end in [`Outcome::Failure`].
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn resolve_sku(session: &Session, sku: &str) -> anyhow::Result<Outcome> {
    let Some(listing) = session.catalog.listings().into_iter().find(|l| l.id == sku) else {
        eprintln!("No marketplace listing has the identifier '{sku}'");
        return Ok(Outcome::Failure);
    };

    if session.json {
        print_json(&listing)?;
        return Ok(Outcome::Success);
    }
    match listing.kind {
        ListingKind::Tier(tier) => println!("{sku}: {tier} ({})", listing.marketplace),
        ListingKind::Catalog => println!("{sku}: every tier ({})", listing.marketplace),
    }
    Ok(Outcome::Success)
}

/// Prints the active catalog as a catalog file.
///
/// # Errors
/// Returns an error if the catalog cannot be encoded.
pub fn export_catalog(session: &Session, format: ExportFormat) -> anyhow::Result<Outcome> {
    let format = CatalogFormat::from(format);
    let encoded = session.catalog.encode(format)?;
    info!(?format, plans = session.catalog.len(), "Exporting catalog");
    print!("{encoded}");
    if !encoded.ends_with('\n') {
        println!();
    }
    Ok(Outcome::Success)
}

fn price(price: Price, floor: bool) -> String {
    if floor { format!("{price}+") } else { price.to_string() }
}

fn retention(days: Quota) -> String {
    match days {
        Quota::Unlimited => days.to_string(),
        Quota::Limited(_) => format!("{days} days"),
    }
}
