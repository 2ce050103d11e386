//! Command implementations.
//!
//! Every command takes the store as a trait object-free generic so tests can
//! run against the in-memory backend.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::info;

use bioshelf_display::{
    EXPIRY_WINDOW_DAYS, display_status, expiring_soon, format_quantity, inventory_stats, low_stock,
};
use bioshelf_import::{DEFAULT_PREVIEW_LIMIT, commit, preview};
use bioshelf_ingest::parse_materials_csv;
use bioshelf_model::Material;
use bioshelf_store::MaterialStore;

use crate::cli::{InventoryArgs, SortKeyArg};
use crate::tables::{inventory_table, preview_table, types_table};

/// Materials shown per inventory page.
pub const PAGE_SIZE: usize = 10;

/// Import a CSV file: parse, validate, preview, and (unless dry-run) commit.
pub fn run_import<S: MaterialStore>(store: &mut S, file: &Path, dry_run: bool) -> Result<usize> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("read csv file: {}", file.display()))?;
    run_import_text(store, &text, dry_run)
}

/// Import from already-loaded CSV text. Returns how many materials were
/// persisted (zero for a dry run).
pub fn run_import_text<S: MaterialStore>(
    store: &mut S,
    text: &str,
    dry_run: bool,
) -> Result<usize> {
    let types = store.types()?;
    let unit_options = store.unit_options()?;
    let batch = parse_materials_csv(text, &types, &unit_options);

    if !batch.errors.is_empty() {
        eprintln!("Validation errors:");
        for error in &batch.errors {
            eprintln!("- {error}");
        }
    }
    if batch.is_previewable() {
        println!("Preview ({} materials found)", batch.records.len());
        let shown = preview(&batch, DEFAULT_PREVIEW_LIMIT);
        println!("{}", preview_table(shown));
        if batch.records.len() > shown.len() {
            println!("... and {} more materials", batch.records.len() - shown.len());
        }
    }

    // Commit is gated exactly like the submit button: at least one parsed
    // record and no outstanding validation errors.
    if !batch.errors.is_empty() {
        bail!(
            "{} row(s) failed validation; fix the source file and re-import",
            batch.errors.len()
        );
    }
    if !batch.is_committable() {
        bail!("No valid data to import");
    }
    if dry_run {
        println!("Dry run: nothing imported");
        return Ok(0);
    }

    let imported = commit(&batch.records, |draft| store.create(draft.clone()))?;
    info!(count = imported.len(), "import committed");
    println!("Imported {} materials", imported.len());
    Ok(imported.len())
}

/// Sort and paginate the materials collection for listing.
pub fn run_inventory<S: MaterialStore>(
    store: &S,
    args: &InventoryArgs,
    today: NaiveDate,
) -> Result<()> {
    if args.page == 0 {
        bail!("page numbers start at 1");
    }
    let mut materials = store.list()?;
    sort_materials(&mut materials, args.sort, args.desc);

    let total_pages = materials.len().div_ceil(PAGE_SIZE).max(1);
    if args.page > total_pages {
        bail!("page {} is past the end (total pages: {total_pages})", args.page);
    }
    let start = (args.page - 1) * PAGE_SIZE;
    let page = &materials[start..materials.len().min(start + PAGE_SIZE)];

    if args.json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }
    println!("{}", inventory_table(page, today));
    println!("Page {} of {total_pages} ({} materials)", args.page, materials.len());
    Ok(())
}

/// Stat counts plus bounded low-stock and expiring-soon previews.
pub fn run_dashboard<S: MaterialStore>(store: &S, today: NaiveDate, json: bool) -> Result<()> {
    let materials = store.list()?;
    let stats = inventory_stats(&materials, today);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total materials: {}", stats.total);
    println!("Low stock:       {}", stats.low_stock);
    println!("Expiring soon:   {}", stats.expiring_soon);
    println!("Expired:         {}", stats.expired);

    let low = low_stock(&materials, today);
    if !low.is_empty() {
        println!();
        println!("Low stock preview:");
        for material in low.iter().take(DEFAULT_PREVIEW_LIMIT) {
            println!(
                "- {} ({})",
                material.name,
                format_quantity(Some(material.quantity), &material.unit)
            );
        }
    }
    let soon = expiring_soon(&materials, today, EXPIRY_WINDOW_DAYS);
    if !soon.is_empty() {
        println!();
        println!("Expiring soon preview:");
        for material in soon.iter().take(DEFAULT_PREVIEW_LIMIT) {
            println!("- {} (Expires: {})", material.name, material.expiry_date);
        }
    }
    Ok(())
}

/// Print one material in full.
pub fn run_show<S: MaterialStore>(store: &S, id: &str, json: bool, today: NaiveDate) -> Result<()> {
    let material = store.get(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&material)?);
        return Ok(());
    }
    let status = display_status(&material, today)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".to_string());
    detail_field("Name", &material.name);
    detail_field("Type", &material.type_id);
    detail_field(
        "Quantity",
        &format_quantity(Some(material.quantity), &material.unit),
    );
    detail_field("Status", &status);
    detail_field("Location", &material.location);
    detail_field("Expires", &material.expiry_date);
    detail_field("Vendor", &material.vendor);
    detail_field("Description", &material.description);
    detail_field("Notes", &material.notes);
    Ok(())
}

fn detail_field(label: &str, value: &str) {
    let shown = if value.is_empty() { "—" } else { value };
    println!("{label:12} {shown}");
}

pub fn run_remove<S: MaterialStore>(store: &mut S, id: &str) -> Result<()> {
    store.delete(id)?;
    println!("Deleted material {id}");
    Ok(())
}

pub fn run_types<S: MaterialStore>(store: &S) -> Result<()> {
    let types = store.types()?;
    let catalog = store.unit_options()?;
    println!("{}", types_table(&types, &catalog));
    Ok(())
}

/// Sort the inventory by one column. Name and location compare
/// case-insensitively; materials without an expiry date sort after dated
/// ones.
pub fn sort_materials(materials: &mut [Material], key: SortKeyArg, desc: bool) {
    materials.sort_by(|a, b| {
        let ordering = match key {
            SortKeyArg::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKeyArg::Quantity => a
                .quantity
                .partial_cmp(&b.quantity)
                .unwrap_or(Ordering::Equal),
            SortKeyArg::Expiry => match (a.expiry_date.is_empty(), b.expiry_date.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // ISO dates compare chronologically as strings.
                (false, false) => a.expiry_date.cmp(&b.expiry_date),
            },
            SortKeyArg::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
        };
        if desc { ordering.reverse() } else { ordering }
    });
}
