//! Table rendering for preview, inventory, and type listings.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bioshelf_display::{MaterialStatus, display_status, format_quantity};
use bioshelf_model::{Material, MaterialDraft, MaterialType, UnitCatalog};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text.to_uppercase()).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell(text: impl ToString) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn status_cell(status: Option<MaterialStatus>) -> Cell {
    match status {
        Some(MaterialStatus::Expired) => Cell::new("EXPIRED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(MaterialStatus::Low) => Cell::new("LOW")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Some(MaterialStatus::InStock) => Cell::new("IN_STOCK").fg(Color::Green),
        // Equipment carries no stock status.
        None => dim_cell("—"),
    }
}

fn expiry_cell(expiry_date: &str) -> Cell {
    if expiry_date.is_empty() {
        dim_cell("—")
    } else {
        Cell::new(expiry_date)
    }
}

/// The pre-commit preview of parsed CSV rows.
pub fn preview_table(records: &[MaterialDraft]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Qty"),
        header_cell("Unit"),
        header_cell("Location"),
        header_cell("Expiry"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.type_id),
            Cell::new(record.quantity),
            Cell::new(&record.unit),
            Cell::new(&record.location),
            expiry_cell(&record.expiry_date),
        ]);
    }
    table
}

/// The inventory listing with derived status and formatted quantities.
pub fn inventory_table(materials: &[Material], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Qty"),
        header_cell("Status"),
        header_cell("Expires"),
        header_cell("Location"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for material in materials {
        table.add_row(vec![
            Cell::new(&material.id),
            Cell::new(&material.name),
            Cell::new(format_quantity(Some(material.quantity), &material.unit)),
            status_cell(display_status(material, today)),
            expiry_cell(&material.expiry_date),
            Cell::new(&material.location),
        ]);
    }
    table
}

/// The known types and their allowed units.
pub fn types_table(types: &[MaterialType], catalog: &UnitCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Units")]);
    apply_table_style(&mut table);
    for material_type in types {
        let units = catalog.units_for(&material_type.id).join(", ");
        table.add_row(vec![
            Cell::new(&material_type.id),
            if units.is_empty() {
                dim_cell("—")
            } else {
                Cell::new(units)
            },
        ]);
    }
    table
}
