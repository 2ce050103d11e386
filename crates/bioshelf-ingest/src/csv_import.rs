//! CSV import parsing and row validation.
//!
//! The upload format is deliberately simple: newline-delimited rows, flat
//! comma-delimited fields, no quoting or escaping. A quoted field containing
//! a comma misaligns its row the same way a bare comma would; this is a
//! documented limitation of the format, not something the parser tries to
//! repair. Blank lines inside the body are data rows like any other: they
//! keep their row number and fail validation on the empty name.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use bioshelf_model::{MaterialDraft, MaterialType, UnitCatalog};

/// Headers every upload must carry, case-insensitive, any order.
/// Unknown extra headers are tolerated and ignored.
pub const EXPECTED_HEADERS: [&str; 9] = [
    "name",
    "type",
    "quantity",
    "unit",
    "location",
    "expirydate",
    "vendor",
    "description",
    "notes",
];

/// Result of parsing one CSV upload: the rows that validated, in source
/// order, and the display-ready error messages for the rows that did not.
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    pub records: Vec<MaterialDraft>,
    pub errors: Vec<String>,
}

impl ImportBatch {
    /// True when there is at least one parsed record to show.
    pub fn is_previewable(&self) -> bool {
        !self.records.is_empty()
    }

    /// True when the batch may be committed: something parsed and nothing
    /// failed validation.
    pub fn is_committable(&self) -> bool {
        self.is_previewable() && self.errors.is_empty()
    }
}

static EXPIRY_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid expiry date regex"));

/// True when `value` is a calendar-valid date written exactly as
/// `YYYY-MM-DD`. The regex gate matters: chrono alone would accept
/// unpadded months and days.
pub fn is_valid_expiry_date(value: &str) -> bool {
    EXPIRY_DATE_REGEX.is_match(value)
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Split one source line on commas, trimming each field. No quote handling.
fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(normalize_cell).collect()
}

/// Parse one CSV upload into material drafts.
///
/// Rows are validated against the supplied type set and unit catalog. A row
/// fails on its first failing check and is dropped whole; its message lands
/// in `errors` as `Row <n>: <reason>` with `<n>` 1-based among data rows.
/// A missing required header aborts the whole parse with a single error.
pub fn parse_materials_csv(
    text: &str,
    types: &[MaterialType],
    unit_catalog: &UnitCatalog,
) -> ImportBatch {
    let rows: Vec<Vec<String>> = text.trim().lines().map(split_line).collect();

    let headers: Vec<String> = rows
        .first()
        .map(|row| row.iter().map(|h| h.to_lowercase()).collect())
        .unwrap_or_default();

    let missing: Vec<&str> = EXPECTED_HEADERS
        .iter()
        .filter(|expected| !headers.iter().any(|h| h == *expected))
        .copied()
        .collect();
    if !missing.is_empty() {
        return ImportBatch {
            records: Vec::new(),
            errors: vec![format!("Missing required headers: {}", missing.join(", "))],
        };
    }

    let mut batch = ImportBatch::default();
    for (row_number, values) in rows.iter().skip(1).enumerate() {
        let row_number = row_number + 1;
        let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            fields.insert(
                header.as_str(),
                values.get(idx).map(String::as_str).unwrap_or(""),
            );
        }
        match validate_row(row_number, &fields, types, unit_catalog) {
            Ok(draft) => batch.records.push(draft),
            Err(message) => batch.errors.push(message),
        }
    }

    debug!(
        records = batch.records.len(),
        errors = batch.errors.len(),
        "parsed csv upload"
    );
    batch
}

/// Validate one data row, short-circuiting at the first failing check.
fn validate_row(
    row_number: usize,
    fields: &BTreeMap<&str, &str>,
    types: &[MaterialType],
    unit_catalog: &UnitCatalog,
) -> Result<MaterialDraft, String> {
    let field = |name: &str| fields.get(name).copied().unwrap_or("");

    let name = field("name");
    if name.is_empty() {
        return Err(format!("Row {row_number}: Missing name"));
    }

    let type_id = field("type");
    if !types.iter().any(|t| t.id == type_id) {
        return Err(format!("Row {row_number}: Invalid type \"{type_id}\""));
    }

    let quantity_raw = field("quantity");
    let quantity = quantity_raw
        .parse::<f64>()
        .ok()
        .filter(|q| !q.is_nan());
    let Some(quantity) = quantity else {
        return Err(format!(
            "Row {row_number}: Invalid quantity \"{quantity_raw}\""
        ));
    };

    let unit = field("unit");
    if unit.is_empty() || !unit_catalog.allows(type_id, unit) {
        return Err(format!(
            "Row {row_number}: Invalid unit \"{unit}\" for type \"{type_id}\""
        ));
    }

    let location = field("location");
    if location.is_empty() {
        return Err(format!("Row {row_number}: Missing location"));
    }

    let expiry_date = field("expirydate");
    if !expiry_date.is_empty() && !is_valid_expiry_date(expiry_date) {
        return Err(format!(
            "Row {row_number}: Invalid expiry date format \"{expiry_date}\". Use YYYY-MM-DD"
        ));
    }

    Ok(MaterialDraft {
        name: name.to_string(),
        type_id: type_id.to_string(),
        quantity,
        unit: unit.to_string(),
        location: location.to_string(),
        expiry_date: expiry_date.to_string(),
        vendor: field("vendor").to_string(),
        description: field("description").to_string(),
        notes: field("notes").to_string(),
    })
}
