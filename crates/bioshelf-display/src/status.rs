//! Stock status derivation.
//!
//! Status is recomputed on demand from the record and the current calendar
//! day; nothing is cached. Expiry wins over low stock whenever both hold.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use bioshelf_model::Material;

/// Derived stock classification for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialStatus {
    InStock,
    Low,
    Expired,
}

impl MaterialStatus {
    /// Badge text, matching the inventory screen's labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialStatus::InStock => "IN_STOCK",
            MaterialStatus::Low => "LOW",
            MaterialStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The type whose records carry no stock status at all.
pub const STATUS_EXEMPT_TYPE: &str = "equipment";

/// True for records the status engine must not classify. Callers render a
/// neutral placeholder for these instead.
pub fn is_status_exempt(material: &Material) -> bool {
    material.type_id == STATUS_EXEMPT_TYPE
}

/// Low-stock threshold per material type. Types without an entry are never
/// considered low.
pub fn low_stock_threshold(type_id: &str) -> Option<f64> {
    match type_id {
        "reagent" => Some(50.0),
        "consumable" => Some(100.0),
        "sample" => Some(5.0),
        _ => None,
    }
}

/// The material's expiry date, if present and parseable. An unparseable
/// value behaves like no expiry, the same as an absent one.
pub fn expiry_date(material: &Material) -> Option<NaiveDate> {
    if material.expiry_date.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(&material.expiry_date, "%Y-%m-%d").ok()
}

/// True when the material's expiry day is `today` or earlier. Comparison is
/// at day granularity, so a material expiring today is already expired.
pub fn is_expired(material: &Material, today: NaiveDate) -> bool {
    expiry_date(material).is_some_and(|date| date <= today)
}

/// Classify a material's stock status. Expired overrides low,
/// unconditionally.
///
/// Callers must not pass status-exempt (equipment) records; use
/// [`display_status`] when the input may contain them.
pub fn derive_status(material: &Material, today: NaiveDate) -> MaterialStatus {
    if is_expired(material, today) {
        return MaterialStatus::Expired;
    }
    let is_low = low_stock_threshold(&material.type_id)
        .is_some_and(|threshold| material.quantity < threshold);
    if is_low {
        return MaterialStatus::Low;
    }
    MaterialStatus::InStock
}

/// Status for display: `None` for exempt records, which render as a
/// placeholder badge.
pub fn display_status(material: &Material, today: NaiveDate) -> Option<MaterialStatus> {
    if is_status_exempt(material) {
        return None;
    }
    Some(derive_status(material, today))
}
