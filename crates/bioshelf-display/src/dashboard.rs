//! Dashboard subsets derived from the materials collection.
//!
//! These are plain filters over the same status rules the inventory screen
//! uses; equipment records are skipped throughout because they carry no
//! stock status.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use bioshelf_model::Material;

use crate::status::{MaterialStatus, derive_status, expiry_date, is_status_exempt};

/// How far ahead the "expiring soon" window looks, in days.
pub const EXPIRY_WINDOW_DAYS: u64 = 30;

/// Materials currently below their type's low-stock threshold (and not
/// expired; expiry wins in the status rules).
pub fn low_stock<'a>(materials: &'a [Material], today: NaiveDate) -> Vec<&'a Material> {
    materials
        .iter()
        .filter(|m| !is_status_exempt(m))
        .filter(|m| derive_status(m, today) == MaterialStatus::Low)
        .collect()
}

/// Materials whose expiry day has passed (or is today).
pub fn expired<'a>(materials: &'a [Material], today: NaiveDate) -> Vec<&'a Material> {
    materials
        .iter()
        .filter(|m| !is_status_exempt(m))
        .filter(|m| derive_status(m, today) == MaterialStatus::Expired)
        .collect()
}

/// Unexpired materials whose expiry day falls within the next
/// `window_days` days. Day `window_days` is inside the window, day
/// `window_days + 1` is not.
pub fn expiring_soon<'a>(
    materials: &'a [Material],
    today: NaiveDate,
    window_days: u64,
) -> Vec<&'a Material> {
    let window_end = today
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);
    materials
        .iter()
        .filter(|m| !is_status_exempt(m))
        .filter(|m| {
            expiry_date(m).is_some_and(|date| date > today && date <= window_end)
        })
        .collect()
}

/// Counts shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

pub fn inventory_stats(materials: &[Material], today: NaiveDate) -> InventoryStats {
    InventoryStats {
        total: materials.len(),
        low_stock: low_stock(materials, today).len(),
        expiring_soon: expiring_soon(materials, today, EXPIRY_WINDOW_DAYS).len(),
        expired: expired(materials, today).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioshelf_model::MaterialDraft;

    fn material(name: &str, type_id: &str, quantity: f64, expiry: &str) -> Material {
        Material::from_draft(
            name,
            MaterialDraft {
                name: name.to_string(),
                type_id: type_id.to_string(),
                quantity,
                unit: "mL".to_string(),
                location: "Lab A".to_string(),
                expiry_date: expiry.to_string(),
                ..MaterialDraft::default()
            },
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
    }

    #[test]
    fn window_boundary_is_inclusive_at_thirty_days() {
        let materials = vec![
            material("day-30", "reagent", 500.0, "2026-07-15"),
            material("day-31", "reagent", 500.0, "2026-07-16"),
            material("today", "reagent", 500.0, "2026-06-15"),
            material("no-expiry", "reagent", 500.0, ""),
        ];
        let soon = expiring_soon(&materials, today(), EXPIRY_WINDOW_DAYS);
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].name, "day-30");
    }

    #[test]
    fn expired_materials_leave_the_soon_window() {
        let materials = vec![material("old", "reagent", 500.0, "2026-06-01")];
        assert!(expiring_soon(&materials, today(), EXPIRY_WINDOW_DAYS).is_empty());
        assert_eq!(expired(&materials, today()).len(), 1);
    }

    #[test]
    fn equipment_never_appears_in_subsets() {
        let materials = vec![
            material("mixer", "equipment", 0.0, "2020-01-01"),
            material("tris", "reagent", 10.0, ""),
        ];
        assert!(expired(&materials, today()).is_empty());
        let low = low_stock(&materials, today());
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "tris");
    }

    #[test]
    fn stats_count_all_subsets() {
        let materials = vec![
            material("tris", "reagent", 10.0, ""),
            material("plasma", "sample", 100.0, "2026-06-01"),
            material("medium", "reagent", 500.0, "2026-07-01"),
            material("mixer", "equipment", 1.0, ""),
        ];
        let stats = inventory_stats(&materials, today());
        assert_eq!(
            stats,
            InventoryStats {
                total: 4,
                low_stock: 1,
                expiring_soon: 1,
                expired: 1,
            }
        );
    }
}
