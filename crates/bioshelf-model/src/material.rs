//! Material records as they travel between the importer, the store, and the
//! display layer.
//!
//! Field names on the wire match the original mock API (`type`, `expiryDate`),
//! so a store database written by either side deserializes in the other.

use serde::{Deserialize, Serialize};

/// A material record that has not been persisted yet.
///
/// This is what the CSV parser emits and what `create` consumes. Optional
/// free-text fields default to the empty string; an empty `expiry_date`
/// means "no expiry".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub quantity: f64,
    pub unit: String,
    pub location: String,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
}

impl MaterialDraft {
    /// True for records that carry an expiry date.
    pub fn has_expiry(&self) -> bool {
        !self.expiry_date.is_empty()
    }
}

/// A persisted material record. The `id` is opaque and assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub quantity: f64,
    pub unit: String,
    pub location: String,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
}

impl Material {
    /// Attach a store-assigned id to a draft.
    pub fn from_draft(id: impl Into<String>, draft: MaterialDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            type_id: draft.type_id,
            quantity: draft.quantity,
            unit: draft.unit,
            location: draft.location,
            expiry_date: draft.expiry_date,
            vendor: draft.vendor,
            description: draft.description,
            notes: draft.notes,
        }
    }

    /// True for records that carry an expiry date.
    pub fn has_expiry(&self) -> bool {
        !self.expiry_date.is_empty()
    }

    /// Strip the id, e.g. for re-submitting an edited record.
    pub fn into_draft(self) -> MaterialDraft {
        MaterialDraft {
            name: self.name,
            type_id: self.type_id,
            quantity: self.quantity,
            unit: self.unit,
            location: self.location,
            expiry_date: self.expiry_date,
            vendor: self.vendor,
            description: self.description,
            notes: self.notes,
        }
    }
}
