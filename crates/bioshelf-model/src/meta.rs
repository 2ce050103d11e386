//! Reference metadata the validator consults: the known material types and
//! the units each type admits.
//!
//! Both are supplied by the store at runtime rather than baked in, so a
//! deployment can extend the type set without touching the import pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A material type identifier, e.g. `reagent` or `equipment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialType {
    pub id: String,
}

impl MaterialType {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Allowed units per material type, in display order.
///
/// Serializes as a bare map, matching the `/unitOptions` wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitCatalog {
    units: BTreeMap<String, Vec<String>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the allowed units for a type, replacing any previous entry.
    pub fn set_units<I, S>(&mut self, type_id: impl Into<String>, units: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units
            .insert(type_id.into(), units.into_iter().map(Into::into).collect());
    }

    /// Units allowed for a type, or an empty slice for an unknown type.
    pub fn units_for(&self, type_id: &str) -> &[String] {
        self.units.get(type_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `unit` is one of the allowed units for `type_id`.
    pub fn allows(&self, type_id: &str, unit: &str) -> bool {
        self.units_for(type_id).iter().any(|u| u == unit)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.units.iter()
    }
}
