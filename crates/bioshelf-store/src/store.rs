//! The persistence collaborator interface.
//!
//! Everything the front-end screens and the import commit loop need from a
//! backend, as one trait. Implementations assign ids on create; ids are
//! opaque strings to every consumer.

use bioshelf_model::{
    BioshelfError, Material, MaterialDraft, MaterialType, Result, UnitCatalog,
};

pub trait MaterialStore {
    /// The known material types.
    fn types(&self) -> Result<Vec<MaterialType>>;

    /// Allowed units per type.
    fn unit_options(&self) -> Result<UnitCatalog>;

    /// All materials, in insertion order.
    fn list(&self) -> Result<Vec<Material>>;

    fn get(&self, id: &str) -> Result<Material>;

    /// Persist a draft, assigning it a fresh id.
    fn create(&mut self, draft: MaterialDraft) -> Result<Material>;

    /// Replace the record behind `id` with `draft`, keeping the id.
    fn update(&mut self, id: &str, draft: MaterialDraft) -> Result<Material>;

    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Server-side draft checks shared by the backends. The import pipeline
/// validates more strictly before it ever submits; this is the minimal gate
/// a direct API caller still hits.
pub fn validate_draft(draft: &MaterialDraft, types: &[MaterialType]) -> Result<()> {
    if draft.name.is_empty() {
        return Err(BioshelfError::InvalidDraft("name must not be empty".to_string()));
    }
    if !types.iter().any(|t| t.id == draft.type_id) {
        return Err(BioshelfError::InvalidDraft(format!(
            "unknown type \"{}\"",
            draft.type_id
        )));
    }
    if draft.quantity < 0.0 || draft.quantity.is_nan() {
        return Err(BioshelfError::InvalidDraft(format!(
            "quantity must be non-negative, got {}",
            draft.quantity
        )));
    }
    Ok(())
}
