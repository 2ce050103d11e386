//! Import orchestration: bounded preview of a parsed batch and the
//! sequential commit of its records to a create-record collaborator.
//!
//! The commit loop is strictly one record at a time. That ordering is what
//! makes partial-failure reporting unambiguous: when a create call fails,
//! everything before the failing record is already persisted and nothing
//! after it was ever attempted. There is no rollback.

use std::fmt::Display;

use thiserror::Error;
use tracing::{debug, warn};

use bioshelf_ingest::ImportBatch;
use bioshelf_model::{Material, MaterialDraft};

/// How many records the preview table shows.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// The first `limit` records of a batch, in source order. Display only;
/// the batch is not consumed or reordered.
pub fn preview(batch: &ImportBatch, limit: usize) -> &[MaterialDraft] {
    &batch.records[..batch.records.len().min(limit)]
}

/// A commit that stopped partway through.
///
/// `imported` holds every record persisted before the failure, in submission
/// order; the caller must merge them, not discard them. `name` is the record
/// the collaborator rejected. Records after it were never submitted.
#[derive(Debug, Error)]
#[error("Failed to import \"{name}\": {reason} ({} material(s) before it were imported)", imported.len())]
pub struct ImportError {
    pub name: String,
    pub reason: String,
    pub imported: Vec<Material>,
}

/// Submit each draft to `create`, one at a time, halting on the first
/// failure.
///
/// An empty slice is an immediate empty success; `create` is never called.
pub fn commit<F, E>(records: &[MaterialDraft], mut create: F) -> Result<Vec<Material>, ImportError>
where
    F: FnMut(&MaterialDraft) -> Result<Material, E>,
    E: Display,
{
    let mut imported = Vec::with_capacity(records.len());
    for draft in records {
        match create(draft) {
            Ok(material) => {
                debug!(name = %material.name, id = %material.id, "imported material");
                imported.push(material);
            }
            Err(error) => {
                warn!(name = %draft.name, %error, "import halted");
                return Err(ImportError {
                    name: draft.name.clone(),
                    reason: error.to_string(),
                    imported,
                });
            }
        }
    }
    Ok(imported)
}
