//! JSON-file-backed store.
//!
//! The whole database lives in one JSON document, mirroring the mock API's
//! single-file layout: the type list, the unit catalog, and the materials.
//! Every mutation rewrites the whole file through a temp-file rename.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use bioshelf_model::{
    BioshelfError, Material, MaterialDraft, MaterialType, Result, UnitCatalog,
};

use crate::memory::MemoryStore;
use crate::store::MaterialStore;

#[derive(Debug, Serialize, Deserialize)]
struct Database {
    types: Vec<MaterialType>,
    #[serde(rename = "unitOptions")]
    unit_options: UnitCatalog,
    materials: Vec<Material>,
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Open a database file, creating a freshly seeded one if it does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let db: Database = serde_json::from_str(&text).map_err(|error| {
                BioshelfError::Corrupt(format!("{}: {error}", path.display()))
            })?;
            let mut inner = MemoryStore::new(db.types, db.unit_options);
            inner.seed(db.materials);
            Ok(Self { path, inner })
        } else {
            info!(path = %path.display(), "initializing new database file");
            let store = Self {
                path,
                inner: MemoryStore::with_defaults(),
            };
            store.persist()?;
            Ok(store)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let db = Database {
            types: self.inner.types()?,
            unit_options: self.inner.unit_options()?,
            materials: self.inner.materials().to_vec(),
        };
        let text = serde_json::to_string_pretty(&db)
            .map_err(|error| BioshelfError::Message(error.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl MaterialStore for JsonStore {
    fn types(&self) -> Result<Vec<MaterialType>> {
        self.inner.types()
    }

    fn unit_options(&self) -> Result<UnitCatalog> {
        self.inner.unit_options()
    }

    fn list(&self) -> Result<Vec<Material>> {
        self.inner.list()
    }

    fn get(&self, id: &str) -> Result<Material> {
        self.inner.get(id)
    }

    fn create(&mut self, draft: MaterialDraft) -> Result<Material> {
        let material = self.inner.create(draft)?;
        self.persist()?;
        Ok(material)
    }

    fn update(&mut self, id: &str, draft: MaterialDraft) -> Result<Material> {
        let material = self.inner.update(id, draft)?;
        self.persist()?;
        Ok(material)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.inner.delete(id)?;
        self.persist()?;
        Ok(())
    }
}
