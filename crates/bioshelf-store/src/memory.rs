//! In-memory store: the test double, and the seed data for demos.

use tracing::debug;

use bioshelf_model::{
    BioshelfError, Material, MaterialDraft, MaterialType, Result, UnitCatalog,
};

use crate::store::{MaterialStore, validate_draft};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    types: Vec<MaterialType>,
    unit_catalog: UnitCatalog,
    materials: Vec<Material>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new(types: Vec<MaterialType>, unit_catalog: UnitCatalog) -> Self {
        Self {
            types,
            unit_catalog,
            materials: Vec::new(),
            next_id: 1,
        }
    }

    /// A store preloaded with the standard lab type set and unit lists.
    pub fn with_defaults() -> Self {
        let types = ["reagent", "consumable", "equipment", "sample"]
            .into_iter()
            .map(MaterialType::new)
            .collect();
        let mut catalog = UnitCatalog::new();
        catalog.set_units("reagent", ["mL", "L", "g", "mg", "milliliter", "gram"]);
        catalog.set_units("consumable", ["pieces", "boxes", "packs", "racks"]);
        catalog.set_units("equipment", ["unit"]);
        catalog.set_units("sample", ["vials", "tubes", "mL"]);
        Self::new(types, catalog)
    }

    /// Seed existing materials, e.g. when loading a database file. Ids keep
    /// counting from past the largest numeric id seen.
    pub fn seed(&mut self, materials: Vec<Material>) {
        for material in &materials {
            if let Ok(id) = material.id.parse::<u64>() {
                self.next_id = self.next_id.max(id + 1);
            }
        }
        self.materials = materials;
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.materials
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| BioshelfError::NotFound { id: id.to_string() })
    }
}

impl MaterialStore for MemoryStore {
    fn types(&self) -> Result<Vec<MaterialType>> {
        Ok(self.types.clone())
    }

    fn unit_options(&self) -> Result<UnitCatalog> {
        Ok(self.unit_catalog.clone())
    }

    fn list(&self) -> Result<Vec<Material>> {
        Ok(self.materials.clone())
    }

    fn get(&self, id: &str) -> Result<Material> {
        self.position(id).map(|idx| self.materials[idx].clone())
    }

    fn create(&mut self, draft: MaterialDraft) -> Result<Material> {
        validate_draft(&draft, &self.types)?;
        let id = self.next_id.to_string();
        self.next_id += 1;
        let material = Material::from_draft(id, draft);
        debug!(id = %material.id, name = %material.name, "created material");
        self.materials.push(material.clone());
        Ok(material)
    }

    fn update(&mut self, id: &str, draft: MaterialDraft) -> Result<Material> {
        validate_draft(&draft, &self.types)?;
        let idx = self.position(id)?;
        let material = Material::from_draft(id, draft);
        self.materials[idx] = material.clone();
        Ok(material)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let idx = self.position(id)?;
        self.materials.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reagent_draft(name: &str) -> MaterialDraft {
        MaterialDraft {
            name: name.to_string(),
            type_id: "reagent".to_string(),
            quantity: 10.0,
            unit: "mL".to_string(),
            location: "Lab A".to_string(),
            ..MaterialDraft::default()
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let mut store = MemoryStore::with_defaults();
        let a = store.create(reagent_draft("a")).expect("create a");
        let b = store.create(reagent_draft("b")).expect("create b");
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().expect("list").len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = MemoryStore::with_defaults();
        assert!(matches!(
            store.get("99"),
            Err(BioshelfError::NotFound { .. })
        ));
        assert!(matches!(
            store.update("99", reagent_draft("x")),
            Err(BioshelfError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete("99"),
            Err(BioshelfError::NotFound { .. })
        ));
    }

    #[test]
    fn create_rejects_invalid_drafts() {
        let mut store = MemoryStore::with_defaults();
        let nameless = MaterialDraft {
            name: String::new(),
            ..reagent_draft("x")
        };
        assert!(matches!(
            store.create(nameless),
            Err(BioshelfError::InvalidDraft(_))
        ));
        let unknown_type = MaterialDraft {
            type_id: "unobtainium".to_string(),
            ..reagent_draft("x")
        };
        assert!(matches!(
            store.create(unknown_type),
            Err(BioshelfError::InvalidDraft(_))
        ));
    }

    #[test]
    fn seed_advances_the_id_counter() {
        let mut store = MemoryStore::with_defaults();
        store.seed(vec![Material::from_draft("7", reagent_draft("old"))]);
        let created = store.create(reagent_draft("new")).expect("create");
        assert_eq!(created.id, "8");
    }

    #[test]
    fn update_keeps_the_id() {
        let mut store = MemoryStore::with_defaults();
        let created = store.create(reagent_draft("a")).expect("create");
        let mut draft = reagent_draft("a-renamed");
        draft.quantity = 99.0;
        let updated = store.update(&created.id, draft).expect("update");
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(&created.id).expect("get").name, "a-renamed");
    }
}
