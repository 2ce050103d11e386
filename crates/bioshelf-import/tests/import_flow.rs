//! End-to-end import flow: CSV text through parsing and commit into a store.

use bioshelf_import::commit;
use bioshelf_ingest::parse_materials_csv;
use bioshelf_model::MaterialDraft;
use bioshelf_store::{MaterialStore, MemoryStore};

const HEADER: &str = "name,type,quantity,unit,location,expirydate,vendor,description,notes";

#[test]
fn parsed_batch_commits_into_the_store() {
    let mut store = MemoryStore::with_defaults();
    let types = store.types().expect("types");
    let catalog = store.unit_options().expect("unit options");

    let text = format!(
        "{HEADER}\n\
         Tris Buffer,reagent,100,mL,Lab A,2026-01-01,Sigma,1M pH 8.0,\n\
         Nitrile Gloves,consumable,200,boxes,Storage B,,,,\n\
         Vortex Mixer,equipment,1,unit,Bench 2,,,,"
    );
    let batch = parse_materials_csv(&text, &types, &catalog);
    assert!(batch.is_committable());

    let imported =
        commit(&batch.records, |draft| store.create(draft.clone())).expect("commit succeeds");
    assert_eq!(imported.len(), 3);
    assert_eq!(store.list().expect("list").len(), 3);
    assert_eq!(imported[0].name, "Tris Buffer");
    assert!(!imported[0].id.is_empty());
}

#[test]
fn store_rejection_halts_commit_and_keeps_prior_records() {
    let mut store = MemoryStore::with_defaults();

    // The second draft sneaks an unknown type past the parser's checks,
    // standing in for any server-side create failure.
    let drafts = vec![
        MaterialDraft {
            name: "Tris Buffer".to_string(),
            type_id: "reagent".to_string(),
            quantity: 100.0,
            unit: "mL".to_string(),
            location: "Lab A".to_string(),
            ..MaterialDraft::default()
        },
        MaterialDraft {
            name: "Mystery".to_string(),
            type_id: "unobtainium".to_string(),
            quantity: 1.0,
            unit: "mL".to_string(),
            location: "Lab A".to_string(),
            ..MaterialDraft::default()
        },
        MaterialDraft {
            name: "Never Submitted".to_string(),
            type_id: "reagent".to_string(),
            quantity: 5.0,
            unit: "mL".to_string(),
            location: "Lab A".to_string(),
            ..MaterialDraft::default()
        },
    ];

    let error =
        commit(&drafts, |draft| store.create(draft.clone())).expect_err("commit halts");
    assert_eq!(error.name, "Mystery");
    assert_eq!(error.imported.len(), 1);

    // The store keeps the first record; the third never arrived.
    let remaining = store.list().expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Tris Buffer");
}
