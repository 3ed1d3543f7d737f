use serde_json::json;
use slip_store::{Filter, InMemoryRecordStore, RecordStore, StoreError, Table};

fn seeded() -> InMemoryRecordStore {
    let mut store = InMemoryRecordStore::new();
    store.insert(Table::Branches, json!({"code": "KHI01", "name": "Karachi Central", "riders": []})).unwrap();
    store.insert(Table::Branches, json!({"code": "LHR02", "name": "Lahore Mall", "riders": ["Ali"]})).unwrap();
    store.insert(Table::Slips, json!({"branch_code": "KHI01", "img_hash": "a", "qty": 1})).unwrap();
    store.insert(Table::Slips, json!({"branch_code": "KHI01", "img_hash": "b", "qty": 2})).unwrap();
    store.insert(Table::Slips, json!({"branch_code": "LHR02", "img_hash": "c", "qty": 3})).unwrap();
    store
}

#[test]
fn test_insert_assigns_id_and_preserves_order() {
    let store = seeded();
    let all = store.select(Table::Slips, &Filter::new()).unwrap();
    assert_eq!(all.len(), 3);
    // orden de inserción estable
    let hashes: Vec<&str> = all.iter().map(|r| r["img_hash"].as_str().unwrap()).collect();
    assert_eq!(hashes, ["a", "b", "c"]);
    assert!(all.iter().all(|r| r["id"].is_string()));
}

#[test]
fn test_select_with_equality_filter() {
    let store = seeded();
    let khi = store.select(Table::Slips, &Filter::new().eq("branch_code", "KHI01")).unwrap();
    assert_eq!(khi.len(), 2);
    let none = store.select(Table::Slips, &Filter::new().eq("branch_code", "ISB03")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_select_one_zero_and_many_matches_fail() {
    let store = seeded();
    let one = store.select_one(Table::Branches, &Filter::new().eq("code", "KHI01")).unwrap();
    assert_eq!(one["name"], "Karachi Central");
    assert_eq!(store.select_one(Table::Branches, &Filter::new().eq("code", "ISB03")),
               Err(StoreError::NotFound));
    assert_eq!(store.select_one(Table::Slips, &Filter::new().eq("branch_code", "KHI01")),
               Err(StoreError::AmbiguousMatch(2)));
}

#[test]
fn test_update_merges_patch_fields() {
    let mut store = seeded();
    let updated = store.update(Table::Branches,
                               &Filter::new().eq("code", "LHR02"),
                               json!({"riders": ["Ali", "Bilal"]})).unwrap();
    assert_eq!(updated["riders"], json!(["Ali", "Bilal"]));
    // los campos no incluidos en el patch se conservan
    assert_eq!(updated["name"], "Lahore Mall");
    assert_eq!(store.update(Table::Branches, &Filter::new().eq("code", "ISB03"), json!({})),
               Err(StoreError::NotFound));
}

#[test]
fn test_delete_returns_count() {
    let mut store = seeded();
    let n = store.delete(Table::Slips, &Filter::new().eq("branch_code", "KHI01")).unwrap();
    assert_eq!(n, 2);
    assert!(store.select(Table::Slips, &Filter::new().eq("branch_code", "KHI01")).unwrap().is_empty());
    // borrar de nuevo no encuentra nada pero no falla
    assert_eq!(store.delete(Table::Slips, &Filter::new().eq("branch_code", "KHI01")).unwrap(), 0);
}

#[test]
fn test_insert_rejects_non_object() {
    let mut store = InMemoryRecordStore::new();
    assert!(matches!(store.insert(Table::Requests, json!(42)),
                     Err(StoreError::InvalidRecord(_))));
}
