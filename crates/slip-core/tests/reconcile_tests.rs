use slip_core::{fingerprint, submit_all, DraftLedger, PortalError};
use slip_domain::{DraftSlip, SlipType};
use slip_store::{Filter, InMemoryRecordStore, Record, RecordStore, StoreError, Table};

fn draft(hash: &str, qty: u32) -> DraftSlip {
    DraftSlip::new("KHI01",
                   "01 Mar 2024 - 03 Mar 2024",
                   SlipType::Online,
                   qty,
                   "Ali",
                   (1..=qty).map(|i| format!("txn-{i}")).collect(),
                   hash,
                   hash.as_bytes().to_vec(),
                   "slip.jpg").unwrap()
}

#[test]
fn test_fingerprint_deterministic_and_distinct() {
    let a = fingerprint(b"imagen-1");
    assert_eq!(a, fingerprint(b"imagen-1"));
    assert_eq!(a.len(), 64, "hex de largo fijo");
    assert_ne!(a, fingerprint(b"imagen-2"));
    assert_ne!(fingerprint(b""), fingerprint(b"\0"));
}

#[test]
fn test_submit_partitions_new_and_duplicate() {
    let mut store = InMemoryRecordStore::new();
    // el store ya contiene un slip con hash "a" (persistido por otra sesión)
    let pre = draft("a", 1).into_slip();
    store.insert(Table::Slips, serde_json::to_value(&pre).unwrap()).unwrap();

    let mut ledger = DraftLedger::new();
    ledger.add(draft("a", 1)).unwrap();
    ledger.add(draft("b", 2)).unwrap();

    let result = submit_all(&mut ledger, &mut store).unwrap();
    assert_eq!(result.inserted, 1);
    assert_eq!(result.skipped, 1);

    // exactamente un slip persistido por hash: "a" no se duplicó
    let with_a = store.select(Table::Slips, &Filter::new().eq("img_hash", "a")).unwrap();
    assert_eq!(with_a.len(), 1);
    let with_b = store.select(Table::Slips, &Filter::new().eq("img_hash", "b")).unwrap();
    assert_eq!(with_b.len(), 1);
}

#[test]
fn test_submit_prunes_inserted_keeps_preexisting_duplicates() {
    let mut store = InMemoryRecordStore::new();
    store.insert(Table::Slips, serde_json::to_value(&draft("a", 1).into_slip()).unwrap()).unwrap();

    let mut ledger = DraftLedger::new();
    ledger.add(draft("a", 1)).unwrap();
    ledger.add(draft("b", 1)).unwrap();
    submit_all(&mut ledger, &mut store).unwrap();

    // el duplicado preexistente queda visible; el insertado se descarta
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.entries()[0].img_hash(), "a");

    // un segundo submit ya no inserta nada: ahora "a" sigue duplicado
    let again = submit_all(&mut ledger, &mut store).unwrap();
    assert_eq!(again.inserted, 0);
    assert_eq!(again.skipped, 1);
}

#[test]
fn test_submitted_slip_round_trips_fields() {
    let mut store = InMemoryRecordStore::new();
    let mut ledger = DraftLedger::new();
    let original = draft("rt", 2);
    ledger.add(original.clone()).unwrap();
    submit_all(&mut ledger, &mut store).unwrap();

    let rows = store.select(Table::Slips, &Filter::new().eq("branch_code", "KHI01")).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["qty"], 2);
    assert_eq!(row["type"], "Online Slip");
    assert_eq!(row["ids"], serde_json::json!(["txn-1", "txn-2"]));
    assert_eq!(row["commission"], 100);
    assert_eq!(row["img_hash"], "rt");
    assert!(row.get("image").is_none() && row.get("filename").is_none(),
            "los campos de imagen no se persisten");
    assert_eq!(row["commission"].as_u64().unwrap() as u32, original.commission());
}

#[test]
fn test_empty_ledger_submit_is_noop() {
    let mut store = InMemoryRecordStore::new();
    let mut ledger = DraftLedger::new();
    let result = submit_all(&mut ledger, &mut store).unwrap();
    assert_eq!((result.inserted, result.skipped), (0, 0));
}

/// Store que falla en todas las operaciones, para simular indisponibilidad.
struct DownStore;

impl RecordStore for DownStore {
    fn select(&self, _: Table, _: &Filter) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    fn insert(&mut self, _: Table, _: Record) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    fn update(&mut self, _: Table, _: &Filter, _: Record) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    fn delete(&mut self, _: Table, _: &Filter) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    fn select_one(&self, _: Table, _: &Filter) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[test]
fn test_store_failure_reports_unavailable_and_keeps_ledger() {
    let mut ledger = DraftLedger::new();
    ledger.add(draft("a", 1)).unwrap();
    let err = submit_all(&mut ledger, &mut DownStore).unwrap_err();
    assert!(matches!(err, PortalError::StoreUnavailable(_)));
    assert_eq!(ledger.len(), 1, "el ledger no se poda si el submit falla");
}
