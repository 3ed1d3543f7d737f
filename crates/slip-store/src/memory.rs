//! Implementación en memoria del `RecordStore` (rápida para tests, demos y
//! sesiones locales). Cada tabla es un `Vec` de objetos JSON dentro de un
//! `IndexMap`, así el listado preserva el orden de inserción.

use indexmap::IndexMap;
use serde_json::Value;
use uuid::Uuid;

use crate::{Filter, Record, RecordStore, StoreError, Table};

#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    tables: IndexMap<&'static str, Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self, table: Table) -> &[Record] {
        self.tables.get(table.as_str()).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RecordStore for InMemoryRecordStore {
    fn select(&self, table: Table, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        Ok(self.rows(table).iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    fn insert(&mut self, table: Table, record: Record) -> Result<Record, StoreError> {
        let mut record = record;
        let obj = record.as_object_mut()
                        .ok_or_else(|| StoreError::InvalidRecord("el registro debe ser un objeto JSON".to_string()))?;
        obj.entry("id").or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        let stored = record.clone();
        self.tables.entry(table.as_str()).or_default().push(record);
        Ok(stored)
    }

    fn update(&mut self, table: Table, filter: &Filter, patch: Record) -> Result<Record, StoreError> {
        let patch = patch.as_object()
                         .ok_or_else(|| StoreError::InvalidRecord("el patch debe ser un objeto JSON".to_string()))?
                         .clone();
        let rows = self.tables.entry(table.as_str()).or_default();
        let mut first: Option<Record> = None;
        for row in rows.iter_mut().filter(|r| filter.matches(r)) {
            if let Some(obj) = row.as_object_mut() {
                for (k, v) in &patch {
                    obj.insert(k.clone(), v.clone());
                }
            }
            if first.is_none() {
                first = Some(row.clone());
            }
        }
        first.ok_or(StoreError::NotFound)
    }

    fn delete(&mut self, table: Table, filter: &Filter) -> Result<usize, StoreError> {
        let rows = self.tables.entry(table.as_str()).or_default();
        let before = rows.len();
        rows.retain(|r| !filter.matches(r));
        Ok(before - rows.len())
    }

    fn select_one(&self, table: Table, filter: &Filter) -> Result<Record, StoreError> {
        let matches: Vec<&Record> = self.rows(table).iter().filter(|r| filter.matches(r)).collect();
        match matches.len() {
            0 => Err(StoreError::NotFound),
            1 => Ok(matches[0].clone()),
            n => Err(StoreError::AmbiguousMatch(n)),
        }
    }
}
