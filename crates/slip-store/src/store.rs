use serde_json::Value;

use crate::{Filter, StoreError};

/// Registro neutral intercambiado con el almacenamiento: un objeto JSON. El
/// portal serializa sus tipos de dominio hacia/desde esta forma.
pub type Record = Value;

/// Tablas que consume el portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Branches,
    Slips,
    Requests,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Branches => "branches",
            Table::Slips => "slips",
            Table::Requests => "requests",
        }
    }
}

/// Operaciones estilo tabla del almacenamiento de registros.
///
/// Nota de diseño: el almacenamiento no expone "insert si no existe" atómico;
/// la deduplicación por fingerprint es responsabilidad del reconciliador
/// (verificar-luego-insertar, mejor esfuerzo).
pub trait RecordStore {
    /// Lista los registros de `table` que coinciden con `filter`, en orden de
    /// inserción.
    fn select(&self, table: Table, filter: &Filter) -> Result<Vec<Record>, StoreError>;

    /// Inserta un registro (debe ser un objeto JSON) y devuelve la versión
    /// almacenada, con `id` asignado si no traía uno.
    fn insert(&mut self, table: Table, record: Record) -> Result<Record, StoreError>;

    /// Fusiona los campos de `patch` en cada registro que coincida y devuelve
    /// el primero actualizado. Falla con `NotFound` si nada coincide.
    fn update(&mut self, table: Table, filter: &Filter, patch: Record) -> Result<Record, StoreError>;

    /// Elimina los registros coincidentes y devuelve cuántos se eliminaron.
    fn delete(&mut self, table: Table, filter: &Filter) -> Result<usize, StoreError>;

    /// Devuelve exactamente un registro coincidente. Falla con `NotFound` si
    /// no hay ninguno y con `AmbiguousMatch` si hay más de uno.
    fn select_one(&self, table: Table, filter: &Filter) -> Result<Record, StoreError>;
}
