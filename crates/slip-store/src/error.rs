//! Errores de almacenamiento.
//! Mapea fallas del colaborador externo a variantes semánticas que el núcleo
//! del portal puede traducir a sus propios errores.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("expected one match, got {0}")]
    AmbiguousMatch(usize),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
