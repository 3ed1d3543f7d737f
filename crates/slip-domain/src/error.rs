use thiserror::Error;

/// Error del dominio del portal de slips.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validación fallida: {0}")]
    Validation(String),
}
