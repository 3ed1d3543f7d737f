//! Errores del núcleo del portal.

use slip_domain::DomainError;
use slip_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("validación: {0}")] Validation(String),
    #[error("imagen duplicada (fingerprint {0})")] DuplicateFingerprint(String),
    #[error("no encontrado: {0}")] NotFound(String),
    #[error("posición fuera de rango: {0}")] OutOfRange(usize),
    #[error("almacenamiento no disponible: {0}")] StoreUnavailable(String),
}

impl From<DomainError> for PortalError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => PortalError::Validation(msg),
        }
    }
}

impl From<StoreError> for PortalError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => PortalError::NotFound("registro".to_string()),
            other => PortalError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Validation(format!("serialización: {e}"))
    }
}
