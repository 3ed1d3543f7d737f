use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Estado de una solicitud de cambio administrativa. Toda solicitud nace en
/// `Pending`; las transiciones posteriores ocurren fuera de este núcleo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Solicitud de cambio registrada por el panel de administración.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    timestamp: DateTime<Utc>,
    status: RequestStatus,
    description: String,
}

impl ChangeRequest {
    /// Crea una solicitud con estado inicial `Pending` y timestamp actual.
    pub fn new(description: &str) -> Result<Self, DomainError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation("la descripción no puede estar vacía".to_string()));
        }
        Ok(ChangeRequest { timestamp: Utc::now(),
                           status: RequestStatus::Pending,
                           description: description.to_string() })
    }

    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn status(&self) -> RequestStatus { self.status }
    pub fn description(&self) -> &str { &self.description }
}
