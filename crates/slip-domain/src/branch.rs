use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

/// Sucursal identificada por un código único (normalizado a mayúsculas) que
/// posee una lista ordenada de repartidores. Los nombres de repartidor son
/// únicos dentro de la sucursal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    code: String,
    name: String,
    riders: Vec<String>,
}

impl Branch {
    /// Crea una sucursal nueva sin repartidores asignados.
    ///
    /// # Errores
    /// Retorna `DomainError::Validation` si el código o el nombre están vacíos
    /// (después de recortar espacios).
    pub fn new(code: &str, name: &str) -> Result<Self, DomainError> {
        let code = code.trim().to_uppercase();
        let name = name.trim().to_string();
        if code.is_empty() {
            return Err(DomainError::Validation("el código de sucursal no puede estar vacío".to_string()));
        }
        if name.is_empty() {
            return Err(DomainError::Validation("el nombre de sucursal no puede estar vacío".to_string()));
        }
        Ok(Branch { code, name, riders: Vec::new() })
    }

    pub fn code(&self) -> &str { &self.code }
    pub fn name(&self) -> &str { &self.name }
    pub fn riders(&self) -> &[String] { &self.riders }

    pub fn has_rider(&self, rider: &str) -> bool {
        self.riders.iter().any(|r| r == rider)
    }

    /// Agrega un repartidor al final de la lista.
    ///
    /// # Errores
    /// Retorna `DomainError::Validation` si el nombre está vacío o ya existe
    /// en la sucursal.
    pub fn add_rider(&mut self, rider: &str) -> Result<(), DomainError> {
        let rider = rider.trim();
        if rider.is_empty() {
            return Err(DomainError::Validation("el nombre de repartidor no puede estar vacío".to_string()));
        }
        if self.has_rider(rider) {
            return Err(DomainError::Validation(format!("repartidor duplicado en sucursal: {rider}")));
        }
        self.riders.push(rider.to_string());
        Ok(())
    }

    /// Quita un repartidor de la lista, preservando el orden del resto.
    pub fn remove_rider(&mut self, rider: &str) -> Result<(), DomainError> {
        let before = self.riders.len();
        self.riders.retain(|r| r != rider);
        if self.riders.len() == before {
            return Err(DomainError::Validation(format!("repartidor no asignado: {rider}")));
        }
        Ok(())
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}
