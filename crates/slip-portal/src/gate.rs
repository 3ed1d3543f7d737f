//! Compuerta de entrada por código.
//!
//! El usuario ingresa un código: el centinela de admin enruta al panel de
//! administración, un código de sucursal existente abre la vista de sucursal
//! y cualquier otro valor cae en estado de error.

use slip_domain::Branch;
use slip_store::{Filter, RecordStore, StoreError, Table};

use crate::PortalConfig;
use slip_core::PortalError;

/// Destino resuelto para un código ingresado.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Admin,
    Branch(Branch),
    Unknown,
}

/// Resuelve el código contra la configuración y el almacenamiento. La
/// comparación es insensible a mayúsculas (los códigos se normalizan).
pub fn route<S: RecordStore>(code: &str, store: &S, config: &PortalConfig) -> Result<Route, PortalError> {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        return Ok(Route::Unknown);
    }
    if code == config.admin_code.to_uppercase() {
        return Ok(Route::Admin);
    }
    match store.select_one(Table::Branches, &Filter::new().eq("code", code.as_str())) {
        Ok(record) => {
            let branch: Branch = serde_json::from_value(record)?;
            Ok(Route::Branch(branch))
        }
        Err(StoreError::NotFound) => Ok(Route::Unknown),
        Err(e) => Err(e.into()),
    }
}
