//! Panel de administración: sucursales, repartidores y solicitudes de cambio.
//!
//! El borrado de una sucursal con slips vinculados exige confirmación en dos
//! pasos, modelada como máquina de estados explícita:
//! `Idle -> PendingConfirmation(code) -> Idle`, volviendo a `Idle` tanto en
//! confirmación exitosa como en cancelación o error. El borrado en cascada
//! (slips y luego sucursal) no es transaccional: una falla del almacenamiento
//! entre ambos pasos puede dejar un estado intermedio (brecha aceptada).

use slip_core::PortalError;
use slip_domain::{Branch, ChangeRequest};
use slip_store::{Filter, RecordStore, StoreError, Table};

/// Estado del flujo de borrado en dos pasos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingConfirmation {
        code: String,
        linked_slips: usize,
    },
}

/// Resultado del primer paso del borrado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Sin slips vinculados: la sucursal se borró de inmediato.
    Deleted,
    /// Hay slips vinculados: se requiere confirmación explícita.
    ConfirmationRequired { linked_slips: usize },
}

#[derive(Debug, Default)]
pub struct AdminPanel {
    delete_flow: DeleteFlow,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete_flow
    }

    /// Lista las sucursales registradas en orden de alta.
    pub fn list_branches<S: RecordStore>(&self, store: &S) -> Result<Vec<Branch>, PortalError> {
        let rows = store.select(Table::Branches, &Filter::new())?;
        let mut branches = Vec::with_capacity(rows.len());
        for row in rows {
            branches.push(serde_json::from_value(row)?);
        }
        Ok(branches)
    }

    /// Da de alta una sucursal nueva (código normalizado a mayúsculas).
    ///
    /// # Errores
    /// `Validation` si falta código o nombre, o si el código ya existe.
    pub fn add_branch<S: RecordStore>(&self, store: &mut S, code: &str, name: &str) -> Result<Branch, PortalError> {
        let branch = Branch::new(code, name)?;
        let existing = store.select(Table::Branches, &Filter::new().eq("code", branch.code()))?;
        if !existing.is_empty() {
            return Err(PortalError::Validation(format!("el código de sucursal ya existe: {}", branch.code())));
        }
        store.insert(Table::Branches, serde_json::to_value(&branch)?)?;
        Ok(branch)
    }

    /// Primer paso del borrado: si la sucursal no tiene slips vinculados se
    /// borra de inmediato; si los tiene, el flujo pasa a confirmación
    /// pendiente y no se muta nada.
    pub fn request_remove_branch<S: RecordStore>(&mut self, store: &mut S, code: &str) -> Result<RemoveOutcome, PortalError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(PortalError::Validation("debe indicar el código de sucursal a borrar".to_string()));
        }
        let linked = store.select(Table::Slips, &Filter::new().eq("branch_code", code.as_str()))?;
        if !linked.is_empty() {
            let linked_slips = linked.len();
            self.delete_flow = DeleteFlow::PendingConfirmation { code, linked_slips };
            return Ok(RemoveOutcome::ConfirmationRequired { linked_slips });
        }
        let removed = store.delete(Table::Branches, &Filter::new().eq("code", code.as_str()))?;
        if removed == 0 {
            return Err(PortalError::NotFound(format!("sucursal {code}")));
        }
        self.delete_flow = DeleteFlow::Idle;
        Ok(RemoveOutcome::Deleted)
    }

    /// Segundo paso: borra en cascada los slips vinculados y luego la
    /// sucursal. El flujo vuelve a `Idle` incluso si el almacenamiento falla.
    pub fn confirm_remove_branch<S: RecordStore>(&mut self, store: &mut S) -> Result<usize, PortalError> {
        let code = match std::mem::take(&mut self.delete_flow) {
            DeleteFlow::PendingConfirmation { code, .. } => code,
            DeleteFlow::Idle => {
                return Err(PortalError::Validation("no hay borrado pendiente de confirmación".to_string()));
            }
        };
        let slips_removed = store.delete(Table::Slips, &Filter::new().eq("branch_code", code.as_str()))?;
        store.delete(Table::Branches, &Filter::new().eq("code", code.as_str()))?;
        Ok(slips_removed)
    }

    /// Cancela el borrado pendiente sin mutar el almacenamiento.
    pub fn cancel_remove_branch(&mut self) {
        self.delete_flow = DeleteFlow::Idle;
    }

    /// Agrega un repartidor a la sucursal indicada.
    pub fn add_rider<S: RecordStore>(&self, store: &mut S, code: &str, rider: &str) -> Result<Branch, PortalError> {
        let mut branch = self.load_branch(store, code)?;
        branch.add_rider(rider)?;
        self.save_riders(store, &branch)
    }

    /// Quita un repartidor de la sucursal indicada.
    pub fn remove_rider<S: RecordStore>(&self, store: &mut S, code: &str, rider: &str) -> Result<Branch, PortalError> {
        let mut branch = self.load_branch(store, code)?;
        branch.remove_rider(rider)?;
        self.save_riders(store, &branch)
    }

    /// Registra una solicitud de cambio con estado inicial `Pending`.
    pub fn submit_change_request<S: RecordStore>(&self, store: &mut S, description: &str) -> Result<ChangeRequest, PortalError> {
        let request = ChangeRequest::new(description)?;
        store.insert(Table::Requests, serde_json::to_value(&request)?)?;
        Ok(request)
    }

    fn load_branch<S: RecordStore>(&self, store: &S, code: &str) -> Result<Branch, PortalError> {
        let code = code.trim().to_uppercase();
        let record = store.select_one(Table::Branches, &Filter::new().eq("code", code.as_str()))
                          .map_err(|e| match e {
                              StoreError::NotFound => PortalError::NotFound(format!("sucursal {code}")),
                              other => other.into(),
                          })?;
        Ok(serde_json::from_value(record)?)
    }

    fn save_riders<S: RecordStore>(&self, store: &mut S, branch: &Branch) -> Result<Branch, PortalError> {
        store.update(Table::Branches,
                     &Filter::new().eq("code", branch.code()),
                     serde_json::json!({ "riders": branch.riders() }))?;
        Ok(branch.clone())
    }
}
