//! Contexto de sesión de sucursal.
//!
//! Estado mutable con alcance de sesión (nunca un singleton de proceso): se
//! crea al pasar la compuerta, acompaña cada operación del ledger y se
//! descarta al cerrar la sesión. Posee el ledger de borradores y el estado
//! transitorio del formulario.

use slip_core::{calendar, reconcile, DraftLedger, DraftUpdate, PortalError, SubmissionResult};
use slip_domain::{Branch, DraftSlip};
use slip_store::{Filter, RecordStore, Table};

use crate::SlipForm;

pub struct BranchSession {
    branch: Branch,
    ledger: DraftLedger,
    form: SlipForm,
}

impl BranchSession {
    /// Abre la sesión para un código de sucursal ya validado por la compuerta.
    pub fn new(branch: Branch) -> Self {
        Self { branch, ledger: DraftLedger::new(), form: SlipForm::new() }
    }

    /// Abre la sesión resolviendo el código contra el almacenamiento.
    ///
    /// # Errores
    /// `NotFound` si el código no corresponde a ninguna sucursal.
    pub fn open<S: RecordStore>(code: &str, store: &S) -> Result<Self, PortalError> {
        let code = code.trim().to_uppercase();
        let record = store.select_one(Table::Branches, &Filter::new().eq("code", code.as_str()))
                          .map_err(|e| match e {
                              slip_store::StoreError::NotFound => PortalError::NotFound(format!("sucursal {code}")),
                              other => other.into(),
                          })?;
        let branch: Branch = serde_json::from_value(record)?;
        Ok(Self::new(branch))
    }

    pub fn branch(&self) -> &Branch {
        &self.branch
    }

    pub fn form(&mut self) -> &mut SlipForm {
        &mut self.form
    }

    pub fn ledger(&self) -> &DraftLedger {
        &self.ledger
    }

    /// Etiquetas de semana para el selector del período de reporte.
    pub fn week_options(year: i32, month: u32) -> Result<Vec<String>, PortalError> {
        Ok(calendar::weeks_of_month(year, month)?.iter().map(|w| w.label()).collect())
    }

    /// Valida el formulario y agrega la entrada al ledger.
    ///
    /// La entrada pasa dos compuertas de deduplicación: el ledger de la
    /// sesión y los slips ya persistidos (otra sesión pudo haber subido la
    /// misma imagen). Si ambas pasan, se agrega y el formulario se limpia.
    pub fn stage_entry<S: RecordStore>(&mut self, store: &S) -> Result<usize, PortalError> {
        let draft = self.form.build_draft(&self.branch)?;
        if self.ledger.contains_fingerprint(draft.img_hash()) {
            return Err(PortalError::DuplicateFingerprint(draft.img_hash().to_string()));
        }
        let persisted = store.select(Table::Slips, &Filter::new().eq("img_hash", draft.img_hash()))?;
        if !persisted.is_empty() {
            return Err(PortalError::DuplicateFingerprint(draft.img_hash().to_string()));
        }
        let position = self.ledger.add(draft)?;
        self.form.reset();
        Ok(position)
    }

    /// Inicia la edición de la entrada en `position` y la devuelve para
    /// precargar el formulario.
    pub fn begin_edit(&mut self, position: usize) -> Result<&DraftSlip, PortalError> {
        self.ledger.begin_edit(position)
    }

    pub fn apply_edit(&mut self, position: usize, update: DraftUpdate) -> Result<(), PortalError> {
        self.ledger.apply_edit(position, update)
    }

    pub fn cancel_edit(&mut self) {
        self.ledger.cancel_edit()
    }

    pub fn remove_entry(&mut self, position: usize) -> Result<DraftSlip, PortalError> {
        self.ledger.remove(position)
    }

    /// Submit masivo: delega en el reconciliador, que re-chequea contra el
    /// almacenamiento y persiste sólo los borradores que sobreviven.
    pub fn submit_all<S: RecordStore>(&mut self, store: &mut S) -> Result<SubmissionResult, PortalError> {
        reconcile::submit_all(&mut self.ledger, store)
    }
}
