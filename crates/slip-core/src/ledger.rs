//! Ledger de borradores de la sesión.
//!
//! Colección ordenada de slips aún no enviados, propiedad de una única
//! sesión (nunca un singleton de proceso: se crea al abrir la sesión y se
//! descarta al cerrarla). Soporta agregar al final, editar por posición y
//! eliminar por posición, más un modo de edición de a lo sumo una posición.
//!
//! Invariante: dos borradores del mismo ledger nunca comparten `img_hash`.

use std::collections::HashSet;

use slip_domain::{DraftSlip, SlipType};

use crate::PortalError;

/// Campos editables de un borrador. Los `ids` nuevos sobreescriben por
/// completo a los anteriores (ajustados a `qty`: truncados o rellenados con
/// cadenas vacías); la comisión se recalcula a partir de `slip_type` y `qty`.
#[derive(Debug, Clone)]
pub struct DraftUpdate {
    pub week: String,
    pub slip_type: SlipType,
    pub qty: u32,
    pub rider: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct DraftLedger {
    entries: Vec<DraftSlip>,
    editing: Option<usize>,
}

impl DraftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DraftSlip] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Posición actualmente en edición, si la hay.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn contains_fingerprint(&self, img_hash: &str) -> bool {
        self.entries.iter().any(|e| e.img_hash() == img_hash)
    }

    /// Comisión acumulada de todos los borradores (para mostrar en el panel).
    pub fn total_commission(&self) -> u32 {
        self.entries.iter().map(|e| e.commission()).sum()
    }

    /// Agrega un borrador al final y devuelve su posición.
    ///
    /// # Errores
    /// `DuplicateFingerprint` si el ledger ya contiene un borrador con el
    /// mismo `img_hash`; el ledger no se modifica.
    pub fn add(&mut self, entry: DraftSlip) -> Result<usize, PortalError> {
        if self.contains_fingerprint(entry.img_hash()) {
            return Err(PortalError::DuplicateFingerprint(entry.img_hash().to_string()));
        }
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// Marca `position` como en edición y devuelve el borrador para precargar
    /// el formulario. Sólo una posición puede estar en edición; iniciar una
    /// nueva reemplaza silenciosamente a la anterior.
    pub fn begin_edit(&mut self, position: usize) -> Result<&DraftSlip, PortalError> {
        let entry = self.entries.get(position).ok_or(PortalError::OutOfRange(position))?;
        self.editing = Some(position);
        Ok(entry)
    }

    /// Aplica la edición sobre `position` y sale del modo edición.
    pub fn apply_edit(&mut self, position: usize, update: DraftUpdate) -> Result<(), PortalError> {
        let entry = self.entries.get_mut(position).ok_or(PortalError::OutOfRange(position))?;
        entry.revise(&update.week, update.slip_type, update.qty, &update.rider, update.ids)?;
        self.editing = None;
        Ok(())
    }

    /// Sale del modo edición sin aplicar cambios.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Elimina el borrador en `position`; las posiciones posteriores se
    /// corren una hacia abajo.
    pub fn remove(&mut self, position: usize) -> Result<DraftSlip, PortalError> {
        if position >= self.entries.len() {
            return Err(PortalError::OutOfRange(position));
        }
        // el objetivo de edición sigue al corrimiento de posiciones
        self.editing = match self.editing {
            Some(e) if e == position => None,
            Some(e) if e > position => Some(e - 1),
            other => other,
        };
        Ok(self.entries.remove(position))
    }

    /// Conserva únicamente los borradores cuyo fingerprint pertenece a
    /// `fingerprints`. Lo usa el reconciliador: tras el submit sobreviven
    /// sólo los duplicados que ya estaban persistidos antes de la llamada.
    pub fn retain_fingerprints(&mut self, fingerprints: &HashSet<String>) {
        self.entries.retain(|e| fingerprints.contains(e.img_hash()));
        self.editing = None;
    }
}
