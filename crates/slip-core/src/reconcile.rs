//! Reconciliador de submit masivo.
//!
//! El chequeo de duplicados al agregar un borrador sólo protege dentro de la
//! sesión actual: otra sesión (u otro submit anterior) pudo haber persistido
//! el mismo fingerprint en el medio. Por eso el submit vuelve a consultar el
//! almacenamiento, particiona el ledger en nuevos y duplicados, inserta sólo
//! los nuevos y reporta ambos conteos. El almacenamiento no ofrece
//! "insert si no existe" atómico, así que la secuencia verificar-insertar es
//! mejor esfuerzo: dos sesiones compitiendo por el mismo fingerprint pueden
//! pasar ambas el chequeo (carrera conocida y aceptada).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use slip_store::{Filter, RecordStore, Table};

use crate::{DraftLedger, PortalError};

/// Resultado del submit: cuántos borradores se insertaron y cuántos se
/// omitieron por estar ya persistidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub inserted: usize,
    pub skipped: usize,
}

/// Envía todos los borradores del ledger al almacenamiento.
///
/// Postcondición sobre el ledger: quedan únicamente las entradas cuyo
/// fingerprint ya estaba persistido *antes* de esta llamada (los duplicados
/// omitidos siguen visibles para el usuario; los insertados con éxito se
/// descartan del ledger).
///
/// Si una operación del almacenamiento falla se propaga `StoreUnavailable` y
/// el ledger no se poda; los inserts ya realizados permanecen (el submit no
/// es transaccional, brecha aceptada).
pub fn submit_all<S: RecordStore>(ledger: &mut DraftLedger, store: &mut S) -> Result<SubmissionResult, PortalError> {
    // 1. Fingerprints ya persistidos, capturados antes de insertar nada.
    let persisted = store.select(Table::Slips, &Filter::new())?;
    let already: HashSet<String> = persisted.iter()
                                            .filter_map(|r| r.get("img_hash").and_then(|v| v.as_str()))
                                            .map(str::to_owned)
                                            .collect();

    // 2. Partición e inserción de los nuevos.
    let mut inserted = 0;
    let mut skipped = 0;
    for entry in ledger.entries() {
        if already.contains(entry.img_hash()) {
            skipped += 1;
            continue;
        }
        let slip = entry.clone().into_slip();
        store.insert(Table::Slips, serde_json::to_value(&slip)?)?;
        inserted += 1;
    }

    // 3. Poda del ledger: sobreviven sólo los duplicados preexistentes.
    ledger.retain_fingerprints(&already);
    Ok(SubmissionResult { inserted, skipped })
}
