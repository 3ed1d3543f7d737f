//! Demo guiada del portal de slips sobre el almacenamiento en memoria.
//! Recorre el flujo completo: alta de sucursal, compuerta por código, carga
//! de borradores con deduplicación por fingerprint, submit masivo y borrado
//! en cascada con confirmación en dos pasos.

use chrono::{Datelike, Utc};
use slipflow_rust::errors::PortalError;
use slipflow_rust::{route, AdminPanel, BranchSession, InMemoryRecordStore, PortalConfig, Route, SlipType};

fn main() {
    if let Err(e) = run_portal_demo() {
        eprintln!("[slipflow] error: {e}");
        std::process::exit(1);
    }
}

fn run_portal_demo() -> Result<(), PortalError> {
    let config = PortalConfig::from_env();
    let mut store = InMemoryRecordStore::new();
    let mut admin = AdminPanel::new();

    // Alta de sucursal y repartidores desde el panel admin
    let branch = admin.add_branch(&mut store, "khi01", "Karachi Central")?;
    println!("[slipflow] sucursal creada: {branch}");
    admin.add_rider(&mut store, "KHI01", "Ali")?;
    admin.add_rider(&mut store, "KHI01", "Bilal")?;

    // Compuerta por código
    let session_branch = match route("khi01", &store, &config)? {
        Route::Branch(b) => b,
        Route::Admin => unreachable!("khi01 no es el código admin"),
        Route::Unknown => return Err(PortalError::NotFound("sucursal KHI01".to_string())),
    };

    // Selector de semanas del mes corriente
    let today = Utc::now().date_naive();
    let weeks = BranchSession::week_options(today.year(), today.month())?;
    println!("[slipflow] semanas del mes: {}", weeks.join(" | "));

    // Carga de borradores
    let mut session = BranchSession::new(session_branch);
    stage(&mut session, &store, &weeks[0], SlipType::Cash, &["SN-100", "SN-101"], b"foto-recibo-1")?;
    stage(&mut session, &store, &weeks[0], SlipType::Online, &["TXN-9"], b"foto-recibo-2")?;
    println!("[slipflow] borradores en ledger: {} (comisión acumulada Rs. {})",
             session.ledger().len(),
             session.ledger().total_commission());

    // La misma imagen otra vez: rechazada por fingerprint duplicado
    match stage(&mut session, &store, &weeks[0], SlipType::Cash, &["SN-200"], b"foto-recibo-1") {
        Err(PortalError::DuplicateFingerprint(hash)) => {
            println!("[slipflow] duplicado rechazado en ledger (fingerprint {hash})");
        }
        other => {
            println!("[slipflow] inesperado: {other:?}");
        }
    }

    // Submit masivo
    let result = session.submit_all(&mut store)?;
    println!("[slipflow] submit: {} insertados, {} omitidos", result.inserted, result.skipped);

    // Una sesión nueva no puede volver a subir una imagen ya persistida
    let mut second = BranchSession::open("KHI01", &store)?;
    match stage(&mut second, &store, &weeks[0], SlipType::Cash, &["SN-300"], b"foto-recibo-1") {
        Err(PortalError::DuplicateFingerprint(_)) => {
            println!("[slipflow] duplicado entre sesiones detectado contra el almacenamiento");
        }
        other => {
            println!("[slipflow] inesperado: {other:?}");
        }
    }

    // Borrado en dos pasos: la sucursal tiene slips vinculados
    let outcome = admin.request_remove_branch(&mut store, "KHI01")?;
    println!("[slipflow] primer paso de borrado: {outcome:?}");
    let removed = admin.confirm_remove_branch(&mut store)?;
    println!("[slipflow] borrado confirmado: {removed} slip(s) eliminados en cascada");
    Ok(())
}

fn stage(session: &mut BranchSession,
         store: &InMemoryRecordStore,
         week: &str,
         slip_type: SlipType,
         ids: &[&str],
         image: &[u8])
         -> Result<usize, PortalError> {
    let form = session.form();
    form.select_week(week);
    form.select_type(slip_type);
    form.set_qty(ids.len() as u32);
    for (i, id) in ids.iter().enumerate() {
        form.set_id(i, id)?;
    }
    form.select_rider("Ali");
    form.attach_image(image.to_vec(), "recibo.jpg");
    session.stage_entry(store)
}
