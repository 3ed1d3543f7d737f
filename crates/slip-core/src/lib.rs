//! slip-core: núcleo del portal de slips
//!
//! Aquí vive la lógica central del sistema: el fingerprint de imágenes como
//! clave de idempotencia, el particionador de semanas del mes, el ledger de
//! borradores de la sesión y el reconciliador de submit masivo.
pub mod calendar;
pub mod errors;
pub mod hashing;
pub mod ledger;
pub mod reconcile;

pub use calendar::{weeks_of_month, WeekRange};
pub use errors::PortalError;
pub use hashing::fingerprint;
pub use ledger::{DraftLedger, DraftUpdate};
pub use reconcile::{submit_all, SubmissionResult};
