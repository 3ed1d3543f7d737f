//! Slipflow Rust Library
//!
//! Este crate actúa como la fachada del portal de slips:
//! - Expone `errors` con los errores de cada capa.
//! - Expone `hashing` para calcular el fingerprint de una imagen.
//! - Re-exporta los tipos de dominio, el ledger, el reconciliador y los
//!   flujos del portal.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod errors {
	pub use slip_core::PortalError;
	pub use slip_domain::DomainError;
	pub use slip_store::StoreError;
}

pub mod hashing {
	pub use slip_core::hashing::fingerprint;
}

pub use slip_core::{submit_all, weeks_of_month, DraftLedger, DraftUpdate, SubmissionResult, WeekRange};
pub use slip_domain::{Branch, ChangeRequest, DraftSlip, RequestStatus, Slip, SlipType};
pub use slip_portal::{route, AdminPanel, BranchSession, DeleteFlow, PortalConfig, RemoveOutcome, Route, SlipForm};
pub use slip_store::{Filter, InMemoryRecordStore, Record, RecordStore, StoreError, Table};
