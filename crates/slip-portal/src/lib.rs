//! slip-portal: superficie de formularios del portal
//!
//! Este crate adapta el núcleo (ledger, reconciliador, calendario) a los
//! flujos que ve el usuario, sin asumir ningún framework de UI concreto:
//! - `gate`: compuerta por código de sucursal (admin / sucursal / inválido).
//! - `forms`: estado transitorio del formulario de carga de slips.
//! - `session`: contexto de sesión de sucursal (ledger + formulario).
//! - `admin`: panel administrativo (sucursales, repartidores, solicitudes),
//!   incluida la confirmación en dos pasos para borrar una sucursal.
//! - `config`: código de acceso admin desde el entorno.

pub mod admin;
pub mod config;
pub mod forms;
pub mod gate;
pub mod session;

pub use admin::{AdminPanel, DeleteFlow, RemoveOutcome};
pub use config::PortalConfig;
pub use forms::{SlipForm, UploadedImage};
pub use gate::{route, Route};
pub use session::BranchSession;
