//! Carga de configuración del portal desde variables de entorno.
//! Usa convención `PORTAL_ADMIN_CODE` con el valor histórico como default.

use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Código centinela que enruta al panel de administración.
    pub admin_code: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let admin_code = env::var("PORTAL_ADMIN_CODE").unwrap_or_else(|_| "ADMIN2024".to_string());
        Self { admin_code }
    }
}
