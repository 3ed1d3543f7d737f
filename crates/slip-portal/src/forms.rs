//! Estado transitorio del formulario de carga de slips.
//!
//! Modela los campos que el renderizador de formularios presenta a la
//! sucursal: semana, tipo de slip, cantidad, identificadores por unidad,
//! imagen subida y repartidor. Al agregar una entrada al ledger el formulario
//! se limpia para que la próxima carga empiece en blanco.

use slip_core::{fingerprint, PortalError};
use slip_domain::{Branch, DraftSlip, SlipType};

/// Imagen subida: bytes crudos y nombre de archivo original. Vive sólo en
/// memoria de la sesión; nunca se persiste como archivo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub filename: String,
}

#[derive(Debug, Clone, Default)]
pub struct SlipForm {
    week: Option<String>,
    slip_type: Option<SlipType>,
    qty: u32,
    ids: Vec<String>,
    rider: Option<String>,
    image: Option<UploadedImage>,
}

impl SlipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_week(&mut self, label: &str) {
        self.week = Some(label.to_string());
    }

    pub fn select_type(&mut self, slip_type: SlipType) {
        self.slip_type = Some(slip_type);
    }

    /// Fija la cantidad y ajusta la lista de identificadores a ese largo.
    pub fn set_qty(&mut self, qty: u32) {
        self.qty = qty;
        self.ids.resize(qty as usize, String::new());
    }

    /// Carga el identificador de la unidad `index` (0-based).
    pub fn set_id(&mut self, index: usize, value: &str) -> Result<(), PortalError> {
        let slot = self.ids.get_mut(index).ok_or(PortalError::OutOfRange(index))?;
        *slot = value.trim().to_string();
        Ok(())
    }

    pub fn select_rider(&mut self, rider: &str) {
        self.rider = Some(rider.trim().to_string());
    }

    pub fn attach_image(&mut self, bytes: Vec<u8>, filename: &str) {
        self.image = Some(UploadedImage { bytes, filename: filename.to_string() });
    }

    /// Comisión que mostraría el formulario con los valores actuales.
    pub fn commission_preview(&self) -> u32 {
        self.slip_type.map_or(0, |t| t.commission(self.qty))
    }

    /// Valida los campos y construye el borrador para la sucursal dada,
    /// calculando el fingerprint de la imagen. El formulario no se modifica;
    /// la limpieza ocurre recién cuando el ledger acepta la entrada.
    ///
    /// # Errores
    /// `Validation` si falta la semana, el tipo, la imagen o el repartidor, o
    /// si el repartidor no pertenece a la sucursal.
    pub fn build_draft(&self, branch: &Branch) -> Result<DraftSlip, PortalError> {
        let week = self.week.as_deref()
                       .ok_or_else(|| PortalError::Validation("debe seleccionar una semana".to_string()))?;
        let slip_type = self.slip_type
                            .ok_or_else(|| PortalError::Validation("debe seleccionar el tipo de slip".to_string()))?;
        let rider = self.rider.as_deref()
                        .ok_or_else(|| PortalError::Validation("debe seleccionar un repartidor".to_string()))?;
        if !branch.has_rider(rider) {
            return Err(PortalError::Validation(format!("el repartidor no pertenece a la sucursal: {rider}")));
        }
        let image = self.image.as_ref()
                        .ok_or_else(|| PortalError::Validation("debe subir una imagen del slip".to_string()))?;
        let img_hash = fingerprint(&image.bytes);
        let draft = DraftSlip::new(branch.code(),
                                   week,
                                   slip_type,
                                   self.qty,
                                   rider,
                                   self.ids.clone(),
                                   &img_hash,
                                   image.bytes.clone(),
                                   &image.filename)?;
        Ok(draft)
    }

    /// Vuelve el formulario al estado inicial en blanco.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
