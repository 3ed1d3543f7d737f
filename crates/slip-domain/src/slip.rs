use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, SlipType};

/// Slip persistido. Se crea únicamente a partir de un `DraftSlip` al momento
/// del submit (ver reconciliador); nunca se muta después.
///
/// Invariantes:
/// - `ids.len() == qty` (números de serie o IDs de transacción, según tipo).
/// - `commission` es derivada: `qty * tarifa(slip_type)`.
/// - `img_hash` es único entre todos los slips persistidos (clave de
///   idempotencia; la unicidad la garantizan el ledger y el reconciliador,
///   no este tipo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slip {
    branch_code: String,
    week: String,
    #[serde(rename = "type")]
    slip_type: SlipType,
    qty: u32,
    rider: String,
    ids: Vec<String>,
    img_hash: String,
    commission: u32,
    timestamp: DateTime<Utc>,
}

impl Slip {
    pub fn branch_code(&self) -> &str { &self.branch_code }
    pub fn week(&self) -> &str { &self.week }
    pub fn slip_type(&self) -> SlipType { self.slip_type }
    pub fn qty(&self) -> u32 { self.qty }
    pub fn rider(&self) -> &str { &self.rider }
    pub fn ids(&self) -> &[String] { &self.ids }
    pub fn img_hash(&self) -> &str { &self.img_hash }
    pub fn commission(&self) -> u32 { self.commission }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

/// Slip en borrador, local a la sesión. Conserva los bytes de la imagen y el
/// nombre de archivo original sólo mientras vive en memoria; al promoverse a
/// `Slip` persistido esos campos se descartan (sólo el fingerprint viaja al
/// almacenamiento).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSlip {
    branch_code: String,
    week: String,
    slip_type: SlipType,
    qty: u32,
    rider: String,
    ids: Vec<String>,
    img_hash: String,
    commission: u32,
    timestamp: DateTime<Utc>,
    image: Vec<u8>,
    filename: String,
}

impl DraftSlip {
    /// Crea un borrador validado. La comisión se deriva aquí y los `ids` se
    /// ajustan a `qty` (se truncan o se rellenan con cadenas vacías).
    ///
    /// # Errores
    /// `DomainError::Validation` si la cantidad es cero, el repartidor está
    /// vacío, la imagen está vacía o el fingerprint está vacío.
    pub fn new(branch_code: &str,
               week: &str,
               slip_type: SlipType,
               qty: u32,
               rider: &str,
               ids: Vec<String>,
               img_hash: &str,
               image: Vec<u8>,
               filename: &str)
               -> Result<Self, DomainError> {
        if qty == 0 {
            return Err(DomainError::Validation("la cantidad debe ser positiva".to_string()));
        }
        let rider = rider.trim();
        if rider.is_empty() {
            return Err(DomainError::Validation("debe seleccionar un repartidor".to_string()));
        }
        if image.is_empty() {
            return Err(DomainError::Validation("debe subir una imagen del slip".to_string()));
        }
        if img_hash.is_empty() {
            return Err(DomainError::Validation("fingerprint de imagen vacío".to_string()));
        }
        let mut ids = ids;
        ids.resize(qty as usize, String::new());
        Ok(DraftSlip { branch_code: branch_code.trim().to_uppercase(),
                       week: week.to_string(),
                       slip_type,
                       qty,
                       rider: rider.to_string(),
                       ids,
                       img_hash: img_hash.to_string(),
                       commission: slip_type.commission(qty),
                       timestamp: Utc::now(),
                       image,
                       filename: filename.to_string() })
    }

    /// Reemplaza los campos editables y recalcula la comisión. Los `ids`
    /// nuevos sobreescriben por completo a los anteriores, ajustados a la
    /// nueva cantidad. La imagen y su fingerprint no son editables.
    pub fn revise(&mut self,
                  week: &str,
                  slip_type: SlipType,
                  qty: u32,
                  rider: &str,
                  ids: Vec<String>)
                  -> Result<(), DomainError> {
        if qty == 0 {
            return Err(DomainError::Validation("la cantidad debe ser positiva".to_string()));
        }
        let rider = rider.trim();
        if rider.is_empty() {
            return Err(DomainError::Validation("debe seleccionar un repartidor".to_string()));
        }
        let mut ids = ids;
        ids.resize(qty as usize, String::new());
        self.week = week.to_string();
        self.slip_type = slip_type;
        self.qty = qty;
        self.rider = rider.to_string();
        self.ids = ids;
        self.commission = slip_type.commission(qty);
        Ok(())
    }

    /// Promueve el borrador a slip persistible descartando los campos de
    /// imagen. El resto de los campos se conserva tal cual.
    pub fn into_slip(self) -> Slip {
        Slip { branch_code: self.branch_code,
               week: self.week,
               slip_type: self.slip_type,
               qty: self.qty,
               rider: self.rider,
               ids: self.ids,
               img_hash: self.img_hash,
               commission: self.commission,
               timestamp: self.timestamp }
    }

    pub fn branch_code(&self) -> &str { &self.branch_code }
    pub fn week(&self) -> &str { &self.week }
    pub fn slip_type(&self) -> SlipType { self.slip_type }
    pub fn qty(&self) -> u32 { self.qty }
    pub fn rider(&self) -> &str { &self.rider }
    pub fn ids(&self) -> &[String] { &self.ids }
    pub fn img_hash(&self) -> &str { &self.img_hash }
    pub fn commission(&self) -> u32 { self.commission }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn filename(&self) -> &str { &self.filename }
    pub fn image(&self) -> &[u8] { &self.image }
}
