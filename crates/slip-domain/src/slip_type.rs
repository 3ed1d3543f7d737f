use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de slip reportado por una sucursal. La tarifa de comisión por unidad
/// depende del tipo: efectivo paga Rs. 25 y online Rs. 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlipType {
    #[serde(rename = "Cash Slip")]
    Cash,
    #[serde(rename = "Online Slip")]
    Online,
}

impl SlipType {
    /// Tarifa de comisión por unidad (Rs.).
    pub fn rate(&self) -> u32 {
        match self {
            SlipType::Cash => 25,
            SlipType::Online => 50,
        }
    }

    /// Comisión total derivada de la cantidad de slips.
    pub fn commission(&self, qty: u32) -> u32 {
        qty * self.rate()
    }

    /// Etiqueta del campo identificador que acompaña a cada unidad:
    /// números de serie para efectivo, IDs de transacción para online.
    pub fn id_label(&self) -> &'static str {
        match self {
            SlipType::Cash => "Serial Number",
            SlipType::Online => "Transaction ID",
        }
    }
}

impl fmt::Display for SlipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlipType::Cash => write!(f, "Cash Slip"),
            SlipType::Online => write!(f, "Online Slip"),
        }
    }
}
