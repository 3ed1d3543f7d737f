//! Particionador de semanas del mes.
//!
//! Deriva los rangos semanales (lunes-alineados, recortados a los bordes del
//! mes) con los que la sucursal etiqueta su período de reporte. Una semana se
//! cierra cuando el día corriente es domingo o el último día del mes, así que
//! la última semana puede quedar truncada y ninguna cruza el borde del mes.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::PortalError;

/// Rango semanal inclusivo en ambos extremos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Etiqueta de presentación: `"DD Mon YYYY - DD Mon YYYY"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%d %b %Y"), self.end.format("%d %b %Y"))
    }

    /// Cantidad de días cubiertos (ambos extremos incluidos).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Devuelve las semanas del mes en orden, contiguas y sin solaparse:
/// cada día del mes cae en exactamente un rango. Cada rango comienza el 1°
/// del mes o un lunes, y termina un domingo o el último día del mes.
///
/// # Errores
/// `PortalError::Validation` si `(year, month)` no forman un mes válido.
pub fn weeks_of_month(year: i32, month: u32) -> Result<Vec<WeekRange>, PortalError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PortalError::Validation(format!("mes inválido: {year}-{month}")))?;

    let mut weeks = Vec::new();
    let mut start = first;
    let mut day = first;
    loop {
        let next = day.succ_opt();
        let month_ends_here = next.map_or(true, |n| n.month() != month || n.year() != year);
        if day.weekday() == Weekday::Sun || month_ends_here {
            weeks.push(WeekRange { start, end: day });
            if month_ends_here {
                break;
            }
        }
        match next {
            Some(n) => {
                if day.weekday() == Weekday::Sun {
                    start = n;
                }
                day = n;
            }
            None => break,
        }
    }
    Ok(weeks)
}
