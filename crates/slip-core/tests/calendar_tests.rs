use chrono::{Datelike, NaiveDate, Weekday};
use slip_core::{weeks_of_month, PortalError};

#[test]
fn test_march_2024_first_and_last_week() {
    // Marzo 2024: 31 días, empieza viernes
    let weeks = weeks_of_month(2024, 3).unwrap();
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0].label(), "01 Mar 2024 - 03 Mar 2024");
    assert_eq!(weeks[0].days(), 3);
    assert_eq!(weeks[4].label(), "25 Mar 2024 - 31 Mar 2024");
    assert_eq!(weeks[4].days(), 7);
}

#[test]
fn test_february_2021_is_exact_weeks() {
    // Febrero 2021: empieza lunes y termina domingo, 4 semanas completas
    let weeks = weeks_of_month(2021, 2).unwrap();
    assert_eq!(weeks.len(), 4);
    assert!(weeks.iter().all(|w| w.days() == 7));
    assert_eq!(weeks[0].label(), "01 Feb 2021 - 07 Feb 2021");
    assert_eq!(weeks[3].label(), "22 Feb 2021 - 28 Feb 2021");
}

#[test]
fn test_weeks_cover_month_exactly_once() {
    // Propiedad: contiguas, sin solaparse, cubren todo el mes
    for (year, month) in [(2024, 2), (2024, 3), (2024, 12), (2023, 1), (2021, 2), (2015, 2)] {
        let weeks = weeks_of_month(year, month).unwrap();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        assert_eq!(weeks[0].start, first, "{year}-{month}");
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start,
                       "semanas no contiguas en {year}-{month}");
        }
        let last = weeks.last().unwrap().end;
        assert_eq!(last.month(), month);
        assert!(last.succ_opt().unwrap().month() != month, "la última semana debe cerrar el mes");
        let total: i64 = weeks.iter().map(|w| w.days()).sum();
        assert_eq!(total as u32, last.day(), "cada día cae en exactamente una semana");
    }
}

#[test]
fn test_week_boundaries() {
    // Cada semana empieza el 1° o un lunes, y termina un domingo o el último día
    for (year, month) in [(2024, 3), (2015, 2), (2026, 8)] {
        let weeks = weeks_of_month(year, month).unwrap();
        for (i, w) in weeks.iter().enumerate() {
            assert!(w.start.day() == 1 || w.start.weekday() == Weekday::Mon);
            let is_last = i == weeks.len() - 1;
            assert!(w.end.weekday() == Weekday::Sun || is_last);
        }
    }
}

#[test]
fn test_invalid_month_is_rejected() {
    assert!(matches!(weeks_of_month(2024, 13), Err(PortalError::Validation(_))));
    assert!(matches!(weeks_of_month(2024, 0), Err(PortalError::Validation(_))));
}
