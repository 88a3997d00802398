//! Cálculo de campos derivados de una reserva
//!
//! duration_days y total_amount se derivan siempre de (fecha inicio,
//! fecha fin, tarifa diaria). Se recalculan juntos en cada alta y en cada
//! actualización que toque alguna de esas tres entradas; nunca se aceptan
//! del cliente ni se escriben por separado.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Días de duración contando ambos extremos.
///
/// Una reserva del 2024-01-01 al 2024-01-03 dura 3 días. Si la fecha fin
/// es anterior al inicio el resultado es no positivo; el controller valida
/// el orden de fechas antes de llegar aquí.
pub fn duration_days(start_date: NaiveDate, end_date: NaiveDate) -> i32 {
    (end_date - start_date).num_days() as i32 + 1
}

/// Importe total: duración por tarifa diaria
pub fn total_amount(duration: i32, daily_rate: Decimal) -> Decimal {
    Decimal::from(duration) * daily_rate
}

/// Calcular el par derivado completo
pub fn compute_derived(
    start_date: NaiveDate,
    end_date: NaiveDate,
    daily_rate: Decimal,
) -> (i32, Decimal) {
    let duration = duration_days(start_date, end_date);
    (duration, total_amount(duration, daily_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_duration_inclusive_endpoints() {
        assert_eq!(duration_days(date(2024, 1, 1), date(2024, 1, 3)), 3);
        assert_eq!(duration_days(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(duration_days(date(2024, 2, 28), date(2024, 3, 1)), 3); // bisiesto
    }

    #[test]
    fn test_duration_end_before_start_is_non_positive() {
        assert_eq!(duration_days(date(2024, 1, 3), date(2024, 1, 1)), -1);
        assert_eq!(duration_days(date(2024, 1, 2), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(3, dec("50")), dec("150"));
        assert_eq!(total_amount(3, dec("0")), dec("0"));
        assert_eq!(total_amount(2, dec("49.99")), dec("99.98"));
    }

    #[test]
    fn test_compute_derived_pair() {
        let (duration, total) = compute_derived(date(2024, 1, 1), date(2024, 1, 3), dec("50"));
        assert_eq!(duration, 3);
        assert_eq!(total, dec("150"));

        // Cambiar solo la tarifa recalcula el total con la misma duración
        let (duration, total) = compute_derived(date(2024, 1, 1), date(2024, 1, 3), dec("60"));
        assert_eq!(duration, 3);
        assert_eq!(total, dec("180"));
    }
}
