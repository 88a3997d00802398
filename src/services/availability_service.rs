//! Guard de disponibilidad de vehículos
//!
//! Envuelve la función SQL `check_vehicle_availability`. Si falta alguno de
//! los tres datos obligatorios responde `true` sin tocar la base de datos.
//! Si la consulta falla, responde según la política configurada: fail-open
//! (por defecto, el comportamiento histórico) deja pasar la operación aun a
//! riesgo de doble reserva; fail-closed la bloquea.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::config::environment::AvailabilityPolicy;

/// Entradas completas del check, una vez validadas
struct CheckInputs {
    vehicle_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    exclude_booking_id: Option<Uuid>,
}

fn guard_inputs(
    vehicle_id: Option<Uuid>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    exclude_booking_id: Option<Uuid>,
) -> Option<CheckInputs> {
    Some(CheckInputs {
        vehicle_id: vehicle_id?,
        start_date: start_date?,
        end_date: end_date?,
        exclude_booking_id,
    })
}

/// Resolver el resultado de la consulta según la política
fn resolve(result: Result<bool, sqlx::Error>, policy: AvailabilityPolicy) -> bool {
    match result {
        Ok(available) => available,
        Err(e) => {
            warn!(
                "⚠️ Error consultando disponibilidad ({}), aplicando política {:?}",
                e, policy
            );
            policy.fallback()
        }
    }
}

/// Comprobar si un vehículo está libre en un rango de fechas.
///
/// `exclude_booking_id` excluye una reserva del solape, para que al editarla
/// no choque consigo misma.
pub async fn check_availability(
    pool: &PgPool,
    policy: AvailabilityPolicy,
    vehicle_id: Option<Uuid>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    exclude_booking_id: Option<Uuid>,
) -> bool {
    let inputs = match guard_inputs(vehicle_id, start_date, end_date, exclude_booking_id) {
        Some(inputs) => inputs,
        // Datos incompletos: no hay nada que comprobar
        None => return true,
    };

    let result = sqlx::query_scalar::<_, bool>(
        "SELECT check_vehicle_availability($1, $2, $3, $4)",
    )
    .bind(inputs.vehicle_id)
    .bind(inputs.start_date)
    .bind(inputs.end_date)
    .bind(inputs.exclude_booking_id)
    .fetch_one(pool)
    .await;

    resolve(result, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_guard_missing_inputs() {
        // Sin vehículo no hay check que hacer
        assert!(guard_inputs(None, Some(date(2024, 1, 1)), Some(date(2024, 1, 3)), None).is_none());
        assert!(guard_inputs(Some(Uuid::new_v4()), None, Some(date(2024, 1, 3)), None).is_none());
        assert!(guard_inputs(Some(Uuid::new_v4()), Some(date(2024, 1, 1)), None, None).is_none());
    }

    #[test]
    fn test_guard_complete_inputs() {
        let inputs = guard_inputs(
            Some(Uuid::new_v4()),
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 3)),
            None,
        );
        assert!(inputs.is_some());
    }

    #[test]
    fn test_resolve_passes_through_query_result() {
        assert!(resolve(Ok(true), AvailabilityPolicy::FailClosed));
        assert!(!resolve(Ok(false), AvailabilityPolicy::FailOpen));
    }

    #[test]
    fn test_resolve_error_fail_open() {
        let result = resolve(Err(sqlx::Error::PoolClosed), AvailabilityPolicy::FailOpen);
        assert!(result);
    }

    #[test]
    fn test_resolve_error_fail_closed() {
        let result = resolve(Err(sqlx::Error::PoolClosed), AvailabilityPolicy::FailClosed);
        assert!(!result);
    }
}
