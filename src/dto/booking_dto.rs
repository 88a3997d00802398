//! DTOs de reservas
//!
//! Los campos derivados (duration_days, total_amount) nunca viajan en los
//! requests: siempre los calcula el workflow a partir de fechas y tarifa.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::Booking;

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Decimal,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Request para actualizar una reserva existente (parcial)
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateBookingRequest {
    pub customer_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub daily_rate: Option<Decimal>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl UpdateBookingRequest {
    /// ¿Toca alguno de los campos de los que dependen los derivados?
    pub fn touches_derived_inputs(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some() || self.daily_rate.is_some()
    }

    /// ¿Toca algo que pueda cambiar el solape con otras reservas?
    /// Mover la reserva a otro vehículo también requiere el guard,
    /// aunque no recalcule los derivados.
    pub fn touches_availability_inputs(&self) -> bool {
        self.touches_derived_inputs() || self.vehicle_id.is_some()
    }
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Decimal,
    pub duration_days: i32,
    pub total_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub contract_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            customer_id: booking.customer_id,
            vehicle_id: booking.vehicle_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            daily_rate: booking.daily_rate,
            duration_days: booking.duration_days,
            total_amount: booking.total_amount,
            status: booking.status,
            notes: booking.notes,
            contract_data: booking.contract_data,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Query params del check de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub vehicle_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub exclude_booking_id: Option<Uuid>,
}

/// Response del check de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_derived_inputs() {
        let status_only = UpdateBookingRequest {
            status: Some("confirmed".to_string()),
            ..Default::default()
        };
        assert!(!status_only.touches_derived_inputs());

        let rate_change = UpdateBookingRequest {
            daily_rate: Some("60".parse().unwrap()),
            ..Default::default()
        };
        assert!(rate_change.touches_derived_inputs());

        let date_change = UpdateBookingRequest {
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            ..Default::default()
        };
        assert!(date_change.touches_derived_inputs());
    }

    #[test]
    fn test_vehicle_change_requires_availability_but_not_recompute() {
        let vehicle_only = UpdateBookingRequest {
            vehicle_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(vehicle_only.touches_availability_inputs());
        assert!(!vehicle_only.touches_derived_inputs());

        let status_only = UpdateBookingRequest {
            status: Some("confirmed".to_string()),
            ..Default::default()
        };
        assert!(!status_only.touches_availability_inputs());
    }

    #[test]
    fn test_partial_update_deserializes_missing_fields_as_none() {
        let request: UpdateBookingRequest =
            serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(request.status.as_deref(), Some("cancelled"));
        assert!(request.start_date.is_none());
        assert!(!request.touches_derived_inputs());
    }
}
