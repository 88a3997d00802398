//! Modelo de Booking
//!
//! Una reserva referencia cliente y vehículo y lleva dos campos derivados
//! (duration_days, total_amount) que se recalculan juntos cada vez que
//! cambian las fechas o la tarifa diaria. Nunca se escriben por separado.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "active" => BookingStatus::Active,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
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

/// Booking con cliente y vehículo unidos - para la generación de contratos
#[derive(Debug, Clone, FromRow)]
pub struct BookingWithRelations {
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
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_license_plate: String,
}
