//! Modelo de Booking Form
//!
//! Formulario de inspección de entrega o recogida. La tabla lleva una
//! restricción única sobre (booking_id, form_type): como mucho un formulario
//! por reserva y tipo, el segundo envío sobreescribe al primero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de formulario de inspección
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Delivery,
    Pickup,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Delivery => "delivery",
            FormType::Pickup => "pickup",
        }
    }
}

/// Booking form principal - mapea exactamente a la tabla booking_forms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingForm {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub form_type: String,
    pub mileage: Option<i32>,
    pub fuel_level: Option<i32>,
    pub damages: Option<String>,
    pub customer_signature: Option<String>,
    pub agent_signature: Option<String>,
    pub photos: serde_json::Value,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
