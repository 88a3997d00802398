//! DTOs de formularios de entrega/recogida

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking_form::{BookingForm, FormType};

/// Request para enviar (o re-enviar) un formulario de inspección.
/// Un segundo envío del mismo tipo sobreescribe el anterior.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitBookingFormRequest {
    pub form_type: FormType,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(range(min = 0, max = 100))]
    pub fuel_level: Option<i32>,

    pub damages: Option<String>,

    pub customer_signature: Option<String>,

    pub agent_signature: Option<String>,

    pub photos: Option<Vec<String>>,
}

/// Response de formulario para la API
#[derive(Debug, Serialize)]
pub struct BookingFormResponse {
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

impl From<BookingForm> for BookingFormResponse {
    fn from(form: BookingForm) -> Self {
        Self {
            id: form.id,
            booking_id: form.booking_id,
            form_type: form.form_type,
            mileage: form.mileage,
            fuel_level: form.fuel_level,
            damages: form.damages,
            customer_signature: form.customer_signature,
            agent_signature: form.agent_signature,
            photos: form.photos,
            completed_at: form.completed_at,
            created_at: form.created_at,
            updated_at: form.updated_at,
        }
    }
}
