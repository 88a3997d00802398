use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking_form::{BookingForm, FormType};
use crate::utils::errors::AppResult;

/// Campos de un formulario de inspección listos para persistir
#[derive(Debug)]
pub struct BookingFormRecord {
    pub mileage: Option<i32>,
    pub fuel_level: Option<i32>,
    pub damages: Option<String>,
    pub customer_signature: Option<String>,
    pub agent_signature: Option<String>,
    pub photos: serde_json::Value,
}

pub struct BookingFormRepository {
    pool: PgPool,
}

impl BookingFormRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert atómico sobre la restricción única (booking_id, form_type).
    /// Un segundo envío del mismo tipo sobreescribe los valores del primero;
    /// no hay ventana de carrera check-then-write.
    pub async fn upsert(
        &self,
        booking_id: Uuid,
        form_type: FormType,
        record: BookingFormRecord,
    ) -> AppResult<BookingForm> {
        let now = Utc::now();

        let form = sqlx::query_as::<_, BookingForm>(
            r#"
            INSERT INTO booking_forms (id, booking_id, form_type, mileage, fuel_level,
                                       damages, customer_signature, agent_signature,
                                       photos, completed_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10, $10)
            ON CONFLICT (booking_id, form_type) DO UPDATE
            SET mileage = EXCLUDED.mileage,
                fuel_level = EXCLUDED.fuel_level,
                damages = EXCLUDED.damages,
                customer_signature = EXCLUDED.customer_signature,
                agent_signature = EXCLUDED.agent_signature,
                photos = EXCLUDED.photos,
                completed_at = EXCLUDED.completed_at,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking_id)
        .bind(form_type.as_str())
        .bind(record.mileage)
        .bind(record.fuel_level)
        .bind(record.damages)
        .bind(record.customer_signature)
        .bind(record.agent_signature)
        .bind(record.photos)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(form)
    }

    pub async fn find_by_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingForm>> {
        let forms = sqlx::query_as::<_, BookingForm>(
            "SELECT * FROM booking_forms WHERE booking_id = $1 ORDER BY form_type",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(forms)
    }

    pub async fn find_by_booking_and_type(
        &self,
        booking_id: Uuid,
        form_type: FormType,
    ) -> AppResult<Option<BookingForm>> {
        let form = sqlx::query_as::<_, BookingForm>(
            "SELECT * FROM booking_forms WHERE booking_id = $1 AND form_type = $2",
        )
        .bind(booking_id)
        .bind(form_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(form)
    }
}
