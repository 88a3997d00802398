use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingWithRelations};
use crate::utils::errors::AppResult;

/// Campos de una reserva lista para persistir, con los derivados ya calculados
#[derive(Debug)]
pub struct BookingRecord {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Decimal,
    pub duration_days: i32,
    pub total_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: BookingRecord) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, customer_id, vehicle_id, start_date, end_date,
                                  daily_rate, duration_days, total_amount, status, notes,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.customer_id)
        .bind(record.vehicle_id)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.daily_rate)
        .bind(record.duration_days)
        .bind(record.total_amount)
        .bind(record.status)
        .bind(record.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Reserva con cliente y vehículo unidos, para la generación de contratos
    pub async fn find_with_relations(&self, id: Uuid) -> AppResult<Option<BookingWithRelations>> {
        let booking = sqlx::query_as::<_, BookingWithRelations>(
            r#"
            SELECT b.id, b.customer_id, b.vehicle_id, b.start_date, b.end_date,
                   b.daily_rate, b.duration_days, b.total_amount, b.status, b.notes,
                   b.contract_data,
                   c.full_name AS customer_name, c.email AS customer_email,
                   v.brand AS vehicle_brand, v.model AS vehicle_model,
                   v.license_plate AS vehicle_license_plate
            FROM bookings b
            JOIN customers c ON c.id = b.customer_id
            JOIN vehicles v ON v.id = b.vehicle_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Persistir la fila completa ya fusionada. Los derivados llegan siempre
    /// coherentes con (fechas, tarifa): el controller los recalcula cuando
    /// la actualización toca alguna de esas entradas.
    pub async fn update(&self, id: Uuid, record: BookingRecord) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET customer_id = $2, vehicle_id = $3, start_date = $4, end_date = $5,
                daily_rate = $6, duration_days = $7, total_amount = $8,
                status = $9, notes = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(record.customer_id)
        .bind(record.vehicle_id)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.daily_rate)
        .bind(record.duration_days)
        .bind(record.total_amount)
        .bind(record.status)
        .bind(record.notes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Asociar los datos de contrato generados a la reserva
    pub async fn set_contract_data(
        &self,
        id: Uuid,
        contract_data: &serde_json::Value,
    ) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET contract_data = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(contract_data)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
