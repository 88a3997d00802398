use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::{Vehicle, VehicleCategory};
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        brand: String,
        model: String,
        year: Option<i32>,
        license_plate: String,
        category_id: Option<Uuid>,
        daily_rate: Decimal,
        image_url: Option<String>,
    ) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, brand, model, year, license_plate, category_id,
                                  daily_rate, status, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'available', $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(license_plate)
        .bind(category_id)
        .bind(daily_rate)
        .bind(image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self, filters: &VehicleFilters) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR category_id = $2)
              AND ($3::text IS NULL OR brand ILIKE $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(&filters.status)
        .bind(filters.category_id)
        .bind(&filters.brand)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = $1)",
        )
        .bind(license_plate)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        license_plate: Option<String>,
        category_id: Option<Uuid>,
        daily_rate: Option<Decimal>,
        status: Option<String>,
        image_url: Option<String>,
    ) -> AppResult<Vehicle> {
        // Obtener vehículo actual y fusionar campos parciales
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, year = $4, license_plate = $5, category_id = $6,
                daily_rate = $7, status = $8, image_url = $9, updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand.unwrap_or(current.brand))
        .bind(model.unwrap_or(current.model))
        .bind(year.or(current.year))
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(category_id.or(current.category_id))
        .bind(daily_rate.unwrap_or(current.daily_rate))
        .bind(status.unwrap_or(current.status))
        .bind(image_url.or(current.image_url))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_categories(&self) -> AppResult<Vec<VehicleCategory>> {
        let categories = sqlx::query_as::<_, VehicleCategory>(
            "SELECT * FROM vehicle_categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}
