//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su categoría. La disponibilidad
//! es una propiedad del par (vehículo, rango de fechas), nunca de la fila.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub license_plate: String,
    pub category_id: Option<Uuid>,
    pub daily_rate: Decimal,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Categoría de vehículo para el catálogo público
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleCategory {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
