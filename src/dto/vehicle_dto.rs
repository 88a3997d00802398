//! DTOs de vehículos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: String,

    pub category_id: Option<Uuid>,

    pub daily_rate: Decimal,

    pub image_url: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: Option<String>,

    pub category_id: Option<Uuid>,

    pub daily_rate: Option<Decimal>,

    pub status: Option<String>,

    pub image_url: Option<String>,
}

/// Filtros para el catálogo de vehículos
#[derive(Debug, Deserialize, Default)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub category_id: Option<Uuid>,
    pub brand: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            category_id: vehicle.category_id,
            daily_rate: vehicle.daily_rate,
            status: vehicle.status,
            image_url: vehicle.image_url,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
