use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::cache::resource_cache::{resources, ResourceCache};
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleCategory;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct VehicleController {
    repository: VehicleRepository,
    cache: ResourceCache,
}

impl VehicleController {
    pub fn new(pool: PgPool, cache: ResourceCache) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
            cache,
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        if validate_not_empty(&request.license_plate).is_err() {
            return Err(AppError::BadRequest("La matrícula es requerida".to_string()));
        }

        // Verificar que la matrícula no exista
        if self.repository.license_plate_exists(&request.license_plate).await? {
            return Err(conflict_error("Vehicle", "license_plate", &request.license_plate));
        }

        let vehicle = self
            .repository
            .create(
                request.brand,
                request.model,
                request.year,
                request.license_plate,
                request.category_id,
                request.daily_rate,
                request.image_url,
            )
            .await?;

        self.cache.invalidate(resources::VEHICLES).await;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_all(&filters).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    /// Catálogo público del sitio de marketing: solo vehículos disponibles
    pub async fn public_catalog(
        &self,
        category_id: Option<Uuid>,
    ) -> AppResult<Vec<VehicleResponse>> {
        let filters = VehicleFilters {
            status: Some("available".to_string()),
            category_id,
            brand: None,
        };
        let vehicles = self.repository.find_all(&filters).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn list_categories(&self) -> AppResult<Vec<VehicleCategory>> {
        self.repository.find_categories().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.brand,
                request.model,
                request.year,
                request.license_plate,
                request.category_id,
                request.daily_rate,
                request.status,
                request.image_url,
            )
            .await?;

        self.cache.invalidate(resources::VEHICLES).await;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        self.cache.invalidate(resources::VEHICLES).await;
        Ok(())
    }
}
