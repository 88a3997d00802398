use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::cache::resource_cache::{resources, ResourceCache};
use crate::dto::common::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct CustomerController {
    repository: CustomerRepository,
    cache: ResourceCache,
}

impl CustomerController {
    pub fn new(pool: PgPool, cache: ResourceCache) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
            cache,
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate()?;

        if validate_not_empty(&request.full_name).is_err() {
            return Err(bad_request_error("El nombre es requerido"));
        }

        let customer = self
            .repository
            .create(request.full_name, request.email, request.phone, request.address)
            .await?;

        self.cache.invalidate(resources::CUSTOMERS).await;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CustomerResponse> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate()?;

        let customer = self
            .repository
            .update(id, request.full_name, request.email, request.phone, request.address)
            .await?;

        self.cache.invalidate(resources::CUSTOMERS).await;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        self.cache.invalidate(resources::CUSTOMERS).await;
        Ok(())
    }
}
