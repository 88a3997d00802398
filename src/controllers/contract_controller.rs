//! CRUD de plantillas de contrato, vista previa y generación

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::cache::resource_cache::{resources, ResourceCache};
use crate::dto::common::ApiResponse;
use crate::dto::contract_dto::{
    ContractResponse, CreateContractRequest, CreateTemplateRequest, PreviewTemplateRequest,
    PreviewTemplateResponse, TemplateResponse, UpdateTemplateRequest,
};
use crate::repositories::contract_template_repository::ContractTemplateRepository;
use crate::services::contract_service::{render_template, sample_variables, ContractService};
use crate::utils::errors::{AppError, AppResult};

pub struct ContractController {
    repository: ContractTemplateRepository,
    service: ContractService,
    cache: ResourceCache,
}

impl ContractController {
    pub fn new(pool: PgPool, cache: ResourceCache) -> Self {
        Self {
            repository: ContractTemplateRepository::new(pool.clone()),
            service: ContractService::new(pool),
            cache,
        }
    }

    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> AppResult<ApiResponse<TemplateResponse>> {
        request.validate()?;

        let template = self
            .repository
            .create(request.name, request.content, request.is_active.unwrap_or(false))
            .await?;

        self.cache.invalidate(resources::CONTRACT_TEMPLATES).await;

        Ok(ApiResponse::success_with_message(
            template.into(),
            "Plantilla creada exitosamente".to_string(),
        ))
    }

    pub async fn get_template(&self, id: Uuid) -> AppResult<TemplateResponse> {
        let template = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plantilla de contrato no encontrada".to_string()))?;

        Ok(template.into())
    }

    pub async fn list_templates(&self) -> AppResult<Vec<TemplateResponse>> {
        let templates = self.repository.find_all().await?;
        Ok(templates.into_iter().map(Into::into).collect())
    }

    pub async fn update_template(
        &self,
        id: Uuid,
        request: UpdateTemplateRequest,
    ) -> AppResult<ApiResponse<TemplateResponse>> {
        request.validate()?;

        let template = self
            .repository
            .update(id, request.name, request.content, request.is_active)
            .await?;

        self.cache.invalidate(resources::CONTRACT_TEMPLATES).await;

        Ok(ApiResponse::success_with_message(
            template.into(),
            "Plantilla actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete_template(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(
                "Plantilla de contrato no encontrada".to_string(),
            ));
        }

        self.cache.invalidate(resources::CONTRACT_TEMPLATES).await;
        Ok(())
    }

    /// Vista previa con variables de ejemplo; los identificadores
    /// desconocidos se muestran como `[identificador]`
    pub fn preview_template(&self, request: PreviewTemplateRequest) -> PreviewTemplateResponse {
        PreviewTemplateResponse {
            preview: render_template(&request.content, &sample_variables()),
        }
    }

    /// Generar el contrato de una reserva
    pub async fn create_contract(
        &self,
        booking_id: Uuid,
        request: CreateContractRequest,
    ) -> AppResult<ApiResponse<ContractResponse>> {
        let contract = self
            .service
            .create_contract_for_booking(
                booking_id,
                request.template_id,
                request.auto_generate_pdf.unwrap_or(false),
            )
            .await?;

        // La generación escribe en la reserva, su listado queda obsoleto
        self.cache.invalidate(resources::BOOKINGS).await;

        Ok(ApiResponse::success_with_message(
            contract,
            "Contrato generado exitosamente".to_string(),
        ))
    }

    /// Datos de contrato asociados a una reserva (columna estructurada o
    /// encoding heredado en notes)
    pub async fn get_contract_data(
        &self,
        booking_id: Uuid,
    ) -> AppResult<Option<serde_json::Value>> {
        self.service.contract_data_for_booking(booking_id).await
    }
}
