//! DTOs de plantillas y generación de contratos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::contract_template::ContractTemplate;

/// Request para crear una plantilla de contrato
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTemplateRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub content: String,

    pub is_active: Option<bool>,
}

/// Request para actualizar una plantilla existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTemplateRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: Option<String>,

    pub content: Option<String>,

    pub is_active: Option<bool>,
}

/// Response de plantilla para la API
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContractTemplate> for TemplateResponse {
    fn from(template: ContractTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            content: template.content,
            is_active: template.is_active,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

/// Request para generar un contrato sobre una reserva
#[derive(Debug, Deserialize, Default)]
pub struct CreateContractRequest {
    pub template_id: Option<Uuid>,
    pub auto_generate_pdf: Option<bool>,
}

/// Response de contrato generado
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub booking_id: Uuid,
    pub template_id: Uuid,
    pub template_name: String,
    pub content: String,
    pub variables: serde_json::Value,
    pub generated_at: DateTime<Utc>,
}

/// Request de vista previa de plantilla
#[derive(Debug, Deserialize)]
pub struct PreviewTemplateRequest {
    pub content: String,
}

/// Response de vista previa de plantilla
#[derive(Debug, Serialize)]
pub struct PreviewTemplateResponse {
    pub preview: String,
}
