use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::contract_controller::ContractController;
use crate::dto::common::ApiResponse;
use crate::dto::contract_dto::{
    CreateTemplateRequest, PreviewTemplateRequest, PreviewTemplateResponse, TemplateResponse,
    UpdateTemplateRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contract_template_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_template))
        .route("/", get(list_templates))
        .route("/preview", post(preview_template))
        .route("/:id", get(get_template))
        .route("/:id", put(update_template))
        .route("/:id", delete(delete_template))
}

async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<Json<ApiResponse<TemplateResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let response = controller.create_template(request).await?;
    Ok(Json(response))
}

async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let response = controller.list_templates().await?;
    Ok(Json(response))
}

async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateResponse>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let response = controller.get_template(id).await?;
    Ok(Json(response))
}

async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<ApiResponse<TemplateResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let response = controller.update_template(id, request).await?;
    Ok(Json(response))
}

async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    controller.delete_template(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Plantilla eliminada exitosamente"
    })))
}

/// Vista previa con variables de ejemplo
async fn preview_template(
    State(state): State<AppState>,
    Json(request): Json<PreviewTemplateRequest>,
) -> Json<PreviewTemplateResponse> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    Json(controller.preview_template(request))
}
