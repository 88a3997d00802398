use axum::{
    extract::{Multipart, Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::customer_controller::CustomerController;
use crate::controllers::document_controller::{DocumentController, UploadedFile};
use crate::dto::common::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::dto::document_dto::DocumentResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route("/:id", delete(delete_customer))
        .route("/:id/documents", post(upload_document))
        .route("/:id/documents", get(list_documents))
        .route("/:id/documents/:document_id", delete(delete_document))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.cache.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.cache.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.cache.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.cache.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CustomerController::new(state.pool.clone(), state.cache.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente eliminado exitosamente"
    })))
}

/// Subida multipart: campos `document_type`, `name` (opcional) y `file`
async fn upload_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let mut document_type = "other".to_string();
    let mut name: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart inválido: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("document_type") => {
                document_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            Some("name") => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("file") => {
                let original_filename = field
                    .file_name()
                    .unwrap_or("document")
                    .to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();

                file = Some(UploadedFile {
                    original_filename,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Falta el campo 'file'".to_string()))?;

    let controller =
        DocumentController::new(state.pool.clone(), state.storage.clone(), state.cache.clone());
    let response = controller.upload(id, document_type, name, file).await?;
    Ok(Json(response))
}

async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller =
        DocumentController::new(state.pool.clone(), state.storage.clone(), state.cache.clone());
    let response = controller.list_by_customer(id).await?;
    Ok(Json(response))
}

async fn delete_document(
    State(state): State<AppState>,
    Path((_id, document_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller =
        DocumentController::new(state.pool.clone(), state.storage.clone(), state.cache.clone());
    controller.delete(document_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Documento eliminado exitosamente"
    })))
}
