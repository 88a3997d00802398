use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleCategory;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/catalog", get(public_catalog))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    category_id: Option<Uuid>,
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

/// Catálogo público del sitio de marketing
async fn public_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.public_catalog(query.category_id).await?;
    Ok(Json(response))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleCategory>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.list_categories().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), state.cache.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
