use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::controllers::booking_form_controller::BookingFormController;
use crate::controllers::contract_controller::ContractController;
use crate::dto::booking_dto::{
    AvailabilityQuery, AvailabilityResponse, BookingResponse, CreateBookingRequest,
    UpdateBookingRequest,
};
use crate::dto::booking_form_dto::{BookingFormResponse, SubmitBookingFormRequest};
use crate::dto::common::ApiResponse;
use crate::dto::contract_dto::{ContractResponse, CreateContractRequest};
use crate::models::booking_form::FormType;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/availability", get(check_availability))
        .route("/:id", get(get_booking))
        .route("/:id", put(update_booking))
        .route("/:id", delete(delete_booking))
        .route("/:id/forms", post(submit_form))
        .route("/:id/forms", get(list_forms))
        .route("/:id/forms/:form_type", get(get_form))
        .route("/:id/contract", post(create_contract))
        .route("/:id/contract", get(get_contract_data))
}

fn booking_controller(state: &AppState) -> BookingController {
    BookingController::new(
        state.pool.clone(),
        state.cache.clone(),
        state.config.availability_policy,
    )
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = booking_controller(&state).create(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let response = booking_controller(&state).list().await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let response = booking_controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = booking_controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    booking_controller(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva eliminada exitosamente"
    })))
}

async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    let available = booking_controller(&state).availability(query).await;
    Json(AvailabilityResponse { available })
}

async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitBookingFormRequest>,
) -> Result<Json<ApiResponse<BookingFormResponse>>, AppError> {
    let controller = BookingFormController::new(state.pool.clone());
    let response = controller.submit(id, request).await?;
    Ok(Json(response))
}

async fn list_forms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<BookingFormResponse>>, AppError> {
    let controller = BookingFormController::new(state.pool.clone());
    let response = controller.list_by_booking(id).await?;
    Ok(Json(response))
}

async fn get_form(
    State(state): State<AppState>,
    Path((id, form_type)): Path<(Uuid, String)>,
) -> Result<Json<BookingFormResponse>, AppError> {
    let form_type = match form_type.as_str() {
        "delivery" => FormType::Delivery,
        "pickup" => FormType::Pickup,
        other => {
            return Err(AppError::BadRequest(format!(
                "Tipo de formulario desconocido: '{}'",
                other
            )))
        }
    };

    let controller = BookingFormController::new(state.pool.clone());
    let response = controller.get_by_type(id, form_type).await?;
    Ok(Json(response))
}

async fn create_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<CreateContractRequest>>,
) -> Result<Json<ApiResponse<ContractResponse>>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let response = controller.create_contract(id, request).await?;
    Ok(Json(response))
}

async fn get_contract_data(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ContractController::new(state.pool.clone(), state.cache.clone());
    let data = controller.get_contract_data(id).await?;
    Ok(Json(serde_json::json!({ "contract_data": data })))
}
