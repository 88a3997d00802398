//! Routers de la API
//!
//! Un router por recurso, montados bajo /api por `create_api_router`.

pub mod booking_routes;
pub mod contract_routes;
pub mod customer_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Router completo de la aplicación: health check + recursos de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/booking", booking_routes::create_booking_router())
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/customer", customer_routes::create_customer_router())
        .nest(
            "/api/contract-template",
            contract_routes::create_contract_template_router(),
        )
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-rental-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
