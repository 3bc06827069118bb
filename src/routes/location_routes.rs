//! Rutas de posición del conductor
//!
//! El cliente consulta por polling; no hay push en tiempo real.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{LocationParams, LocationResponse, UpdateLocationRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/ride-location", post(update_location))
        .route("/ride-location", get(latest_location))
}

async fn update_location(
    State(state): State<AppState>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}

async fn latest_location(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.latest(params.ride_id).await?;
    Ok(Json(response))
}
