//! Rutas de viajes

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::warn;
use uuid::Uuid;

use crate::controllers::ride_controller::RideController;
use crate::dto::ride_dto::{
    DeleteRideResponse, MyOfferedRidesParams, OfferRideRequest, OfferRideResponse,
    RideDetailsResponse, RideIdParams, RideResponse, RideSearchResponse, SearchRidesParams,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/offer-ride", post(offer_ride))
        .route("/search-rides", get(search_rides))
        .route("/ride-details", get(ride_details))
        .route("/my-offered-rides", get(my_offered_rides))
        .route("/ride/:ride_id", delete(delete_ride))
}

async fn offer_ride(
    State(state): State<AppState>,
    Json(request): Json<OfferRideRequest>,
) -> Result<Json<OfferRideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller
        .offer(request, state.config.driver_role_enforced)
        .await?;
    Ok(Json(response))
}

async fn search_rides(
    State(state): State<AppState>,
    Query(params): Query<SearchRidesParams>,
) -> Result<Json<Vec<RideSearchResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.search(params.destination).await?;
    Ok(Json(response))
}

async fn ride_details(
    State(state): State<AppState>,
    Query(params): Query<RideIdParams>,
) -> Result<Json<RideDetailsResponse>, AppError> {
    let ride_id = params
        .ride_id
        .ok_or_else(|| AppError::BadRequest("ride_id required.".to_string()))?;

    let controller = RideController::new(state.pool.clone());
    let response = controller.details(ride_id).await?;
    Ok(Json(response))
}

// Contrato legacy: este listado nunca falla hacia el cliente; un fallo de
// consulta se registra y se responde con un array vacío.
async fn my_offered_rides(
    State(state): State<AppState>,
    Query(params): Query<MyOfferedRidesParams>,
) -> Json<Vec<RideResponse>> {
    let controller = RideController::new(state.pool.clone());

    match controller.my_offered(params.email, params.user_id).await {
        Ok(rides) => Json(rides),
        Err(error) => {
            warn!("my-offered-rides query failed, returning empty list: {}", error);
            Json(Vec::new())
        }
    }
}

async fn delete_ride(
    State(state): State<AppState>,
    Path(ride_id): Path<Uuid>,
) -> Result<Json<DeleteRideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.delete(ride_id).await?;
    Ok(Json(response))
}
