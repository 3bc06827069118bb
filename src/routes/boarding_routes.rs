//! Rutas de puntos de embarque

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::warn;

use crate::controllers::boarding_controller::BoardingController;
use crate::dto::boarding_dto::{
    BoardedRideResponse, BoardingPointResponse, BoardingPointsParams,
    CreateBoardingPointRequest, CreateBoardingPointResponse, MyBoardedRidesParams,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_boarding_router() -> Router<AppState> {
    Router::new()
        .route("/boarding-point", post(add_boarding_point))
        .route("/boarding-points", get(list_boarding_points))
        .route("/my-boarded-rides", get(my_boarded_rides))
}

async fn add_boarding_point(
    State(state): State<AppState>,
    Json(request): Json<CreateBoardingPointRequest>,
) -> Result<Json<CreateBoardingPointResponse>, AppError> {
    let controller = BoardingController::new(state.pool.clone());
    let response = controller.add(request).await?;
    Ok(Json(response))
}

async fn list_boarding_points(
    State(state): State<AppState>,
    Query(params): Query<BoardingPointsParams>,
) -> Result<Json<Vec<BoardingPointResponse>>, AppError> {
    let controller = BoardingController::new(state.pool.clone());
    let response = controller.list(params.ride_id).await?;
    Ok(Json(response))
}

// Contrato legacy: array vacío también ante fallos de consulta
async fn my_boarded_rides(
    State(state): State<AppState>,
    Query(params): Query<MyBoardedRidesParams>,
) -> Json<Vec<BoardedRideResponse>> {
    let controller = BoardingController::new(state.pool.clone());

    match controller.my_boarded(params.passenger_id).await {
        Ok(rides) => Json(rides),
        Err(error) => {
            warn!("my-boarded-rides query failed, returning empty list: {}", error);
            Json(Vec::new())
        }
    }
}
