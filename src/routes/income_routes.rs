//! Rutas de historial e ingresos
//!
//! Agregados de solo lectura sobre la tabla history.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::income_controller::IncomeController;
use crate::dto::income_dto::{
    HistoryEntryResponse, IncomeChartsResponse, IncomeSummaryResponse, UserIdParams,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_income_router() -> Router<AppState> {
    Router::new()
        .route("/history", get(history))
        .route("/income", get(income))
        .route("/income-charts", get(income_charts))
}

async fn history(
    State(state): State<AppState>,
    Query(params): Query<UserIdParams>,
) -> Result<Json<Vec<HistoryEntryResponse>>, AppError> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required.".to_string()))?;

    let controller = IncomeController::new(state.pool.clone());
    let response = controller.history(user_id).await?;
    Ok(Json(response))
}

async fn income(
    State(state): State<AppState>,
    Query(params): Query<UserIdParams>,
) -> Result<Json<IncomeSummaryResponse>, AppError> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required.".to_string()))?;

    let controller = IncomeController::new(state.pool.clone());
    let response = controller.income(user_id).await?;
    Ok(Json(response))
}

async fn income_charts(
    State(state): State<AppState>,
    Query(params): Query<UserIdParams>,
) -> Result<Json<IncomeChartsResponse>, AppError> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required.".to_string()))?;

    let controller = IncomeController::new(state.pool.clone());
    let response = controller.charts(user_id).await?;
    Ok(Json(response))
}
