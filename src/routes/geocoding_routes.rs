//! Ruta de geocoding
//!
//! Proxy del servicio de geocoding de terceros.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::warn;

use crate::services::geocoding_service::{GeocodingResponse, GeocodingService};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    pub q: Option<String>,
}

pub fn create_geocoding_router() -> Router<AppState> {
    Router::new().route("/geocode", get(geocode))
}

async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<GeocodingResponse>, AppError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'q' is required.".to_string()))?;

    let mapbox_token = match &state.config.mapbox_token {
        Some(token) => token.clone(),
        None => {
            warn!("geocode requested but MAPBOX_TOKEN is not configured");
            return Ok(Json(GeocodingResponse::failure(
                "Geocoding service not configured".to_string(),
            )));
        }
    };

    let service = GeocodingService::new(mapbox_token)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match service.geocode(&query).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            warn!("geocoding failed for '{}': {}", query, error);
            Ok(Json(GeocodingResponse::failure(format!(
                "Geocoding failed: {}",
                error
            ))))
        }
    }
}
