//! Rutas de la API
//!
//! Cada área funcional aporta su propio router; aquí se ensamblan todos
//! bajo un único router que main.rs monta en /api.

pub mod auth_routes;
pub mod boarding_routes;
pub mod geocoding_routes;
pub mod income_routes;
pub mod location_routes;
pub mod ride_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes::create_auth_router())
        .merge(ride_routes::create_ride_router())
        .merge(boarding_routes::create_boarding_router())
        .merge(location_routes::create_location_router())
        .merge(income_routes::create_income_router())
        .merge(geocoding_routes::create_geocoding_router())
}
