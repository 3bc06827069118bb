//! Rideshare coordination backend
//!
//! Conductores publican viajes con su ruta, pasajeros los buscan y se
//! suben registrando un punto de embarque; el sistema sigue la posición
//! del conductor y archiva el historial de ingresos al cerrar cada viaje.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir la aplicación completa: rutas bajo /api + CORS
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::create_api_router())
        .layer(cors_middleware())
        .with_state(state)
}
