//! DTOs de viajes

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para publicar un viaje. Fecha y hora llegan como string y se
// validan/convierten en el controller.
#[derive(Debug, Deserialize, Validate)]
pub struct OfferRideRequest {
    pub driver_id: Uuid,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,

    #[validate(length(min = 1))]
    pub route_polyline: String,

    #[validate(length(min = 1, max = 255))]
    pub source_name: String,

    #[validate(length(min = 1, max = 255))]
    pub destination_name: String,

    pub date: String,
    pub time: String,
    pub available_seats: i32,
    pub price_per_seat: f64,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: Option<String>,

    #[validate(length(min = 2, max = 20))]
    pub vehicle_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferRideResponse {
    pub message: String,
    pub ride_id: Uuid,
}

// Parámetros de búsqueda
#[derive(Debug, Deserialize)]
pub struct SearchRidesParams {
    pub destination: Option<String>,
}

// Fila del resultado de búsqueda: asientos ya descontados y nombre del
// conductor incluido
#[derive(Debug, Serialize)]
pub struct RideSearchResponse {
    pub ride_id: Uuid,
    pub driver_id: Uuid,
    pub driver_name: String,
    pub source_name: String,
    pub destination_name: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available_seats: i32,
    pub price_per_seat: f64,
}

#[derive(Debug, Deserialize)]
pub struct RideIdParams {
    pub ride_id: Option<Uuid>,
}

// Solo geometría y ruta
#[derive(Debug, Serialize)]
pub struct RideDetailsResponse {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub route_polyline: String,
}

#[derive(Debug, Deserialize)]
pub struct MyOfferedRidesParams {
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}

// Viaje completo para listados del conductor
#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub ride_id: Uuid,
    pub driver_id: Uuid,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub route_polyline: String,
    pub source_name: String,
    pub destination_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available_seats: i32,
    pub price_per_seat: f64,
    pub vehicle_type: Option<String>,
    pub vehicle_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeleteRideResponse {
    pub message: String,
    pub archived_records: i64,
}
