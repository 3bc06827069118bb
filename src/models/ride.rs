//! Modelo de Ride
//!
//! Este módulo contiene el struct Ride que mapea exactamente a la tabla
//! rides. Los asientos disponibles que se muestran al buscar se calculan
//! como available_seats menos los puntos de embarque registrados; ese
//! cálculo vive en el repositorio, no aquí.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ride principal - mapea exactamente a la tabla rides
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
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
    pub price_per_seat: Decimal,
    pub vehicle_type: Option<String>,
    pub vehicle_number: Option<String>,
    pub created_at: DateTime<Utc>,
}
