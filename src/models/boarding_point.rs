//! Modelo de BoardingPoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Punto de embarque - mapea exactamente a la tabla ride_boarding_points
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BoardingPoint {
    pub boarding_id: Uuid,
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub boarding_lat: f64,
    pub boarding_lng: f64,
    pub created_at: DateTime<Utc>,
}
