//! DTOs de posición del conductor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub ride_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct LocationParams {
    pub ride_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub ride_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::models::RideLocation> for LocationResponse {
    fn from(location: crate::models::RideLocation) -> Self {
        Self {
            ride_id: location.ride_id,
            latitude: location.latitude,
            longitude: location.longitude,
            updated_at: location.updated_at,
        }
    }
}
