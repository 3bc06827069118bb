//! Modelo de RideLocation
//!
//! Una sola fila por viaje: la posición anterior se sobreescribe en cada
//! actualización, no se guarda historial de posiciones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Última posición conocida del conductor de un viaje
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RideLocation {
    pub ride_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}
