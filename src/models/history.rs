//! Modelo de HistoryRecord
//!
//! Snapshot desnormalizado de un par viaje-pasajero, creado al cerrar el
//! viaje. Inmutable una vez insertado.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryRecord {
    pub history_id: Uuid,
    pub ride_id: Uuid,
    pub driver_id: Uuid,
    pub passenger_id: Uuid,
    pub source_name: String,
    pub destination_name: String,
    pub price_per_seat: Decimal,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub vehicle_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
