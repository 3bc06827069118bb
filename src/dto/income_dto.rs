//! DTOs de historial e ingresos

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UserIdParams {
    pub user_id: Option<Uuid>,
}

// Registro de historial tal como se devuelve al cliente
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub history_id: Uuid,
    pub ride_id: Uuid,
    pub driver_id: Uuid,
    pub passenger_id: Uuid,
    pub source_name: String,
    pub destination_name: String,
    pub price_per_seat: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub vehicle_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct VehicleTypeIncome {
    pub vehicle_type: Option<String>,
    pub total: f64,
    pub rides: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthlyIncome {
    pub month: String,
    pub total: f64,
    pub rides: i64,
}

// Resumen de ingresos del conductor
#[derive(Debug, Serialize)]
pub struct IncomeSummaryResponse {
    pub user_id: Uuid,
    pub total_income: f64,
    pub by_vehicle_type: Vec<VehicleTypeIncome>,
    pub by_month: Vec<MonthlyIncome>,
}

#[derive(Debug, Serialize)]
pub struct DailyRideCount {
    pub date: NaiveDate,
    pub rides: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthlyRideCount {
    pub month: String,
    pub rides: i64,
}

#[derive(Debug, Serialize)]
pub struct RouteFrequency {
    pub source_name: String,
    pub destination_name: String,
    pub rides: i64,
}

// Series para las gráficas del dashboard del conductor
#[derive(Debug, Serialize)]
pub struct IncomeChartsResponse {
    pub user_id: Uuid,
    pub rides_per_day: Vec<DailyRideCount>,
    pub rides_per_month: Vec<MonthlyRideCount>,
    pub top_routes: Vec<RouteFrequency>,
}
