use crate::dto::income_dto::{
    DailyRideCount, HistoryEntryResponse, IncomeChartsResponse, IncomeSummaryResponse,
    MonthlyIncome, MonthlyRideCount, RouteFrequency, VehicleTypeIncome,
};
use crate::repositories::history_repository::HistoryRepository;
use crate::utils::errors::AppError;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

pub struct IncomeController {
    history: HistoryRepository,
}

impl IncomeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            history: HistoryRepository::new(pool),
        }
    }

    pub async fn history(&self, user_id: Uuid) -> Result<Vec<HistoryEntryResponse>, AppError> {
        let records = self.history.find_for_user(user_id).await?;

        let response = records
            .into_iter()
            .map(|record| HistoryEntryResponse {
                history_id: record.history_id,
                ride_id: record.ride_id,
                driver_id: record.driver_id,
                passenger_id: record.passenger_id,
                source_name: record.source_name,
                destination_name: record.destination_name,
                price_per_seat: record.price_per_seat.to_f64().unwrap_or(0.0),
                date: record.date,
                time: record.time,
                vehicle_type: record.vehicle_type,
                created_at: record.created_at,
            })
            .collect();

        Ok(response)
    }

    /// Resumen de ingresos: total, por tipo de vehículo y por mes
    pub async fn income(&self, user_id: Uuid) -> Result<IncomeSummaryResponse, AppError> {
        let total = self.history.total_income(user_id).await?;
        let by_vehicle_type = self.history.income_by_vehicle_type(user_id).await?;
        let by_month = self.history.income_by_month(user_id).await?;

        Ok(IncomeSummaryResponse {
            user_id,
            total_income: total.to_f64().unwrap_or(0.0),
            by_vehicle_type: by_vehicle_type
                .into_iter()
                .map(|row| VehicleTypeIncome {
                    vehicle_type: row.vehicle_type,
                    total: row.total.to_f64().unwrap_or(0.0),
                    rides: row.rides,
                })
                .collect(),
            by_month: by_month
                .into_iter()
                .map(|row| MonthlyIncome {
                    month: row.month,
                    total: row.total.to_f64().unwrap_or(0.0),
                    rides: row.rides,
                })
                .collect(),
        })
    }

    /// Series para gráficas: viajes por día (7 días), por mes (6 meses)
    /// y top 5 de rutas
    pub async fn charts(&self, user_id: Uuid) -> Result<IncomeChartsResponse, AppError> {
        let per_day = self.history.rides_per_day_last_week(user_id).await?;
        let per_month = self.history.rides_per_month_last_six(user_id).await?;
        let top_routes = self.history.top_routes(user_id).await?;

        Ok(IncomeChartsResponse {
            user_id,
            rides_per_day: per_day
                .into_iter()
                .map(|row| DailyRideCount {
                    date: row.date,
                    rides: row.rides,
                })
                .collect(),
            rides_per_month: per_month
                .into_iter()
                .map(|row| MonthlyRideCount {
                    month: row.month,
                    rides: row.rides,
                })
                .collect(),
            top_routes: top_routes
                .into_iter()
                .map(|row| RouteFrequency {
                    source_name: row.source_name,
                    destination_name: row.destination_name,
                    rides: row.rides,
                })
                .collect(),
        })
    }
}
