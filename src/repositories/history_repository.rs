use crate::models::HistoryRecord;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::types::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct VehicleTypeIncomeRow {
    pub vehicle_type: Option<String>,
    pub total: Decimal,
    pub rides: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct MonthlyIncomeRow {
    pub month: String,
    pub total: Decimal,
    pub rides: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct DailyCountRow {
    pub date: NaiveDate,
    pub rides: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct MonthlyCountRow {
    pub month: String,
    pub rides: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct RouteFrequencyRow {
    pub source_name: String,
    pub destination_name: String,
    pub rides: i64,
}

pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Historial del usuario, como conductor o como pasajero
    pub async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<HistoryRecord>, AppError> {
        let rows = sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT * FROM history
            WHERE driver_id = $1 OR passenger_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    pub async fn total_income(&self, driver_id: Uuid) -> Result<Decimal, AppError> {
        let result: (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(price_per_seat), 0) FROM history WHERE driver_id = $1",
        )
        .bind(driver_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.0)
    }

    pub async fn income_by_vehicle_type(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<VehicleTypeIncomeRow>, AppError> {
        let rows = sqlx::query_as::<_, VehicleTypeIncomeRow>(
            r#"
            SELECT vehicle_type,
                   SUM(price_per_seat) AS total,
                   COUNT(*) AS rides
            FROM history
            WHERE driver_id = $1
            GROUP BY vehicle_type
            ORDER BY total DESC
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    pub async fn income_by_month(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<MonthlyIncomeRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyIncomeRow>(
            r#"
            SELECT TO_CHAR(date, 'YYYY-MM') AS month,
                   SUM(price_per_seat) AS total,
                   COUNT(*) AS rides
            FROM history
            WHERE driver_id = $1
            GROUP BY TO_CHAR(date, 'YYYY-MM')
            ORDER BY month ASC
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    /// Viajes por día, últimos 7 días
    pub async fn rides_per_day_last_week(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<DailyCountRow>, AppError> {
        let rows = sqlx::query_as::<_, DailyCountRow>(
            r#"
            SELECT date, COUNT(*) AS rides
            FROM history
            WHERE driver_id = $1
              AND date >= CURRENT_DATE - 6
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    /// Viajes por mes, últimos 6 meses
    pub async fn rides_per_month_last_six(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<MonthlyCountRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyCountRow>(
            r#"
            SELECT TO_CHAR(date, 'YYYY-MM') AS month,
                   COUNT(*) AS rides
            FROM history
            WHERE driver_id = $1
              AND date >= (DATE_TRUNC('month', CURRENT_DATE) - INTERVAL '5 months')::DATE
            GROUP BY TO_CHAR(date, 'YYYY-MM')
            ORDER BY month ASC
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    /// Top 5 de rutas por frecuencia
    pub async fn top_routes(&self, driver_id: Uuid) -> Result<Vec<RouteFrequencyRow>, AppError> {
        let rows = sqlx::query_as::<_, RouteFrequencyRow>(
            r#"
            SELECT source_name, destination_name, COUNT(*) AS rides
            FROM history
            WHERE driver_id = $1
            GROUP BY source_name, destination_name
            ORDER BY rides DESC, source_name ASC
            LIMIT 5
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }
}
