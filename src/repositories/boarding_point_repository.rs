use crate::models::BoardingPoint;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

// Punto de embarque con datos de contacto del pasajero
#[derive(Debug, sqlx::FromRow)]
pub struct BoardingPointWithPassenger {
    pub boarding_id: Uuid,
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub boarding_lat: f64,
    pub boarding_lng: f64,
}

// Viaje visto desde el pasajero, con su punto de embarque
#[derive(Debug, sqlx::FromRow)]
pub struct BoardedRideRow {
    pub ride_id: Uuid,
    pub driver_name: String,
    pub source_name: String,
    pub destination_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub route_polyline: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub boarding_lat: f64,
    pub boarding_lng: f64,
}

pub struct BoardingPointRepository {
    pool: PgPool,
}

impl BoardingPointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        ride_id: Uuid,
        passenger_id: Uuid,
        boarding_lat: f64,
        boarding_lng: f64,
    ) -> Result<BoardingPoint, AppError> {
        let result = sqlx::query_as::<_, BoardingPoint>(
            r#"
            INSERT INTO ride_boarding_points (
                boarding_id, ride_id, passenger_id, boarding_lat, boarding_lng, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ride_id)
        .bind(passenger_id)
        .bind(boarding_lat)
        .bind(boarding_lng)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result)
    }

    pub async fn list_for_ride(
        &self,
        ride_id: Uuid,
    ) -> Result<Vec<BoardingPointWithPassenger>, AppError> {
        let rows = sqlx::query_as::<_, BoardingPointWithPassenger>(
            r#"
            SELECT bp.boarding_id, bp.ride_id, bp.passenger_id,
                   u.name AS passenger_name, u.phone AS passenger_phone,
                   bp.boarding_lat, bp.boarding_lng
            FROM ride_boarding_points bp
            JOIN users u ON bp.passenger_id = u.user_id
            WHERE bp.ride_id = $1
            ORDER BY bp.created_at ASC
            "#,
        )
        .bind(ride_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    pub async fn count_for_ride(&self, ride_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM ride_boarding_points WHERE ride_id = $1")
                .bind(ride_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(result.0)
    }

    pub async fn find_boarded_rides(
        &self,
        passenger_id: Uuid,
    ) -> Result<Vec<BoardedRideRow>, AppError> {
        let rows = sqlx::query_as::<_, BoardedRideRow>(
            r#"
            SELECT r.ride_id, d.name AS driver_name,
                   r.source_name, r.destination_name, r.date, r.time,
                   r.route_polyline, r.start_lat, r.start_lng, r.end_lat, r.end_lng,
                   bp.boarding_lat, bp.boarding_lng
            FROM ride_boarding_points bp
            JOIN rides r ON bp.ride_id = r.ride_id
            JOIN users d ON r.driver_id = d.user_id
            WHERE bp.passenger_id = $1
            ORDER BY r.date ASC, r.time ASC
            "#,
        )
        .bind(passenger_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }
}
