use crate::models::{BoardingPoint, Ride};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

// Fila de búsqueda: asientos ya descontados y nombre del conductor
#[derive(Debug, sqlx::FromRow)]
pub struct RideSearchRow {
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
    pub seats_left: i32,
    pub price_per_seat: sqlx::types::Decimal,
}

pub struct RideRepository {
    pool: PgPool,
}

impl RideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, ride: &Ride) -> Result<Ride, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                ride_id, driver_id, start_lat, start_lng, end_lat, end_lng,
                route_polyline, source_name, destination_name, date, time,
                available_seats, price_per_seat, vehicle_type, vehicle_number, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(ride.ride_id)
        .bind(ride.driver_id)
        .bind(ride.start_lat)
        .bind(ride.start_lng)
        .bind(ride.end_lat)
        .bind(ride.end_lng)
        .bind(&ride.route_polyline)
        .bind(&ride.source_name)
        .bind(&ride.destination_name)
        .bind(ride.date)
        .bind(ride.time)
        .bind(ride.available_seats)
        .bind(ride.price_per_seat)
        .bind(&ride.vehicle_type)
        .bind(&ride.vehicle_number)
        .bind(ride.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result)
    }

    pub async fn find_by_id(&self, ride_id: Uuid) -> Result<Option<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE ride_id = $1")
            .bind(ride_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result)
    }

    /// Búsqueda por destino (substring, case-insensitive). Descuenta los
    /// puntos de embarque registrados y filtra los viajes sin asientos.
    pub async fn search_by_destination(
        &self,
        destination: &str,
    ) -> Result<Vec<RideSearchRow>, AppError> {
        let pattern = format!("%{}%", destination);

        let rows = sqlx::query_as::<_, RideSearchRow>(
            r#"
            SELECT r.ride_id, r.driver_id, u.name AS driver_name,
                   r.source_name, r.destination_name,
                   r.start_lat, r.start_lng, r.end_lat, r.end_lng,
                   r.date, r.time,
                   (r.available_seats - COUNT(bp.boarding_id))::INT AS seats_left,
                   r.price_per_seat
            FROM rides r
            JOIN users u ON u.user_id = r.driver_id
            LEFT JOIN ride_boarding_points bp ON bp.ride_id = r.ride_id
            WHERE r.destination_name ILIKE $1
            GROUP BY r.ride_id, u.name
            HAVING r.available_seats - COUNT(bp.boarding_id) > 0
            ORDER BY r.date ASC, r.time ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    pub async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Ride>, AppError> {
        let rides = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE driver_id = $1 ORDER BY created_at DESC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rides)
    }

    pub async fn find_by_driver_email(&self, email: &str) -> Result<Vec<Ride>, AppError> {
        let rides = sqlx::query_as::<_, Ride>(
            r#"
            SELECT r.* FROM rides r
            JOIN users u ON r.driver_id = u.user_id
            WHERE u.email = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rides)
    }

    /// Cerrar un viaje: archiva un registro de historial por cada punto de
    /// embarque, borra los puntos y borra el viaje, todo dentro de una
    /// misma transacción. Devuelve None si el viaje no existe y el número
    /// de registros archivados si existe.
    pub async fn complete(&self, ride_id: Uuid) -> Result<Option<i64>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE ride_id = $1")
            .bind(ride_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let ride = match ride {
            Some(ride) => ride,
            None => return Ok(None),
        };

        let boarding_points = sqlx::query_as::<_, BoardingPoint>(
            "SELECT * FROM ride_boarding_points WHERE ride_id = $1",
        )
        .bind(ride_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        for bp in &boarding_points {
            sqlx::query(
                r#"
                INSERT INTO history (
                    history_id, ride_id, driver_id, passenger_id,
                    source_name, destination_name, price_per_seat,
                    date, time, vehicle_type, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(ride.ride_id)
            .bind(ride.driver_id)
            .bind(bp.passenger_id)
            .bind(&ride.source_name)
            .bind(&ride.destination_name)
            .bind(ride.price_per_seat)
            .bind(ride.date)
            .bind(ride.time)
            .bind(&ride.vehicle_type)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        sqlx::query("DELETE FROM ride_boarding_points WHERE ride_id = $1")
            .bind(ride_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM rides WHERE ride_id = $1")
            .bind(ride_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(Some(boarding_points.len() as i64))
    }
}
