use crate::models::RideLocation;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RideLocationRepository {
    pool: PgPool,
}

impl RideLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert con clave ride_id: una sola sentencia, la posición anterior
    /// se sobreescribe y el timestamp se refresca.
    pub async fn upsert(
        &self,
        ride_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<RideLocation, AppError> {
        let result = sqlx::query_as::<_, RideLocation>(
            r#"
            INSERT INTO ride_locations (ride_id, latitude, longitude, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (ride_id) DO UPDATE
            SET latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(ride_id)
        .bind(latitude)
        .bind(longitude)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result)
    }

    pub async fn find_by_ride(&self, ride_id: Uuid) -> Result<Option<RideLocation>, AppError> {
        let result =
            sqlx::query_as::<_, RideLocation>("SELECT * FROM ride_locations WHERE ride_id = $1")
                .bind(ride_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(result)
    }
}
