use crate::dto::location_dto::{LocationResponse, UpdateLocationRequest};
use crate::repositories::location_repository::RideLocationRepository;
use crate::repositories::ride_repository::RideRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LocationController {
    locations: RideLocationRepository,
    rides: RideRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            locations: RideLocationRepository::new(pool.clone()),
            rides: RideRepository::new(pool),
        }
    }

    pub async fn update(
        &self,
        request: UpdateLocationRequest,
    ) -> Result<LocationResponse, AppError> {
        if validation::validate_coordinates(request.latitude, request.longitude).is_err() {
            return Err(AppError::BadRequest("Invalid coordinates.".to_string()));
        }

        // 404 explícito en lugar de un fallo de foreign key
        self.rides
            .find_by_id(request.ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        let location = self
            .locations
            .upsert(request.ride_id, request.latitude, request.longitude)
            .await?;

        Ok(LocationResponse::from(location))
    }

    pub async fn latest(&self, ride_id: Option<Uuid>) -> Result<LocationResponse, AppError> {
        let ride_id =
            ride_id.ok_or_else(|| AppError::BadRequest("ride_id required.".to_string()))?;

        let location = self
            .locations
            .find_by_ride(ride_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No location reported for this ride yet".to_string())
            })?;

        Ok(LocationResponse::from(location))
    }
}
