use crate::dto::boarding_dto::{
    BoardedRideResponse, BoardingPointResponse, CreateBoardingPointRequest,
    CreateBoardingPointResponse,
};
use crate::repositories::boarding_point_repository::BoardingPointRepository;
use crate::repositories::ride_repository::RideRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use sqlx::PgPool;
use uuid::Uuid;

pub struct BoardingController {
    boarding_points: BoardingPointRepository,
    rides: RideRepository,
}

impl BoardingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            boarding_points: BoardingPointRepository::new(pool.clone()),
            rides: RideRepository::new(pool),
        }
    }

    pub async fn add(
        &self,
        request: CreateBoardingPointRequest,
    ) -> Result<CreateBoardingPointResponse, AppError> {
        // Los cuatro campos son obligatorios
        let (ride_id, passenger_id, boarding_lat, boarding_lng) = match (
            request.ride_id,
            request.passenger_id,
            request.boarding_lat,
            request.boarding_lng,
        ) {
            (Some(ride_id), Some(passenger_id), Some(lat), Some(lng)) => {
                (ride_id, passenger_id, lat, lng)
            }
            _ => return Err(AppError::BadRequest("Missing required fields.".to_string())),
        };

        if validation::validate_coordinates(boarding_lat, boarding_lng).is_err() {
            return Err(AppError::BadRequest(
                "Invalid boarding coordinates.".to_string(),
            ));
        }

        let ride = self
            .rides
            .find_by_id(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        // No aceptar más pasajeros que asientos publicados
        let joined = self.boarding_points.count_for_ride(ride_id).await?;
        if joined >= ride.available_seats as i64 {
            return Err(AppError::Conflict("Ride is full.".to_string()));
        }

        self.boarding_points
            .create(ride_id, passenger_id, boarding_lat, boarding_lng)
            .await?;

        Ok(CreateBoardingPointResponse {
            message: "Boarding point saved.".to_string(),
        })
    }

    pub async fn list(
        &self,
        ride_id: Option<Uuid>,
    ) -> Result<Vec<BoardingPointResponse>, AppError> {
        let ride_id =
            ride_id.ok_or_else(|| AppError::BadRequest("ride_id required.".to_string()))?;

        let rows = self.boarding_points.list_for_ride(ride_id).await?;

        let response = rows
            .into_iter()
            .map(|row| BoardingPointResponse {
                boarding_id: row.boarding_id,
                ride_id: row.ride_id,
                passenger_id: row.passenger_id,
                passenger_name: row.passenger_name,
                passenger_phone: row.passenger_phone,
                boarding_lat: row.boarding_lat,
                boarding_lng: row.boarding_lng,
            })
            .collect();

        Ok(response)
    }

    pub async fn my_boarded(
        &self,
        passenger_id: Option<Uuid>,
    ) -> Result<Vec<BoardedRideResponse>, AppError> {
        let passenger_id = match passenger_id {
            Some(passenger_id) => passenger_id,
            None => return Ok(Vec::new()),
        };

        let rows = self.boarding_points.find_boarded_rides(passenger_id).await?;

        let response = rows
            .into_iter()
            .map(|row| BoardedRideResponse {
                ride_id: row.ride_id,
                driver_name: row.driver_name,
                source_name: row.source_name,
                destination_name: row.destination_name,
                date: row.date,
                time: row.time,
                route_polyline: row.route_polyline,
                start_lat: row.start_lat,
                start_lng: row.start_lng,
                end_lat: row.end_lat,
                end_lng: row.end_lng,
                boarding_lat: row.boarding_lat,
                boarding_lng: row.boarding_lng,
            })
            .collect();

        Ok(response)
    }
}
