use crate::dto::ride_dto::{
    DeleteRideResponse, OfferRideRequest, OfferRideResponse, RideDetailsResponse,
    RideResponse, RideSearchResponse,
};
use crate::models::Ride;
use crate::repositories::ride_repository::RideRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct RideController {
    rides: RideRepository,
    users: UserRepository,
}

impl RideController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            rides: RideRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn offer(
        &self,
        request: OfferRideRequest,
        driver_role_enforced: bool,
    ) -> Result<OfferRideResponse, AppError> {
        // Validar entrada
        request.validate()?;

        if validation::validate_coordinates(request.start_lat, request.start_lng).is_err()
            || validation::validate_coordinates(request.end_lat, request.end_lng).is_err()
        {
            return Err(AppError::BadRequest("Invalid route coordinates.".to_string()));
        }

        if validation::validate_positive(request.available_seats).is_err() {
            return Err(AppError::BadRequest(
                "available_seats must be greater than zero.".to_string(),
            ));
        }

        if validation::validate_non_negative(request.price_per_seat).is_err() {
            return Err(AppError::BadRequest(
                "price_per_seat cannot be negative.".to_string(),
            ));
        }

        let date = validation::validate_date(&request.date)
            .map_err(|_| AppError::BadRequest("Invalid date, expected YYYY-MM-DD.".to_string()))?;
        let time = validation::validate_time(&request.time)
            .map_err(|_| AppError::BadRequest("Invalid time, expected HH:MM:SS.".to_string()))?;

        let price_per_seat = Decimal::from_f64_retain(request.price_per_seat)
            .ok_or_else(|| AppError::BadRequest("Invalid price value.".to_string()))?;

        // Verificar que el conductor existe
        let driver = self
            .users
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Driver does not exist.".to_string()))?;

        // Política configurable: con DRIVER_ROLE_ENFORCED solo los usuarios
        // con user_type = 'driver' pueden publicar viajes
        if driver_role_enforced && !driver.is_driver() {
            return Err(AppError::Forbidden(
                "Only users registered as drivers can offer rides.".to_string(),
            ));
        }

        let ride = Ride {
            ride_id: Uuid::new_v4(),
            driver_id: driver.user_id,
            start_lat: request.start_lat,
            start_lng: request.start_lng,
            end_lat: request.end_lat,
            end_lng: request.end_lng,
            route_polyline: request.route_polyline,
            source_name: request.source_name,
            destination_name: request.destination_name,
            date,
            time,
            available_seats: request.available_seats,
            price_per_seat,
            vehicle_type: request.vehicle_type,
            vehicle_number: request.vehicle_number,
            created_at: Utc::now(),
        };

        let saved = self.rides.create(&ride).await?;

        Ok(OfferRideResponse {
            message: "Ride details stored successfully.".to_string(),
            ride_id: saved.ride_id,
        })
    }

    pub async fn search(
        &self,
        destination: Option<String>,
    ) -> Result<Vec<RideSearchResponse>, AppError> {
        let destination = destination
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Destination is required".to_string()))?;

        let rows = self.rides.search_by_destination(&destination).await?;

        let response = rows
            .into_iter()
            .map(|row| RideSearchResponse {
                ride_id: row.ride_id,
                driver_id: row.driver_id,
                driver_name: row.driver_name,
                source_name: row.source_name,
                destination_name: row.destination_name,
                start_lat: row.start_lat,
                start_lng: row.start_lng,
                end_lat: row.end_lat,
                end_lng: row.end_lng,
                date: row.date,
                time: row.time,
                available_seats: row.seats_left,
                price_per_seat: row.price_per_seat.to_f64().unwrap_or(0.0),
            })
            .collect();

        Ok(response)
    }

    pub async fn details(&self, ride_id: Uuid) -> Result<RideDetailsResponse, AppError> {
        let ride = self
            .rides
            .find_by_id(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        Ok(RideDetailsResponse {
            start_lat: ride.start_lat,
            start_lng: ride.start_lng,
            end_lat: ride.end_lat,
            end_lng: ride.end_lng,
            route_polyline: ride.route_polyline,
        })
    }

    pub async fn my_offered(
        &self,
        email: Option<String>,
        user_id: Option<Uuid>,
    ) -> Result<Vec<RideResponse>, AppError> {
        let rides = if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.rides.find_by_driver_email(&email).await?
        } else if let Some(user_id) = user_id {
            self.rides.find_by_driver(user_id).await?
        } else {
            Vec::new()
        };

        Ok(rides.into_iter().map(ride_to_response).collect())
    }

    pub async fn delete(&self, ride_id: Uuid) -> Result<DeleteRideResponse, AppError> {
        let archived = self
            .rides
            .complete(ride_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        Ok(DeleteRideResponse {
            message: "Ride deleted.".to_string(),
            archived_records: archived,
        })
    }
}

fn ride_to_response(ride: Ride) -> RideResponse {
    RideResponse {
        ride_id: ride.ride_id,
        driver_id: ride.driver_id,
        start_lat: ride.start_lat,
        start_lng: ride.start_lng,
        end_lat: ride.end_lat,
        end_lng: ride.end_lng,
        route_polyline: ride.route_polyline,
        source_name: ride.source_name,
        destination_name: ride.destination_name,
        date: ride.date,
        time: ride.time,
        available_seats: ride.available_seats,
        price_per_seat: ride.price_per_seat.to_f64().unwrap_or(0.0),
        vehicle_type: ride.vehicle_type,
        vehicle_number: ride.vehicle_number,
        created_at: ride.created_at,
    }
}
