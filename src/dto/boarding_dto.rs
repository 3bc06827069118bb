//! DTOs de puntos de embarque

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Los cuatro campos son obligatorios; se validan en el controller para
// devolver el 400 legacy "Missing required fields." en lugar de un
// rechazo del deserializador.
#[derive(Debug, Deserialize)]
pub struct CreateBoardingPointRequest {
    pub ride_id: Option<Uuid>,
    pub passenger_id: Option<Uuid>,
    pub boarding_lat: Option<f64>,
    pub boarding_lng: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreateBoardingPointResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardingPointsParams {
    pub ride_id: Option<Uuid>,
}

// Punto de embarque con los datos de contacto del pasajero
#[derive(Debug, Serialize)]
pub struct BoardingPointResponse {
    pub boarding_id: Uuid,
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub boarding_lat: f64,
    pub boarding_lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct MyBoardedRidesParams {
    pub passenger_id: Option<Uuid>,
}

// Viaje en el que el pasajero tiene un punto de embarque
#[derive(Debug, Serialize)]
pub struct BoardedRideResponse {
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
