//! Servicios externos

pub mod geocoding_service;
