//! Repositorios
//!
//! Cada repositorio es dueño del SQL parametrizado de su tabla.

pub mod boarding_point_repository;
pub mod history_repository;
pub mod location_repository;
pub mod ride_repository;
pub mod user_repository;
