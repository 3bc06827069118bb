//! Modelos de datos
//!
//! Structs que mapean 1:1 a las tablas del schema.

pub mod boarding_point;
pub mod history;
pub mod ride;
pub mod ride_location;
pub mod user;

pub use boarding_point::BoardingPoint;
pub use history::HistoryRecord;
pub use ride::Ride;
pub use ride_location::RideLocation;
pub use user::User;
