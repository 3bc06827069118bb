//! Schema de la base de datos
//!
//! DDL de las tablas del sistema. Se ejecuta al arrancar el servidor
//! con CREATE TABLE IF NOT EXISTS, por lo que es idempotente.

use anyhow::Result;
use sqlx::PgPool;

/// SQL para crear todas las tablas del sistema
pub const SCHEMA: &str = r#"
-- Usuarios (conductores y pasajeros)
CREATE TABLE IF NOT EXISTS users (
    user_id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    user_type TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Viajes ofrecidos por conductores
CREATE TABLE IF NOT EXISTS rides (
    ride_id UUID PRIMARY KEY,
    driver_id UUID NOT NULL REFERENCES users(user_id),
    start_lat DOUBLE PRECISION NOT NULL,
    start_lng DOUBLE PRECISION NOT NULL,
    end_lat DOUBLE PRECISION NOT NULL,
    end_lng DOUBLE PRECISION NOT NULL,
    route_polyline TEXT NOT NULL,
    source_name TEXT NOT NULL,
    destination_name TEXT NOT NULL,
    date DATE NOT NULL,
    time TIME NOT NULL,
    available_seats INTEGER NOT NULL,
    price_per_seat NUMERIC(10, 2) NOT NULL,
    vehicle_type TEXT,
    vehicle_number TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_rides_driver_id ON rides(driver_id);
CREATE INDEX IF NOT EXISTS idx_rides_destination_name ON rides(destination_name);

-- Puntos de embarque de pasajeros
CREATE TABLE IF NOT EXISTS ride_boarding_points (
    boarding_id UUID PRIMARY KEY,
    ride_id UUID NOT NULL REFERENCES rides(ride_id) ON DELETE CASCADE,
    passenger_id UUID NOT NULL REFERENCES users(user_id),
    boarding_lat DOUBLE PRECISION NOT NULL,
    boarding_lng DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_boarding_points_ride_id ON ride_boarding_points(ride_id);
CREATE INDEX IF NOT EXISTS idx_boarding_points_passenger_id ON ride_boarding_points(passenger_id);

-- Ultima posicion conocida del conductor, una fila por viaje
CREATE TABLE IF NOT EXISTS ride_locations (
    ride_id UUID PRIMARY KEY REFERENCES rides(ride_id) ON DELETE CASCADE,
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Archivo inmutable de viajes completados, una fila por punto de embarque
CREATE TABLE IF NOT EXISTS history (
    history_id UUID PRIMARY KEY,
    ride_id UUID NOT NULL,
    driver_id UUID NOT NULL,
    passenger_id UUID NOT NULL,
    source_name TEXT NOT NULL,
    destination_name TEXT NOT NULL,
    price_per_seat NUMERIC(10, 2) NOT NULL,
    date DATE NOT NULL,
    time TIME NOT NULL,
    vehicle_type TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_history_driver_id ON history(driver_id);
CREATE INDEX IF NOT EXISTS idx_history_passenger_id ON history(passenger_id);
"#;

/// Aplicar el schema al arrancar
pub async fn apply_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_contains_all_tables() {
        for table in [
            "users",
            "rides",
            "ride_boarding_points",
            "ride_locations",
            "history",
        ] {
            assert!(
                SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "missing table {}",
                table
            );
        }
    }

    #[test]
    fn test_boarding_points_cascade_on_ride_delete() {
        assert!(SCHEMA.contains("REFERENCES rides(ride_id) ON DELETE CASCADE"));
    }

    #[test]
    fn test_ride_locations_single_row_per_ride() {
        // ride_id es primary key: el upsert mantiene una sola fila por viaje
        assert!(SCHEMA.contains("ride_id UUID PRIMARY KEY REFERENCES rides(ride_id)"));
    }
}
