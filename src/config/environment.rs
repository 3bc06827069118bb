//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub mapbox_token: Option<String>,
    /// Política de elegibilidad: cuando está activa, solo los usuarios con
    /// user_type = 'driver' pueden publicar viajes.
    pub driver_role_enforced: bool,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            mapbox_token: env::var("MAPBOX_TOKEN").ok(),
            driver_role_enforced: env::var("DRIVER_ROLE_ENFORCED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 86400,
            mapbox_token: None,
            driver_role_enforced: false,
        }
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(test_config().server_addr(), "0.0.0.0:3000");
    }
}
