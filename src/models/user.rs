//! Modelo de User
//!
//! Este módulo contiene el struct User que mapea exactamente a la tabla
//! users del schema. La contraseña se guarda siempre como hash bcrypt,
//! nunca en claro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    /// 'driver' o 'passenger'. Nullable: solo se consulta cuando la
    /// política DRIVER_ROLE_ENFORCED está activa.
    pub user_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        password_hash: String,
        user_type: Option<String>,
    ) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            name,
            email,
            phone,
            password_hash,
            user_type,
            created_at: Utc::now(),
        }
    }

    pub fn is_driver(&self) -> bool {
        self.user_type.as_deref() == Some("driver")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_driver() {
        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "5551234567".to_string(),
            "$2b$12$hash".to_string(),
            Some("driver".to_string()),
        );
        assert!(user.is_driver());

        user.user_type = None;
        assert!(!user.is_driver());
    }
}
