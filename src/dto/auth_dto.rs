//! DTOs de autenticación y perfil
//!
//! Las respuestas de signup/login conservan la forma legacy que esperan
//! los clientes: HTTP 200 con flag success, también en caso de fallo.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

// Request de registro. Los campos son opcionales para poder reproducir el
// mensaje legacy "All fields are required." en lugar de un rechazo del
// deserializador.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Respuesta legacy de signup/login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    pub fn success(user: &User, token: Option<String>) -> Self {
        Self {
            success: true,
            user_id: Some(user.user_id),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            phone: Some(user.phone.clone()),
            token,
            message: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            user_id: None,
            name: None,
            email: None,
            phone: None,
            token: None,
            message: Some(message.to_string()),
        }
    }
}

// Request para actualizar el perfil
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

// Perfil público (sin hash)
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_shape_has_no_profile_fields() {
        let body = serde_json::to_value(AuthResponse::error("User not found.")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User not found.");
        assert!(body.get("user_id").is_none());
        assert!(body.get("token").is_none());
    }

    #[test]
    fn test_auth_success_shape_carries_profile() {
        let user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "5551234567".to_string(),
            "$2b$12$hash".to_string(),
            None,
        );
        let body = serde_json::to_value(AuthResponse::success(&user, None)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["email"], "ana@example.com");
        // el hash nunca sale en la respuesta
        assert!(body.get("password_hash").is_none());
    }
}
