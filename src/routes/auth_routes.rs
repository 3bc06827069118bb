//! Rutas de autenticación y perfil
//!
//! Signup y login conservan el contrato legacy: HTTP 200 con flag
//! success también cuando la operación falla. El error tipado existe
//! internamente; aquí, en el borde, se decide enmascararlo.

use axum::{
    extract::State,
    routing::{post, put},
    Json, Router,
};
use tracing::warn;

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    ApiResponse, AuthResponse, LoginRequest, ProfileResponse, SignupRequest,
    UpdateProfileRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/update-profile", put(update_profile))
}

/// Mensaje para el cuerpo legacy. Los fallos de almacenamiento no se
/// exponen al cliente: colapsan en "Database error.".
fn legacy_message(error: &AppError) -> String {
    match error {
        AppError::BadRequest(msg)
        | AppError::Conflict(msg)
        | AppError::NotFound(msg)
        | AppError::Unauthorized(msg) => msg.clone(),
        _ => "Database error.".to_string(),
    }
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Json<AuthResponse> {
    let controller = AuthController::new(state.pool.clone(), (&state.config).into());

    match controller.signup(request).await {
        Ok(response) => Json(response),
        Err(error) => {
            warn!("signup failed: {}", error);
            Json(AuthResponse::error(&legacy_message(&error)))
        }
    }
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Json<AuthResponse> {
    let controller = AuthController::new(state.pool.clone(), (&state.config).into());

    match controller.login(request).await {
        Ok(response) => Json(response),
        Err(error) => {
            warn!("login failed: {}", error);
            Json(AuthResponse::error(&legacy_message(&error)))
        }
    }
}

async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), (&state.config).into());
    let profile = controller.update_profile(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        profile,
        "Profile updated.".to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_message_passes_client_errors_through() {
        let error = AppError::Conflict("Email already registered.".to_string());
        assert_eq!(legacy_message(&error), "Email already registered.");

        let error = AppError::NotFound("User not found.".to_string());
        assert_eq!(legacy_message(&error), "User not found.");
    }

    #[test]
    fn test_legacy_message_masks_storage_faults() {
        let error = AppError::Internal("pool exhausted".to_string());
        assert_eq!(legacy_message(&error), "Database error.");
    }
}
