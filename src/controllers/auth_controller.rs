use crate::dto::auth_dto::{
    AuthResponse, LoginRequest, ProfileResponse, SignupRequest, UpdateProfileRequest,
};
use crate::models::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        // Los cuatro campos son obligatorios (forma legacy del mensaje)
        let (name, email, phone, password) = match (
            request.name,
            request.email,
            request.phone,
            request.password,
        ) {
            (Some(name), Some(email), Some(phone), Some(password))
                if !name.trim().is_empty()
                    && !email.trim().is_empty()
                    && !phone.trim().is_empty()
                    && !password.is_empty() =>
            {
                (name, email, phone, password)
            }
            _ => return Err(AppError::BadRequest("All fields are required.".to_string())),
        };

        if validation::validate_email(&email).is_err() {
            return Err(AppError::BadRequest("Invalid email format.".to_string()));
        }

        if validation::validate_phone(&phone).is_err() {
            return Err(AppError::BadRequest("Invalid phone number.".to_string()));
        }

        if let Some(ref user_type) = request.user_type {
            if user_type != "driver" && user_type != "passenger" {
                return Err(AppError::BadRequest(
                    "user_type must be 'driver' or 'passenger'.".to_string(),
                ));
            }
        }

        // El índice único sobre email respalda esta comprobación
        if self.repository.email_exists(&email).await? {
            return Err(AppError::Conflict("Email already registered.".to_string()));
        }

        // Las contraseñas nunca se guardan en claro
        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = User::new(name, email, phone, password_hash, request.user_type);
        let saved_user = self.repository.create(&user).await?;

        Ok(AuthResponse::success(&saved_user, None))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Email and password required.".to_string(),
                ))
            }
        };

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        let valid = verify(&password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Incorrect password.".to_string()));
        }

        let token = generate_token(user.user_id, &user.email, &self.jwt_config)?;

        Ok(AuthResponse::success(&user, Some(token)))
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        if let Some(ref name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::BadRequest("Name cannot be empty.".to_string()));
            }
        }

        if let Some(ref phone) = request.phone {
            if validation::validate_phone(phone).is_err() {
                return Err(AppError::BadRequest("Invalid phone number.".to_string()));
            }
        }

        // Si llega contraseña nueva, se rehashea
        let password_hash = match request.password {
            Some(ref password) if !password.is_empty() => Some(
                hash(password, DEFAULT_COST)
                    .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?,
            ),
            _ => None,
        };

        let user = self
            .repository
            .update_profile(request.user_id, request.name, request.phone, password_hash)
            .await?;

        Ok(ProfileResponse::from(user))
    }
}
