//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use validator::Validate;

use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::{Role, UserInfo};

use crate::core::ServerState;
use crate::db::models::User;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Self-service registration
///
/// `customer`, `capster` and `owner` accounts can be self-registered.
/// A fresh capster holds no staff link until a shop hires them.
/// `admin` and `co-owner` are granted through the staff endpoint by
/// someone already authorized on the shop.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate()?;

    if !matches!(req.role, Role::Customer | Role::Capster | Role::Owner) {
        return Err(AppError::validation(format!(
            "Role '{}' cannot be self-registered",
            req.role
        )));
    }

    let hash = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = state
        .users()
        .create(req.name, req.email, hash, req.role)
        .await?;

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    let token = state
        .jwt_service()
        .generate_token(&user_id, &user.name, &user.email, user.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "user_registered", user_id = user_id, role = user.role.to_string());

    Ok(Json(LoginResponse {
        token,
        user: user.to_info(),
    }))
}

/// Login handler
///
/// The fixed delay and the unified error message keep response timing
/// and content identical for unknown emails and wrong passwords.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state.users().find_by_email(&req.email).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                security_log!("WARN", "login_failed", email = req.email.clone(), reason = "invalid_credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            security_log!("WARN", "login_failed", email = req.email.clone(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    let token = state
        .jwt_service()
        .generate_token(&user_id, &user.name, &user.email, user.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_success", user_id = user_id);

    Ok(Json(LoginResponse {
        token,
        user: user.to_info(),
    }))
}

/// Current user info, read fresh from the database
///
/// The token carries the role at issue time; this endpoint reflects any
/// change made since.
pub async fn me(
    State(state): State<ServerState>,
    user: crate::auth::CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let record = state
        .users()
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(record.to_info()))
}
