//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Paths reachable without a token
///
/// Browsing shops and their service menus is open to anonymous visitors;
/// booking is not.
fn is_public_api_route(method: &http::Method, path: &str) -> bool {
    path == "/api/auth/login"
        || path == "/api/auth/register"
        || path == "/api/health"
        || path.starts_with("/api/public/")
        || (method == http::Method::GET && path.starts_with("/api/services"))
}

/// Auth middleware, requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into request extensions.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // CORS preflight skips auth
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to their own 404
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(req.method(), &path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = path);
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {}", e)))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!("WARN", "auth_failed", error = format!("{}", e), uri = path);

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_route_table() {
        let get = http::Method::GET;
        let post = http::Method::POST;

        assert!(is_public_api_route(&post, "/api/auth/login"));
        assert!(is_public_api_route(&post, "/api/auth/register"));
        assert!(is_public_api_route(&get, "/api/health"));
        assert!(is_public_api_route(&get, "/api/public/barbershops"));
        assert!(is_public_api_route(&get, "/api/services/barbershop:x"));

        assert!(!is_public_api_route(&post, "/api/services"));
        assert!(!is_public_api_route(&get, "/api/auth/me"));
        assert!(!is_public_api_route(&get, "/api/appointments"));
    }
}
