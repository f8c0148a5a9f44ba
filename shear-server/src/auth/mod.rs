//! Authentication module
//!
//! JWT authentication and the middleware wiring it into the router:
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - authenticated user context
//! - [`require_auth`] - auth middleware with a public-route allowlist

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
