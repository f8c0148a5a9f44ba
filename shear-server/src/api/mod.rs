//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - register / login / current user
//! - [`barbershops`] - shop CRUD and the public listing
//! - [`staff`] - staff management
//! - [`services`] - service menu
//! - [`appointments`] - booking and lifecycle transitions

pub mod appointments;
pub mod auth;
pub mod barbershops;
pub mod health;
pub mod services;
pub mod staff;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(barbershops::router())
        .merge(staff::router())
        .merge(services::router())
        .merge(appointments::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
