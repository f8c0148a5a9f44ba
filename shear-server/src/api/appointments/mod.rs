//! Appointment API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/appointments | GET | any authenticated, role-filtered |
//! | /api/appointments | POST | customer |
//! | /api/appointments/{id}/status | PATCH | staff of the shop |

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/appointments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/status", patch(handler::update_status))
}
