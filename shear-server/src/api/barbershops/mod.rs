//! Barbershop API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/barbershops | GET | any authenticated, visibility-filtered |
//! | /api/barbershops | POST | owner |
//! | /api/barbershops/{id} | PUT, DELETE | primary owner of the shop |
//! | /api/public/barbershops | GET | none |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/barbershops", routes())
        .route("/api/public/barbershops", get(handler::public_list))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
