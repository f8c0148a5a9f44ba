//! Staff API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/staff | GET | owner / co-owner / admin |
//! | /api/staff | POST | shop owner, or linked admin / co-owner |
//! | /api/staff/{id} | PUT | shop owner, or linked admin / co-owner |
//! | /api/staff/{id} | DELETE | shop owner only |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
