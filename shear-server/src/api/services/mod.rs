//! Service API Module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/services/{shop_id} | GET | none (public menu) |
//! | /api/services | POST | shop owner, or linked co-owner |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/services", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{shop_id}", get(handler::list_by_shop))
}
