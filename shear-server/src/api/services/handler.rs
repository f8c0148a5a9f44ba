//! Service API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use validator::Validate;

use shared::models::{ServiceCreate, ServiceResponse};

use crate::access::guard;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, parse_record_id};

/// A shop's service menu, public
pub async fn list_by_shop(
    State(state): State<ServerState>,
    Path(shop_id): Path<String>,
) -> AppResult<Json<Vec<ServiceResponse>>> {
    let shop_id = parse_record_id(&shop_id, "barbershop")?;
    state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| AppError::not_found(format!("Barbershop {shop_id} not found")))?;

    let services = state.services().find_by_shop(&shop_id).await?;
    Ok(Json(services.iter().map(|s| s.to_response()).collect()))
}

/// Add a service to a shop's menu
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ServiceCreate>,
) -> AppResult<Json<ServiceResponse>> {
    payload.validate()?;
    if payload.price < Decimal::ZERO {
        return Err(AppError::validation("Price must not be negative"));
    }

    let shop_id = parse_record_id(&payload.barbershop_id, "barbershop")?;
    let shop = state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| {
            AppError::not_found(format!("Barbershop {} not found", payload.barbershop_id))
        })?;
    guard::ensure_manage_service(&shop, &user, &state.staff()).await?;

    let service = state
        .services()
        .create(&shop_id, payload.name, payload.price, payload.duration_minutes)
        .await?;
    Ok(Json(service.to_response()))
}
