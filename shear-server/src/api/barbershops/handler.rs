//! Barbershop API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{BarbershopCreate, BarbershopResponse, BarbershopUpdate, PublicBarbershop};

use crate::access::{Permission, guard, resolve_shop_ids};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, parse_record_id};

/// List the caller's visible shops
///
/// Owners see every shop they own plus any shop they staff at; staff see
/// their linked shop; customers get an empty list.
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<BarbershopResponse>>> {
    let visible = resolve_shop_ids(&state.barbershops(), &state.staff(), &user.id, user.role).await?;
    let shops = state.barbershops().find_by_ids(&visible).await?;
    Ok(Json(shops.iter().map(|s| s.to_response()).collect()))
}

/// Create a shop owned by the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BarbershopCreate>,
) -> AppResult<Json<BarbershopResponse>> {
    if !Permission::ManageShops.is_allowed(user.role) {
        return Err(AppError::forbidden("Only owners can create barbershops"));
    }
    payload.validate()?;

    let shop = state.barbershops().create(&user.id, payload).await?;
    Ok(Json(shop.to_response()))
}

/// Update a shop (primary owner only)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<BarbershopUpdate>,
) -> AppResult<Json<BarbershopResponse>> {
    payload.validate()?;
    let shop_id = parse_record_id(&id, "barbershop")?;

    let shop = state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| AppError::not_found(format!("Barbershop {id} not found")))?;
    guard::ensure_manage_shop(&shop, &user)?;

    let updated = state.barbershops().update(&shop_id, payload).await?;
    Ok(Json(updated.to_response()))
}

/// Soft-delete a shop (primary owner only)
///
/// Removes the shop from listings and drops its staff links; appointment
/// history survives. The name becomes available again.
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let shop_id = parse_record_id(&id, "barbershop")?;

    let shop = state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| AppError::not_found(format!("Barbershop {id} not found")))?;
    guard::ensure_manage_shop(&shop, &user)?;

    let deleted = state.barbershops().soft_delete(&shop_id).await?;
    Ok(Json(deleted))
}

#[derive(Debug, Deserialize)]
pub struct PublicListQuery {
    /// Case-insensitive substring match on the shop name
    pub search: Option<String>,
}

/// Public browse/search, no authentication
///
/// Each entry carries the shop's service menu and bookable staff names,
/// enough to pick a slot before signing up.
pub async fn public_list(
    State(state): State<ServerState>,
    Query(query): Query<PublicListQuery>,
) -> AppResult<Json<Vec<PublicBarbershop>>> {
    let shops = state.barbershops().public_search(query.search).await?;

    let mut entries = Vec::with_capacity(shops.len());
    for shop in shops {
        let Some(shop_id) = shop.id.clone() else {
            continue;
        };
        let services = state.services().find_by_shop(&shop_id).await?;
        let staff_names = state.staff().display_names_for_shop(&shop_id).await?;

        entries.push(PublicBarbershop {
            id: shop_id.to_string(),
            name: shop.name,
            address: shop.address,
            services: services.iter().map(|s| s.to_response()).collect(),
            staff_names,
        });
    }

    Ok(Json(entries))
}
