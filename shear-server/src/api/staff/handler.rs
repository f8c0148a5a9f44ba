//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::{Role, StaffCreate, StaffResponse, StaffUpdate};

use crate::access::{Permission, guard, resolve_shop_ids};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::User;
use crate::utils::{AppError, AppResult, parse_record_id};

/// Roles assignable through staff management
///
/// `owner` is earned by creating a shop, `customer` by registering;
/// neither is handed out here.
fn ensure_assignable_role(role: Role) -> AppResult<()> {
    if role.is_staff() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Role '{role}' cannot be assigned to staff"
        )))
    }
}

/// List staff across the caller's visible shops
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<StaffResponse>>> {
    if !Permission::ManageStaff.is_allowed(user.role) {
        return Err(AppError::forbidden("Not permitted to view staff"));
    }

    let visible = resolve_shop_ids(&state.barbershops(), &state.staff(), &user.id, user.role).await?;
    let members = state.staff().find_by_shops(&visible).await?;
    Ok(Json(members.iter().map(|m| m.to_response()).collect()))
}

/// Hire: create the account and its staff link in one step
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffResponse>> {
    payload.validate()?;
    ensure_assignable_role(payload.role)?;

    let shop_id = parse_record_id(&payload.barbershop_id, "barbershop")?;
    let shop = state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| {
            AppError::not_found(format!("Barbershop {} not found", payload.barbershop_id))
        })?;
    guard::ensure_manage_staff(&shop, &user, &state.staff()).await?;

    let hash = User::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let detail = state
        .staff()
        .create_with_user(
            payload.name,
            payload.email,
            hash,
            payload.role,
            &shop_id,
            payload.specialization,
        )
        .await?;

    Ok(Json(detail.to_response()))
}

/// Update a staff member's account and link
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffResponse>> {
    payload.validate()?;
    if let Some(role) = payload.role {
        ensure_assignable_role(role)?;
    }

    let staff_id = parse_record_id(&id, "staff")?;
    let existing = state
        .staff()
        .find_detail_by_id(&staff_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {id} not found")))?;
    guard::ensure_manage_staff(&existing.barbershop, &user, &state.staff()).await?;

    let detail = state.staff().update(&staff_id, payload).await?;
    Ok(Json(detail.to_response()))
}

/// Fire: remove the staff link (shop owner only)
///
/// The user account survives; only the shop membership goes.
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let staff_id = parse_record_id(&id, "staff")?;
    let existing = state
        .staff()
        .find_detail_by_id(&staff_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {id} not found")))?;
    guard::ensure_remove_staff(&existing.barbershop, &user)?;

    let removed = state.staff().delete(&staff_id).await?;
    Ok(Json(removed))
}
