//! Appointment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{AppointmentCreate, AppointmentResponse, AppointmentStatusUpdate, Role};

use crate::access::{Permission, resolve_shop_ids};
use crate::auth::CurrentUser;
use crate::booking;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult, parse_record_id};

/// List appointments for the caller
///
/// Customers see their own bookings; owners and staff see every
/// appointment of their visible shops.
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AppointmentResponse>>> {
    let appointments = if user.role == Role::Customer {
        state.appointments().find_detail_by_customer(&user.id).await?
    } else {
        let visible =
            resolve_shop_ids(&state.barbershops(), &state.staff(), &user.id, user.role).await?;
        state.appointments().find_detail_by_shops(&visible).await?
    };

    Ok(Json(appointments.iter().map(|a| a.to_response()).collect()))
}

/// Book an appointment (customers only)
///
/// The chosen service and staff member must both belong to the chosen
/// shop. Overlapping bookings are accepted; shops resolve those at the
/// counter.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AppointmentCreate>,
) -> AppResult<Json<AppointmentResponse>> {
    if !Permission::Book.is_allowed(user.role) {
        return Err(AppError::forbidden("Only customers can book appointments"));
    }

    let shop_id = parse_record_id(&payload.barbershop_id, "barbershop")?;
    let service_id = parse_record_id(&payload.service_id, "service")?;
    let staff_id = parse_record_id(&payload.staff_id, "staff")?;

    let shop = state
        .barbershops()
        .find_by_id(&shop_id)
        .await?
        .filter(|s| !s.is_deleted())
        .ok_or_else(|| {
            AppError::not_found(format!("Barbershop {} not found", payload.barbershop_id))
        })?;

    let service = state
        .services()
        .find_by_id(&service_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service {} not found", payload.service_id)))?;
    if Some(&service.barbershop) != shop.id.as_ref() {
        return Err(AppError::invalid("Service does not belong to this barbershop"));
    }

    let staff = state
        .staff()
        .find_by_id(&staff_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {} not found", payload.staff_id)))?;
    if Some(&staff.barbershop) != shop.id.as_ref() {
        return Err(AppError::invalid("Staff member does not work at this barbershop"));
    }

    let appointment = state
        .appointments()
        .create(
            &shop_id,
            &service_id,
            &staff_id,
            &user.id,
            payload.scheduled_at.timestamp(),
        )
        .await?;

    security_log!(
        "INFO",
        "appointment_booked",
        customer = user.id.to_string(),
        shop = shop.name
    );

    Ok(Json(appointment.to_response()))
}

/// Move an appointment through its lifecycle
///
/// Staff of the shop only; customers never transition an appointment,
/// not even their own. Illegal transitions (including writing the
/// current status again) are rejected.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<AppointmentStatusUpdate>,
) -> AppResult<Json<AppointmentResponse>> {
    let appt_id = parse_record_id(&id, "appointment")?;

    let appointment = state
        .appointments()
        .find_by_id(&appt_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Appointment {id} not found")))?;

    if user.role == Role::Customer {
        return Err(AppError::forbidden("Customers cannot change appointment status"));
    }

    let visible =
        resolve_shop_ids(&state.barbershops(), &state.staff(), &user.id, user.role).await?;
    if !visible.contains(&appointment.barbershop) {
        security_log!(
            "WARN",
            "appointment_transition_denied",
            user_id = user.id.to_string(),
            appointment = id.clone()
        );
        return Err(AppError::forbidden("Not permitted for this barbershop"));
    }

    booking::ensure_transition(appointment.status, payload.status)
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = state
        .appointments()
        .update_status(&appt_id, payload.status)
        .await?;
    Ok(Json(updated.to_response()))
}
