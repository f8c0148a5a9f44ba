//! Authorization guards
//!
//! Ownership and staffing checks for mutating operations. Role alone is
//! never enough: an admin of shop A gets 403 on shop B exactly like a
//! customer would. Authentication failures (401) are the middleware's
//! concern; everything here is an authorization (403) decision.

use shared::models::Role;

use crate::auth::CurrentUser;
use crate::db::models::Barbershop;
use crate::db::repository::StaffRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Shop create/update/delete: the primary owner only
///
/// Co-owners help run a shop but never alter or delete the shop itself.
pub fn ensure_manage_shop(shop: &Barbershop, user: &CurrentUser) -> AppResult<()> {
    if user.role == Role::Owner && shop.owner == user.id {
        return Ok(());
    }

    security_log!(
        "WARN",
        "shop_manage_denied",
        user_id = user.id.to_string(),
        role = user.role.to_string(),
        shop = shop.name.clone()
    );
    Err(AppError::forbidden("Not permitted for this barbershop"))
}

/// Staff create/update on a shop
///
/// Allowed for the shop's primary owner, and for an admin or co-owner
/// whose own staff link points at this shop.
pub async fn ensure_manage_staff(
    shop: &Barbershop,
    user: &CurrentUser,
    staff: &StaffRepository,
) -> AppResult<()> {
    if user.role == Role::Owner && shop.owner == user.id {
        return Ok(());
    }

    if matches!(user.role, Role::Admin | Role::CoOwner)
        && let Some(link) = staff.find_by_user(&user.id).await?
        && Some(&link.barbershop) == shop.id.as_ref()
    {
        return Ok(());
    }

    security_log!(
        "WARN",
        "staff_manage_denied",
        user_id = user.id.to_string(),
        role = user.role.to_string(),
        shop = shop.name.clone()
    );
    Err(AppError::forbidden("Not permitted for this barbershop"))
}

/// Staff removal: the shop's primary owner only
///
/// Stricter than create/update. An admin may hire but never fire.
pub fn ensure_remove_staff(shop: &Barbershop, user: &CurrentUser) -> AppResult<()> {
    if user.role == Role::Owner && shop.owner == user.id {
        return Ok(());
    }

    security_log!(
        "WARN",
        "staff_remove_denied",
        user_id = user.id.to_string(),
        role = user.role.to_string(),
        shop = shop.name.clone()
    );
    Err(AppError::forbidden("Not permitted for this barbershop"))
}

/// Service creation on a shop
///
/// The primary owner, or a co-owner linked to this shop. Admins manage
/// people, not the service menu.
pub async fn ensure_manage_service(
    shop: &Barbershop,
    user: &CurrentUser,
    staff: &StaffRepository,
) -> AppResult<()> {
    if user.role == Role::Owner && shop.owner == user.id {
        return Ok(());
    }

    if user.role == Role::CoOwner
        && let Some(link) = staff.find_by_user(&user.id).await?
        && Some(&link.barbershop) == shop.id.as_ref()
    {
        return Ok(());
    }

    security_log!(
        "WARN",
        "service_manage_denied",
        user_id = user.id.to_string(),
        role = user.role.to_string(),
        shop = shop.name.clone()
    );
    Err(AppError::forbidden("Not permitted for this barbershop"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SubscriptionPlan;

    use crate::db::models::UserId;

    fn shop_owned_by(owner: &UserId) -> Barbershop {
        Barbershop {
            id: Some("barbershop:test".parse().expect("record id")),
            name: "Fade Factory".to_string(),
            address: "1 Main Street".to_string(),
            phone: "0123456789".to_string(),
            plan: SubscriptionPlan::Basic,
            open_time: Some("09:00".to_string()),
            close_time: Some("18:00".to_string()),
            break_start: None,
            break_end: None,
            days_open: vec![],
            owner: owner.clone(),
            deleted_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn user(id: &str, role: Role) -> CurrentUser {
        CurrentUser {
            id: id.parse().expect("record id"),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_primary_owner_manages_shop() {
        let owner = user("user:alice", Role::Owner);
        let shop = shop_owned_by(&owner.id);
        assert!(ensure_manage_shop(&shop, &owner).is_ok());
    }

    #[test]
    fn test_other_owner_cannot_manage_shop() {
        let alice = user("user:alice", Role::Owner);
        let bob = user("user:bob", Role::Owner);
        let shop = shop_owned_by(&alice.id);
        assert!(ensure_manage_shop(&shop, &bob).is_err());
    }

    #[test]
    fn test_customer_cannot_manage_shop() {
        let alice = user("user:alice", Role::Owner);
        let customer = user("user:carol", Role::Customer);
        let shop = shop_owned_by(&alice.id);
        assert!(ensure_manage_shop(&shop, &customer).is_err());
    }

    #[test]
    fn test_only_owner_removes_staff() {
        let alice = user("user:alice", Role::Owner);
        let admin = user("user:dave", Role::Admin);
        let shop = shop_owned_by(&alice.id);
        assert!(ensure_remove_staff(&shop, &alice).is_ok());
        assert!(ensure_remove_staff(&shop, &admin).is_err());
    }
}
