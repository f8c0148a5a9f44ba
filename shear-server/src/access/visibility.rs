//! Shop visibility resolver
//!
//! Computes the set of barbershops a user may see. Recomputed from the
//! database on every request; the token never carries shop ids, so an
//! ownership or staffing change is effective immediately.

use std::collections::HashSet;

use shared::models::Role;

use crate::db::models::{BarbershopId, UserId};
use crate::db::repository::{BarbershopRepository, StaffRepository};
use crate::utils::AppResult;

/// Resolve the visible shop set for a user
///
/// - `owner`: every shop they primary-own, plus the shop of their staff
///   link if they moonlight at another owner's shop. The two sources are
///   a union, never a replacement.
/// - `co-owner` / `admin` / `capster`: the shop of their staff link.
/// - `customer`: always empty. Customers reach shops through the public
///   listing, not through visibility.
///
/// A user with no shops and no staff link resolves to the empty set;
/// listings for them are empty rather than an error.
pub async fn resolve_shop_ids(
    shops: &BarbershopRepository,
    staff: &StaffRepository,
    user_id: &UserId,
    role: Role,
) -> AppResult<HashSet<BarbershopId>> {
    let mut visible: HashSet<BarbershopId> = HashSet::new();

    if role == Role::Customer {
        return Ok(visible);
    }

    if role == Role::Owner {
        for shop in shops.find_owned_by(user_id).await? {
            if let Some(id) = shop.id {
                visible.insert(id);
            }
        }
    }

    if let Some(link) = staff.find_by_user(user_id).await? {
        visible.insert(link.barbershop);
    }

    Ok(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BarbershopCreate, OperatingHours, SubscriptionPlan};

    use crate::db::DbService;
    use crate::db::models::User;
    use crate::db::repository::UserRepository;

    async fn setup() -> (UserRepository, BarbershopRepository, StaffRepository) {
        let db = DbService::memory().await.expect("memory db");
        (
            UserRepository::new(db.db.clone()),
            BarbershopRepository::new(db.db.clone()),
            StaffRepository::new(db.db.clone()),
        )
    }

    fn shop_payload(name: &str) -> BarbershopCreate {
        BarbershopCreate {
            name: name.to_string(),
            address: "1 Main Street".to_string(),
            phone: "0123456789".to_string(),
            plan: SubscriptionPlan::Basic,
            hours: OperatingHours {
                open_time: Some("09:00".to_string()),
                close_time: Some("18:00".to_string()),
                break_start: None,
                break_end: None,
            },
            days_open: vec!["mon".to_string(), "tue".to_string()],
        }
    }

    async fn make_user(users: &UserRepository, email: &str, role: Role) -> User {
        let hash = User::hash_password("Sup3r-secret!").expect("hash");
        users
            .create("Test User".to_string(), email.to_string(), hash, role)
            .await
            .expect("create user")
    }

    #[tokio::test]
    async fn test_owner_sees_owned_union_staff_link() {
        let (users, shops, staff) = setup().await;

        let owner = make_user(&users, "owner@example.com", Role::Owner).await;
        let owner_id = owner.id.clone().expect("id");
        let other = make_user(&users, "other@example.com", Role::Owner).await;
        let other_id = other.id.clone().expect("id");

        let a = shops.create(&owner_id, shop_payload("Shop A")).await.expect("a");
        let b = shops.create(&owner_id, shop_payload("Shop B")).await.expect("b");
        let c = shops.create(&other_id, shop_payload("Shop C")).await.expect("c");

        // Owner moonlights as staff at the other owner's shop
        staff
            .link_existing(&owner_id, &c.id.clone().expect("id"), None)
            .await
            .expect("link");

        let visible = resolve_shop_ids(&shops, &staff, &owner_id, Role::Owner)
            .await
            .expect("resolve");

        let expected: HashSet<BarbershopId> = [
            a.id.expect("id"),
            b.id.expect("id"),
            c.id.expect("id"),
        ]
        .into_iter()
        .collect();
        assert_eq!(visible, expected);
    }

    #[tokio::test]
    async fn test_staff_sees_only_linked_shop() {
        let (users, shops, staff) = setup().await;

        let owner = make_user(&users, "owner@example.com", Role::Owner).await;
        let owner_id = owner.id.clone().expect("id");
        let x = shops.create(&owner_id, shop_payload("Shop X")).await.expect("x");
        shops.create(&owner_id, shop_payload("Shop Y")).await.expect("y");

        let detail = staff
            .create_with_user(
                "Admin".to_string(),
                "admin@example.com".to_string(),
                User::hash_password("Sup3r-secret!").expect("hash"),
                Role::Admin,
                &x.id.clone().expect("id"),
                None,
            )
            .await
            .expect("staff");

        let admin_id = detail.user.id.clone().expect("id");
        let visible = resolve_shop_ids(&shops, &staff, &admin_id, Role::Admin)
            .await
            .expect("resolve");

        let expected: HashSet<BarbershopId> = [x.id.expect("id")].into_iter().collect();
        assert_eq!(visible, expected);
    }

    #[tokio::test]
    async fn test_unlinked_user_resolves_to_empty_set() {
        let (users, shops, staff) = setup().await;

        let loner = make_user(&users, "loner@example.com", Role::Owner).await;
        let visible = resolve_shop_ids(&shops, &staff, &loner.id.expect("id"), Role::Owner)
            .await
            .expect("resolve");
        assert!(visible.is_empty());
    }

    #[tokio::test]
    async fn test_customer_resolves_to_empty_set() {
        let (users, shops, staff) = setup().await;

        let owner = make_user(&users, "owner@example.com", Role::Owner).await;
        let owner_id = owner.id.clone().expect("id");
        shops.create(&owner_id, shop_payload("Shop A")).await.expect("a");

        let customer = make_user(&users, "cust@example.com", Role::Customer).await;
        let visible = resolve_shop_ids(&shops, &staff, &customer.id.expect("id"), Role::Customer)
            .await
            .expect("resolve");
        assert!(visible.is_empty());
    }
}
