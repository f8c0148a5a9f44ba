//! Permission policy
//!
//! Role-based feature access. The table is closed: a permission with no
//! role list is open to every authenticated user, and an unknown feature
//! simply has no `Permission` variant to ask about.

use shared::models::Role;

/// Application features gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewDashboard,
    ManageShops,
    ManageStaff,
    ViewCalendar,
    ManageServices,
    Book,
    Settings,
    Help,
}

impl Permission {
    /// Roles allowed to use a feature
    ///
    /// `None` means any authenticated user.
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        use Role::*;
        match self {
            Permission::ViewDashboard => Some(&[Owner, CoOwner, Admin, Capster]),
            Permission::ManageShops => Some(&[Owner]),
            Permission::ManageStaff => Some(&[Owner, CoOwner, Admin]),
            Permission::ViewCalendar => Some(&[Owner, CoOwner, Admin, Capster]),
            Permission::ManageServices => Some(&[Owner, CoOwner]),
            Permission::Book => Some(&[Customer]),
            Permission::Settings | Permission::Help => None,
        }
    }

    /// Check whether a role may use this feature
    pub fn is_allowed(self, role: Role) -> bool {
        match self.allowed_roles() {
            Some(roles) => roles.contains(&role),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_manages_shops_others_do_not() {
        assert!(Permission::ManageShops.is_allowed(Role::Owner));
        assert!(!Permission::ManageShops.is_allowed(Role::CoOwner));
        assert!(!Permission::ManageShops.is_allowed(Role::Admin));
        assert!(!Permission::ManageShops.is_allowed(Role::Capster));
        assert!(!Permission::ManageShops.is_allowed(Role::Customer));
    }

    #[test]
    fn test_booking_is_customer_only() {
        assert!(Permission::Book.is_allowed(Role::Customer));
        assert!(!Permission::Book.is_allowed(Role::Owner));
        assert!(!Permission::Book.is_allowed(Role::Capster));
    }

    #[test]
    fn test_capster_sees_calendar_not_staff_management() {
        assert!(Permission::ViewCalendar.is_allowed(Role::Capster));
        assert!(!Permission::ManageStaff.is_allowed(Role::Capster));
        assert!(!Permission::ManageServices.is_allowed(Role::Capster));
    }

    #[test]
    fn test_settings_and_help_open_to_all_roles() {
        for role in [
            Role::Owner,
            Role::CoOwner,
            Role::Admin,
            Role::Capster,
            Role::Customer,
        ] {
            assert!(Permission::Settings.is_allowed(role));
            assert!(Permission::Help.is_allowed(role));
        }
    }
}
