//! Role-based access predicate.
//!
//! Server-side route guards and the navigation gate both call [`permits`], so the
//! links a visitor sees never disagree with what the server lets them reach.

use crate::user::UserRole;

/// Decide whether a caller with `actual` role may reach something that requires
/// `required`.
///
/// No requirement admits everyone, including anonymous callers. A requirement admits
/// only a caller whose role is exactly the required one; roles do not inherit.
pub fn permits(actual: Option<UserRole>, required: Option<UserRole>) -> bool {
    match required {
        None => true,
        Some(required) => actual == Some(required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Option<UserRole>; 3] = [None, Some(UserRole::Customer), Some(UserRole::Admin)];

    #[test]
    fn no_requirement_admits_everyone() {
        for actual in ROLES {
            assert!(permits(actual, None));
        }
    }

    #[test]
    fn requirement_admits_only_exact_role() {
        for actual in ROLES {
            for required in [UserRole::Customer, UserRole::Admin] {
                assert_eq!(permits(actual, Some(required)), actual == Some(required));
            }
        }
    }

    #[test]
    fn admin_does_not_inherit_customer_links() {
        assert!(!permits(Some(UserRole::Admin), Some(UserRole::Customer)));
    }
}
