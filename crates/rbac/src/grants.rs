//! Role-to-permission grants for the ToolLink deployment.
//!
//! Plain data: the tables carry no behavior so they can be asserted by
//! equality in tests. Changing a grant is a deployment-time edit.

use crate::permissions::{
    content, customers, delivery, inventory, orders, reports, Permission, WILDCARD,
};
use crate::roles::Role;

const ADMIN_GRANTS: &[Permission] = &[WILDCARD];

const CASHIER_GRANTS: &[Permission] = &[
    orders::VIEW,
    orders::CREATE,
    orders::UPDATE,
    orders::APPROVE,
    customers::APPROVE,
    delivery::VIEW,
    delivery::SCHEDULE,
    reports::VIEW,
];

const WAREHOUSE_GRANTS: &[Permission] = &[
    inventory::VIEW,
    inventory::STOCK_IN,
    inventory::STOCK_OUT,
    inventory::ADJUST,
    inventory::PREDICT,
    orders::VIEW,
    delivery::VIEW,
    delivery::SCHEDULE,
];

const CUSTOMER_GRANTS: &[Permission] = &[
    orders::VIEW_OWN,
    orders::CREATE,
    orders::CANCEL_OWN,
    delivery::TRACK_OWN,
    delivery::RESCHEDULE_OWN,
];

const EDITOR_GRANTS: &[Permission] = &[content::EDIT, content::PUBLISH, reports::VIEW];

/// Permissions granted to a role. Total over the `Role` enum: a missing
/// entry is unrepresentable, so the "undefined role list" failure mode of a
/// string-keyed map cannot occur here.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN_GRANTS,
        Role::Cashier => CASHIER_GRANTS,
        Role::Warehouse => WAREHOUSE_GRANTS,
        Role::Customer => CUSTOMER_GRANTS,
        Role::Editor => EDITOR_GRANTS,
    }
}

/// String-keyed variant for role names straight off the wire. Unknown names
/// resolve to an empty grant list (fail-closed), never an error.
pub fn permissions_for_named(role: &str) -> &'static [Permission] {
    match Role::parse(role) {
        Some(role) => permissions_for(role),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::permissions::{users, CATALOG};

    #[test]
    fn admin_holds_exactly_the_wildcard() {
        assert_eq!(permissions_for(Role::Admin), &[WILDCARD]);
    }

    #[test]
    fn wildcard_never_appears_outside_admin() {
        for role in Role::ALL {
            if role == Role::Admin {
                continue;
            }
            assert!(
                !permissions_for(role).iter().any(|p| p.is_wildcard()),
                "{role} must not hold the wildcard"
            );
        }
    }

    #[test]
    fn grant_lists_are_duplicate_free() {
        for role in Role::ALL {
            let grants = permissions_for(role);
            let unique: HashSet<&str> = grants.iter().map(|p| p.as_str()).collect();
            assert_eq!(unique.len(), grants.len(), "{role} has duplicate grants");
        }
    }

    #[test]
    fn every_grant_is_a_catalog_token_or_the_wildcard() {
        for role in Role::ALL {
            for perm in permissions_for(role) {
                assert!(
                    perm.is_wildcard() || CATALOG.contains(perm),
                    "{role} grants unknown token {perm}"
                );
            }
        }
    }

    #[test]
    fn catalog_coverage_matches_the_admin_only_allowlist() {
        // Tokens held by no explicit grant list; admins reach them through
        // the wildcard. Bound to locals: the consts are materialized as
        // temporaries, so borrowing their tokens needs an owner that
        // outlives the set.
        let manage = users::MANAGE;
        let export = reports::EXPORT;
        let admin_only: HashSet<&str> = [manage.as_str(), export.as_str()].into();

        let granted: HashSet<&str> = Role::ALL
            .iter()
            .flat_map(|r| permissions_for(*r))
            .map(|p| p.as_str())
            .collect();

        for perm in CATALOG {
            let covered = granted.contains(perm.as_str());
            let allowlisted = admin_only.contains(perm.as_str());
            assert!(
                covered || allowlisted,
                "{perm} is granted nowhere and not on the admin-only allowlist"
            );
            assert!(
                !(covered && allowlisted),
                "{perm} is on the admin-only allowlist but explicitly granted"
            );
        }
    }

    #[test]
    fn unknown_role_name_gets_no_permissions() {
        assert!(permissions_for_named("bogus-role").is_empty());
        assert!(permissions_for_named("").is_empty());
    }
}
