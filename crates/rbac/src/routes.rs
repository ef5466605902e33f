//! Route access table for the SPA router guard.
//!
//! Same OR semantics as the feature table. Paths absent from the table are
//! resolved by a caller-chosen [`RoutePolicy`]; the default is
//! [`RoutePolicy::DefaultAllow`], matching the reference deployment where
//! any authenticated user may reach unlisted paths. This layer is a UX
//! convenience for hiding dead links and redirecting early — the server
//! remains the actual authorization boundary.

use serde::{Deserialize, Serialize};

use crate::evaluate::has_permission;
use crate::permissions::{
    content, customers, delivery, inventory, orders, reports, users, Permission,
};
use crate::roles::Role;

/// Policy for paths with no entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePolicy {
    /// Unlisted paths are open to any authenticated user.
    #[default]
    DefaultAllow,
    /// Unlisted paths are denied.
    DefaultDeny,
}

/// One guarded path: access requires any of `any_of`.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub any_of: &'static [Permission],
}

pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        path: "/orders",
        any_of: &[orders::VIEW, orders::VIEW_OWN],
    },
    RouteRule {
        path: "/inventory",
        any_of: &[inventory::VIEW],
    },
    RouteRule {
        path: "/delivery",
        any_of: &[delivery::VIEW, delivery::TRACK_OWN],
    },
    RouteRule {
        path: "/reports",
        any_of: &[reports::VIEW],
    },
    RouteRule {
        path: "/admin",
        any_of: &[users::MANAGE],
    },
    RouteRule {
        path: "/admin/users",
        any_of: &[users::MANAGE],
    },
    RouteRule {
        path: "/admin/reports",
        any_of: &[reports::VIEW, reports::EXPORT],
    },
    RouteRule {
        path: "/admin/audit",
        any_of: &[users::MANAGE],
    },
    RouteRule {
        path: "/cashier/approvals",
        any_of: &[customers::APPROVE],
    },
    RouteRule {
        path: "/customer/orders",
        any_of: &[orders::VIEW_OWN],
    },
    RouteRule {
        path: "/warehouse/prediction",
        any_of: &[inventory::PREDICT],
    },
    RouteRule {
        path: "/editor/content",
        any_of: &[content::EDIT],
    },
];

/// Permissions guarding `path`, or `None` when the path is unlisted.
pub fn route_requirements(path: &str) -> Option<&'static [Permission]> {
    ROUTE_RULES
        .iter()
        .find(|rule| rule.path == path)
        .map(|rule| rule.any_of)
}

/// Synchronous core of the route guard: can `role` reach `path`?
pub fn can_access_route_as(role: Role, path: &str, policy: RoutePolicy) -> bool {
    match route_requirements(path) {
        Some(any_of) => any_of.iter().any(|p| has_permission(role, p)),
        None => policy == RoutePolicy::DefaultAllow,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::permissions::CATALOG;

    #[test]
    fn paths_are_unique_and_requirements_are_catalog_tokens() {
        let mut seen = HashSet::new();
        for rule in ROUTE_RULES {
            assert!(seen.insert(rule.path), "duplicate path: {}", rule.path);
            assert!(!rule.any_of.is_empty(), "{} lists no permissions", rule.path);
            for perm in rule.any_of {
                assert!(CATALOG.contains(perm), "{} requires unknown {perm}", rule.path);
            }
        }
    }

    #[test]
    fn listed_routes_check_permissions() {
        assert!(can_access_route_as(Role::Warehouse, "/inventory", RoutePolicy::default()));
        assert!(!can_access_route_as(Role::Customer, "/inventory", RoutePolicy::default()));
        assert!(can_access_route_as(Role::Customer, "/customer/orders", RoutePolicy::default()));
        assert!(can_access_route_as(Role::Admin, "/admin/audit", RoutePolicy::default()));
        assert!(!can_access_route_as(Role::Cashier, "/admin/audit", RoutePolicy::default()));
    }

    #[test]
    fn unlisted_routes_follow_the_policy() {
        assert!(can_access_route_as(Role::Customer, "/profile", RoutePolicy::DefaultAllow));
        assert!(!can_access_route_as(Role::Customer, "/profile", RoutePolicy::DefaultDeny));
        // Admin's wildcard does not help on an unlisted path under deny:
        // there is no permission to satisfy.
        assert!(!can_access_route_as(Role::Admin, "/profile", RoutePolicy::DefaultDeny));
    }

    #[test]
    fn customer_routes_via_own_scoped_tokens() {
        assert!(can_access_route_as(Role::Customer, "/orders", RoutePolicy::default()));
        assert!(can_access_route_as(Role::Customer, "/delivery", RoutePolicy::default()));
        assert!(!can_access_route_as(Role::Customer, "/reports", RoutePolicy::default()));
    }
}
