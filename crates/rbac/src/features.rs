//! Feature-module access table.
//!
//! Each row maps a (module, action) pair to the permissions that satisfy it.
//! A role needs ANY one of the listed permissions (logical OR): e.g. both
//! `orders.view` and `orders.view.own` legitimately grant "view", just at
//! different scopes.
//!
//! Pairs absent from the table are never satisfiable (default-deny): an
//! explicit feature check against a name nobody registered means a typo or a
//! stale caller, and granting access is the wrong failure mode.

use crate::permissions::{
    content, customers, delivery, inventory, orders, reports, users, Permission,
};

/// One capability row: `module.action` requires any of `any_of`.
#[derive(Debug, PartialEq, Eq)]
pub struct FeatureAction {
    pub module: &'static str,
    pub action: &'static str,
    pub any_of: &'static [Permission],
}

pub const FEATURE_ACTIONS: &[FeatureAction] = &[
    FeatureAction {
        module: "orderManagement",
        action: "view",
        any_of: &[orders::VIEW, orders::VIEW_OWN],
    },
    FeatureAction {
        module: "orderManagement",
        action: "create",
        any_of: &[orders::CREATE],
    },
    FeatureAction {
        module: "orderManagement",
        action: "update",
        any_of: &[orders::UPDATE],
    },
    FeatureAction {
        module: "orderManagement",
        action: "cancel",
        any_of: &[orders::UPDATE, orders::CANCEL_OWN],
    },
    FeatureAction {
        module: "orderManagement",
        action: "approve",
        any_of: &[orders::APPROVE],
    },
    FeatureAction {
        module: "inventoryManagement",
        action: "view",
        any_of: &[inventory::VIEW],
    },
    FeatureAction {
        module: "inventoryManagement",
        action: "stockIn",
        any_of: &[inventory::STOCK_IN],
    },
    FeatureAction {
        module: "inventoryManagement",
        action: "stockOut",
        any_of: &[inventory::STOCK_OUT],
    },
    FeatureAction {
        module: "inventoryManagement",
        action: "adjust",
        any_of: &[inventory::ADJUST],
    },
    FeatureAction {
        module: "inventoryManagement",
        action: "predict",
        any_of: &[inventory::PREDICT],
    },
    FeatureAction {
        module: "deliveryManagement",
        action: "view",
        any_of: &[delivery::VIEW, delivery::TRACK_OWN],
    },
    FeatureAction {
        module: "deliveryManagement",
        action: "schedule",
        any_of: &[delivery::SCHEDULE],
    },
    FeatureAction {
        module: "deliveryManagement",
        action: "reschedule",
        any_of: &[delivery::SCHEDULE, delivery::RESCHEDULE_OWN],
    },
    FeatureAction {
        module: "deliveryManagement",
        action: "track",
        any_of: &[delivery::VIEW, delivery::TRACK_OWN],
    },
    FeatureAction {
        module: "reportingAnalytics",
        action: "view",
        any_of: &[reports::VIEW],
    },
    FeatureAction {
        module: "reportingAnalytics",
        action: "export",
        any_of: &[reports::EXPORT],
    },
    FeatureAction {
        module: "userAdministration",
        action: "manage",
        any_of: &[users::MANAGE],
    },
    FeatureAction {
        module: "customerApproval",
        action: "approve",
        any_of: &[customers::APPROVE],
    },
    FeatureAction {
        module: "contentEditing",
        action: "edit",
        any_of: &[content::EDIT],
    },
    FeatureAction {
        module: "contentEditing",
        action: "publish",
        any_of: &[content::PUBLISH],
    },
];

/// Permissions required for a (module, action) pair, or `None` when the pair
/// is not registered.
pub fn required_permissions(module: &str, action: &str) -> Option<&'static [Permission]> {
    FEATURE_ACTIONS
        .iter()
        .find(|row| row.module == module && row.action == action)
        .map(|row| row.any_of)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::permissions::CATALOG;

    #[test]
    fn rows_are_unique_per_module_action() {
        let mut seen = HashSet::new();
        for row in FEATURE_ACTIONS {
            assert!(
                seen.insert((row.module, row.action)),
                "duplicate row: {}.{}",
                row.module,
                row.action
            );
        }
    }

    #[test]
    fn no_row_is_unsatisfiable_or_wildcarded() {
        for row in FEATURE_ACTIONS {
            assert!(
                !row.any_of.is_empty(),
                "{}.{} lists no permissions",
                row.module,
                row.action
            );
            for perm in row.any_of {
                assert!(
                    CATALOG.contains(perm),
                    "{}.{} requires unknown token {perm}",
                    row.module,
                    row.action
                );
            }
        }
    }

    #[test]
    fn lookup_finds_registered_pairs_only() {
        assert!(required_permissions("orderManagement", "view").is_some());
        assert!(required_permissions("orderManagement", "explode").is_none());
        assert!(required_permissions("noSuchModule", "view").is_none());
    }
}
