use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque string tokens namespaced as
/// `<domain>.<action>[.<scope>]` (e.g. `"orders.view.own"`). Matching is
/// exact: `orders.view` and `orders.view.own` are distinct tokens.
/// The wildcard `"*"` grants every permission and is held by admins only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Catalog constants are built in const context from static tokens.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }

    /// Syntactic check for self-scoped tokens (final `.own` segment).
    ///
    /// The holder of an own-scoped permission may act only on resources they
    /// own. This classifier does NOT verify ownership — see
    /// [`crate::evaluate::has_permission_scoped`] for the enforcing check.
    pub fn is_own_scoped(&self) -> bool {
        self.as_str().ends_with(".own")
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full-access wildcard. Never appears in a non-admin grant list.
pub const WILDCARD: Permission = Permission::from_static("*");

pub mod orders {
    use super::Permission;

    pub const VIEW: Permission = Permission::from_static("orders.view");
    pub const VIEW_OWN: Permission = Permission::from_static("orders.view.own");
    pub const CREATE: Permission = Permission::from_static("orders.create");
    pub const UPDATE: Permission = Permission::from_static("orders.update");
    pub const CANCEL_OWN: Permission = Permission::from_static("orders.cancel.own");
    pub const APPROVE: Permission = Permission::from_static("orders.approve");
}

pub mod inventory {
    use super::Permission;

    pub const VIEW: Permission = Permission::from_static("inventory.view");
    pub const STOCK_IN: Permission = Permission::from_static("inventory.stock-in");
    pub const STOCK_OUT: Permission = Permission::from_static("inventory.stock-out");
    pub const ADJUST: Permission = Permission::from_static("inventory.adjust");
    pub const PREDICT: Permission = Permission::from_static("inventory.predict");
}

pub mod delivery {
    use super::Permission;

    pub const VIEW: Permission = Permission::from_static("delivery.view");
    pub const SCHEDULE: Permission = Permission::from_static("delivery.schedule");
    pub const RESCHEDULE_OWN: Permission = Permission::from_static("delivery.reschedule.own");
    pub const TRACK_OWN: Permission = Permission::from_static("delivery.track.own");
}

pub mod reports {
    use super::Permission;

    pub const VIEW: Permission = Permission::from_static("reports.view");
    pub const EXPORT: Permission = Permission::from_static("reports.export");
}

pub mod users {
    use super::Permission;

    pub const MANAGE: Permission = Permission::from_static("users.manage");
}

pub mod customers {
    use super::Permission;

    pub const APPROVE: Permission = Permission::from_static("customers.approve");
}

pub mod content {
    use super::Permission;

    pub const EDIT: Permission = Permission::from_static("content.edit");
    pub const PUBLISH: Permission = Permission::from_static("content.publish");
}

/// Every concrete permission token (the wildcard is not a catalog entry).
///
/// `users.manage` and `reports.export` are reachable only through the admin
/// wildcard; no explicit grant list carries them.
pub const CATALOG: &[Permission] = &[
    orders::VIEW,
    orders::VIEW_OWN,
    orders::CREATE,
    orders::UPDATE,
    orders::CANCEL_OWN,
    orders::APPROVE,
    inventory::VIEW,
    inventory::STOCK_IN,
    inventory::STOCK_OUT,
    inventory::ADJUST,
    inventory::PREDICT,
    delivery::VIEW,
    delivery::SCHEDULE,
    delivery::RESCHEDULE_OWN,
    delivery::TRACK_OWN,
    reports::VIEW,
    reports::EXPORT,
    users::MANAGE,
    customers::APPROVE,
    content::EDIT,
    content::PUBLISH,
];
