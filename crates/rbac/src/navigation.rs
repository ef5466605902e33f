//! Role-specific navigation derivation.
//!
//! Entries are regenerated on every call, never cached or mutated. Output
//! order is significant — the UI relies on it for stable rendering — so
//! nothing here sorts or deduplicates.

use serde::Serialize;

use crate::evaluate::can_access_feature;
use crate::roles::Role;

/// One sidebar entry. `available` is always `true` on returned entries
/// (unavailable entries are simply not emitted); the field is kept because
/// the UI consumes it on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub available: bool,
}

impl NavEntry {
    const fn new(name: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self {
            name,
            path,
            icon,
            available: true,
        }
    }
}

/// Build the navigation list for `role`.
///
/// Dashboard first; then capability-gated entries in a fixed,
/// role-independent order; then role-exclusive surfaces gated by role
/// identity rather than permissions (administrative pages have no
/// customer-facing permission subset, so identity is the honest gate); then
/// the entries every authenticated role gets.
pub fn navigation_for(role: Role) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry::new("Dashboard", "/dashboard", "dashboard")];

    if can_access_feature(role, "orderManagement", "view")
        || can_access_feature(role, "orderManagement", "create")
    {
        entries.push(NavEntry::new("Orders", "/orders", "shopping-cart"));
    }
    if can_access_feature(role, "inventoryManagement", "view") {
        entries.push(NavEntry::new("Inventory", "/inventory", "package"));
    }
    if can_access_feature(role, "deliveryManagement", "view")
        || can_access_feature(role, "deliveryManagement", "schedule")
    {
        entries.push(NavEntry::new("Delivery", "/delivery", "truck"));
    }
    if can_access_feature(role, "reportingAnalytics", "view") {
        entries.push(NavEntry::new("Reports", "/reports", "bar-chart"));
    }

    match role {
        Role::Admin => {
            entries.push(NavEntry::new("User Management", "/admin/users", "users"));
            entries.push(NavEntry::new("Admin Dashboard", "/admin", "shield"));
            entries.push(NavEntry::new("System Reports", "/admin/reports", "file-text"));
            entries.push(NavEntry::new("Audit Logs", "/admin/audit", "scroll"));
        }
        Role::Cashier => {
            entries.push(NavEntry::new("Customer Approval", "/cashier/approvals", "user-check"));
        }
        Role::Customer => {
            entries.push(NavEntry::new("My Orders", "/customer/orders", "clipboard-list"));
        }
        Role::Warehouse => {
            entries.push(NavEntry::new(
                "Material Prediction",
                "/warehouse/prediction",
                "trending-up",
            ));
        }
        Role::Editor => {}
    }

    entries.push(NavEntry::new("Notifications", "/notifications", "bell"));
    entries.push(NavEntry::new("Profile", "/profile", "user"));

    entries
}
