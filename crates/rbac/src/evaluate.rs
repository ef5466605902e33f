//! Capability evaluator.
//!
//! Pure, total functions over the static grant and feature tables. Nothing
//! here errors, suspends, or mutates; every answer is `true` or `false`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::features::{required_permissions, FEATURE_ACTIONS};
use crate::grants::{permissions_for, permissions_for_named};
use crate::permissions::Permission;
use crate::roles::Role;

/// Does `role` hold `permission`?
///
/// The wildcard check runs before the exact match: `"*"` does not literally
/// equal any concrete token. Matching is exact — `orders.view` does not
/// satisfy `orders.view.own` and vice versa.
pub fn has_permission(role: Role, permission: &Permission) -> bool {
    let grants = permissions_for(role);
    if grants.iter().any(|p| p.is_wildcard()) {
        return true;
    }
    grants.contains(permission)
}

/// [`has_permission`] keyed by a raw role name. Unknown names hold nothing.
pub fn has_permission_named(role: &str, permission: &Permission) -> bool {
    let grants = permissions_for_named(role);
    grants.iter().any(|p| p.is_wildcard()) || grants.contains(permission)
}

/// Ownership context for own-scoped permission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership<'a> {
    pub resource_owner_id: &'a str,
    pub current_user_id: &'a str,
}

impl Ownership<'_> {
    pub fn is_owner(&self) -> bool {
        self.resource_owner_id == self.current_user_id
    }
}

/// Ownership-aware permission check.
///
/// The wildcard and unscoped exact grants allow regardless of ownership. An
/// own-scoped grant (`.own` suffix) allows only when ownership context is
/// supplied and the acting user is the resource owner; with no context it is
/// denied, since the evaluator cannot make a real decision without both ids.
pub fn has_permission_scoped(
    role: Role,
    permission: &Permission,
    ownership: Option<Ownership<'_>>,
) -> bool {
    if !has_permission(role, permission) {
        return false;
    }
    if permissions_for(role).iter().any(|p| p.is_wildcard()) {
        return true;
    }
    if permission.is_own_scoped() {
        return ownership.is_some_and(|o| o.is_owner());
    }
    true
}

/// Can `role` perform `action` in feature `module`?
///
/// Satisfied by ANY one of the registered permissions for the pair.
/// Unregistered pairs are never satisfiable (default-deny).
pub fn can_access_feature(role: Role, module: &str, action: &str) -> bool {
    match required_permissions(module, action) {
        Some(any_of) => any_of.iter().any(|p| has_permission(role, p)),
        None => false,
    }
}

/// Full capability grid for a role: `module → action → allowed`.
///
/// A projection of the grant and feature tables; recomputed on demand,
/// never cached. `BTreeMap` keeps the serialized form deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySet {
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub capabilities: BTreeMap<&'static str, BTreeMap<&'static str, bool>>,
}

pub fn user_capabilities(role: Role) -> CapabilitySet {
    let mut capabilities: BTreeMap<&'static str, BTreeMap<&'static str, bool>> = BTreeMap::new();
    for row in FEATURE_ACTIONS {
        capabilities
            .entry(row.module)
            .or_default()
            .insert(row.action, can_access_feature(role, row.module, row.action));
    }
    CapabilitySet {
        role,
        permissions: permissions_for(role).to_vec(),
        capabilities,
    }
}
