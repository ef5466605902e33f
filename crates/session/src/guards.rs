//! Async guard wrappers over the synchronous RBAC core.
//!
//! Every guard resolves the current user through the provider and converts
//! all failure shapes — no session, unknown role string, provider error —
//! into a plain `false`. Nothing here returns an error or panics: the UI
//! only ever sees "allowed" or "denied", and provider failures are logged
//! on the side.

use toollink_rbac::{
    can_access_route_as, has_permission, has_permission_scoped, Ownership, Permission, Role,
    RoutePolicy,
};

use crate::provider::{CurrentUser, CurrentUserProvider};

async fn resolve_user(provider: &dyn CurrentUserProvider) -> Option<CurrentUser> {
    match provider.current_user().await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "current-user lookup failed, denying");
            None
        }
    }
}

fn resolve_role(user: &CurrentUser) -> Option<Role> {
    let role = Role::parse(&user.role);
    if role.is_none() {
        tracing::debug!(role = %user.role, "unknown role on session user, denying");
    }
    role
}

/// Is the current user's role one of `required`?
pub async fn require_role(provider: &dyn CurrentUserProvider, required: &[Role]) -> bool {
    let Some(user) = resolve_user(provider).await else {
        return false;
    };
    resolve_role(&user).is_some_and(|role| required.contains(&role))
}

/// May the current user perform an action guarded by `permission`?
///
/// For own-scoped permissions the caller supplies the owner id of the
/// resource it already loaded; the grant then holds only when the current
/// user is that owner. An own-scoped grant with no owner id is denied — the
/// evaluator refuses to guess ownership. Unscoped permissions ignore
/// `resource_owner_id`.
pub async fn can_perform_action(
    provider: &dyn CurrentUserProvider,
    permission: &Permission,
    resource_owner_id: Option<&str>,
) -> bool {
    let Some(user) = resolve_user(provider).await else {
        return false;
    };
    let Some(role) = resolve_role(&user) else {
        return false;
    };

    let ownership = resource_owner_id.map(|owner| Ownership {
        resource_owner_id: owner,
        current_user_id: &user.id,
    });
    has_permission_scoped(role, permission, ownership)
}

/// May the current user navigate to `path`?
///
/// No session denies. Unlisted paths are resolved by `policy`
/// (`RoutePolicy::default()` is allow, matching the SPA's fail-open routing
/// for authenticated users).
pub async fn can_access_route(
    provider: &dyn CurrentUserProvider,
    path: &str,
    policy: RoutePolicy,
) -> bool {
    let Some(user) = resolve_user(provider).await else {
        return false;
    };
    let Some(role) = resolve_role(&user) else {
        return false;
    };
    can_access_route_as(role, path, policy)
}

/// Does the current user hold `permission` at all, ignoring scope?
///
/// Convenience for show/hide decisions where no concrete resource is in
/// play yet (e.g. rendering a "New Order" button).
pub async fn holds_permission(provider: &dyn CurrentUserProvider, permission: &Permission) -> bool {
    let Some(user) = resolve_user(provider).await else {
        return false;
    };
    resolve_role(&user).is_some_and(|role| has_permission(role, permission))
}
