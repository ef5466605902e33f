//! `toollink-rbac` — role-based access control core for ToolLink.
//!
//! Pure, synchronous capability evaluation over static tables: a closed
//! permission catalog, role→permission grants, a feature-module access
//! table, a route table, and a navigation deriver. No I/O, no shared
//! mutable state — everything is derived on demand from `'static` data, so
//! calls are safe from any thread.
//!
//! Client-side decisions from this crate are a UX convenience; the backend
//! performs the authoritative authorization checks.

pub mod evaluate;
pub mod features;
pub mod grants;
pub mod navigation;
pub mod permissions;
pub mod roles;
pub mod routes;

pub use evaluate::{
    can_access_feature, has_permission, has_permission_named, has_permission_scoped,
    user_capabilities, CapabilitySet, Ownership,
};
pub use features::{required_permissions, FeatureAction, FEATURE_ACTIONS};
pub use grants::{permissions_for, permissions_for_named};
pub use navigation::{navigation_for, NavEntry};
pub use permissions::{Permission, CATALOG, WILDCARD};
pub use roles::{Role, RoleParseError};
pub use routes::{can_access_route_as, route_requirements, RoutePolicy, RouteRule, ROUTE_RULES};
