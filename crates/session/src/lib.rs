//! `toollink-session` — current-user boundary and async route/action guards.
//!
//! Binds the pure RBAC core to the external authentication collaborator.
//! The only I/O in the whole system happens behind [`CurrentUserProvider`];
//! every guard converts provider failures into a deny, so identity lookup
//! problems never surface as exceptions in UI callers.

pub mod guards;
pub mod provider;

pub use guards::{can_access_route, can_perform_action, holds_permission, require_role};
pub use provider::{CurrentUser, CurrentUserProvider, ProviderError};
