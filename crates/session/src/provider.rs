use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The authenticated user as reported by the external auth service.
///
/// `role` is kept as the raw backend string; guards parse it and treat
/// unknown values as "no permissions".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub role: String,
}

/// Transport-level failure while resolving the current user.
///
/// "No session" is NOT an error — providers return `Ok(None)` for that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("auth provider unavailable: {0}")]
    Unavailable(String),

    #[error("auth provider returned a malformed user record: {0}")]
    Malformed(String),
}

/// Boundary to the external authentication collaborator.
///
/// The single external interface this core consumes. Timeouts and retries
/// belong to the implementation; guards treat any `Err` uniformly as "no
/// current user, deny".
#[async_trait::async_trait]
pub trait CurrentUserProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ProviderError>;
}
