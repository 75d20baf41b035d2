use async_trait::async_trait;
use std::collections::HashMap;

use crate::modules::users::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Read-side port over the user store owned by the auth system.
///
/// The catalog only needs two questions answered: "does this user exist
/// right now?" (checked once, at write time) and "what do I print for
/// these ids?". Missing ids simply don't appear in the name map.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserDirectoryError>;

    /// Resolves display names for the given ids. Ids without a matching
    /// user are absent from the result, not an error.
    async fn display_names(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, UserDirectoryError>;
}
