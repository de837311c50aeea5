use async_trait::async_trait;

/// Stored login credential as the auth core sees it.
///
/// The core never sees plaintext passwords after hashing and never persists
/// credentials itself; this is a read-only projection of the user record.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: i64,
    pub identifier: String,
    pub password_hash: String,
}

/// User lookup contract consumed by the auth core.
///
/// Implementations live with the embedding service. The lookup may block on
/// I/O and may fail; the core collapses failures to not-found rather than
/// surfacing them.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Resolve a credential by its unique identifier (email).
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Credential>, anyhow::Error>;

    /// Resolve the current user id for an identifier.
    ///
    /// Used by refresh-claim validation to detect stale claims after an
    /// identifier/id reassignment.
    async fn find_current_id(&self, identifier: &str) -> Result<Option<i64>, anyhow::Error>;
}
