use std::sync::Arc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::store::Credential;
use crate::store::UserStore;

/// Credential authenticator.
///
/// Resolves a credential by identifier and confirms the password against
/// the stored digest. Read-only; rate limiting belongs to the API boundary.
pub struct CredentialAuthenticator {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl CredentialAuthenticator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
        }
    }

    /// Authenticate an identifier/password pair.
    ///
    /// Unknown identifier, store failure, and wrong password all collapse
    /// to `Ok(None)`. The caller must not be able to tell which factor
    /// was wrong, or the endpoint becomes a user-enumeration oracle.
    ///
    /// # Errors
    /// * `MalformedDigest` - The stored digest is corrupt; an integrity
    ///   fault, not an authentication failure
    pub async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<Credential>, PasswordError> {
        let credential = match self.store.find_by_identifier(identifier).await {
            Ok(Some(credential)) => credential,
            Ok(None) | Err(_) => return Ok(None),
        };

        if self.hasher.verify(password, &credential.password_hash)? {
            Ok(Some(credential))
        } else {
            Ok(None)
        }
    }
}
