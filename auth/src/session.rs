use std::sync::Arc;

use chrono::Duration;
use chrono::Utc;
use thiserror::Error;

use crate::authenticator::CredentialAuthenticator;
use crate::password::PasswordError;
use crate::store::UserStore;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::TokenKind;

/// Session issuer configuration.
///
/// Passed by reference into the constructor; the core never reads ambient
/// or global settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Shared HS256 secret key
    pub secret: String,
    /// Access token lifetime in minutes
    pub access_token_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_token_days: i64,
}

/// Access/refresh token pair returned by login and refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Identity extracted from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub identifier: String,
    pub user_id: i64,
}

/// Session operation errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Bad credentials at login. Never reveals which factor was wrong.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Malformed, expired, wrong-kind, or stale-user refresh token.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Malformed, expired, or wrong-kind access token.
    #[error("Invalid or expired access token")]
    Unauthenticated,

    /// Corrupt stored password digest. An integrity fault to be logged and
    /// surfaced as an internal error, not mapped to an auth failure.
    #[error("Credential integrity error: {0}")]
    Credential(#[from] PasswordError),

    #[error("Token generation failed: {0}")]
    TokenGeneration(#[from] TokenError),
}

/// Session issuer orchestrating the login/refresh protocol.
///
/// Stateless: the system keeps no server-side record of issued or revoked
/// tokens, so validity is purely signature plus expiry. Rotation on refresh
/// issues a brand-new pair but cannot invalidate the presented token before
/// its natural expiry.
pub struct SessionIssuer {
    codec: TokenCodec,
    authenticator: CredentialAuthenticator,
    store: Arc<dyn UserStore>,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl SessionIssuer {
    pub fn new(config: &SessionConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            codec: TokenCodec::new(config.secret.as_bytes()),
            authenticator: CredentialAuthenticator::new(Arc::clone(&store)),
            store,
            access_lifetime: Duration::minutes(config.access_token_minutes),
            refresh_lifetime: Duration::days(config.refresh_token_days),
        }
    }

    /// Authenticate credentials and issue a fresh token pair.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown identifier or wrong password
    /// * `Credential` - Stored digest is corrupt
    /// * `TokenGeneration` - Signing failed
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<TokenPair, SessionError> {
        let credential = self
            .authenticator
            .authenticate(identifier, password)
            .await?
            .ok_or(SessionError::AuthenticationFailed)?;

        self.issue_pair(&credential.identifier, credential.user_id)
    }

    /// Rotate a refresh token into a brand-new access/refresh pair.
    ///
    /// The token must verify, carry the `refresh` kind, and name a user the
    /// store still knows under the same id. Every failure collapses to
    /// `InvalidRefreshToken`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        let claims = self
            .codec
            .decode(refresh_token)
            .map_err(|_| SessionError::InvalidRefreshToken)?;

        if claims.kind != TokenKind::Refresh {
            return Err(SessionError::InvalidRefreshToken);
        }

        // Re-resolve the user: the claimed id must still be current, so a
        // token minted before an identifier/id reassignment stops working.
        let current_id = self
            .store
            .find_current_id(&claims.sub)
            .await
            .unwrap_or(None)
            .ok_or(SessionError::InvalidRefreshToken)?;

        if current_id != claims.user_id {
            return Err(SessionError::InvalidRefreshToken);
        }

        self.issue_pair(&claims.sub, current_id)
    }

    /// Verify an access token and extract the identity it proves.
    ///
    /// Trusts the claims as of issuance time and does not re-hit the store;
    /// verification speed is favored over freshness here.
    pub fn current_session(&self, access_token: &str) -> Result<Identity, SessionError> {
        let claims = self
            .codec
            .decode(access_token)
            .map_err(|_| SessionError::Unauthenticated)?;

        if claims.kind != TokenKind::Access {
            return Err(SessionError::Unauthenticated);
        }

        Ok(Identity {
            identifier: claims.sub,
            user_id: claims.user_id,
        })
    }

    fn issue_pair(&self, identifier: &str, user_id: i64) -> Result<TokenPair, SessionError> {
        let now = Utc::now();

        let access_token =
            self.codec
                .encode(identifier, user_id, TokenKind::Access, now + self.access_lifetime)?;
        let refresh_token = self.codec.encode(
            identifier,
            user_id,
            TokenKind::Refresh,
            now + self.refresh_lifetime,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_lifetime.num_seconds(),
        })
    }
}
