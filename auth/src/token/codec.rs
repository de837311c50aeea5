use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::errors::TokenError;

/// Token codec for encoding and verifying signed tokens.
///
/// HS256 (HMAC with SHA-256) over the claim set. The secret key is injected
/// at construction and read-only afterwards; the codec holds no other state
/// and is safe to share across request-handling tasks.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode a claim set into a signed token string.
    ///
    /// Merges the expiration instant and a fresh random nonce into the
    /// claims before signing, so two encodes of identical inputs never
    /// produce the same token. The kind is set by the caller; the codec
    /// does not infer it.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn encode(
        &self,
        subject: &str,
        user_id: i64,
        kind: TokenKind,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            user_id,
            kind,
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
            iat: Some(Utc::now().timestamp()),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token string and recover its claim set.
    ///
    /// Checks structure, signature, and expiry against the current clock
    /// with zero leeway. Every failure collapses to `TokenError::Invalid`.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
