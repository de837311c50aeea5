use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Single outcome for every verification failure: malformed structure,
    /// signature mismatch, or expired token. Callers must not learn which;
    /// distinguishing them would hand an oracle to whoever is probing the
    /// secret key.
    #[error("Token is invalid")]
    Invalid,
}
