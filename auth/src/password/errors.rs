use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored digest is not a recognized PHC string. This indicates
    /// corruption in storage and must reach the caller, never be folded
    /// into a plain verification failure.
    #[error("Stored password digest is malformed: {0}")]
    MalformedDigest(String),
}
