//! Authentication core library
//!
//! Provides the credential and token machinery for the Q&A platform:
//! - Password hashing (Argon2id)
//! - Signed token encoding and verification (JWT, HS256)
//! - Credential authentication against a user store
//! - Session issuance: login, refresh rotation, and access validation
//!
//! The embedding service supplies a [`UserStore`] implementation; everything
//! else in this crate is self-contained and free of I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! ```
//!
//! ## Token Codec
//! ```
//! use auth::TokenCodec;
//! use auth::TokenKind;
//! use chrono::Duration;
//! use chrono::Utc;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .encode("alice@example.com", 1, TokenKind::Access, Utc::now() + Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod session;
pub mod store;
pub mod token;

// Re-export commonly used items
pub use authenticator::CredentialAuthenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::Identity;
pub use session::SessionConfig;
pub use session::SessionError;
pub use session::SessionIssuer;
pub use session::TokenPair;
pub use store::Credential;
pub use store::UserStore;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
