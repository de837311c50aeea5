use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Token kind discriminator.
///
/// Access and refresh tokens share the same wire structure; the `type`
/// claim is the only thing telling them apart, and the two are never
/// accepted interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed token payload.
///
/// A fixed, typed claim set rather than an open key-value map: shape errors
/// surface at compile time, and unknown keys in historical tokens are
/// ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identifier (email)
    pub sub: String,

    /// Numeric user id
    pub user_id: i64,

    /// Token kind (`access` | `refresh`), wire name `type`
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Expiration as epoch seconds
    pub exp: i64,

    /// Random per-token nonce; two tokens issued in the same instant for
    /// the same subject are never byte-identical
    pub jti: String,

    /// Issued at (epoch seconds). Absent in historical tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Check expiry against the given clock reading (epoch seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = TokenClaims {
            sub: "a@x.com".to_string(),
            user_id: 7,
            kind: TokenKind::Refresh,
            exp: 1_700_000_000,
            jti: "nonce".to_string(),
            iat: None,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "a@x.com");
        assert_eq!(value["user_id"], 7);
        assert_eq!(value["type"], "refresh");
        assert_eq!(value["exp"], 1_700_000_000_i64);
        assert_eq!(value["jti"], "nonce");
        // Optional iat stays off the wire when unset
        assert!(value.get("iat").is_none());
    }

    #[test]
    fn test_decode_tolerates_unknown_claims() {
        // Historical tokens may carry extra payload keys
        let json = r#"{
            "sub": "a@x.com",
            "user_id": 7,
            "type": "access",
            "exp": 1700000000,
            "jti": "1234",
            "legacy_field": true
        }"#;

        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn test_is_expired() {
        let claims = TokenClaims {
            sub: "a@x.com".to_string(),
            user_id: 1,
            kind: TokenKind::Access,
            exp: 1000,
            jti: "n".to_string(),
            iat: None,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
