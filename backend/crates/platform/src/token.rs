//! Signed Bearer Token Codec
//!
//! Stateless tokens of the form `base64url(claims JSON).base64url(signature)`
//! where the signature is HMAC-SHA256 over the encoded claims segment.
//! Claims carry the subject id, its role code, and an expiry timestamp;
//! anything else about the subject is re-resolved from storage on each use.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is structurally invalid (wrong segment count, bad base64, bad JSON)
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    BadSignature,

    /// Token expiry is in the past
    #[error("Token has expired")]
    Expired,
}

/// Claims embedded in a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject id
    pub sub: Uuid,
    /// Subject role code
    pub role: String,
    /// Expiry, Unix timestamp in milliseconds
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(sub: Uuid, role: impl Into<String>, exp_ms: i64) -> Self {
        Self {
            sub,
            role: role.into(),
            exp: exp_ms,
        }
    }

    /// Check expiry against a caller-supplied clock reading
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.exp
    }
}

/// Sign claims into a bearer token string
pub fn sign(claims: &TokenClaims, secret: &[u8; 32]) -> String {
    // Claims are a closed struct; serialization cannot fail
    let payload = serde_json::to_vec(claims).expect("token claims serialize");
    let payload_b64 = to_base64_url(&payload);

    let signature = hmac_sha256(secret, payload_b64.as_bytes());

    format!("{}.{}", payload_b64, to_base64_url(&signature))
}

/// Verify a bearer token and return its claims
///
/// Checks, in order: structure, signature (constant-time), expiry.
pub fn verify(token: &str, secret: &[u8; 32], now_ms: i64) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (payload_b64, signature_b64) = match (parts.next(), parts.next(), parts.next()) {
        (Some(p), Some(s), None) => (p, s),
        _ => return Err(TokenError::Malformed),
    };

    let signature = from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;
    let expected = hmac_sha256(secret, payload_b64.as_bytes());

    if !constant_time_eq(&signature, &expected) {
        return Err(TokenError::BadSignature);
    }

    let payload = from_base64_url(payload_b64).map_err(|_| TokenError::Malformed)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if claims.is_expired(now_ms) {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];
    const NOW_MS: i64 = 1_700_000_000_000;

    fn claims() -> TokenClaims {
        TokenClaims::new(Uuid::new_v4(), "employer", NOW_MS + 60_000)
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let claims = claims();
        let token = sign(&claims, &SECRET);

        let verified = verify(&token, &SECRET, NOW_MS).unwrap();
        assert_eq!(verified.sub, claims.sub);
        assert_eq!(verified.role, "employer");
        assert_eq!(verified.exp, claims.exp);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = sign(&claims(), &SECRET);
        let other_secret = [8u8; 32];

        assert_eq!(
            verify(&token, &other_secret, NOW_MS),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let token = sign(&claims(), &SECRET);
        let signature = token.split('.').nth(1).unwrap();

        let forged_claims = TokenClaims::new(Uuid::new_v4(), "admin", NOW_MS + 60_000);
        let forged_payload =
            to_base64_url(&serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, signature);

        assert_eq!(
            verify(&forged, &SECRET, NOW_MS),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_verify_rejects_expired() {
        let expired = TokenClaims::new(Uuid::new_v4(), "employer", NOW_MS - 1);
        let token = sign(&expired, &SECRET);

        assert_eq!(verify(&token, &SECRET, NOW_MS), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_rejects_malformed() {
        assert_eq!(verify("", &SECRET, NOW_MS), Err(TokenError::Malformed));
        assert_eq!(
            verify("only-one-segment", &SECRET, NOW_MS),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            verify("a.b.c", &SECRET, NOW_MS),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            verify("!!!.???", &SECRET, NOW_MS),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = TokenClaims::new(Uuid::new_v4(), "admin", NOW_MS);
        // exp == now is still valid; strictly-past expiry is not
        assert!(!claims.is_expired(NOW_MS));
        assert!(claims.is_expired(NOW_MS + 1));
    }
}
