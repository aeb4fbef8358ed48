//! Self-signed bearer assertions for the klantinteractie API.
//!
//! The backend accepts short-lived HS256 tokens signed with the client
//! secret. There is no separate user identity in this scheme: every identity
//! claim is populated from the client id. A fresh token is produced per HTTP
//! call; nothing is cached.

use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::KicError;

/// Claim set of the bearer assertion.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AccessClaims {
    /// Issuer (the client id).
    pub iss: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Client id.
    pub client_id: String,
    /// Acting user id (the client id — no user identity in this scheme).
    pub user_id: String,
    /// Human-readable acting user (the client id).
    pub user_representation: String,
}

/// Builds signed assertions from a client id/secret pair.
///
/// Pure apart from the clock: given the same second, [`TokenSigner::sign`]
/// is deterministic.
pub struct TokenSigner {
    client_id: String,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Create a signer for the given client identity.
    #[must_use]
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            encoding_key: EncodingKey::from_secret(client_secret.as_bytes()),
        }
    }

    /// Sign a fresh assertion (HS256, `iat` = now).
    ///
    /// # Errors
    ///
    /// Returns [`KicError::TokenSign`] when the signing library rejects the key.
    pub fn sign(&self) -> Result<String, KicError> {
        let claims = AccessClaims {
            iss: self.client_id.clone(),
            iat: chrono::Utc::now().timestamp(),
            client_id: self.client_id.clone(),
            user_id: self.client_id.clone(),
            user_representation: self.client_id.clone(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            KicError::TokenSign {
                reason: e.to_string(),
            }
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
