//! Authenticated HTTP access to the klantinteractie backend.
//!
//! Every request targets a path below the configured base domain and carries
//! a fresh bearer assertion. Failure handling is deliberately asymmetric:
//! reads collapse transport errors, non-success statuses and unparseable
//! bodies into `None` ("no data"), while writes return `None` as a failure
//! sentinel the caller must check. Neither path raises.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::KicConfig;
use crate::error::KicError;
use crate::token::TokenSigner;

/// Request timeout; the upstream gives no guidance, so bound it explicitly.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed backend resource paths and query parameter names.
pub(crate) mod paths {
    /// Party list endpoint.
    pub const PARTIES: &str = "api/kic/v1/partijen";
    /// Party patch endpoint; the backend expects the target id as a query
    /// parameter on the collection path.
    pub const PARTIES_PATCH: &str = "api/kic/v1/partijen/";
    /// Involved-in-contact-moment endpoint.
    pub const CONTACT_INVOLVEMENTS: &str = "api/kic/v1/betrokkenenbijklantcontact";
    /// Query parameter filtering parties by external subject identifier.
    pub const SUBJECT_FILTER: &str = "externeIdentificaties.partijIdentificator.objectId";

    /// Digital address endpoint for a specific address id.
    pub fn digital_address(id: &str) -> String {
        format!("api/kic/v1/digitaaladressen/{id}")
    }
}

/// HTTP client bound to one backend domain and one client identity.
pub struct RemoteClient {
    base_url: Url,
    signer: TokenSigner,
    http: reqwest::Client,
}

impl std::fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RemoteClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KicError`] when the configuration is incomplete or the HTTP
    /// client cannot be built.
    pub fn new(config: &KicConfig) -> Result<Self, KicError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| KicError::ClientBuild {
                reason: e.to_string(),
            })?;
        Self::with_http_client(config, http)
    }

    /// Create a client using a pre-built `reqwest` client (test injection).
    ///
    /// # Errors
    ///
    /// Returns [`KicError`] when the configuration is incomplete.
    pub fn with_http_client(config: &KicConfig, http: reqwest::Client) -> Result<Self, KicError> {
        Ok(Self {
            base_url: config.base_url()?,
            signer: TokenSigner::new(&config.client_id, &config.client_secret),
            http,
        })
    }

    /// Join a resource path (and query pairs) onto the base domain.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Option<Url> {
        let mut url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, path, "failed to build endpoint URL");
                return None;
            }
        };
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            let _ = pairs.extend_pairs(query);
        }
        Some(url)
    }

    /// Sign a fresh bearer assertion, collapsing signing errors into `None`.
    fn bearer(&self) -> Option<String> {
        match self.signer.sign() {
            Ok(token) => Some(token),
            Err(e) => {
                warn!(error = %e, "token signing failed");
                None
            }
        }
    }

    /// Authenticated GET. `None` means "no data" — transport failure, a
    /// non-success status and an unparseable body are indistinguishable to
    /// callers, by design.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Option<T> {
        let url = self.endpoint(path, query)?;
        let token = self.bearer()?;

        let response = match self.http.get(url).bearer_auth(&token).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, path, "GET transport failure");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), path, "GET returned non-success status");
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, path, "GET body not deserializable");
                None
            }
        }
    }

    /// Authenticated PATCH with a JSON body. `None` is the write-failure
    /// sentinel; callers must check the return value rather than expect an
    /// error to propagate.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Option<T> {
        let url = self.endpoint(path, query)?;
        let token = self.bearer()?;

        let response = match self
            .http
            .patch(url)
            .bearer_auth(&token)
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, path, "PATCH transport failure");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), path, "PATCH returned non-success status");
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, path, "PATCH response not deserializable");
                None
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> RemoteClient {
        let config = KicConfig::new("https://kic.example.nl", "id", "secret");
        RemoteClient::with_http_client(&config, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn endpoint_joins_below_the_domain() {
        let url = remote().endpoint(paths::PARTIES, &[]).unwrap();
        assert_eq!(url.as_str(), "https://kic.example.nl/api/kic/v1/partijen");
    }

    #[test]
    fn endpoint_encodes_query_pairs() {
        let url = remote()
            .endpoint(paths::PARTIES, &[(paths::SUBJECT_FILTER, "999990011")])
            .unwrap();
        assert_eq!(
            url.query(),
            Some("externeIdentificaties.partijIdentificator.objectId=999990011")
        );
    }

    #[test]
    fn endpoint_percent_encodes_url_values() {
        let url = remote()
            .endpoint(
                paths::CONTACT_INVOLVEMENTS,
                &[("partij", "https://kic.example.nl/api/kic/v1/partijen/p1")],
            )
            .unwrap();
        assert!(url.query().unwrap().contains("partij=https%3A%2F%2F"));
    }

    #[test]
    fn digital_address_path_embeds_the_id() {
        assert_eq!(
            paths::digital_address("abc-123"),
            "api/kic/v1/digitaaladressen/abc-123"
        );
    }
}
