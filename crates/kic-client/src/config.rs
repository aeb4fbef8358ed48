//! Client configuration.
//!
//! Three values drive the whole client: the API domain and a client id/secret
//! pair used for the self-signed bearer assertion. Validation happens at
//! client construction, so an unconfigured deployment fails before any
//! request is attempted.

use reqwest::Url;
use serde::Deserialize;

use crate::error::KicError;

/// Environment variable holding the API domain.
pub const ENV_API_DOMAIN: &str = "KIC_API_DOMAIN";
/// Environment variable holding the client id.
pub const ENV_CLIENT_ID: &str = "KIC_CLIENT_ID";
/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "KIC_CLIENT_SECRET";

/// Configuration for a [`crate::KicClient`].
#[derive(Debug, Clone, Deserialize)]
pub struct KicConfig {
    /// Absolute base URL of the klantinteractie API, e.g. `https://kic.example.nl`.
    pub api_domain: String,
    /// OAuth-style client id; also fills the token's identity claims.
    pub client_id: String,
    /// Shared secret used as the HS256 signing key.
    pub client_secret: String,
}

impl KicConfig {
    /// Create a configuration from its three parts.
    #[must_use]
    pub fn new(
        api_domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_domain: api_domain.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Load the configuration from `KIC_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`KicError::ConfigMissing`] for the first unset variable.
    pub fn from_env() -> Result<Self, KicError> {
        Self::from_env_with(|var| std::env::var(var).ok())
    }

    /// Load the configuration through an environment lookup function.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`KicError::ConfigMissing`] for the first missing variable.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, KicError> {
        let read = |var: &str, field: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(KicError::ConfigMissing { field })
        };
        Ok(Self {
            api_domain: read(ENV_API_DOMAIN, "api_domain")?,
            client_id: read(ENV_CLIENT_ID, "client_id")?,
            client_secret: read(ENV_CLIENT_SECRET, "client_secret")?,
        })
    }

    /// Validate the configuration without building a client.
    ///
    /// # Errors
    ///
    /// Returns [`KicError::ConfigMissing`] or [`KicError::InvalidDomain`].
    pub fn validate(&self) -> Result<(), KicError> {
        let _ = self.base_url()?;
        Ok(())
    }

    /// Parse the API domain into a base URL, normalized to a trailing slash
    /// so resource paths join below it instead of replacing the last segment.
    pub(crate) fn base_url(&self) -> Result<Url, KicError> {
        if self.api_domain.trim().is_empty() {
            return Err(KicError::ConfigMissing {
                field: "api_domain",
            });
        }
        if self.client_id.trim().is_empty() {
            return Err(KicError::ConfigMissing { field: "client_id" });
        }
        if self.client_secret.trim().is_empty() {
            return Err(KicError::ConfigMissing {
                field: "client_secret",
            });
        }

        let normalized = if self.api_domain.ends_with('/') {
            self.api_domain.clone()
        } else {
            format!("{}/", self.api_domain)
        };

        let url = Url::parse(&normalized).map_err(|e| KicError::InvalidDomain {
            domain: self.api_domain.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(KicError::InvalidDomain {
                domain: self.api_domain.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(url)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
