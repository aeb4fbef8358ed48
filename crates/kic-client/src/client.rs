//! The `KicClient` facade.
//!
//! One client per process, constructed explicitly from configuration and
//! handed to consumers — no hidden global state. The facade wires the token
//! signer, transport, subject cache and field registry together and exposes
//! the four operations the form-integration layer consumes.

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;

use crate::cache::SubjectCache;
use crate::config::KicConfig;
use crate::contacts;
use crate::error::{FieldWriteError, KicError};
use crate::fields::{self, ContactFieldSpec, Field, PREFERENCE_FIELD};
use crate::resolver::SubjectResolver;
use crate::transport::{RemoteClient, paths};
use crate::types::{ContactMoment, Party, PartyPage};

/// Client for the klantinteractie API and its field-synchronization engine.
pub struct KicClient {
    remote: RemoteClient,
    cache: SubjectCache,
    resolver: Option<Arc<dyn SubjectResolver>>,
}

impl std::fmt::Debug for KicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KicClient")
            .field("remote", &self.remote)
            .finish_non_exhaustive()
    }
}

impl KicClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KicError`] when the configuration is incomplete or invalid,
    /// or the HTTP client cannot be built.
    pub fn new(config: KicConfig) -> Result<Self, KicError> {
        Ok(Self {
            remote: RemoteClient::new(&config)?,
            cache: SubjectCache::new(),
            resolver: None,
        })
    }

    /// Create a client using a pre-built `reqwest` client (test injection).
    ///
    /// # Errors
    ///
    /// Returns [`KicError`] when the configuration is incomplete or invalid.
    pub fn with_http_client(
        config: KicConfig,
        http: reqwest::Client,
    ) -> Result<Self, KicError> {
        Ok(Self {
            remote: RemoteClient::with_http_client(&config, http)?,
            cache: SubjectCache::new(),
            resolver: None,
        })
    }

    /// Attach a resolver supplying the current session's subject identifier.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn SubjectResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Explicit subject if given, otherwise whatever the resolver supplies.
    fn resolve_subject(&self, explicit: Option<&str>) -> Option<String> {
        if let Some(subject) = explicit {
            if !subject.is_empty() {
                return Some(subject.to_string());
            }
        }
        self.resolver
            .as_ref()
            .and_then(|resolver| resolver.current_subject())
            .filter(|subject| !subject.is_empty())
    }

    /// The subject's party records, fetched lazily and served from the
    /// per-subject cache afterwards. `None` when the subject cannot be
    /// resolved or the backend yields no data.
    #[instrument(skip_all)]
    pub async fn get_user_data(&self, subject: Option<&str>) -> Option<PartyPage> {
        let subject = self.resolve_subject(subject)?;
        self.cache.fetch(&self.remote, &subject).await
    }

    /// Read a logical field.
    ///
    /// `None` means the field name is unknown. A known field reads as
    /// `Some("")` when the subject is unresolved, has no data, or has no
    /// matching address — reads degrade to empty, never to an error.
    #[instrument(skip_all, fields(field = name))]
    pub async fn get_field(&self, name: &str, subject: Option<&str>) -> Option<String> {
        let field = Field::from_name(name)?;

        let Some(page) = self.get_user_data(subject).await else {
            return Some(String::new());
        };

        let value = match field.contact_spec() {
            Some(spec) => fields::contact_value(&page, spec.kind),
            None => fields::preference_kind(&page),
        };
        Some(value.unwrap_or_default().to_string())
    }

    /// Write a logical field, reconciling the value into every party record
    /// of the subject.
    ///
    /// Contact fields fan out without stopping at a failed record; the first
    /// failure encountered is the overall result and already-applied patches
    /// stand (no compensation). The preference write stops at its first
    /// failure. In both cases the mutated collection is persisted to the
    /// cache so subsequent reads see the applied part of the write.
    ///
    /// # Errors
    ///
    /// Returns [`FieldWriteError`]; see its variants for the taxonomy.
    #[instrument(skip_all, fields(field = name))]
    pub async fn set_field(
        &self,
        name: &str,
        value: &str,
        subject: Option<&str>,
    ) -> Result<(), FieldWriteError> {
        let Some(field) = Field::from_name(name) else {
            return Err(FieldWriteError::FieldNotFound {
                field: name.to_string(),
            });
        };

        let subject = self
            .resolve_subject(subject)
            .ok_or(FieldWriteError::SubjectUnresolved)?;

        match field.contact_spec() {
            Some(spec) => self.set_contact_field(field, spec, value, &subject).await,
            None => self.set_preference_field(value, &subject).await,
        }
    }

    /// All contact-moment involvements for the subject, flattened across its
    /// party records. Always fetches fresh; the field cache is bypassed.
    #[instrument(skip_all)]
    pub async fn get_contact_moments(&self, subject: Option<&str>) -> Vec<ContactMoment> {
        let Some(subject) = self.resolve_subject(subject) else {
            return Vec::new();
        };
        contacts::list_for_subject(&self.remote, &subject).await
    }

    /// Contact-field write: update the address where one of the kind exists,
    /// create one where none does.
    async fn set_contact_field(
        &self,
        field: Field,
        spec: ContactFieldSpec,
        value: &str,
        subject: &str,
    ) -> Result<(), FieldWriteError> {
        let mut page = self
            .cache
            .fetch(&self.remote, subject)
            .await
            .ok_or(FieldWriteError::NoPartyData)?;

        let mut first_failure: Option<FieldWriteError> = None;

        for party in &mut page.results {
            let mut kind_present = false;

            for address in &mut party.embedded.granted_addresses {
                if address.kind != spec.kind {
                    continue;
                }
                kind_present = true;
                if address.value == value {
                    continue;
                }

                let patched: Option<serde_json::Value> = self
                    .remote
                    .patch(
                        &paths::digital_address(&address.self_ref.id),
                        &[],
                        &json!({ "adres": value }),
                    )
                    .await;

                if patched.is_some() {
                    address.value = value.to_string();
                } else if first_failure.is_none() {
                    first_failure = Some(FieldWriteError::UpdateFailed {
                        field: field.name().to_string(),
                    });
                }
            }

            if !kind_present {
                let body = json!({
                    "verstrekteAdressen": [{
                        "soortDigitaalAdres": spec.kind,
                        "omschrijving": spec.label,
                        "adres": value,
                    }],
                });

                match self
                    .remote
                    .patch::<Party>(paths::PARTIES_PATCH, &[("id", party.id.as_str())], &body)
                    .await
                {
                    // The server's representation is authoritative after a create.
                    Some(refreshed) => *party = refreshed,
                    None => {
                        if first_failure.is_none() {
                            first_failure = Some(FieldWriteError::AdditionFailed {
                                field: field.name().to_string(),
                            });
                        }
                    }
                }
            }
        }

        self.cache.store(subject, page);
        first_failure.map_or(Ok(()), Err)
    }

    /// Preference write: repoint each party's preferred channel at its
    /// existing address of the requested kind. Parties already at the
    /// requested preference, and parties without an address of that kind,
    /// are skipped.
    async fn set_preference_field(
        &self,
        value: &str,
        subject: &str,
    ) -> Result<(), FieldWriteError> {
        let mut page = self
            .cache
            .fetch(&self.remote, subject)
            .await
            .ok_or(FieldWriteError::NoPartyData)?;

        let mut failed = false;

        for party in &mut page.results {
            if party.preferred_kind() == Some(value) {
                continue;
            }
            let Some(address) = party
                .embedded
                .granted_addresses
                .iter()
                .find(|address| address.kind == value)
                .cloned()
            else {
                continue;
            };

            let patched: Option<serde_json::Value> = self
                .remote
                .patch(
                    paths::PARTIES_PATCH,
                    &[("id", party.id.as_str())],
                    &json!({ "voorkeurskanaal": address.self_ref.id }),
                )
                .await;

            if patched.is_none() {
                failed = true;
                break;
            }

            party.preferred_channel = Some(address.self_ref.url.clone());
            party.embedded.preferred_channel = Some(address);
        }

        // Applied patches stand even when a later one failed.
        self.cache.store(subject, page);

        if failed {
            return Err(FieldWriteError::UpdateFailed {
                field: PREFERENCE_FIELD.to_string(),
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
