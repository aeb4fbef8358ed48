//! Per-subject cache of party records.
//!
//! One cache per client, keyed by subject identifier, living for the process
//! lifetime. There is no TTL and no persistence: within a request flow the
//! cached collection is the single source of truth, and writes overwrite it
//! with their mutated copy.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::transport::{RemoteClient, paths};
use crate::types::{DigitalAddress, PartyPage};

/// In-process store of the last-fetched party collection per subject.
#[derive(Debug, Default)]
pub struct SubjectCache {
    entries: RwLock<HashMap<String, PartyPage>>,
}

impl SubjectCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the party records for a subject, fetching on first use.
    ///
    /// A miss performs a two-phase fetch: the filtered party list, then one
    /// follow-up GET per embedded digital address. The list endpoint serves
    /// stale embedded objects upstream, so each embedded copy is replaced by
    /// its individually fetched representation. Skipping the second phase
    /// reintroduces a known data-staleness bug.
    ///
    /// `None` means no data could be obtained; callers cannot distinguish an
    /// unknown subject from a backend outage, by design.
    pub async fn fetch(&self, remote: &RemoteClient, subject: &str) -> Option<PartyPage> {
        if let Some(page) = self.entries.read().get(subject).cloned() {
            return Some(page);
        }

        let mut page: PartyPage = remote
            .get(paths::PARTIES, &[(paths::SUBJECT_FILTER, subject)])
            .await?;

        for party in &mut page.results {
            for address in &mut party.embedded.granted_addresses {
                match remote
                    .get::<DigitalAddress>(&paths::digital_address(&address.self_ref.id), &[])
                    .await
                {
                    Some(fresh) => *address = fresh,
                    // Keep the embedded copy rather than dropping the address.
                    None => warn!(
                        address_id = %address.self_ref.id,
                        "address re-fetch failed; keeping embedded copy"
                    ),
                }
            }
        }

        debug!(parties = page.results.len(), "cached party records for subject");
        let _ = self
            .entries
            .write()
            .insert(subject.to_string(), page.clone());
        Some(page)
    }

    /// Overwrite the cached collection for a subject; used after writes so
    /// later reads see the mutated copy without a round-trip.
    pub fn store(&self, subject: &str, page: PartyPage) {
        let _ = self.entries.write().insert(subject.to_string(), page);
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, subject: &str) -> bool {
        self.entries.read().contains_key(subject)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
