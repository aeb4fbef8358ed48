//! Contact-moments lookup.
//!
//! A secondary read path that fans out from a subject's party records to its
//! interaction history. Unlike field reads this always hits the backend: the
//! party list is fetched fresh (no cache, no address re-fetch) because the
//! history view must reflect the current set of parties.

use tracing::debug;

use crate::transport::{RemoteClient, paths};
use crate::types::{ContactMoment, ContactMomentPage, PartyPage};

/// All contact-moment involvements for a subject, flattened across its party
/// records: party iteration order first, backend response order within each.
///
/// A party whose involvement lookup fails is skipped; an empty or failed
/// party fetch yields an empty sequence.
pub(crate) async fn list_for_subject(remote: &RemoteClient, subject: &str) -> Vec<ContactMoment> {
    let Some(parties) = remote
        .get::<PartyPage>(paths::PARTIES, &[(paths::SUBJECT_FILTER, subject)])
        .await
    else {
        return Vec::new();
    };

    let mut moments = Vec::new();
    for party in &parties.results {
        let Some(involved) = remote
            .get::<ContactMomentPage>(
                paths::CONTACT_INVOLVEMENTS,
                &[("partij", party.self_ref.url.as_str())],
            )
            .await
        else {
            continue;
        };
        moments.extend(involved.results);
    }

    debug!(count = moments.len(), "collected contact moments");
    moments
}
