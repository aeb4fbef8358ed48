//! Wire model for the klantinteractie resource graph.
//!
//! Field names follow the nationally-specified Dutch wire format; the Rust
//! names translate them. Collections default to empty so a sparse backend
//! payload still deserializes.

use serde::{Deserialize, Serialize};

/// Self-reference of a backend resource: its id plus its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Resource id, used for targeted follow-up requests.
    pub id: String,
    /// Canonical URL of the resource.
    #[serde(rename = "self")]
    pub url: String,
}

/// A typed contact channel attached to a party record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalAddress {
    /// Self-reference used for targeted updates.
    #[serde(rename = "_self")]
    pub self_ref: ResourceRef,
    /// Channel kind, e.g. `emailadres` or `telefoon`.
    #[serde(rename = "soortDigitaalAdres")]
    pub kind: String,
    /// The address value itself.
    #[serde(rename = "adres")]
    pub value: String,
    /// Human-readable label, set when the address is created.
    #[serde(rename = "omschrijving", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Embedded sub-resources of a party record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyEmbedded {
    /// Digital addresses granted to this party.
    #[serde(rename = "verstrekteAdressen", default)]
    pub granted_addresses: Vec<DigitalAddress>,
    /// The preferred channel, resolved to its full address representation.
    #[serde(rename = "voorkeurskanaal", default, skip_serializing_if = "Option::is_none")]
    pub preferred_channel: Option<DigitalAddress>,
}

/// A subject's registered relationship with the backend; a subject may have
/// several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party id, used for targeted patches.
    pub id: String,
    /// Self-reference of the party.
    #[serde(rename = "_self")]
    pub self_ref: ResourceRef,
    /// Pointer (self-URL) to the preferred digital address.
    #[serde(rename = "voorkeurskanaal", default, skip_serializing_if = "Option::is_none")]
    pub preferred_channel: Option<String>,
    /// Embedded address collection and resolved preference.
    #[serde(default)]
    pub embedded: PartyEmbedded,
}

impl Party {
    /// Kind of the preferred channel, if the preference resolves.
    ///
    /// A preference must reference an address present in this party's own
    /// collection; a dangling pointer is treated as no preference at all.
    #[must_use]
    pub fn preferred_kind(&self) -> Option<&str> {
        let preferred = self.embedded.preferred_channel.as_ref()?;
        self.embedded
            .granted_addresses
            .iter()
            .any(|address| address.self_ref.id == preferred.self_ref.id)
            .then(|| preferred.kind.as_str())
    }
}

/// One page of party records, as returned by the filtered list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPage {
    /// The party records.
    #[serde(default)]
    pub results: Vec<Party>,
}

/// A historical interaction record involving a party. Read-only; the core
/// never mutates these, so the payload is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactMoment(pub serde_json::Value);

/// One page of contact-moment involvements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMomentPage {
    /// The involvement records.
    #[serde(default)]
    pub results: Vec<ContactMoment>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
