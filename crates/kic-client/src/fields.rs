//! Logical field registry and read helpers.
//!
//! Consumers address contact data through three logical names: `email`,
//! `phone` and `communication-preference`. The first two are contact fields
//! with a backend kind/label pair used when creating a new digital address;
//! the preference field selects among the existing contact fields.

use crate::types::{Party, PartyPage};

/// Logical name of the preference field.
pub const PREFERENCE_FIELD: &str = "communication-preference";

/// Backend kind/label pair for a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFieldSpec {
    /// Backend address kind (`soortDigitaalAdres`).
    pub kind: &'static str,
    /// Backend label (`omschrijving`) stamped onto newly created addresses.
    pub label: &'static str,
}

/// A logical field recognized by the accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Email address contact field.
    Email,
    /// Phone number contact field.
    Phone,
    /// Preferred-channel selector.
    Preference,
}

impl Field {
    /// Resolve a logical field name; unknown names are `None`, not an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            PREFERENCE_FIELD => Some(Self::Preference),
            _ => None,
        }
    }

    /// The logical name of this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Preference => PREFERENCE_FIELD,
        }
    }

    /// Backend kind/label pair; `None` for the preference field, which never
    /// creates addresses.
    #[must_use]
    pub fn contact_spec(self) -> Option<ContactFieldSpec> {
        match self {
            Self::Email => Some(ContactFieldSpec {
                kind: "emailadres",
                label: "email-adres",
            }),
            Self::Phone => Some(ContactFieldSpec {
                kind: "telefoon",
                label: "telefoonnummer",
            }),
            Self::Preference => None,
        }
    }
}

/// First address value of the given kind across all party records, in party
/// order then address order.
#[must_use]
pub(crate) fn contact_value<'a>(page: &'a PartyPage, kind: &str) -> Option<&'a str> {
    page.results
        .iter()
        .flat_map(|party| party.embedded.granted_addresses.iter())
        .find(|address| address.kind == kind)
        .map(|address| address.value.as_str())
}

/// Kind of the first party's resolvable preference, if any.
#[must_use]
pub(crate) fn preference_kind(page: &PartyPage) -> Option<&str> {
    page.results.iter().find_map(Party::preferred_kind)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::types::{DigitalAddress, Party, PartyEmbedded, ResourceRef};

    use super::*;

    fn address(id: &str, kind: &str, value: &str) -> DigitalAddress {
        DigitalAddress {
            self_ref: ResourceRef {
                id: id.to_string(),
                url: format!("https://kic.example.nl/api/kic/v1/digitaaladressen/{id}"),
            },
            kind: kind.to_string(),
            value: value.to_string(),
            label: None,
        }
    }

    fn party(id: &str, addresses: Vec<DigitalAddress>) -> Party {
        Party {
            id: id.to_string(),
            self_ref: ResourceRef {
                id: id.to_string(),
                url: format!("https://kic.example.nl/api/kic/v1/partijen/{id}"),
            },
            preferred_channel: None,
            embedded: PartyEmbedded {
                granted_addresses: addresses,
                preferred_channel: None,
            },
        }
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(Field::from_name("email"), Some(Field::Email));
        assert_eq!(Field::from_name("phone"), Some(Field::Phone));
        assert_eq!(
            Field::from_name("communication-preference"),
            Some(Field::Preference)
        );
        assert_eq!(Field::from_name("fax"), None);
    }

    #[test]
    fn contact_specs_carry_backend_kind_and_label() {
        let email = Field::Email.contact_spec().unwrap();
        assert_eq!((email.kind, email.label), ("emailadres", "email-adres"));

        let phone = Field::Phone.contact_spec().unwrap();
        assert_eq!((phone.kind, phone.label), ("telefoon", "telefoonnummer"));

        assert!(Field::Preference.contact_spec().is_none());
    }

    #[test]
    fn first_match_wins_across_parties() {
        let page = PartyPage {
            results: vec![
                party("p1", vec![address("a1", "telefoon", "0611111111")]),
                party(
                    "p2",
                    vec![
                        address("a2", "emailadres", "first@example.nl"),
                        address("a3", "emailadres", "second@example.nl"),
                    ],
                ),
            ],
        };

        assert_eq!(contact_value(&page, "emailadres"), Some("first@example.nl"));
        assert_eq!(contact_value(&page, "telefoon"), Some("0611111111"));
        assert_eq!(contact_value(&page, "fax"), None);
    }

    #[test]
    fn preference_kind_skips_parties_without_one() {
        let preferred = address("a2", "telefoon", "0612345678");
        let mut with_preference = party("p2", vec![preferred.clone()]);
        with_preference.preferred_channel = Some(preferred.self_ref.url.clone());
        with_preference.embedded.preferred_channel = Some(preferred);

        let page = PartyPage {
            results: vec![party("p1", vec![]), with_preference],
        };

        assert_eq!(preference_kind(&page), Some("telefoon"));
    }
}
