//! Error taxonomy for the klantinteractie client.
//!
//! Reads never raise — absence of data is expressed as `None` / empty
//! containers so a pre-fill UI degrades instead of breaking. Only client
//! construction and the write path surface typed errors.

use thiserror::Error;

/// Errors raised while constructing a client or signing tokens.
#[derive(Debug, Error)]
pub enum KicError {
    /// A required configuration value is unset or blank.
    #[error("configuration incomplete: missing {field}")]
    ConfigMissing {
        /// Name of the missing configuration field.
        field: &'static str,
    },
    /// The configured API domain is not a valid absolute http(s) URL.
    #[error("invalid API domain {domain}: {reason}")]
    InvalidDomain {
        /// The rejected domain value.
        domain: String,
        /// Error description.
        reason: String,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild {
        /// Error description.
        reason: String,
    },
    /// Failed to sign the bearer assertion.
    #[error("failed to sign access token: {reason}")]
    TokenSign {
        /// Error description.
        reason: String,
    },
}

/// Failures reported by [`crate::KicClient::set_field`].
///
/// A write fans out over every party record of the subject. Already-applied
/// patches stand when a later one fails; the first failure encountered is
/// what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldWriteError {
    /// No subject identifier was given and the resolver produced none.
    #[error("no subject identifier available")]
    SubjectUnresolved,
    /// The party fetch yielded no data for the subject.
    #[error("no party records found for subject")]
    NoPartyData,
    /// The field name is not one of the known logical fields.
    #[error("the field ({field}) was not found")]
    FieldNotFound {
        /// The unknown field name.
        field: String,
    },
    /// A targeted update of an existing backend resource failed.
    #[error("the field ({field}) could not be set")]
    UpdateFailed {
        /// Logical name of the field being written.
        field: String,
    },
    /// Creating a new digital address on a party record failed.
    #[error("the field ({field}) could not be added")]
    AdditionFailed {
        /// Logical name of the field being written.
        field: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
