//! # kic-client
//!
//! Client for the Dutch "klantinteractie" (customer interaction) REST API:
//! authenticated access to a subject's party records plus a small
//! field-synchronization engine on top of them.
//!
//! The crate exposes three logical contact fields — `email`, `phone` and
//! `communication-preference` — mapped onto the nested party → digital-address
//! graph the backend serves, and reconciles edits back into that graph with
//! create-vs-update disambiguation per party record.
//!
//! Key behaviors:
//! - Every HTTP call carries a fresh self-signed HS256 bearer assertion built
//!   from the configured client id/secret ([`token`]).
//! - Reads never fail: transport errors, non-success statuses and unparseable
//!   bodies all collapse into "no data" (`None` / empty), degrading pre-fill
//!   gracefully instead of erroring ([`transport`]).
//! - Party records are fetched lazily and cached per subject for the process
//!   lifetime; the fetch is two-phase because the list endpoint serves stale
//!   embedded address objects ([`cache`]).
//! - Writes fan out over every party record of the subject, with no rollback
//!   of already-applied patches; the first failure encountered is the overall
//!   result ([`client`]).
//!
//! Subject identifiers are national IDs (BSN) and are never written to logs.
//!
//! # Usage
//!
//! ```no_run
//! use kic_client::{KicClient, KicConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KicConfig::new("https://kic.example.nl", "client-id", "client-secret");
//! let client = KicClient::new(config)?;
//!
//! let email = client.get_field("email", Some("999990011")).await;
//! client.set_field("phone", "0612345678", Some("999990011")).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod cache;
pub mod client;
pub mod config;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod resolver;
pub mod token;
pub mod transport;
pub mod types;

pub use client::KicClient;
pub use config::KicConfig;
pub use error::{FieldWriteError, KicError};
pub use fields::Field;
pub use resolver::SubjectResolver;
pub use types::{ContactMoment, DigitalAddress, Party, PartyPage, ResourceRef};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _config = KicConfig::new("https://kic.example.nl", "id", "secret");
        let _field = Field::from_name("email");
    }
}
