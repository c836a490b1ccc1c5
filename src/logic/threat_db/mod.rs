//! Threat Database Module - Layer 1 data
//!
//! Whitelist/blacklist của package names, với online refresh và
//! offline fallback.
//!
//! ## Structure
//! - `types`: Snapshot, provenance, status
//! - `offline`: Embedded default database
//! - `feed`: Remote fetch with timeout
//! - `store`: The owned store (`ThreatDatabase`)

pub mod types;
pub mod offline;
pub mod feed;
pub mod store;


pub use types::{DatabaseStatus, FeedPayload, Provenance, ThreatSnapshot};
pub use offline::{offline_snapshot, OFFLINE_BLACKLIST, OFFLINE_WHITELIST};
pub use feed::{FeedConfig, FeedError, RemoteFeed};
pub use store::ThreatDatabase;
