//! Threat Database Types

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Whitelist/blacklist pair. Immutable once built; refresh swaps in a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatSnapshot {
    whitelist: HashSet<String>,
    blacklist: HashSet<String>,
}

impl ThreatSnapshot {
    pub fn new<W, B>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive. Empty package names never match.
    pub fn is_whitelisted(&self, package_name: &str) -> bool {
        !package_name.is_empty() && self.whitelist.contains(package_name)
    }

    /// Exact, case-sensitive. Empty package names never match.
    pub fn is_blacklisted(&self, package_name: &str) -> bool {
        !package_name.is_empty() && self.blacklist.contains(package_name)
    }

    pub fn whitelist_len(&self) -> usize {
        self.whitelist.len()
    }

    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }

    /// SHA-256 over the sorted entries of both lists
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (tag, list) in [("w", &self.whitelist), ("b", &self.blacklist)] {
            let mut entries: Vec<&String> = list.iter().collect();
            entries.sort();
            for entry in entries {
                hasher.update(tag.as_bytes());
                hasher.update(entry.as_bytes());
                hasher.update([0u8]);
            }
        }
        hex::encode(hasher.finalize())
    }
}

/// Remote payload shape. Both fields are required; anything else is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPayload {
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

impl From<FeedPayload> for ThreatSnapshot {
    fn from(payload: FeedPayload) -> Self {
        ThreatSnapshot::new(payload.whitelist, payload.blacklist)
    }
}

// ============================================================================
// PROVENANCE & STATUS
// ============================================================================

/// Where the current snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Fetched from the remote source this session
    Online,
    /// Embedded default, or last refresh failed
    Offline,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Online => "online",
            Provenance::Offline => "offline",
        }
    }

    pub fn is_online(&self) -> bool {
        *self == Provenance::Online
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic view of the database
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    pub provenance: Provenance,
    pub last_fetch: Option<DateTime<Utc>>,
    pub whitelist_count: usize,
    pub blacklist_count: usize,
    pub fingerprint: String,
}

impl DatabaseStatus {
    pub fn is_online(&self) -> bool {
        self.provenance.is_online()
    }
}
