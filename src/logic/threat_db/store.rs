//! Threat Database Store
//!
//! Owns the current snapshot. Readers grab an `Arc` to the snapshot and keep
//! it for the duration of a classification; refresh swaps the `Arc` under the
//! write lock, so nobody observes a mix of old and new entries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::feed::{FeedConfig, FeedError, RemoteFeed};
use super::offline::offline_snapshot;
use super::types::{DatabaseStatus, Provenance, ThreatSnapshot};

struct DatabaseState {
    snapshot: Arc<ThreatSnapshot>,
    provenance: Provenance,
    last_fetch: Option<DateTime<Utc>>,
}

pub struct ThreatDatabase {
    state: RwLock<DatabaseState>,
    feed: RemoteFeed,
    /// Single-flight guard for refresh
    refresh_lock: tokio::sync::Mutex<()>,
}

impl ThreatDatabase {
    /// Store seeded with the embedded offline database
    pub fn new(config: FeedConfig) -> Self {
        Self::with_snapshot(offline_snapshot(), config)
    }

    /// Store seeded with an explicit snapshot (provenance offline)
    pub fn with_snapshot(snapshot: ThreatSnapshot, config: FeedConfig) -> Self {
        Self {
            state: RwLock::new(DatabaseState {
                snapshot: Arc::new(snapshot),
                provenance: Provenance::Offline,
                last_fetch: None,
            }),
            feed: RemoteFeed::new(config),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Offline-only store; refresh is a no-op that reports offline
    pub fn offline() -> Self {
        Self::new(FeedConfig::disabled())
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ThreatSnapshot> {
        Arc::clone(&self.state.read().snapshot)
    }

    pub fn is_whitelisted(&self, package_name: &str) -> bool {
        self.state.read().snapshot.is_whitelisted(package_name)
    }

    pub fn is_blacklisted(&self, package_name: &str) -> bool {
        self.state.read().snapshot.is_blacklisted(package_name)
    }

    pub fn status(&self) -> DatabaseStatus {
        let state = self.state.read();
        DatabaseStatus {
            provenance: state.provenance,
            last_fetch: state.last_fetch,
            whitelist_count: state.snapshot.whitelist_len(),
            blacklist_count: state.snapshot.blacklist_len(),
            fingerprint: state.snapshot.fingerprint(),
        }
    }

    /// Try to pull a fresh snapshot. Never fails: on any error the current
    /// snapshot stays authoritative and provenance drops to offline.
    ///
    /// A call made while another refresh is in flight waits for that one and
    /// returns its outcome instead of issuing a second request.
    pub async fn refresh(&self) -> DatabaseStatus {
        let _guard = match self.refresh_lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::debug!("Refresh already in flight, joining");
                let _joined = self.refresh_lock.lock().await;
                return self.status();
            }
        };

        match self.feed.fetch().await {
            Ok(snapshot) => {
                log::info!(
                    "Threat database refreshed: {} whitelisted, {} blacklisted",
                    snapshot.whitelist_len(),
                    snapshot.blacklist_len()
                );
                self.replace(snapshot, Utc::now());
            }
            Err(FeedError::Disabled) => {
                log::debug!("Remote database disabled, staying offline");
                self.mark_offline();
            }
            Err(e) => {
                log::warn!("Using offline database (remote fetch failed: {})", e);
                self.mark_offline();
            }
        }

        self.status()
    }

    /// Swap in a new snapshot wholesale
    fn replace(&self, snapshot: ThreatSnapshot, fetched_at: DateTime<Utc>) {
        let mut state = self.state.write();
        *state = DatabaseState {
            snapshot: Arc::new(snapshot),
            provenance: Provenance::Online,
            last_fetch: Some(fetched_at),
        };
    }

    fn mark_offline(&self) {
        self.state.write().provenance = Provenance::Offline;
    }
}

impl Default for ThreatDatabase {
    fn default() -> Self {
        Self::new(FeedConfig::default())
    }
}
