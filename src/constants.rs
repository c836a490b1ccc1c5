//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the remote threat database, only edit this file
//! (or set the matching environment variable).

/// Default remote threat database URL
///
/// Fallback when `SPYGUARD_DB_URL` is not set.
pub const DEFAULT_THREAT_DB_URL: &str = "https://api.spyguard.app/database/v1/threats.json";

/// Default fetch timeout for the remote database (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SpyGuard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get threat database URL from environment or use default
pub fn get_threat_db_url() -> String {
    std::env::var("SPYGUARD_DB_URL")
        .unwrap_or_else(|_| DEFAULT_THREAT_DB_URL.to_string())
}

/// Get fetch timeout from environment or use default
pub fn get_fetch_timeout_secs() -> u64 {
    std::env::var("SPYGUARD_DB_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
}

/// Check if the remote database refresh is enabled
pub fn is_remote_refresh_enabled() -> bool {
    std::env::var("SPYGUARD_REMOTE_DB")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
