//! Remote Threat Database Client
//!
//! One-shot GET with a bounded timeout. No retry.

use std::time::Duration;

use thiserror::Error;

use super::types::{FeedPayload, ThreatSnapshot};

/// Remote database configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub timeout: Duration,
    /// When false, refresh never touches the network
    pub enabled: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            url: constants::get_threat_db_url(),
            timeout: Duration::from_secs(constants::get_fetch_timeout_secs()),
            enabled: constants::is_remote_refresh_enabled(),
        }
    }
}

impl FeedConfig {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            enabled: true,
        }
    }

    /// Config that keeps the store on its offline default
    pub fn disabled() -> Self {
        Self {
            url: String::new(),
            timeout: Duration::from_secs(crate::constants::DEFAULT_FETCH_TIMEOUT_SECS),
            enabled: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Remote database disabled")]
    Disabled,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// HTTP client for the remote database
pub struct RemoteFeed {
    config: FeedConfig,
    http_client: reqwest::Client,
}

impl RemoteFeed {
    pub fn new(config: FeedConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("HTTP client builder failed ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self { config, http_client }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch and validate a snapshot. The timeout bounds the whole exchange;
    /// when it fires the in-flight request is dropped.
    pub async fn fetch(&self) -> Result<ThreatSnapshot, FeedError> {
        if !self.config.enabled {
            return Err(FeedError::Disabled);
        }

        match tokio::time::timeout(self.config.timeout, self.fetch_inner()).await {
            Ok(result) => result,
            Err(_) => Err(FeedError::Timeout(self.config.timeout)),
        }
    }

    async fn fetch_inner(&self) -> Result<ThreatSnapshot, FeedError> {
        let response = self
            .http_client
            .get(&self.config.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify_transport_error(e, self.config.timeout))?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(e, self.config.timeout))?;

        parse_payload(&body)
    }
}

fn classify_transport_error(e: reqwest::Error, timeout: Duration) -> FeedError {
    if e.is_timeout() {
        FeedError::Timeout(timeout)
    } else {
        FeedError::Network(e.to_string())
    }
}

/// Body must be a JSON object carrying both `whitelist` and `blacklist` string arrays
pub fn parse_payload(body: &[u8]) -> Result<ThreatSnapshot, FeedError> {
    let payload: FeedPayload =
        serde_json::from_slice(body).map_err(|e| FeedError::Malformed(e.to_string()))?;
    Ok(payload.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let snapshot = parse_payload(br#"{"whitelist":["a.b"],"blacklist":["c.d"],"version":7}"#).unwrap();
        assert!(snapshot.is_whitelisted("a.b"));
        assert!(snapshot.is_blacklisted("c.d"));
    }

    #[test]
    fn test_parse_accepts_empty_lists() {
        let snapshot = parse_payload(br#"{"whitelist":[],"blacklist":[]}"#).unwrap();
        assert_eq!(snapshot.whitelist_len(), 0);
        assert_eq!(snapshot.blacklist_len(), 0);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_payload(br#"{"whitelist":["a.b"]}"#).unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_payload(br#"{"whitelist":"a.b","blacklist":[]}"#).is_err());
        assert!(parse_payload(br#"{"whitelist":null,"blacklist":[]}"#).is_err());
        assert!(parse_payload(b"<html>not json</html>").is_err());
        assert!(parse_payload(b"[]").is_err());
    }

    #[tokio::test]
    async fn test_disabled_feed_never_fetches() {
        let feed = RemoteFeed::new(FeedConfig::disabled());
        assert!(matches!(feed.fetch().await, Err(FeedError::Disabled)));
    }
}
