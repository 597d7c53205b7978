//! Resolver configuration

use mtg_common::scryfall::SCRYFALL_API_BASE;
use std::time::Duration;

/// User-Agent sent with every Scryfall request
pub const USER_AGENT: &str = "D2D-Automations-DeckImport/1.0";

/// Bounded retry policy for a single card lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one. Zero disables retrying.
    pub max_retries: u32,
    /// Base delay; attempt `n` waits `delay * n` before retrying
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.delay.saturating_mul(attempt)
    }
}

/// Settings for [`crate::resolver::DecklistResolver`]
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Scryfall API base URL, without trailing slash
    pub base_url: String,
    pub user_agent: String,
    /// Maximum number of lookups in flight. 1 means strictly sequential.
    pub concurrency: usize,
    pub retry: RetryPolicy,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Reuse successful lookups for repeated card names
    pub cache_enabled: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: SCRYFALL_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            concurrency: 1,
            retry: RetryPolicy::default(),
            timeout: None,
            cache_enabled: true,
        }
    }
}

impl ResolverConfig {
    /// Config pointing at a different API endpoint (mock servers, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL with any trailing slashes removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl ResolverConfig {
    /// Reject settings the resolver cannot run with
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.concurrency == 0 {
            return Err(crate::error::ImportError::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.normalized_base_url().is_empty() {
            return Err(crate::error::ImportError::Config(
                "base URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_plain_lookup_behavior() {
        let config = ResolverConfig::default();
        assert_eq!(config.base_url, "https://api.scryfall.com");
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.retry.max_retries, 0);
        assert!(config.timeout.is_none());
        assert!(config.cache_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backoff_grows_linearly() {
        let policy = RetryPolicy {
            max_retries: 3,
            delay: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(3), Duration::from_millis(300));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let zero = ResolverConfig {
            concurrency: 0,
            ..ResolverConfig::default()
        };
        assert!(zero.validate().is_err());

        assert!(ResolverConfig::with_base_url("/").validate().is_err());
        assert_eq!(
            ResolverConfig::with_base_url("http://localhost:8080//").normalized_base_url(),
            "http://localhost:8080"
        );
    }
}
