//! Scryfall API client for exact-name card lookups
//!
//! Uses async reqwest for non-blocking HTTP requests.

use crate::config::{ResolverConfig, RetryPolicy};
use mtg_common::{ApiError, ApiResult, ScryfallCard, ScryfallErrorBody};

/// Async Scryfall client sharing one connection pool
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ScryfallClient {
    pub fn new(config: &ResolverConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.normalized_base_url().to_string(),
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the exact-name lookup for `name`
    pub fn named_url(&self, name: &str) -> String {
        format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Fetch a card by exact name, retrying transient failures per the
    /// configured [`RetryPolicy`]
    pub async fn fetch_card_named(&self, name: &str) -> ApiResult<ScryfallCard> {
        let mut attempt = 0;
        loop {
            match self.fetch_card_named_once(name).await {
                Ok(card) => return Ok(card),
                Err(e) if e.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    let wait = self.retry.backoff(attempt);
                    log::warn!(
                        "Lookup for {} failed ({}), retry {}/{} in {:?}",
                        name,
                        e,
                        attempt,
                        self.retry.max_retries,
                        wait
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_card_named_once(&self, name: &str) -> ApiResult<ScryfallCard> {
        let url = self.named_url(name);
        log::debug!("Fetching card from Scryfall: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        // A bad payload is a parse error, not a network error
        let body = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str::<ScryfallCard>(&body)?)
        } else {
            match serde_json::from_str::<ScryfallErrorBody>(&body) {
                Ok(error) => Err(ApiError::ApiResponse {
                    status: status.as_u16(),
                    code: error.code,
                    details: error.details,
                }),
                Err(_) => Err(ApiError::HttpStatus(status)),
            }
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
