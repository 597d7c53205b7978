//! Decklist resolver
//!
//! Turns raw decklist text into card entries with image references. Each
//! line is looked up on Scryfall by exact name. Lines that cannot be
//! resolved are logged and left out of the result; resolution as a whole
//! never fails.

use crate::cache::LookupCache;
use crate::config::ResolverConfig;
use crate::decklist::{parse_decklist, DecklistLine, InvalidLine};
use crate::error::Result;
use crate::scryfall::ScryfallClient;
use futures::stream::{self, StreamExt};
use mtg_common::{ApiError, ApiResult, ScryfallCard};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A decklist line resolved to a Scryfall card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCard {
    /// Scryfall card id
    pub id: String,
    /// The name as typed in the decklist, not Scryfall's canonical name
    pub name: String,
    pub quantity: u32,
    /// Normal-size image URL
    pub image_url: String,
}

/// A decklist line that produced no entry, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedLine {
    pub line_number: usize,
    pub raw: String,
    /// `None` when the line could not be parsed
    pub card_name: Option<String>,
    pub quantity: Option<u32>,
    pub reason: String,
}

impl UnresolvedLine {
    fn lookup_failed(line: DecklistLine, reason: String) -> Self {
        Self {
            line_number: line.line_number,
            raw: line.raw,
            card_name: Some(line.card_name),
            quantity: Some(line.quantity),
            reason,
        }
    }
}

impl From<InvalidLine> for UnresolvedLine {
    fn from(line: InvalidLine) -> Self {
        Self {
            line_number: line.line_number,
            raw: line.raw,
            card_name: None,
            quantity: None,
            reason: line.reason,
        }
    }
}

/// Outcome of resolving a whole decklist, both lists in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub resolved: Vec<ResolvedCard>,
    pub unresolved: Vec<UnresolvedLine>,
}

pub struct DecklistResolver {
    client: ScryfallClient,
    cache: Option<LookupCache>,
    concurrency: usize,
}

impl DecklistResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: ScryfallClient::new(config)?,
            cache: config.cache_enabled.then(LookupCache::new),
            concurrency: config.concurrency,
        })
    }

    pub fn cache(&self) -> Option<&LookupCache> {
        self.cache.as_ref()
    }

    /// Resolve a decklist to card entries in input order.
    ///
    /// Unresolvable lines are omitted. Use [`Self::resolve_detailed`] to see
    /// which lines were skipped.
    pub async fn resolve(&self, raw_text: &str) -> Vec<ResolvedCard> {
        self.resolve_detailed(raw_text).await.resolved
    }

    /// Resolve a decklist, reporting skipped lines alongside the entries.
    ///
    /// At most `concurrency` lookups are in flight; with the default of 1
    /// each lookup starts only after the previous one finished. Results are
    /// yielded in input order regardless of response timing. With the cache
    /// enabled, repeated names share one lookup even when they would be in
    /// flight at the same time.
    pub async fn resolve_detailed(&self, raw_text: &str) -> Resolution {
        let parsed = parse_decklist(raw_text);
        let total = parsed.len();

        // Names to fetch, in first-appearance order, and the job each line reads
        let mut jobs: Vec<String> = Vec::new();
        let mut job_by_name: HashMap<String, usize> = HashMap::new();
        let mut planned: Vec<std::result::Result<(DecklistLine, usize), InvalidLine>> =
            Vec::with_capacity(parsed.len());
        for line in parsed {
            planned.push(line.map(|line| {
                let shared = self
                    .cache
                    .as_ref()
                    .and_then(|_| job_by_name.get(&line.card_name).copied());
                let job = match shared {
                    Some(job) => job,
                    None => {
                        jobs.push(line.card_name.clone());
                        job_by_name.insert(line.card_name.clone(), jobs.len() - 1);
                        jobs.len() - 1
                    }
                };
                (line, job)
            }));
        }

        let lookups: Vec<ApiResult<ScryfallCard>> = stream::iter(jobs)
            .map(|name| async move { self.lookup(&name).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut resolution = Resolution::default();
        for line in planned {
            let outcome = match line {
                Ok((line, job)) => Self::resolve_line(line, &lookups[job]),
                Err(invalid) => {
                    log::warn!(
                        "Skipping line {} ({}): {}",
                        invalid.line_number,
                        invalid.raw,
                        invalid.reason
                    );
                    Err(UnresolvedLine::from(invalid))
                }
            };
            match outcome {
                Ok(card) => resolution.resolved.push(card),
                Err(line) => resolution.unresolved.push(line),
            }
        }

        log::info!(
            "Resolved {} of {} decklist lines ({} skipped)",
            resolution.resolved.len(),
            total,
            resolution.unresolved.len()
        );
        resolution
    }

    fn resolve_line(
        line: DecklistLine,
        lookup: &ApiResult<ScryfallCard>,
    ) -> std::result::Result<ResolvedCard, UnresolvedLine> {
        let image = match lookup {
            Ok(card) => card
                .image_url()
                .map(|url| (card.id.clone(), url.to_string()))
                .ok_or_else(|| ApiError::NoImageAvailable(line.card_name.clone()).to_string()),
            Err(e) => Err(e.to_string()),
        };

        match image {
            Ok((id, image_url)) => Ok(ResolvedCard {
                id,
                name: line.card_name,
                quantity: line.quantity,
                image_url,
            }),
            Err(reason) => {
                log::warn!("Error fetching card: {}: {}", line.card_name, reason);
                Err(UnresolvedLine::lookup_failed(line, reason))
            }
        }
    }

    async fn lookup(&self, name: &str) -> ApiResult<ScryfallCard> {
        if let Some(card) = self.cache.as_ref().and_then(|cache| cache.get(name)) {
            return Ok(card);
        }

        let card = self.client.fetch_card_named(name).await?;
        if let Some(cache) = &self.cache {
            cache.insert(name, card.clone());
        }
        Ok(card)
    }
}

/// Resolve a decklist against the public Scryfall API with default settings
pub async fn resolve(raw_text: &str) -> Result<Vec<ResolvedCard>> {
    let resolver = DecklistResolver::new(&ResolverConfig::default())?;
    Ok(resolver.resolve(raw_text).await)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
