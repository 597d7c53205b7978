//! In-memory cache of successful Scryfall lookups
//!
//! Keyed by the exact requested name. Only successes are stored, so a
//! failing name is looked up again every time it appears.

use mtg_common::ScryfallCard;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct LookupCache {
    cards: Mutex<HashMap<String, ScryfallCard>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ScryfallCard>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.cards.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a card from cache
    pub fn get(&self, name: &str) -> Option<ScryfallCard> {
        let card = self.lock().get(name).cloned();
        if card.is_some() {
            log::debug!("Cache hit for {}", name);
        }
        card
    }

    /// Insert a card into cache
    pub fn insert(&self, name: &str, card: ScryfallCard) {
        self.lock().insert(name.to_string(), card);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str) -> ScryfallCard {
        ScryfallCard {
            id: id.to_string(),
            name: name.to_string(),
            image_uris: None,
            card_faces: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let cache = LookupCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("Sol Ring").is_none());

        cache.insert("Sol Ring", card("sol", "Sol Ring"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("Sol Ring").unwrap().id, "sol");
    }

    #[test]
    fn test_keys_are_exact() {
        let cache = LookupCache::new();
        cache.insert("Sol Ring", card("sol", "Sol Ring"));

        assert!(cache.get("sol ring").is_none());
        assert!(cache.get("Sol Ring ").is_none());
    }

    #[test]
    fn test_clear() {
        let cache = LookupCache::new();
        cache.insert("Sol Ring", card("sol", "Sol Ring"));
        cache.insert("Black Lotus", card("lotus", "Black Lotus"));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
