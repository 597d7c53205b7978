//! Scryfall card payloads
//!
//! Only the fields needed to identify a card and locate its image are
//! modelled; everything else in the response is ignored.

use serde::{Deserialize, Serialize};

/// Default Scryfall API endpoint
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

/// Scryfall card response
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScryfallCard {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// For double-faced cards, images are in card_faces
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl ScryfallCard {
    /// Get the primary image URL (normal size)
    ///
    /// The card-level `image_uris.normal` wins. When it is missing or empty
    /// the front face's normal image is used. Later faces are never consulted.
    pub fn image_url(&self) -> Option<&str> {
        if let Some(url) = normal_image(self.image_uris.as_ref()) {
            return Some(url);
        }

        let front = self
            .card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| normal_image(face.image_uris.as_ref()));

        if front.is_some() {
            log::debug!("Using front face image for card {}", self.id);
        }
        front
    }
}

fn normal_image(uris: Option<&ImageUris>) -> Option<&str> {
    uris.and_then(|u| u.normal.as_deref())
        .filter(|url| !url.is_empty())
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
pub struct ScryfallErrorBody {
    pub status: u16,
    pub code: String,
    pub details: String,
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
