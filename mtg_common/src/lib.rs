//! Shared types for MTG tooling
//!
//! Scryfall card payloads and the error type used by crates that talk to
//! the Scryfall API.

pub mod error;
pub mod scryfall;

pub use error::{ApiError, ApiResult};
pub use scryfall::{CardFace, ImageUris, ScryfallCard, ScryfallErrorBody};
