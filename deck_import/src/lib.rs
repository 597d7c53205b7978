//! Deck Import - MTG decklist to Scryfall card resolution
//!
//! Parses a free-text decklist, looks every line up on Scryfall by exact
//! name and returns the cards with their image URLs in decklist order.

pub mod cache;
pub mod config;
pub mod decklist;
pub mod error;
pub mod formatters;
pub mod io;
pub mod resolver;
pub mod scryfall;

pub use config::{ResolverConfig, RetryPolicy};
pub use decklist::{parse_decklist, parse_line, DecklistLine, InvalidLine};
pub use error::{Error, ImportError, Result};
pub use formatters::{format_resolution, OutputFormat};
pub use io::read_decklist;
pub use resolver::{resolve, DecklistResolver, ResolvedCard, Resolution, UnresolvedLine};
pub use scryfall::ScryfallClient;
