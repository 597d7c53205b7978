//! Decklist parsing
//!
//! A decklist is free text with one card per line, optionally prefixed by a
//! count: `4 Lightning Bolt`, `Sol Ring`. Blank lines are ignored.

use regex::Regex;
use std::sync::LazyLock;

/// Leading digit run, whitespace, then the card name
static COUNT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s+(.*)$").unwrap());

/// A parsed, non-blank decklist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecklistLine {
    /// 1-based position in the raw input, blank lines included
    pub line_number: usize,
    /// The trimmed source line
    pub raw: String,
    pub quantity: u32,
    pub card_name: String,
}

/// A non-blank line that cannot become a card entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub line_number: usize,
    pub raw: String,
    pub reason: String,
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trimmed, non-blank lines with their 1-based line numbers
pub fn decklist_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    raw.split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, trim_line(line)))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse one decklist line.
///
/// `"4 Lightning Bolt"` yields quantity 4 and name `Lightning Bolt`. A line
/// without a leading count is a single copy of the whole line. A leading
/// count of zero, or one too large for `u32`, is rejected.
pub fn parse_line(line_number: usize, line: &str) -> Result<DecklistLine, InvalidLine> {
    let line = trim_line(line);

    let Some(caps) = COUNT_PREFIX.captures(line) else {
        return Ok(DecklistLine {
            line_number,
            raw: line.to_string(),
            quantity: 1,
            card_name: line.to_string(),
        });
    };

    let digits = &caps[1];
    let card_name = caps[2].to_string();

    match digits.parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(DecklistLine {
            line_number,
            raw: line.to_string(),
            quantity,
            card_name,
        }),
        _ => Err(InvalidLine {
            line_number,
            raw: line.to_string(),
            reason: format!("invalid quantity: {}", digits),
        }),
    }
}

/// Parse every non-blank line of a decklist, preserving input order
pub fn parse_decklist(raw: &str) -> Vec<Result<DecklistLine, InvalidLine>> {
    decklist_lines(raw)
        .map(|(line_number, line)| parse_line(line_number, line))
        .collect()
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
