//! Output formatting for resolved decklists

use crate::error::Result;
use crate::resolver::{ResolvedCard, Resolution};

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Caption shown under a card: `4x Lightning Bolt`
pub fn card_caption(card: &ResolvedCard) -> String {
    format!("{}x {}", card.quantity, card.name)
}

/// Quantity badge, only shown for more than one copy
pub fn quantity_badge(card: &ResolvedCard) -> Option<String> {
    (card.quantity > 1).then(|| format!("x{}", card.quantity))
}

pub fn format_text(resolution: &Resolution, show_unresolved: bool) -> String {
    let mut output = String::new();

    if resolution.resolved.is_empty() {
        output.push_str("No cards resolved.\n");
    }

    for card in &resolution.resolved {
        output.push_str(&card_caption(card));
        if let Some(badge) = quantity_badge(card) {
            output.push_str(&format!(" [{badge}]"));
        }
        output.push('\n');
        output.push_str(&format!("    {}\n", card.image_url));
    }

    if show_unresolved && !resolution.unresolved.is_empty() {
        output.push_str(&format!("\nUnresolved ({}):\n", resolution.unresolved.len()));
        for line in &resolution.unresolved {
            output.push_str(&format!(
                "    line {}: {} ({})\n",
                line.line_number, line.raw, line.reason
            ));
        }
    }

    output
}

/// JSON output. Without `show_unresolved` only the resolved array is printed.
pub fn format_json(resolution: &Resolution, show_unresolved: bool) -> Result<String> {
    let json = if show_unresolved {
        serde_json::to_string_pretty(resolution)?
    } else {
        serde_json::to_string_pretty(&resolution.resolved)?
    };
    Ok(json)
}

pub fn format_resolution(
    resolution: &Resolution,
    format: OutputFormat,
    show_unresolved: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(resolution, show_unresolved)),
        OutputFormat::Json => format_json(resolution, show_unresolved),
    }
}
