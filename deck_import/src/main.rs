//! Deck Import - resolve an MTG decklist against Scryfall
//!
//! Reads a decklist from a file or stdin and prints every resolved card
//! with its image URL.

use clap::Parser;
use deck_import::{
    format_resolution, read_decklist, DecklistResolver, OutputFormat, ResolverConfig, RetryPolicy,
};
use mtg_common::scryfall::SCRYFALL_API_BASE;
use std::path::PathBuf;
use std::time::Duration;

/// Resolve an MTG decklist to Scryfall cards and image URLs
#[derive(Parser, Debug)]
#[command(name = "deck_import")]
#[command(version, about, long_about = None)]
struct Args {
    /// Decklist file, one card per line ("4 Lightning Bolt"). Reads stdin if omitted or "-"
    decklist: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum number of lookups in flight (1 = strictly sequential)
    #[arg(short, long, default_value_t = 1)]
    concurrency: usize,

    /// Retries per lookup for network errors, rate limiting and server errors
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Base delay between retries in milliseconds (grows linearly per attempt)
    #[arg(long, default_value_t = 250)]
    retry_delay_ms: u64,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Scryfall API base URL
    #[arg(long, env = "SCRYFALL_BASE_URL", default_value = SCRYFALL_API_BASE)]
    base_url: String,

    /// Look up repeated card names again instead of reusing the first result
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Also list lines that could not be resolved
    #[arg(long, default_value_t = false)]
    show_unresolved: bool,
}

impl Args {
    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            base_url: self.base_url.clone(),
            concurrency: self.concurrency,
            retry: RetryPolicy {
                max_retries: self.retries,
                delay: Duration::from_millis(self.retry_delay_ms),
            },
            timeout: self.timeout_secs.map(Duration::from_secs),
            cache_enabled: !self.no_cache,
            ..ResolverConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging. Set RUST_LOG to control the level, e.g. RUST_LOG=deck_import=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args).await {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> deck_import::Result<()> {
    let config = args.resolver_config();
    let resolver = DecklistResolver::new(&config)?;

    let decklist = read_decklist(args.decklist.as_deref()).await?;
    log::info!("Resolving decklist against {}", config.base_url);

    let resolution = resolver.resolve_detailed(&decklist).await;
    let output = format_resolution(&resolution, args.format, args.show_unresolved)?;
    print!("{output}");
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_config_defaults() {
        let args = Args::parse_from(["deck_import", "deck.txt"]);
        let config = args.resolver_config();

        assert_eq!(args.decklist.as_deref(), Some(std::path::Path::new("deck.txt")));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.retry.delay, Duration::from_millis(250));
        assert!(config.timeout.is_none());
        assert!(config.cache_enabled);
    }

    #[test]
    fn test_resolver_config_from_flags() {
        let args = Args::parse_from([
            "deck_import",
            "--format",
            "json",
            "--concurrency",
            "4",
            "--retries",
            "3",
            "--retry-delay-ms",
            "50",
            "--timeout-secs",
            "10",
            "--base-url",
            "http://localhost:8080",
            "--no-cache",
            "--show-unresolved",
        ]);
        let config = args.resolver_config();

        assert!(args.decklist.is_none());
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.show_unresolved);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.concurrency, 4);
        assert_eq!(
            config.retry,
            RetryPolicy {
                max_retries: 3,
                delay: Duration::from_millis(50),
            }
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(!config.cache_enabled);
        assert_eq!(config.user_agent, ResolverConfig::default().user_agent);
    }
}
