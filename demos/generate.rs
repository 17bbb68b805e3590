//! Generate captions for a topic from the command line.
//!
//! ```text
//! API_KEY=... cargo run --example generate -- "beach sunset" punny --hashtags
//! ```

use caption_pipeline::{CaptionStyle, GeminiClient, GeminiConfig, Orchestrator, Outcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let include_hashtags = args.iter().any(|a| a == "--hashtags");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));

    let topic = positional.next().cloned().unwrap_or_default();
    let style = match positional.next() {
        Some(s) => s.parse::<CaptionStyle>().map_err(anyhow::Error::msg)?,
        None => CaptionStyle::default(),
    };

    let config = GeminiConfig::from_env();
    tracing::info!(?config, "starting caption demo");

    let mut generator = Orchestrator::new(GeminiClient::new(config));
    generator.set_topic(topic);
    generator.set_style(style);
    generator.set_include_hashtags(include_hashtags);

    match generator.submit().await {
        Outcome::Success(result) => {
            println!("Style: {}\n", style);
            for (i, caption) in result.captions.iter().enumerate() {
                println!("{}. {}", i + 1, caption);
            }
            if !result.hashtags.is_empty() {
                println!("\n{}", result.hashtag_line());
            }
        }
        Outcome::Failure(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}
