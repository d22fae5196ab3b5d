use anyhow::Context;
use clap::Parser;
use site_search::cli::{Cli, Commands};
use site_search::site::format_outcome;
use site_search::{Index, JsonLinesSink, SearchConfig, SearchEngine, SiteSearch, TracingSink};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results
    site_search::tracing::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    let engine = match &cli.corpus {
        Some(path) => SearchEngine::new(
            Index::load(path)
                .with_context(|| format!("Failed to load corpus from {}", path.display()))?,
        ),
        None => SearchEngine::portfolio(),
    };
    let mut engine = engine.with_config(config).with_sink(TracingSink);

    if let Some(path) = &cli.analytics_log {
        match JsonLinesSink::append_to(path) {
            Ok(sink) => engine = engine.with_sink(sink),
            // Analytics must never block searching
            Err(e) => tracing::warn!("Analytics log {} unavailable: {}", path.display(), e),
        }
    }

    let site = SiteSearch::new(engine);

    match cli.command {
        Commands::Search { query, json } => {
            let outcome = site.query(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", format_outcome(&outcome));
            }
        }
        Commands::List { json } => {
            let records = site.engine().index().records();
            if json {
                println!("{}", serde_json::to_string_pretty(records)?);
            } else {
                for (idx, record) in records.iter().enumerate() {
                    println!(
                        "{:>2}. {} {} [{}] → {}#{}",
                        idx + 1,
                        record.kind.icon(),
                        record.title,
                        record.kind,
                        record.url,
                        record.section
                    );
                }
            }
        }
    }

    Ok(())
}
