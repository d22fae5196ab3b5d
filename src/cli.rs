use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "site-search")]
#[command(about = "Search the portfolio site content from the terminal", long_about = None)]
pub struct Cli {
    /// TOML file overriding search tuning (limits, weights, snippet, markers)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// TOML or JSON corpus to index instead of the built-in portfolio
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,
    /// Append one JSON line per search to this file
    #[arg(long, global = true)]
    pub analytics_log: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a query and print ranked, highlighted results
    Search {
        query: String,
        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print every indexed record in index order
    List {
        #[arg(long)]
        json: bool,
    },
}
