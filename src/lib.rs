pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod site;
pub mod tracing;

pub use analytics::{JsonLinesSink, SearchEvent, SearchSink, TracingSink};
pub use config::SearchConfig;
pub use error::{IndexError, SinkError};
pub use search::{
    Index, PresentedResult, Presenter, Record, RecordKind, ScoredResult, SearchEngine, normalize,
    score, tokenize,
};
pub use site::{SearchOutcome, SiteSearch};
