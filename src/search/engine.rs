//! Query execution: tokenize, score every record, rank and truncate.

use crate::analytics::{SearchEvent, SearchSink};
use crate::config::SearchConfig;
use serde::Serialize;
use std::sync::OnceLock;

use super::index::{Index, Record};
use super::normalize::normalize;
use super::scoring::score;
use super::tokenize::tokenize;

/// A record that matched a query, borrowed from the engine's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredResult<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub score: u32,
    pub title_match: bool,
    pub content_match: bool,
}

/// Ranks records of a read-only index against free-text queries.
///
/// The index is either supplied up front or built from a loader on first use;
/// in both cases it is built exactly once and never mutated afterwards.
pub struct SearchEngine {
    index: OnceLock<Index>,
    loader: fn() -> Index,
    config: SearchConfig,
    sinks: Vec<Box<dyn SearchSink>>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("index_built", &self.index.get().is_some())
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine over an already built index.
    pub fn new(index: Index) -> Self {
        Self {
            index: OnceLock::from(index),
            loader: Index::portfolio,
            config: SearchConfig::default(),
            sinks: Vec::new(),
        }
    }

    /// Create an engine that builds its index on first use.
    pub fn lazy(loader: fn() -> Index) -> Self {
        Self {
            index: OnceLock::new(),
            loader,
            config: SearchConfig::default(),
            sinks: Vec::new(),
        }
    }

    /// Engine over the built-in portfolio corpus, built lazily.
    pub fn portfolio() -> Self {
        Self::lazy(Index::portfolio)
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a telemetry sink notified after every search.
    #[must_use]
    pub fn with_sink(mut self, sink: impl SearchSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_index_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// The index, building it on first access.
    pub fn index(&self) -> &Index {
        self.index.get_or_init(self.loader)
    }

    /// Run a raw query and report it to the registered sinks.
    ///
    /// Returns at most `max_results` results sorted by descending score, ties
    /// kept in index order. A query with no usable terms yields no results.
    pub fn search(&self, raw_query: &str) -> Vec<ScoredResult<'_>> {
        let terms = tokenize(raw_query);
        let results = self.rank(&terms);

        tracing::debug!(
            "Query {:?} → terms {:?} → {} results",
            raw_query,
            terms,
            results.len()
        );
        self.report(raw_query, results.len());

        results
    }

    /// Score and rank every record for already tokenized terms.
    pub fn rank(&self, terms: &[String]) -> Vec<ScoredResult<'_>> {
        if terms.is_empty() {
            return Vec::new();
        }

        let title_weight = self.config.title_weight;
        let mut results: Vec<ScoredResult<'_>> = self
            .index()
            .records()
            .iter()
            .filter_map(|record| {
                let title_score = score(terms, &normalize(&record.title));
                let content_score = score(terms, &normalize(&record.content));
                let total = title_score
                    .saturating_mul(title_weight)
                    .saturating_add(content_score);

                (total > 0).then_some(ScoredResult {
                    record,
                    score: total,
                    title_match: title_score > 0,
                    content_match: content_score > 0,
                })
            })
            .collect();

        // Stable: equal scores keep index order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.config.max_results);
        results
    }

    fn report(&self, query: &str, result_count: usize) {
        let event = SearchEvent {
            query,
            result_count,
        };
        for sink in &self.sinks {
            if let Err(e) = sink.record(&event) {
                tracing::warn!("Failed to record search analytics: {}", e);
            }
        }
    }
}
