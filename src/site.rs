//! Caller-side entry point used by the page widgets.
//!
//! Applies the minimum query length guard, runs the engine and formats the
//! surviving results, returning an outcome that keeps "query too short"
//! distinct from "nothing matched".

use crate::search::{
    NO_RESULTS_SUGGESTIONS, PresentedResult, Presenter, SearchEngine, announcement,
};
use serde::Serialize;
use std::fmt::Write as _;

/// What the caller should render for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Query shorter than the minimum: render nothing, hide the panel.
    BelowMinimum,
    /// Search ran and nothing scored above zero: render suggestions.
    NoResults { query: String },
    /// Search ran and produced ranked results.
    Found {
        query: String,
        results: Vec<PresentedResult>,
    },
}

impl SearchOutcome {
    pub fn result_count(&self) -> usize {
        match self {
            Self::Found { results, .. } => results.len(),
            Self::BelowMinimum | Self::NoResults { .. } => 0,
        }
    }

    /// Whether the engine was actually invoked.
    pub const fn searched(&self) -> bool {
        !matches!(self, Self::BelowMinimum)
    }

    /// Live-region message for screen readers, when results were rendered.
    pub fn announcement(&self) -> Option<String> {
        match self {
            Self::Found { query, results } => Some(announcement(results.len(), query)),
            Self::BelowMinimum | Self::NoResults { .. } => None,
        }
    }
}

/// Engine plus presenter, wired with the same configuration.
#[derive(Debug)]
pub struct SiteSearch {
    engine: SearchEngine,
    presenter: Presenter,
}

impl SiteSearch {
    pub fn new(engine: SearchEngine) -> Self {
        let presenter = Presenter::new(engine.config());
        Self { engine, presenter }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Run a raw query as typed by the user.
    pub fn query(&self, raw_query: &str) -> SearchOutcome {
        let query = raw_query.trim();
        if query.chars().count() < self.engine.config().min_query_chars {
            return SearchOutcome::BelowMinimum;
        }

        let results: Vec<PresentedResult> = self
            .engine
            .search(query)
            .iter()
            .map(|result| self.presenter.present(result, query))
            .collect();

        if results.is_empty() {
            SearchOutcome::NoResults {
                query: query.to_string(),
            }
        } else {
            SearchOutcome::Found {
                query: query.to_string(),
                results,
            }
        }
    }
}

/// Format a search outcome the way the results panel renders it.
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    let mut output = String::new();

    match outcome {
        SearchOutcome::BelowMinimum => {}
        SearchOutcome::NoResults { query } => {
            let _ = writeln!(output, "No se encontraron resultados para \"{}\"\n", query);
            output.push_str("Sugerencias:\n");
            output.push_str("• Verifica la ortografía\n");
            output.push_str("• Intenta con términos más generales\n");
            let _ = writeln!(
                output,
                "• Prueba palabras clave como: {}",
                NO_RESULTS_SUGGESTIONS
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        SearchOutcome::Found { query, results } => {
            let _ = writeln!(
                output,
                "Resultados de búsqueda para \"{}\" ({})\n",
                query,
                results.len()
            );
            for (idx, result) in results.iter().enumerate() {
                let _ = writeln!(
                    output,
                    "{}. {} {} ({}) → {}",
                    idx + 1,
                    result.icon,
                    result.highlighted_title,
                    result.kind,
                    result.url
                );
                let _ = writeln!(output, "   {}", result.snippet);
                let _ = writeln!(
                    output,
                    "   Sección: {} · Relevancia: {}\n",
                    result.section, result.relevance
                );
            }
        }
    }

    output
}
