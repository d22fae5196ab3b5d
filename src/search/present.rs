//! Rendering hints for ranked results: highlighted titles and snippets.
//!
//! Matching is done on a case- and accent-folded copy of the text, while the
//! markers are placed into the original string, so "migracion" marks
//! "Migración" without altering its casing or accents. Terms are matched
//! literally: regex metacharacters in a term are escaped before use.

use crate::config::{HighlightConfig, SearchConfig, SnippetConfig};
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

use super::engine::ScoredResult;
use super::index::RecordKind;
use super::normalize::{FoldedText, fold};
use super::tokenize::tokenize;

/// Keyword suggestions offered when a query finds nothing.
pub const NO_RESULTS_SUGGESTIONS: &[&str] = &["AWS", "proyectos", "experiencia", "contacto"];

/// A result ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentedResult {
    pub icon: &'static str,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub url: String,
    pub section: String,
    pub relevance: u32,
    pub highlighted_title: String,
    pub snippet: String,
}

/// Stateless formatter for scored results.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    highlight: HighlightConfig,
    snippet: SnippetConfig,
}

impl Presenter {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            highlight: config.highlight.clone(),
            snippet: config.snippet.clone(),
        }
    }

    /// Format one result for the query that produced it.
    pub fn present(&self, result: &ScoredResult<'_>, raw_query: &str) -> PresentedResult {
        let terms = tokenize(raw_query);
        let record = result.record;

        PresentedResult {
            icon: record.kind.icon(),
            kind: record.kind,
            url: record.url.clone(),
            section: record.section.clone(),
            relevance: result.score,
            highlighted_title: self.highlight(&record.title, &terms),
            snippet: self.snippet(&record.content, &terms),
        }
    }

    /// Wrap every occurrence of every term in highlight markers.
    ///
    /// Overlapping occurrences of different terms are merged into a single
    /// marked span.
    pub fn highlight(&self, text: &str, terms: &[String]) -> String {
        let folded = FoldedText::new(text);
        let ranges = merge_ranges(match_ranges(&folded, terms));

        let mut out = String::with_capacity(text.len() + ranges.len() * 16);
        let mut cursor = 0;
        for range in ranges {
            out.push_str(&text[cursor..range.start]);
            out.push_str(&self.highlight.open);
            out.push_str(&text[range.clone()]);
            out.push_str(&self.highlight.close);
            cursor = range.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    /// Excerpt of `content` around the earliest match of any term, highlighted.
    ///
    /// Without a match, the leading `fallback_chars` characters are returned
    /// followed by the ellipsis.
    pub fn snippet(&self, content: &str, terms: &[String]) -> String {
        let folded = FoldedText::new(content);
        let first_match = terms
            .iter()
            .map(|term| fold(term))
            .filter(|term| !term.is_empty())
            .filter_map(|term| {
                let start = folded.as_str().find(&term)?;
                folded.original_range(start..start + term.len())
            })
            .map(|range| range.start)
            .min();

        let Some(match_byte) = first_match else {
            let head = slice_chars(content, 0, self.snippet.fallback_chars);
            return format!("{}{}", head, self.snippet.ellipsis);
        };

        let total_chars = content.chars().count();
        let match_char = content[..match_byte].chars().count();
        let start = match_char.saturating_sub(self.snippet.context_before);
        let end = total_chars.min(match_char.saturating_add(self.snippet.context_after));

        let mut snippet = self.highlight(slice_chars(content, start, end), terms);
        if start > 0 {
            snippet.insert_str(0, &self.snippet.ellipsis);
        }
        if end < total_chars {
            snippet.push_str(&self.snippet.ellipsis);
        }
        snippet
    }
}

/// Screen-reader message announcing how many results a query produced.
pub fn announcement(count: usize, query: &str) -> String {
    if count == 1 {
        format!("Se encontró 1 resultado para {}", query)
    } else {
        format!("Se encontraron {} resultados para {}", count, query)
    }
}

/// Byte ranges in the original text of every literal, folded term match.
fn match_ranges(folded: &FoldedText, terms: &[String]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    for term in terms {
        let needle = fold(term);
        if needle.is_empty() {
            continue;
        }
        let pattern = match Regex::new(&regex::escape(&needle)) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::debug!("Skipping unmatchable term {:?}: {}", term, e);
                continue;
            }
        };
        ranges.extend(
            pattern
                .find_iter(folded.as_str())
                .filter_map(|m| folded.original_range(m.range())),
        );
    }
    ranges
}

/// Sort ranges and merge those that overlap.
fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, r.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start < last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Substring between two character positions, clamped to the text.
fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let start_byte = byte_at(start);
    let end_byte = byte_at(end).max(start_byte);
    &text[start_byte..end_byte]
}
