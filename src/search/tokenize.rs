//! Query tokenization.

use super::normalize::normalize;

/// Minimum term length in characters. Single characters carry no
/// discriminative value and are dropped.
const MIN_TERM_CHARS: usize = 2;

/// Normalized terms derived from one raw query, in query order.
pub type QueryTerms = Vec<String>;

/// Splits a raw query into normalized search terms.
///
/// Only single-character terms are dropped; short words such as "de" or
/// "en" are kept and take part in substring matching. An empty result means
/// "no query": callers must not treat it as "match everything".
pub fn tokenize(query: &str) -> QueryTerms {
    normalize(query)
        .split(' ')
        .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_owned)
        .collect()
}
