//! Search relevance scoring.
//!
//! Scores are computed per field on normalized text and summed across query
//! terms. Every term that occurs in the field contributes its length, with
//! bonuses for whole-word and leading matches:
//! - substring match: `len`
//! - whole-word match: `+ 2 * len`
//! - text starts with the term: `+ len`

/// Bonus multiplier when a term equals one of the field's words.
const WHOLE_WORD_BONUS: u32 = 2;

/// Bonus multiplier when the field starts with the term.
const LEADING_BONUS: u32 = 1;

/// Calculate the relevance of `normalized_text` for a set of query terms.
///
/// `normalized_text` must already be in [`normalize`](super::normalize) form.
/// Returns 0 when no term occurs.
pub fn score(terms: &[String], normalized_text: &str) -> u32 {
    if normalized_text.is_empty() {
        return 0;
    }

    let words: Vec<&str> = normalized_text.split(' ').collect();

    terms
        .iter()
        .filter(|term| !term.is_empty() && normalized_text.contains(term.as_str()))
        .map(|term| {
            let len = term_weight(term);
            let mut contribution = len;

            if words.contains(&term.as_str()) {
                contribution += WHOLE_WORD_BONUS * len;
            }
            if normalized_text.starts_with(term.as_str()) {
                contribution += LEADING_BONUS * len;
            }

            contribution
        })
        .fold(0u32, u32::saturating_add)
}

/// Longer terms are more specific and weigh more.
fn term_weight(term: &str) -> u32 {
    u32::try_from(term.chars().count()).unwrap_or(u32::MAX)
}
