//! Text normalization shared by indexing, scoring and highlighting.
//!
//! Two views of a string are produced here:
//! - [`normalize`]: lowercase, accent-free, punctuation replaced by spaces and
//!   whitespace collapsed. This is the form the scorer compares against.
//! - [`FoldedText`]: lowercase and accent-free but otherwise untouched, with a
//!   byte span back into the original string for every folded byte. The
//!   presenter matches terms on the folded form and marks the original text.

use std::ops::Range;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercases a single character and strips its combining marks.
///
/// "Á" → "a", "ñ" → "n", "İ" → "i". Characters without a canonical
/// decomposition pass through lowercased.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().nfd().filter(|d| !is_combining_mark(*d))
}

/// Normalizes text for comparison.
///
/// Lowercases, strips diacritics, replaces every character that is not a
/// letter or digit with a space, collapses whitespace runs and trims.
///
/// ```
/// use site_search::normalize;
/// assert_eq!(normalize("Café AWS!!"), "cafe aws");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(fold_char) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Lowercases and strips diacritics without touching punctuation or spacing.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Case- and accent-folded text that remembers where each byte came from.
#[derive(Debug, Clone)]
pub(crate) struct FoldedText {
    text: String,
    /// For every byte of `text`, the byte range of the source character.
    spans: Vec<Range<usize>>,
}

impl FoldedText {
    pub(crate) fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut spans = Vec::with_capacity(original.len());

        for (start, c) in original.char_indices() {
            let source = start..start + c.len_utf8();
            for folded in fold_char(c) {
                text.push(folded);
                spans.extend(std::iter::repeat_n(source.clone(), folded.len_utf8()));
            }
        }

        Self { text, spans }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Maps a byte range of the folded text back onto the original string.
    ///
    /// Returns `None` for empty or out-of-bounds ranges.
    pub(crate) fn original_range(&self, folded: Range<usize>) -> Option<Range<usize>> {
        if folded.is_empty() || folded.end > self.spans.len() {
            return None;
        }
        let start = self.spans[folded.start].start;
        let end = self.spans[folded.end - 1].end;
        Some(start..end)
    }
}
