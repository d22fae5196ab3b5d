//! Full-text search over a small, fixed record corpus.
//!
//! This module provides normalization, tokenization, relevance scoring,
//! ranking and result presentation. Everything runs synchronously in memory.

// Module declarations
mod corpus;
pub mod engine;
pub mod index;
pub mod normalize;
pub mod present;
pub mod scoring;
pub mod tokenize;

pub use engine::{ScoredResult, SearchEngine};
pub use index::{Index, Record, RecordKind};
pub use normalize::{fold, normalize};
pub use present::{NO_RESULTS_SUGGESTIONS, PresentedResult, Presenter, announcement};
pub use scoring::score;
pub use tokenize::{QueryTerms, tokenize};
