//! Search tuning loaded from an optional TOML file.
//!
//! Every key has a default, so an empty file (or no file) yields the
//! standard behaviour: top 8 results, titles weighted 3x, 2-character
//! minimum query, 50/100-character snippet window.

use crate::error::Result;
use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of ranked results returned per query.
    pub max_results: usize,
    /// Multiplier applied to the title score before adding the content score.
    pub title_weight: u32,
    /// Minimum trimmed query length (in characters) before a search runs.
    pub min_query_chars: usize,
    pub snippet: SnippetConfig,
    pub highlight: HighlightConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 8,
            title_weight: 3,
            min_query_chars: 2,
            snippet: SnippetConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    /// Characters of context kept before the first match.
    pub context_before: usize,
    /// Characters kept from the first match onwards.
    pub context_after: usize,
    /// Characters shown when no term occurs in the content.
    pub fallback_chars: usize,
    pub ellipsis: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            context_before: 50,
            context_after: 100,
            fallback_chars: 150,
            ellipsis: "...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    pub open: String,
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse search config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search config at {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid search config at {}", path.display()))?;
        tracing::debug!("Loaded search config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.max_results > 0, "max_results must be at least 1");
        ensure!(
            !self.highlight.open.is_empty() && !self.highlight.close.is_empty(),
            "highlight markers must not be empty"
        );
        Ok(())
    }
}
