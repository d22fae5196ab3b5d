//! In-memory record index.
//!
//! The index is an ordered, read-only sequence of [`Record`]s built once. Its
//! order is significant: ranking ties are broken by position.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

use super::corpus;

/// Display category of a record. Used for icon selection only, never scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "página", alias = "pagina", alias = "page")]
    Page,
    #[serde(rename = "proyecto", alias = "project")]
    Project,
    #[serde(rename = "habilidad", alias = "skill")]
    Skill,
    #[serde(rename = "experiencia", alias = "experience")]
    Experience,
    #[serde(rename = "formación", alias = "formacion", alias = "education")]
    Education,
    #[serde(rename = "certificación", alias = "certificacion", alias = "certification")]
    Certification,
    #[serde(rename = "afición", alias = "aficion", alias = "hobby")]
    Hobby,
    #[serde(rename = "contacto", alias = "contact")]
    Contact,
}

impl RecordKind {
    /// Human-readable label shown next to a result.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Page => "página",
            Self::Project => "proyecto",
            Self::Skill => "habilidad",
            Self::Experience => "experiencia",
            Self::Education => "formación",
            Self::Certification => "certificación",
            Self::Hobby => "afición",
            Self::Contact => "contacto",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Page => "📄",
            Self::Project => "🚀",
            Self::Skill => "💻",
            Self::Experience => "💼",
            Self::Education => "🎓",
            Self::Certification => "🏆",
            Self::Hobby => "🎯",
            Self::Contact => "📞",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One indexed unit of searchable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub content: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub section: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        kind: RecordKind,
        section: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            kind,
            section: section.into(),
        }
    }

    /// Name of the first required field that is blank, if any.
    fn blank_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("content", &self.content),
            ("url", &self.url),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Corpus document shape for TOML/JSON files: a list of `record` entries.
#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default, rename = "record")]
    records: Vec<Record>,
}

/// A fixed, ordered, read-only set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    records: Vec<Record>,
}

impl Index {
    /// Builds an index from records, enforcing that title, content and url
    /// are non-empty.
    pub fn from_records(records: Vec<Record>) -> Result<Self, IndexError> {
        for (position, record) in records.iter().enumerate() {
            if let Some(field) = record.blank_field() {
                return Err(IndexError::EmptyField { position, field });
            }
        }
        tracing::info!("Built search index: {} records", records.len());
        Ok(Self { records })
    }

    /// The built-in portfolio corpus.
    pub fn portfolio() -> Self {
        let records = corpus::portfolio_records();
        tracing::info!("Built portfolio search index: {} records", records.len());
        Self { records }
    }

    /// Parses a TOML corpus made of `[[record]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self, IndexError> {
        let file: CorpusFile =
            toml::from_str(source).map_err(|e| IndexError::Parse(e.to_string()))?;
        Self::from_records(file.records)
    }

    /// Parses a JSON corpus: either `{"record": [...]}` or a bare array.
    pub fn from_json_str(source: &str) -> Result<Self, IndexError> {
        let records = if source.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Record>>(source)
        } else {
            serde_json::from_str::<CorpusFile>(source).map(|file| file.records)
        }
        .map_err(|e| IndexError::Parse(e.to_string()))?;
        Self::from_records(records)
    }

    /// Loads a corpus file, choosing the format by extension (`.json` or TOML).
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("Loading corpus from {}", path.display());
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&source),
            _ => Self::from_toml_str(&source),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
