//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `engine`: engine over the built-in portfolio corpus, default config
//! - `site`: caller facade wrapping `engine`
//! - `temp_dir`: scratch directory for config, corpus and analytics files

use rstest::fixture;
use site_search::{SearchEngine, SiteSearch};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[fixture]
#[allow(dead_code)]
pub fn engine() -> SearchEngine {
    site_search::tracing::init(false);
    SearchEngine::portfolio()
}

#[fixture]
#[allow(dead_code)]
pub fn site(engine: SearchEngine) -> SiteSearch {
    SiteSearch::new(engine)
}

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempFiles {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempFiles {
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a file relative to the directory and returns its full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
        path
    }
}

#[fixture]
#[allow(dead_code)]
pub fn temp_dir() -> TempFiles {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path().to_path_buf();
    TempFiles { _temp: temp, root }
}

/// Titles of scored results, in rank order.
#[allow(dead_code)]
pub fn titles(results: &[site_search::ScoredResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.record.title.clone()).collect()
}
