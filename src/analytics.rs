//! Search telemetry sinks.
//!
//! The engine reports every completed search as a [`SearchEvent`]. Sinks may
//! fail; the engine logs the failure and carries on, so an unavailable sink
//! never affects results.

use crate::error::SinkError;
use serde::Serialize;
use std::{
    fs::OpenOptions,
    io::{LineWriter, Write},
    path::Path,
    sync::Mutex,
};

/// One completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchEvent<'a> {
    pub query: &'a str,
    pub result_count: usize,
}

/// Receives search telemetry.
pub trait SearchSink: Send + Sync {
    fn record(&self, event: &SearchEvent<'_>) -> Result<(), SinkError>;
}

/// Logs each search through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SearchSink for TracingSink {
    fn record(&self, event: &SearchEvent<'_>) -> Result<(), SinkError> {
        tracing::info!(
            query = event.query,
            result_count = event.result_count,
            "site search: \"{}\" - {} results",
            event.query,
            event.result_count
        );
        Ok(())
    }
}

/// Appends each search as one JSON line to a writer.
pub struct JsonLinesSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for JsonLinesSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl JsonLinesSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Open (or create) a log file in append mode.
    pub fn append_to(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(LineWriter::new(file)))
    }
}

impl SearchSink for JsonLinesSink {
    fn record(&self, event: &SearchEvent<'_>) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_poisoned| SinkError::Unavailable("writer lock poisoned".to_string()))?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
