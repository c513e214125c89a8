//! Table-backed conversion service.
//!
//! Maps a raw reading to a fixed, ranked list of candidate strings. Tables
//! are plain TSV (`raw\tcandidate1\tcandidate2...`), one reading per line;
//! candidate strings may carry a sub-candidate group (see [`crate::structure`]).

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::service::ConversionService;

/// In-memory conversion table.
#[derive(Debug, Clone, Default)]
pub struct TableConversion {
    entries: HashMap<String, Vec<String>>,
}

impl TableConversion {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidates for a reading, after any already present.
    pub fn insert(
        &mut self,
        raw: impl Into<String>,
        candidates: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.entries
            .entry(raw.into())
            .or_default()
            .extend(candidates.into_iter().map(Into::into));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_entry(
        mut self,
        raw: impl Into<String>,
        candidates: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(raw, candidates);
        self
    }

    /// Parse a table from TSV text.
    ///
    /// Lines starting with `#` are comments. Lines with fewer than two
    /// fields are skipped.
    pub fn from_tsv_str(content: &str) -> Self {
        let mut table = Self::new();
        for line in content.lines() {
            table.push_line(line);
        }
        table
    }

    /// Load a table from a TSV file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut table = Self::new();
        for line in reader.lines() {
            table.push_line(&line?);
        }
        debug!(
            "conversion table loaded from {:?} ({} readings)",
            path,
            table.len()
        );
        Ok(table)
    }

    fn push_line(&mut self, line: &str) {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with('#') {
            return;
        }
        let mut fields = line.split('\t');
        let Some(raw) = fields.next().map(str::trim).filter(|r| !r.is_empty()) else {
            return;
        };
        let candidates: Vec<&str> = fields.filter(|f| !f.is_empty()).collect();
        if candidates.is_empty() {
            return;
        }
        self.insert(raw, candidates);
    }

    /// Number of distinct readings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConversionService for TableConversion {
    fn convert(&self, raw: &str) -> Result<Vec<String>> {
        Ok(self.entries.get(raw).cloned().unwrap_or_default())
    }
}
