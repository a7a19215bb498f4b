// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading `index.json` into a [`Catalog`].
//!
//! The index is a JSON array of records. Decoding happens in two steps so a
//! single bad entry can be reported by position: first the whole array as
//! untyped JSON, then each element as an [`AppRecord`].
//!
//! In strict mode the first bad entry fails the load. In lenient mode bad
//! entries are dropped (and logged), and the remaining records are renumbered
//! densely so every `RecordId` still points at a real record.

use crate::error::{Result, SearchError};
use crate::types::{AppRecord, RecordId};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Index;
use std::path::Path;

/// What to do with an index entry that doesn't decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Fail the whole load.
    #[default]
    Strict,
    /// Skip the entry and keep going.
    Lenient,
}

/// The loaded catalog plus whatever was skipped to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<SearchError>,
}

/// Every record of one `index.json`, in file order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<AppRecord>,
}

impl Catalog {
    pub fn new(records: Vec<AppRecord>) -> Self {
        Self { records }
    }

    /// Decode a catalog from JSON text.
    pub fn from_json_str(json: &str, mode: LoadMode) -> Result<LoadReport> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(SearchError::load_failure)?;
        Self::from_json_value(value, mode)
    }

    /// Decode a catalog from any reader (file, stdin, network body).
    pub fn from_reader<R: Read>(reader: R, mode: LoadMode) -> Result<LoadReport> {
        let value: serde_json::Value =
            serde_json::from_reader(reader).map_err(SearchError::load_failure)?;
        Self::from_json_value(value, mode)
    }

    /// Read and decode an `index.json` file.
    pub fn load(path: impl AsRef<Path>, mode: LoadMode) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SearchError::load_failure(format!("{}: {}", path.display(), e))
        })?;
        let report = Self::from_reader(BufReader::new(file), mode)?;
        info!(
            "loaded {} records from {} ({} skipped)",
            report.catalog.len(),
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    fn from_json_value(value: serde_json::Value, mode: LoadMode) -> Result<LoadReport> {
        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            other => {
                return Err(SearchError::load_failure(format!(
                    "expected a JSON array of records, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<AppRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let error = SearchError::MalformedRecord {
                        position,
                        reason: e.to_string(),
                    };
                    match mode {
                        LoadMode::Strict => return Err(error),
                        LoadMode::Lenient => {
                            warn!("skipping {}", error);
                            skipped.push(error);
                        }
                    }
                }
            }
        }

        Ok(LoadReport {
            catalog: Catalog::new(records),
            skipped,
        })
    }

    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&AppRecord> {
        self.records.get(id.as_usize())
    }

    /// Records paired with their ids, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &AppRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| (RecordId::from(position), record))
    }
}

impl Index<RecordId> for Catalog {
    type Output = AppRecord;

    fn index(&self, id: RecordId) -> &AppRecord {
        &self.records[id.as_usize()]
    }
}

impl From<Vec<AppRecord>> for Catalog {
    fn from(records: Vec<AppRecord>) -> Self {
        Catalog::new(records)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
