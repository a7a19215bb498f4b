// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! An `index.json` file is an array of [`AppRecord`]s. Records are read once
//! and never mutated; everything downstream refers to them by position through
//! [`RecordId`].
//!
//! # Invariants
//!
//! - **RankedResult**: `id < catalog.len()` for the catalog that produced it.
//!   Every ranked result points at a real record.
//! - **Score**: a deterministic function of `(query, record)`. Same inputs,
//!   same number, every time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relevance score produced by the rank engine. Always non-negative.
pub type Score = u64;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a record inside the catalog it was loaded into.
///
/// Use `RecordId::new()` for runtime-validated construction, or `.into()` for
/// trusted sources (enumerating the catalog itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Create a new RecordId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_records: usize) -> Option<Self> {
        if (id as usize) < num_records {
            Some(RecordId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for slice indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

impl From<usize> for RecordId {
    fn from(id: usize) -> Self {
        RecordId(id as u32)
    }
}

impl From<RecordId> for usize {
    fn from(id: RecordId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// RECORD METADATA
// =============================================================================

/// How an activity runs. Drives the badge shown next to a result.
///
/// The generator writes `web`, `python2`, `python3`, or whatever else the
/// bundle's `Exec` line resolved to (usually `other`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExecType {
    Web,
    Python2,
    Python3,
    Other(String),
}

impl From<String> for ExecType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "web" => ExecType::Web,
            "python2" => ExecType::Python2,
            "python3" => ExecType::Python3,
            _ => ExecType::Other(value),
        }
    }
}

impl From<ExecType> for String {
    fn from(value: ExecType) -> Self {
        value.as_str().to_string()
    }
}

impl ExecType {
    pub fn as_str(&self) -> &str {
        match self {
            ExecType::Web => "web",
            ExecType::Python2 => "python2",
            ExecType::Python3 => "python3",
            ExecType::Other(other) => other,
        }
    }
}

/// Raw `v` value as it appears in the index: generators emit both `"12"` and `12`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VersionValue {
    Text(String),
    Number(serde_json::Number),
}

/// Activity version, kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VersionValue")]
pub struct Version(pub String);

impl From<VersionValue> for Version {
    fn from(value: VersionValue) -> Self {
        match value {
            VersionValue::Text(text) => Version(text),
            VersionValue::Number(number) => Version(number.to_string()),
        }
    }
}

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a version badge is worth showing: blank and `0` are not.
    pub fn is_shown(&self) -> bool {
        !matches!(self.0.trim(), "" | "0")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One catalog entry, as written to `index.json` by the store generator.
///
/// Only `name` is required. Text fields that are absent score as empty text;
/// display fields that are absent fall back to placeholders in `render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_type: Option<ExecType>,
    /// Content hash the generator derives from name and URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub license: Vec<String>,
}

impl AppRecord {
    /// A record with just a name. Everything else empty.
    pub fn named(name: impl Into<String>) -> Self {
        AppRecord {
            name: name.into(),
            summary: None,
            description: None,
            tags: Vec::new(),
            icon_name: None,
            bundle_name: None,
            bundle_id: None,
            url: None,
            v: None,
            exec_type: None,
            id: None,
            license: Vec::new(),
        }
    }

    /// Summary text for scoring; empty when absent.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Description text for scoring; empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A record's position paired with its rank score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub score: Score,
    pub id: RecordId,
}

impl RankedResult {
    /// Does this result clear the display cutoff?
    #[inline]
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}
