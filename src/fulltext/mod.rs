// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search: the store-page engine.
//!
//! Where the rank engine counts whole-word overlaps, this engine tokenizes the
//! indexed fields into terms, builds an inverted index once, and scores with
//! BM25+. Each query term also matches vocabulary terms within a typo budget,
//! so "pant" still finds "Paint".
//!
//! ```text
//! Catalog ──build──▶ FullTextIndex ──search(query)──▶ [FullTextHit]
//!                         ▲                                │
//!                         └────────── reused per query ────┘
//! ```
//!
//! An empty query doesn't search at all: [`alphabetical`] lists every record
//! by name instead.

mod index;
mod search;

pub use index::{FullTextIndex, Posting};
pub use search::{alphabetical, bm25_plus, max_edit_distance, FullTextHit};

use crate::types::AppRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Weight of a fuzzy match relative to an exact one, before the distance penalty.
pub const FUZZY_WEIGHT: f64 = 0.45;

/// Weight of a prefix match relative to an exact one, before the length penalty.
pub const PREFIX_WEIGHT: f64 = 0.375;

/// A record field the engine can tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexedField {
    Name,
    Summary,
    Description,
    Tags,
}

impl IndexedField {
    /// The field's text. Tags are joined with spaces.
    pub fn text(self, record: &AppRecord) -> Cow<'_, str> {
        match self {
            IndexedField::Name => Cow::Borrowed(record.name.as_str()),
            IndexedField::Summary => Cow::Borrowed(record.summary_text()),
            IndexedField::Description => Cow::Borrowed(record.description_text()),
            IndexedField::Tags => Cow::Owned(record.tags.join(" ")),
        }
    }
}

/// A record field that can be returned with a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredField {
    Name,
    Summary,
    Description,
    Tags,
    Url,
    IconName,
    BundleName,
    BundleId,
    #[serde(rename = "v")]
    Version,
    ExecType,
    Id,
    License,
}

impl StoredField {
    /// Key of this field in `index.json`.
    pub fn key(self) -> &'static str {
        match self {
            StoredField::Name => "name",
            StoredField::Summary => "summary",
            StoredField::Description => "description",
            StoredField::Tags => "tags",
            StoredField::Url => "url",
            StoredField::IconName => "icon_name",
            StoredField::BundleName => "bundle_name",
            StoredField::BundleId => "bundle_id",
            StoredField::Version => "v",
            StoredField::ExecType => "exec_type",
            StoredField::Id => "id",
            StoredField::License => "license",
        }
    }
}

/// Copy the requested fields of a record into a JSON object. Absent optional
/// fields are left out.
pub fn project(record: &AppRecord, fields: &[StoredField]) -> serde_json::Map<String, serde_json::Value> {
    let mut full = match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return serde_json::Map::new(),
    };
    fields
        .iter()
        .filter_map(|field| {
            full.remove(field.key())
                .map(|value| (field.key().to_string(), value))
        })
        .collect()
}

/// Per-field score multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub name: f64,
    pub summary: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            name: 2.0,
            summary: 1.0,
            description: 1.0,
            tags: 1.0,
        }
    }
}

impl FieldBoosts {
    pub fn get(&self, field: IndexedField) -> f64 {
        match field {
            IndexedField::Name => self.name,
            IndexedField::Summary => self.summary,
            IndexedField::Description => self.description,
            IndexedField::Tags => self.tags,
        }
    }
}

/// How the full-text engine indexes and matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullTextOptions {
    /// Fields tokenized into the index.
    pub fields: Vec<IndexedField>,
    /// Fields copied into each hit.
    pub stored_fields: Vec<StoredField>,
    pub boost: FieldBoosts,
    /// Typo budget as a fraction of term length (below 1.0), or an absolute
    /// edit count (1.0 and above). 0 disables fuzzy matching.
    pub fuzzy: f64,
    /// Upper bound on the typo budget, whatever the term length.
    pub max_fuzzy: usize,
    /// Also match vocabulary terms that start with a query term.
    pub prefix: bool,
}

impl Default for FullTextOptions {
    fn default() -> Self {
        Self {
            fields: vec![IndexedField::Name, IndexedField::Summary],
            stored_fields: vec![
                StoredField::Name,
                StoredField::Summary,
                StoredField::Url,
                StoredField::IconName,
                StoredField::BundleName,
                StoredField::Version,
                StoredField::BundleId,
            ],
            boost: FieldBoosts::default(),
            fuzzy: 0.5,
            max_fuzzy: 6,
            prefix: false,
        }
    }
}
