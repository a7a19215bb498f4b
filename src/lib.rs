// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over an activity catalog (`index.json`).
//!
//! Two engines answer queries against the same catalog:
//!
//! - **rank**: counts whole-word matches between query and record, weighted
//!   10 per name word, 5 per tag word, 3 per summary word, 2 per description
//!   word. Case and accents don't count. Every record gets a score.
//! - **fulltext**: BM25+ over name and summary with typo tolerance. A blank
//!   query lists the whole catalog by name.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog.rs │────▶│  scoring/    │────▶│  session.rs  │
//! │ (index.json,│     │ (score,      │     │ (deferred    │
//! │  AppRecord) │     │  rank_all)   │     │  query, load │
//! └─────────────┘     └──────────────┘     │  state)      │
//!        │            ┌──────────────┐     │              │
//!        └───────────▶│  fulltext/   │────▶│              │
//!                     │ (BM25+,fuzzy)│     └──────┬───────┘
//!                     └──────────────┘            │
//!                                                 ▼
//!   query.rs (?q=...) ──▶ session        render.rs (cards, snippets)
//! ```
//!
//! # Usage
//!
//! ```
//! use activity_search::{rank_all, AppRecord};
//!
//! let mut paint = AppRecord::named("Paint");
//! paint.summary = Some("Draw pictures".to_string());
//! let write = AppRecord::named("Write");
//!
//! let results = rank_all(&[paint, write], "paint");
//! assert_eq!(results[0].score, 10);
//! assert_eq!(results[0].id.get(), 0);
//! assert_eq!(results[1].score, 0);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fulltext;
mod fuzzy;
pub mod query;
pub mod render;
pub mod scoring;
pub mod session;
pub mod similarity;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, LoadMode, LoadReport};
pub use config::{EngineKind, SearchConfig};
pub use error::{Result, SearchError};
pub use fulltext::{alphabetical, FullTextHit, FullTextIndex, FullTextOptions};
pub use fuzzy::{levenshtein_bounded, levenshtein_within};
pub use query::{parse_query_parameters, parse_query_parameters_with, QueryDecoding, QueryParameters};
pub use scoring::{count_similar_words, matching, rank_all, rank_all_with, score, RankWeights};
pub use session::{SearchResults, SearchSession, SearchState};
pub use similarity::{similar, similar_with, Sensitivity, WordNormalizer};
pub use types::{AppRecord, ExecType, RankedResult, RecordId, Score, Version};
pub use utils::normalize;

#[cfg(feature = "wasm")]
pub use wasm::CatalogSearch;
