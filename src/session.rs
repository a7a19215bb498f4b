// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search page's state: the catalog (once loaded), at most one query waiting
//! for it, and the full-text index built on first use.
//!
//! # State machine
//!
//! ```text
//!             assign_index                 assign_index
//!   Loading ───────────────▶ Ready ◀──────────────────────┐
//!      │                                                  │
//!      │ fail_index_load                                  │
//!      └────────────────────▶ Unavailable ────────────────┘
//! ```
//!
//! A query issued while `Loading` is parked in a single slot; a newer query
//! replaces it. `assign_index` runs the parked query once and clears the
//! slot. `fail_index_load` drops it: nothing can answer it.

use crate::catalog::Catalog;
use crate::config::{EngineKind, SearchConfig};
use crate::error::{Result, SearchError};
use crate::fulltext::{alphabetical, project, FullTextHit, FullTextIndex};
use crate::query::query_from_location;
use crate::render::{RenderedOutcome, UNAVAILABLE_MESSAGE};
use crate::scoring::{matching, rank_all_with};
use crate::types::{RankedResult, RecordId};
use log::{debug, warn};
use serde::Serialize;
use std::cell::OnceCell;

/// Where the catalog index is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexState {
    Loading,
    Ready(Catalog),
    Unavailable(SearchError),
}

/// The answer to one query, in the shape its engine produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "engine", content = "results", rename_all = "lowercase")]
pub enum SearchResults {
    /// Every record, best first; zero-score records trail.
    Ranked(Vec<RankedResult>),
    /// Records matching at least one term, best first.
    FullText(Vec<FullTextHit>),
    /// Every record by name, for a blank full-text query.
    Alphabetical(Vec<RecordId>),
}

impl SearchResults {
    /// Records to show, in order. Ranked results stop at the first zero score.
    pub fn display_ids(&self) -> Vec<RecordId> {
        match self {
            SearchResults::Ranked(results) => matching(results).iter().map(|r| r.id).collect(),
            SearchResults::FullText(hits) => hits.iter().map(|h| h.id).collect(),
            SearchResults::Alphabetical(ids) => ids.clone(),
        }
    }

    /// True when there is nothing to show ("No search result found").
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResults::Ranked(results) => results.first().map_or(true, |r| !r.is_match()),
            SearchResults::FullText(hits) => hits.is_empty(),
            SearchResults::Alphabetical(ids) => ids.is_empty(),
        }
    }
}

/// What a call to [`SearchSession::perform_search`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Parked until the index arrives.
    Deferred,
    Ready(SearchResults),
    Unavailable(SearchError),
}

pub struct SearchSession {
    config: SearchConfig,
    state: IndexState,
    queued_query: Option<String>,
    fulltext: OnceCell<FullTextIndex>,
}

impl SearchSession {
    /// A session waiting for its index.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: IndexState::Loading,
            queued_query: None,
            fulltext: OnceCell::new(),
        }
    }

    /// A session whose index is already loaded.
    pub fn with_catalog(config: SearchConfig, catalog: Catalog) -> Self {
        let mut session = Self::new(config);
        session.state = IndexState::Ready(catalog);
        session
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index_state(&self) -> &IndexState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            IndexState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_index_loaded(&self) -> bool {
        self.catalog().is_some()
    }

    /// The query waiting for the index, if any.
    pub fn pending_query(&self) -> Option<&str> {
        self.queued_query.as_deref()
    }

    /// Run `query` now, or park it if the index hasn't arrived yet.
    pub fn perform_search(&mut self, query: &str) -> SearchState {
        match &self.state {
            IndexState::Loading => {
                if let Some(previous) = self.queued_query.replace(query.to_string()) {
                    debug!("deferred query {:?} replaces {:?}", query, previous);
                } else {
                    debug!("deferred query {:?} until the index loads", query);
                }
                SearchState::Deferred
            }
            IndexState::Unavailable(error) => SearchState::Unavailable(error.clone()),
            IndexState::Ready(_) => match self.search_now(query) {
                Ok(results) => SearchState::Ready(results),
                Err(SearchError::EmptyQuery) => SearchState::Ready(SearchResults::Ranked(Vec::new())),
                Err(error) => SearchState::Unavailable(error),
            },
        }
    }

    /// Run `query` against the loaded index, without deferring.
    ///
    /// Fails with [`SearchError::EmptyQuery`] when the rank engine is given a
    /// blank query, and with the load error when there is no index.
    pub fn search_now(&self, query: &str) -> Result<SearchResults> {
        let catalog = match &self.state {
            IndexState::Ready(catalog) => catalog,
            IndexState::Unavailable(error) => return Err(error.clone()),
            IndexState::Loading => {
                return Err(SearchError::load_failure("catalog index has not loaded yet"))
            }
        };

        let blank = query.trim().is_empty();
        match self.config.engine {
            EngineKind::Rank if blank => Err(SearchError::EmptyQuery),
            EngineKind::Rank => Ok(SearchResults::Ranked(rank_all_with(
                catalog.records(),
                query,
                &self.config.rank.weights,
                &self.config.rank.sensitivity,
            ))),
            EngineKind::FullText if blank => Ok(SearchResults::Alphabetical(alphabetical(catalog))),
            EngineKind::FullText => {
                let index = self.build_fulltext(catalog);
                Ok(SearchResults::FullText(index.search(query, &self.config.fulltext)))
            }
        }
    }

    /// Install the loaded catalog and replay the parked query, if there is one.
    ///
    /// Also recovers a session whose previous load failed. A new catalog
    /// invalidates any full-text index built for the old one.
    pub fn assign_index(&mut self, catalog: Catalog) -> Option<SearchState> {
        debug!("index assigned: {} records", catalog.len());
        self.state = IndexState::Ready(catalog);
        self.fulltext = OnceCell::new();

        let query = self.queued_query.take()?;
        debug!("replaying deferred query {:?}", query);
        Some(self.perform_search(&query))
    }

    /// Record that the index could not be loaded.
    ///
    /// A parked query is dropped and reported as unavailable.
    pub fn fail_index_load(&mut self, error: SearchError) -> Option<SearchState> {
        warn!("search unavailable: {}", error);
        self.state = IndexState::Unavailable(error.clone());
        self.fulltext = OnceCell::new();

        self.queued_query
            .take()
            .map(|_| SearchState::Unavailable(error))
    }

    /// Auto-run the `?q=` query of a page location, if it has one.
    pub fn init_from_location(&mut self, search: &str) -> Option<SearchState> {
        let query = query_from_location(search, self.config.query.decoding)?;
        Some(self.perform_search(&query))
    }

    /// The full-text index for the loaded catalog, built on first call.
    pub fn fulltext_index(&self) -> Option<&FullTextIndex> {
        self.catalog().map(|catalog| self.build_fulltext(catalog))
    }

    fn build_fulltext<'a>(&'a self, catalog: &Catalog) -> &'a FullTextIndex {
        self.fulltext
            .get_or_init(|| FullTextIndex::build(catalog, &self.config.fulltext.fields))
    }

    /// Stored fields of a full-text hit, as configured.
    pub fn stored_fields(&self, hit: &FullTextHit) -> serde_json::Map<String, serde_json::Value> {
        self.catalog()
            .and_then(|catalog| catalog.get(hit.id))
            .map(|record| project(record, &self.config.fulltext.stored_fields))
            .unwrap_or_default()
    }

    /// Cards (or a message) for a search outcome.
    pub fn render(&self, state: &SearchState) -> RenderedOutcome {
        match (state, self.catalog()) {
            (SearchState::Deferred, _) => RenderedOutcome {
                cards: Vec::new(),
                message: None,
            },
            (SearchState::Ready(results), Some(catalog)) => {
                RenderedOutcome::from_ids(catalog, results.display_ids(), &self.config.display)
            }
            _ => RenderedOutcome::message(UNAVAILABLE_MESSAGE),
        }
    }

    /// [`render`](Self::render) as HTML in the configured layout.
    pub fn render_html(&self, state: &SearchState) -> String {
        let outcome = self.render(state);
        match self.catalog() {
            Some(catalog) => outcome.to_html(catalog, &self.config.display),
            None => outcome.to_html(&Catalog::default(), &self.config.display),
        }
    }
}
