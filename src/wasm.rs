// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for store and website search pages.
//!
//! The page fetches `index.json` itself and hands the text to
//! [`CatalogSearch::assign_index`]; queries typed before that are parked and
//! answered by the `assignIndex` call. Every call that can produce results
//! returns the same shape:
//!
//! ```text
//! { state: "deferred" | "ready" | "unavailable", cards: [...], message, html }
//! ```

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::render::ResultCard;
use crate::session::{SearchSession, SearchState};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search outcome for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    state: &'static str,
    cards: Vec<ResultCard>,
    message: Option<&'static str>,
    html: String,
}

/// WASM-accessible search session.
#[wasm_bindgen]
pub struct CatalogSearch {
    session: SearchSession,
}

#[wasm_bindgen]
impl CatalogSearch {
    /// Create a session waiting for its index. `config` mirrors `config.toml`;
    /// pass `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CatalogSearch, JsValue> {
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        Ok(CatalogSearch {
            session: SearchSession::new(config),
        })
    }

    /// Install the fetched `index.json`. Returns the parked query's outcome,
    /// or `null` if none was waiting. A malformed index makes search
    /// unavailable and is reported as an error.
    #[wasm_bindgen(js_name = assignIndex)]
    pub fn assign_index(&mut self, index_json: &str) -> Result<JsValue, JsValue> {
        let mode = self.session.config().load_mode;
        match Catalog::from_json_str(index_json, mode) {
            Ok(report) => {
                let replayed = self.session.assign_index(report.catalog);
                self.optional_output(replayed)
            }
            Err(error) => {
                let message = error.to_string();
                self.session.fail_index_load(error);
                Err(JsValue::from_str(&message))
            }
        }
    }

    /// Report that fetching the index failed.
    #[wasm_bindgen(js_name = failIndexLoad)]
    pub fn fail_index_load(&mut self, reason: &str) -> Result<JsValue, JsValue> {
        let dropped = self
            .session
            .fail_index_load(SearchError::load_failure(reason));
        self.optional_output(dropped)
    }

    #[wasm_bindgen(js_name = performSearch)]
    pub fn perform_search(&mut self, query: &str) -> Result<JsValue, JsValue> {
        let state = self.session.perform_search(query);
        self.output(&state)
    }

    /// Auto-run the `?q=` query of `location.search`. `null` if there is none.
    #[wasm_bindgen(js_name = initFromLocation)]
    pub fn init_from_location(&mut self, search: &str) -> Result<JsValue, JsValue> {
        let state = self.session.init_from_location(search);
        self.optional_output(state)
    }

    #[wasm_bindgen(js_name = isIndexLoaded)]
    pub fn is_index_loaded(&self) -> bool {
        self.session.is_index_loaded()
    }

    fn optional_output(&self, state: Option<SearchState>) -> Result<JsValue, JsValue> {
        match state {
            Some(state) => self.output(&state),
            None => Ok(JsValue::NULL),
        }
    }

    fn output(&self, state: &SearchState) -> Result<JsValue, JsValue> {
        let outcome = self.session.render(state);
        let output = SearchOutput {
            state: match state {
                SearchState::Deferred => "deferred",
                SearchState::Ready(_) => "ready",
                SearchState::Unavailable(_) => "unavailable",
            },
            html: self.session.render_html(state),
            cards: outcome.cards,
            message: outcome.message,
        };
        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
