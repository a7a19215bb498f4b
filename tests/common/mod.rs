//! Shared test utilities and fixtures.

#![allow(dead_code)]

use activity_search::{Catalog, LoadMode, RecordId, SearchConfig, SearchResults, SearchState};

// Re-export canonical test utilities from activity_search::testing
pub use activity_search::testing::{make_catalog, make_full_record, make_record};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small store catalog: seven activities, every optional field exercised.
pub const FIXTURE_INDEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/index.json");

/// Four entries, two of which don't decode.
pub const MALFORMED_INDEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/malformed.json");

/// Load the fixture catalog (strict).
pub fn load_fixture() -> Catalog {
    Catalog::load(FIXTURE_INDEX, LoadMode::Strict)
        .expect("fixture index should load")
        .catalog
}

/// The Paint/Write catalog used throughout the ranking tests.
pub fn paint_write() -> Catalog {
    make_catalog(vec![
        make_record("Paint", "draw pictures", &["art"]),
        make_record("Write", "write text", &["office"]),
    ])
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Names of the displayed records, in order.
pub fn names(catalog: &Catalog, results: &SearchResults) -> Vec<String> {
    results
        .display_ids()
        .into_iter()
        .map(|id: RecordId| catalog[id].name.clone())
        .collect()
}

/// Unwrap a ready search state.
pub fn expect_ready(state: SearchState) -> SearchResults {
    match state {
        SearchState::Ready(results) => results,
        other => panic!("expected results, got {other:?}"),
    }
}

pub fn fulltext_config() -> SearchConfig {
    SearchConfig {
        engine: activity_search::EngineKind::FullText,
        ..SearchConfig::default()
    }
}
