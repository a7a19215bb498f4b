//! End-to-end: index.json on disk → session → rendered output.

mod common;

use activity_search::config::ConfigError;
use activity_search::render::{CardStyle, CardTheme, NO_RESULTS_MESSAGE, PLACEHOLDER_SUMMARY};
use activity_search::{
    Catalog, EngineKind, ExecType, LoadMode, SearchConfig, SearchError, SearchSession, SearchState,
};
use common::{expect_ready, load_fixture, FIXTURE_INDEX, MALFORMED_INDEX};
use std::io::Write;

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_fixture_loads_every_field() {
    let catalog = load_fixture();
    assert_eq!(catalog.len(), 7);

    let paint = &catalog.records()[0];
    assert_eq!(paint.v.as_ref().map(|v| v.as_str()), Some("66"));
    assert_eq!(paint.exec_type, Some(ExecType::Python3));
    assert_eq!(paint.license, vec!["GPLv2+"]);

    // numeric versions are kept as text
    let write = &catalog.records()[1];
    assert_eq!(write.v.as_ref().map(|v| v.as_str()), Some("102"));

    let abacus = &catalog.records()[5];
    assert_eq!(abacus.exec_type, Some(ExecType::Other("other".to_string())));
}

#[test]
fn test_strict_load_rejects_malformed_index() {
    let err = Catalog::load(MALFORMED_INDEX, LoadMode::Strict).unwrap_err();
    assert!(matches!(err, SearchError::MalformedRecord { position: 1, .. }));
}

#[test]
fn test_lenient_load_skips_and_keeps_ids_valid() {
    let report = Catalog::load(MALFORMED_INDEX, LoadMode::Lenient).unwrap();
    assert_eq!(report.skipped.len(), 2);

    let catalog = report.catalog;
    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Paint", "Write"]);

    let results = activity_search::rank_all(catalog.records(), "write");
    assert!(results.iter().all(|r| catalog.get(r.id).is_some()));
    assert_eq!(catalog[results[0].id].name, "Write");
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_config_file_drives_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
engine = "fulltext"

[fulltext]
fuzzy = 0.0

[display]
theme = "dark"
limit = 1
"#
    )
    .unwrap();

    let config = SearchConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.engine, EngineKind::FullText);

    let mut session = SearchSession::with_catalog(config, load_fixture());
    let state = session.perform_search("paint");
    let outcome = session.render(&state);
    assert_eq!(outcome.cards.len(), 1);
    assert_eq!(outcome.cards[0].name, "Paint");

    let html = session.render_html(&state);
    assert!(html.contains("saas-card-dark"));

    // fuzzy is off: a typo finds nothing
    let state = session.perform_search("pant");
    assert_eq!(session.render(&state).message, Some(NO_RESULTS_MESSAGE));
}

#[test]
fn test_broken_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[display\nlimit = ").unwrap();
    let err = SearchConfig::load_or_default(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_cards_for_ranked_results() {
    let mut session = SearchSession::with_catalog(SearchConfig::default(), load_fixture());
    let state = session.perform_search("chat");
    let outcome = session.render(&state);

    assert_eq!(outcome.message, None);
    let card = &outcome.cards[0];
    assert_eq!(card.name, "Chat");
    assert_eq!(card.app_href, "../app/org.laptop.Chat.html");
    assert_eq!(card.bundle_href, "../bundles/Chat-86.xo");
    assert_eq!(card.icon_src, "../icons/org.sugarlabs.HelloWorld.svg");
    assert_eq!(card.badge.as_ref().map(|b| b.image), Some("sugar2-1.svg"));
    assert!(card.info_href.is_none());
}

#[test]
fn test_placeholder_summary_in_html() {
    let mut session = SearchSession::with_catalog(SearchConfig::default(), load_fixture());
    let state = session.perform_search("abacus");
    let results = expect_ready(state.clone());
    assert!(!results.is_empty());

    // abacus has a summary; strip it to see the placeholder
    let mut catalog = load_fixture().records().to_vec();
    catalog[5].summary = None;
    let session = SearchSession::with_catalog(SearchConfig::default(), Catalog::new(catalog));
    let html = session.render_html(&state);
    assert!(html.contains(PLACEHOLDER_SUMMARY));
}

#[test]
fn test_snippet_style() {
    let mut config = SearchConfig::default();
    config.display.style = CardStyle::Snippet;
    config.display.theme = CardTheme::Light;

    let mut session = SearchSession::with_catalog(config, load_fixture());
    let state = session.perform_search("turtle");
    let html = session.render_html(&state);
    assert!(html.starts_with("<hr><h1><a href=\"./app/Turtle Blocks.html\">Turtle Blocks</a></h1>"));
    assert!(html.contains("<li>programming</li>"));
    assert!(html.contains("./bundles/Turtle Blocks.xo"));
}

#[test]
fn test_unavailable_state_renders_message() {
    let mut session = SearchSession::new(SearchConfig::default());
    session.fail_index_load(SearchError::load_failure("network down"));
    let state = session.perform_search("paint");
    assert!(matches!(state, SearchState::Unavailable(_)));
    assert!(session.render_html(&state).starts_with("<h1>"));
}

#[test]
fn test_fixture_path_is_absolute() {
    assert!(std::path::Path::new(FIXTURE_INDEX).is_absolute());
}
