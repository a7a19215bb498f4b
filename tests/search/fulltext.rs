//! The full-text engine against the fixture catalog.

use super::common::{expect_ready, fulltext_config, load_fixture, names};
use activity_search::{FullTextIndex, SearchResults, SearchSession};

fn session() -> SearchSession {
    SearchSession::with_catalog(fulltext_config(), load_fixture())
}

#[test]
fn test_one_edit_typo_finds_name() {
    let mut session = session();
    let results = expect_ready(session.perform_search("pant"));
    let catalog = session.catalog().unwrap();
    assert_eq!(names(catalog, &results)[0], "Paint");
}

#[test]
fn test_transposed_letters_find_name() {
    let mut session = session();
    let results = expect_ready(session.perform_search("turtel"));
    let catalog = session.catalog().unwrap();
    assert_eq!(names(catalog, &results)[0], "Turtle Blocks");
}

#[test]
fn test_name_match_outranks_summary_only_match() {
    let mut session = session();
    let results = expect_ready(session.perform_search("paint"));
    let catalog = session.catalog().unwrap();
    let found = names(catalog, &results);
    assert_eq!(&found[..2], ["Paint", "Write"]);
}

#[test]
fn test_diacritics_ignored() {
    let mut session = session();
    let results = expect_ready(session.perform_search("etoile"));
    let catalog = session.catalog().unwrap();
    assert_eq!(names(catalog, &results)[0], "Étoile");
}

#[test]
fn test_blank_query_lists_in_code_point_order() {
    let mut session = session();
    let results = expect_ready(session.perform_search(""));
    assert!(matches!(results, SearchResults::Alphabetical(_)));

    let catalog = session.catalog().unwrap();
    assert_eq!(
        names(catalog, &results),
        vec!["Chat", "Music Blocks", "Paint", "Turtle Blocks", "Write", "abacus", "Étoile"]
    );
}

#[test]
fn test_index_reused_across_queries() {
    let mut session = session();
    session.perform_search("paint");
    let first: *const FullTextIndex = session.fulltext_index().unwrap();
    session.perform_search("chat");
    session.perform_search("music");
    let second: *const FullTextIndex = session.fulltext_index().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_hits_carry_stored_fields() {
    let session = session();
    let hits = match session.search_now("chat").unwrap() {
        SearchResults::FullText(hits) => hits,
        other => panic!("unexpected {other:?}"),
    };
    let stored = session.stored_fields(&hits[0]);
    assert_eq!(stored["name"], "Chat");
    assert_eq!(stored["bundle_id"], "org.laptop.Chat");
    assert_eq!(stored["v"], "86");
    assert!(!stored.contains_key("icon_name"));
    assert!(!stored.contains_key("description"));
}
