//! Queries issued before the index arrives.

use super::common::{expect_ready, load_fixture, names};
use activity_search::{SearchConfig, SearchError, SearchSession, SearchState};

#[test]
fn test_only_last_deferred_query_runs() {
    let mut session = SearchSession::new(SearchConfig::default());
    assert_eq!(session.perform_search("chat"), SearchState::Deferred);
    assert_eq!(session.perform_search("paint"), SearchState::Deferred);

    let catalog = load_fixture();
    let results = expect_ready(session.assign_index(catalog.clone()).unwrap());
    assert_eq!(names(&catalog, &results), vec!["Paint", "Write"]);

    assert_eq!(session.pending_query(), None);
    assert!(session.assign_index(catalog).is_none());
}

#[test]
fn test_location_query_is_deferred_then_replayed() {
    let mut session = SearchSession::new(SearchConfig::default());
    assert_eq!(
        session.init_from_location("?q=turtle+blocks&lang=en"),
        Some(SearchState::Deferred)
    );

    let catalog = load_fixture();
    let results = expect_ready(session.assign_index(catalog.clone()).unwrap());
    assert_eq!(names(&catalog, &results), vec!["Turtle Blocks", "Music Blocks"]);
}

#[test]
fn test_search_after_load_runs_immediately() {
    let mut session = SearchSession::new(SearchConfig::default());
    let catalog = load_fixture();
    assert!(session.assign_index(catalog.clone()).is_none());

    let results = expect_ready(session.perform_search("chat"));
    assert_eq!(names(&catalog, &results), vec!["Chat"]);
}

#[test]
fn test_failed_load_reports_unavailable() {
    let mut session = SearchSession::new(SearchConfig::default());
    session.perform_search("paint");

    let error = SearchError::load_failure("HTTP 404");
    assert_eq!(
        session.fail_index_load(error.clone()),
        Some(SearchState::Unavailable(error.clone()))
    );
    assert_eq!(session.perform_search("chat"), SearchState::Unavailable(error));
    assert!(!session.is_index_loaded());
}
