//! Query-string parsing as pages see it.

use activity_search::query::query_from_location;
use activity_search::{parse_query_parameters, parse_query_parameters_with, QueryDecoding};

#[test]
fn test_repeated_keys() {
    let params = parse_query_parameters("?a=1&a=2&b=3");
    assert_eq!(params.get_all("a"), ["1", "2"]);
    assert_eq!(params.get_all("b"), ["3"]);
    assert!(params.get_all("c").is_empty());
}

#[test]
fn test_full_url() {
    let params = parse_query_parameters("https://activities.sugarlabs.org/search.html?q=chess&page=2");
    assert_eq!(params.get_first("q"), Some("chess"));
    assert_eq!(params.get_first("page"), Some("2"));
}

#[test]
fn test_raw_by_default_form_on_request() {
    let raw = parse_query_parameters("?q=%C3%A9toile");
    assert_eq!(raw.get_first("q"), Some("%C3%A9toile"));

    let decoded = parse_query_parameters_with("?q=%C3%A9toile", QueryDecoding::Form);
    assert_eq!(decoded.get_first("q"), Some("étoile"));
}

#[test]
fn test_location_query() {
    assert_eq!(
        query_from_location("?q=music+blocks", QueryDecoding::Raw).as_deref(),
        Some("music blocks")
    );
    assert_eq!(query_from_location("?lang=en", QueryDecoding::Raw), None);
}
