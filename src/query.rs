// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page query strings: `?q=turtle&tag=art&tag=math`.
//!
//! Parsing is deliberately literal. Keys and values are taken as written, with
//! no percent-decoding, unless [`QueryDecoding::Form`] is asked for. Pages in
//! the wild have been linking to search results with raw query strings for a
//! long time, and those links must keep producing the same queries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::form_urlencoded;

/// How keys and values are decoded after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDecoding {
    /// Keep text exactly as it appears in the URL.
    #[default]
    Raw,
    /// `application/x-www-form-urlencoded`: `+` is a space, `%XX` is a byte.
    Form,
}

/// Every occurrence of every key, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters {
    params: HashMap<String, Vec<String>>,
}

impl QueryParameters {
    /// All values for `key`, in order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value for `key`.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.params
    }

    fn push(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }
}

/// Parse a URL query string into a multimap, without decoding.
///
/// Everything up to and including the first `?` is dropped (the whole string
/// is used if there is none). Pairs are split on `&`, then on the first `=`,
/// so values may themselves contain `=`.
///
/// A pair without `=` is stored under the empty key with the whole pair as
/// its value, matching how pages have always read such links.
///
/// ```
/// use activity_search::parse_query_parameters;
///
/// let params = parse_query_parameters("?a=1&a=2&b=3");
/// assert_eq!(params.get_all("a"), ["1", "2"]);
/// assert_eq!(params.get_all("b"), ["3"]);
/// ```
pub fn parse_query_parameters(query_string: &str) -> QueryParameters {
    parse_query_parameters_with(query_string, QueryDecoding::Raw)
}

/// Parse a URL query string, decoding keys and values as configured.
pub fn parse_query_parameters_with(query_string: &str, decoding: QueryDecoding) -> QueryParameters {
    let rest = match query_string.find('?') {
        Some(at) => &query_string[at + 1..],
        None => query_string,
    };

    let mut params = QueryParameters::default();
    for pair in rest.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or(("", pair));
        params.push(decode(key, decoding), decode(value, decoding));
    }
    params
}

/// The search query carried by `?q=`, with `+` read as a space.
///
/// Returns `None` when there is no `q` or it is blank.
pub fn query_from_location(search: &str, decoding: QueryDecoding) -> Option<String> {
    let params = parse_query_parameters_with(search, decoding);
    let query = params.get_first("q")?.replace('+', " ");
    if query.trim().is_empty() {
        None
    } else {
        Some(query)
    }
}

fn decode(text: &str, decoding: QueryDecoding) -> String {
    match decoding {
        QueryDecoding::Raw => text.to_string(),
        QueryDecoding::Form => form_decode(text),
    }
}

/// Decode `+` and `%XX` in one key or value. Malformed escapes are kept
/// literally; invalid UTF-8 is replaced with U+FFFD.
///
/// The component is parsed as the value of an empty key so that any `=` it
/// still holds stays part of the text.
fn form_decode(text: &str) -> String {
    form_urlencoded::parse(format!("={}", text).as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_accumulate() {
        let params = parse_query_parameters("?a=1&a=2&b=3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get_all("a"), ["1", "2"]);
        assert_eq!(params.get_all("b"), ["3"]);
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let params = parse_query_parameters("?expr=a=b");
        assert_eq!(params.get_first("expr"), Some("a=b"));
    }

    #[test]
    fn test_prefix_before_question_mark_dropped() {
        let params = parse_query_parameters("/search.html?q=paint");
        assert_eq!(params.get_first("q"), Some("paint"));
    }

    #[test]
    fn test_no_question_mark_uses_whole_string() {
        let params = parse_query_parameters("q=paint");
        assert_eq!(params.get_first("q"), Some("paint"));
    }

    #[test]
    fn test_pair_without_equals_goes_under_empty_key() {
        let params = parse_query_parameters("?flag&q=x");
        assert_eq!(params.get_all(""), ["flag"]);
        assert_eq!(params.get_first("q"), Some("x"));
    }

    #[test]
    fn test_empty_query_string() {
        let params = parse_query_parameters("");
        assert_eq!(params.get_all(""), [""]);
    }

    #[test]
    fn test_raw_does_not_decode() {
        let params = parse_query_parameters("?q=caf%C3%A9+au+lait");
        assert_eq!(params.get_first("q"), Some("caf%C3%A9+au+lait"));
    }

    #[test]
    fn test_form_decodes() {
        let params = parse_query_parameters_with("?q=caf%C3%A9+au+lait", QueryDecoding::Form);
        assert_eq!(params.get_first("q"), Some("café au lait"));
    }

    #[test]
    fn test_form_keeps_malformed_escapes() {
        let params = parse_query_parameters_with("?q=100%&r=%zz", QueryDecoding::Form);
        assert_eq!(params.get_first("q"), Some("100%"));
        assert_eq!(params.get_first("r"), Some("%zz"));
    }

    #[test]
    fn test_form_decodes_keys_and_keeps_equals_in_values() {
        let params = parse_query_parameters_with("?%71=a%3Db=c&tag=%FF", QueryDecoding::Form);
        assert_eq!(params.get_first("q"), Some("a=b=c"));
        assert_eq!(params.get_first("tag"), Some("\u{FFFD}"));
    }

    #[test]
    fn test_form_decodes_empty_pair() {
        let params = parse_query_parameters_with("?q=", QueryDecoding::Form);
        assert_eq!(params.get_first("q"), Some(""));
    }

    #[test]
    fn test_query_from_location_replaces_every_plus() {
        assert_eq!(
            query_from_location("?q=turtle+art+blocks", QueryDecoding::Raw),
            Some("turtle art blocks".to_string())
        );
    }

    #[test]
    fn test_query_from_location_uses_first_q() {
        assert_eq!(
            query_from_location("?q=one&q=two", QueryDecoding::Raw),
            Some("one".to_string())
        );
    }

    #[test]
    fn test_query_from_location_blank_or_missing() {
        assert_eq!(query_from_location("?q=", QueryDecoding::Raw), None);
        assert_eq!(query_from_location("?q=+++", QueryDecoding::Raw), None);
        assert_eq!(query_from_location("?tag=art", QueryDecoding::Raw), None);
    }
}
