// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query-string parsing.
//!
//! Page URLs are attacker-controlled. Parsing must never panic, and with raw
//! decoding every value must be a substring of the input.

#![no_main]

use activity_search::query::query_from_location;
use activity_search::{parse_query_parameters, parse_query_parameters_with, QueryDecoding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let raw = parse_query_parameters(input);
    for (key, values) in raw.clone().into_inner() {
        assert!(input.contains(&key));
        for value in values {
            assert!(input.contains(&value));
        }
    }

    let _ = parse_query_parameters_with(input, QueryDecoding::Form);

    if let Some(query) = query_from_location(input, QueryDecoding::Raw) {
        assert!(!query.contains('+'));
        assert!(!query.trim().is_empty());
    }
});
