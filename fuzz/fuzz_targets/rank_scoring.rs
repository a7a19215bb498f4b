// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for keyword ranking.
//!
//! Arbitrary records and queries: rank_all must return one result per record,
//! sorted by score, with every id pointing at a record.

#![no_main]

use activity_search::{rank_all, score, AppRecord};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    records: Vec<(String, Option<String>, Option<String>, Vec<String>)>,
}

fuzz_target!(|input: Input| {
    let records: Vec<AppRecord> = input
        .records
        .into_iter()
        .take(64)
        .map(|(name, summary, description, tags)| AppRecord {
            summary,
            description,
            tags,
            ..AppRecord::named(name)
        })
        .collect();

    let results = rank_all(&records, &input.query);
    assert_eq!(results.len(), records.len());

    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        let record = &records[result.id.as_usize()];
        assert_eq!(result.score, score(record, &input.query));
    }
});
