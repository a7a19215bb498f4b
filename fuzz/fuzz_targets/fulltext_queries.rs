// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full-text engine.
//!
//! Emoji, combining marks, RTL text, empty strings: none of it should crash
//! the tokenizer or the fuzzy expansion, and scores must stay finite.

#![no_main]

use activity_search::{AppRecord, Catalog, FullTextIndex, FullTextOptions};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    names: Vec<String>,
    summaries: Vec<String>,
    prefix: bool,
}

fuzz_target!(|input: Input| {
    let records: Vec<AppRecord> = input
        .names
        .into_iter()
        .zip(input.summaries)
        .take(32)
        .map(|(name, summary)| AppRecord {
            summary: Some(summary),
            ..AppRecord::named(name)
        })
        .collect();
    let catalog = Catalog::new(records);

    let options = FullTextOptions {
        prefix: input.prefix,
        ..FullTextOptions::default()
    };
    let index = FullTextIndex::build(&catalog, &options.fields);
    let hits = index.search(&input.query, &options);

    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for hit in &hits {
        assert!(hit.score.is_finite() && hit.score > 0.0);
        assert!(catalog.get(hit.id).is_some());
    }
});
