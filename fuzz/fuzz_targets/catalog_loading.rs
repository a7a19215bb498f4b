// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index.json decoding.
//!
//! Any bytes must produce a catalog or an error, never a panic. Lenient
//! loading must account for every array element: kept or skipped.

#![no_main]

use activity_search::{Catalog, LoadMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = Catalog::from_reader(data, LoadMode::Strict);

    if let Ok(serde_json::Value::Array(entries)) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(report) = Catalog::from_reader(data, LoadMode::Lenient) {
            assert_eq!(report.catalog.len() + report.skipped.len(), entries.len());
        }
    }
});
