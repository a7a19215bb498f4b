// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{AppRecord, ExecType, Version};

/// Create a record with a name, summary and tags. Everything else empty.
pub fn make_record(name: &str, summary: &str, tags: &[&str]) -> AppRecord {
    AppRecord {
        summary: Some(summary.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..AppRecord::named(name)
    }
}

/// Create a record with every display field filled in, the way the store
/// generator writes them.
pub fn make_full_record(name: &str, bundle_id: &str, exec_type: ExecType) -> AppRecord {
    AppRecord {
        summary: Some(format!("{} summary", name)),
        description: Some(format!("{} description", name)),
        icon_name: Some(bundle_id.to_string()),
        bundle_name: Some(format!("{}-1.xo", name)),
        bundle_id: Some(bundle_id.to_string()),
        url: Some(format!("https://example.org/{}", name)),
        v: Some(Version("1".to_string())),
        exec_type: Some(exec_type),
        ..AppRecord::named(name)
    }
}

/// Wrap records into a catalog, keeping their order.
pub fn make_catalog(records: Vec<AppRecord>) -> Catalog {
    Catalog::new(records)
}
