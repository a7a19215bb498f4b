// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Every record gets a result, matching or not, so the output always has one
//! entry per catalog record. Results are sorted by score, highest first. The
//! sort is stable, so records with equal scores keep catalog order.
//!
//! Display stops at the first result with score 0: [`matching`] returns that
//! prefix, and an empty prefix means "no results".

use super::core::{score_with, PreparedQuery, RankWeights};
use crate::similarity::{Sensitivity, WordNormalizer};
use crate::types::{AppRecord, RankedResult, RecordId};
use std::cmp::Ordering;

/// Compare two ranked results: higher score first.
///
/// Equal scores compare equal. Callers that need a total order on ties rely
/// on the stable sort in [`rank_all_with`] to preserve catalog order.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.score.cmp(&a.score)
}

/// Score and sort every record with the default weights and base sensitivity.
pub fn rank_all(records: &[AppRecord], query: &str) -> Vec<RankedResult> {
    rank_all_with(
        records,
        query,
        &RankWeights::default(),
        &Sensitivity::Base,
    )
}

/// Score and sort every record.
///
/// Returns exactly `records.len()` results, each referencing a valid position.
pub fn rank_all_with<N: WordNormalizer + ?Sized>(
    records: &[AppRecord],
    query: &str,
    weights: &RankWeights,
    normalizer: &N,
) -> Vec<RankedResult> {
    let prepared = PreparedQuery::new(query, normalizer);

    let mut results: Vec<RankedResult> = records
        .iter()
        .enumerate()
        .map(|(position, record)| RankedResult {
            score: score_with(record, &prepared, weights, normalizer),
            id: RecordId::from(position),
        })
        .collect();

    results.sort_by(compare_ranked);
    results
}

/// The leading run of results with a positive score.
pub fn matching(results: &[RankedResult]) -> &[RankedResult] {
    let end = results
        .iter()
        .position(|r| !r.is_match())
        .unwrap_or(results.len());
    &results[..end]
}
