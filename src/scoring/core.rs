// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind keyword ranking.
//!
//! A field's contribution is `weight × pairs`, where `pairs` counts every
//! (field word, query word) pair that is similar. Nothing is normalized by
//! length: a field that repeats a word, or a query that repeats a word, counts
//! each repetition. Catalogs built against these scores rely on that, so the
//! arithmetic is kept exactly as is.
//!
//! ```text
//! score = 10·pairs(name) + 3·pairs(summary) + 2·pairs(description)
//!       + 5·Σ_tag pairs(tag)
//! ```

use crate::similarity::{Sensitivity, WordNormalizer};
use crate::types::{AppRecord, Score};
use crate::utils::split_words;
use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight of a name word match.
pub const NAME_WEIGHT: Score = 10;

/// Weight of a tag word match (per tag).
pub const TAG_WEIGHT: Score = 5;

/// Weight of a summary word match.
pub const SUMMARY_WEIGHT: Score = 3;

/// Weight of a description word match.
pub const DESCRIPTION_WEIGHT: Score = 2;

/// Per-field multipliers. Defaults are the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    pub name: Score,
    pub summary: Score,
    pub description: Score,
    pub tag: Score,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            name: NAME_WEIGHT,
            summary: SUMMARY_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            tag: TAG_WEIGHT,
        }
    }
}

/// Query words in canonical form, computed once per search instead of once
/// per (record, field) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    words: Vec<String>,
}

impl PreparedQuery {
    pub fn new<N: WordNormalizer + ?Sized>(query: &str, normalizer: &N) -> Self {
        Self {
            words: split_words(query).map(|w| normalizer.normalize(w)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Count similar (field word, query word) pairs at base sensitivity.
///
/// ```
/// use activity_search::count_similar_words;
///
/// assert_eq!(count_similar_words("Paint", "paint"), 1);
/// assert_eq!(count_similar_words("the the", "THE"), 2);
/// assert_eq!(count_similar_words("the the", "the the"), 4);
/// ```
pub fn count_similar_words(field: &str, query: &str) -> usize {
    let prepared = PreparedQuery::new(query, &Sensitivity::Base);
    count_similar_words_prepared(field, &prepared, &Sensitivity::Base)
}

/// Pair count against an already-normalized query.
pub fn count_similar_words_prepared<N: WordNormalizer + ?Sized>(
    field: &str,
    query: &PreparedQuery,
    normalizer: &N,
) -> usize {
    if query.is_empty() {
        return 0;
    }
    split_words(field)
        .map(|word| {
            let canonical = normalizer.normalize(word);
            query.words.iter().filter(|q| **q == canonical).count()
        })
        .sum()
}

/// Score one record against a query with the default weights and base
/// sensitivity.
pub fn score(record: &AppRecord, query: &str) -> Score {
    let prepared = PreparedQuery::new(query, &Sensitivity::Base);
    score_with(record, &prepared, &RankWeights::default(), &Sensitivity::Base)
}

/// Score one record against a prepared query.
pub fn score_with<N: WordNormalizer + ?Sized>(
    record: &AppRecord,
    query: &PreparedQuery,
    weights: &RankWeights,
    normalizer: &N,
) -> Score {
    let pairs = |text: &str| count_similar_words_prepared(text, query, normalizer) as Score;

    let tag_pairs = record
        .tags
        .iter()
        .fold(0, |acc: Score, tag| acc.saturating_add(pairs(tag.as_str())));

    // Configured weights are unbounded; saturate at Score::MAX.
    [
        weights.name.saturating_mul(pairs(record.name.as_str())),
        weights.summary.saturating_mul(pairs(record.summary_text())),
        weights.description.saturating_mul(pairs(record.description_text())),
        weights.tag.saturating_mul(tag_pairs),
    ]
    .into_iter()
    .fold(0, Score::saturating_add)
}
