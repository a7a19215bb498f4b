// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over a [`FullTextIndex`].
//!
//! Each query term expands to a set of vocabulary terms, each with a weight:
//!
//! | Match  | Weight                              |
//! |--------|-------------------------------------|
//! | Exact  | 1.0                                 |
//! | Prefix | 0.375 × len / (len + extra chars)   |
//! | Fuzzy  | 0.45 × len / (len + edit distance)  |
//!
//! A vocabulary term reached several ways keeps its best weight. Every posting
//! of an expanded term adds `weight × field boost × BM25+` to its record.
//! Query terms are OR-combined: a record matching any term is a hit.

use super::index::{tokenize, FullTextIndex};
use super::{FullTextOptions, FUZZY_WEIGHT, PREFIX_WEIGHT};
use crate::catalog::Catalog;
use crate::fuzzy::levenshtein_bounded;
use crate::types::RecordId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// BM25 term-frequency saturation.
const BM25_K: f64 = 1.2;
/// BM25 length normalization.
const BM25_B: f64 = 0.7;
/// BM25+ lower bound for any matching term.
const BM25_D: f64 = 0.5;

/// A record matched by a full-text query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullTextHit {
    pub id: RecordId,
    pub score: f64,
    /// Vocabulary terms that matched, sorted.
    pub terms: Vec<String>,
}

/// BM25+ relevance of one term in one field.
///
/// `doc_freq` is how many records contain the term in this field.
pub fn bm25_plus(
    term_freq: f64,
    doc_freq: f64,
    doc_count: f64,
    field_length: f64,
    avg_field_length: f64,
) -> f64 {
    let inv_doc_freq = (1.0 + (doc_count - doc_freq + 0.5) / (doc_freq + 0.5)).ln();
    let avg = if avg_field_length > 0.0 { avg_field_length } else { 1.0 };
    inv_doc_freq
        * (BM25_D
            + term_freq * (BM25_K + 1.0)
                / (term_freq + BM25_K * (1.0 - BM25_B + BM25_B * field_length / avg)))
}

/// Typo budget for a term of `term_len` characters.
///
/// A `fuzzy` below 1.0 is a fraction of the term length (rounded); 1.0 and
/// above is an absolute edit count. Either way the result is capped at
/// `max_fuzzy`.
pub fn max_edit_distance(term_len: usize, fuzzy: f64, max_fuzzy: usize) -> usize {
    if fuzzy <= 0.0 {
        return 0;
    }
    let budget = if fuzzy < 1.0 {
        (fuzzy * term_len as f64).round() as usize
    } else {
        fuzzy as usize
    };
    budget.min(max_fuzzy)
}

impl FullTextIndex {
    /// Find records matching any term of `query`, best first.
    ///
    /// A query with no terms returns nothing; callers that want "everything"
    /// for a blank query use [`alphabetical`].
    pub fn search(&self, query: &str, options: &FullTextOptions) -> Vec<FullTextHit> {
        let query_terms = tokenize(query);
        if query_terms.is_empty() {
            return Vec::new();
        }

        let doc_count = self.doc_count() as f64;
        let mut scores: HashMap<RecordId, (f64, BTreeSet<String>)> = HashMap::new();

        for query_term in &query_terms {
            for (term, weight) in self.expand(query_term, options) {
                let Some(postings) = self.postings(term) else {
                    continue;
                };

                let mut doc_freq = vec![0usize; self.fields().len()];
                for posting in postings {
                    doc_freq[posting.field] += 1;
                }

                for posting in postings {
                    let boost = options.boost.get(self.fields()[posting.field]);
                    let relevance = bm25_plus(
                        f64::from(posting.term_freq),
                        doc_freq[posting.field] as f64,
                        doc_count,
                        f64::from(self.field_length(posting.id, posting.field)),
                        self.avg_field_length(posting.field),
                    );
                    let entry = scores.entry(posting.id).or_default();
                    entry.0 += weight * boost * relevance;
                    entry.1.insert(term.to_string());
                }
            }
        }

        let mut hits: Vec<FullTextHit> = scores
            .into_iter()
            .filter(|(_, (score, _))| *score > 0.0)
            .map(|(id, (score, terms))| FullTextHit {
                id,
                score,
                terms: terms.into_iter().collect(),
            })
            .collect();

        hits.sort_by(compare_hits);
        hits
    }

    /// Vocabulary terms reachable from `query_term`, with their best weight.
    fn expand<'a>(&'a self, query_term: &str, options: &FullTextOptions) -> Vec<(&'a str, f64)> {
        let query_len = query_term.chars().count();
        let mut weights: HashMap<&'a str, f64> = HashMap::new();
        let mut offer = |term: &'a str, weight: f64| {
            let best = weights.entry(term).or_insert(0.0);
            if weight > *best {
                *best = weight;
            }
        };

        if let Some(term) = self.term(query_term) {
            offer(term, 1.0);
        }

        if options.prefix {
            for term in self.terms_with_prefix(query_term) {
                let extra = term.chars().count() - query_len;
                if extra > 0 {
                    offer(term, PREFIX_WEIGHT * query_len as f64 / (query_len + extra) as f64);
                }
            }
        }

        let budget = max_edit_distance(query_len, options.fuzzy, options.max_fuzzy);
        if budget > 0 {
            for term in self.vocabulary() {
                if let Some(distance) = levenshtein_bounded(query_term, term, budget) {
                    if distance > 0 {
                        offer(
                            term,
                            FUZZY_WEIGHT * query_len as f64 / (query_len + distance) as f64,
                        );
                    }
                }
            }
        }

        let mut expanded: Vec<(&'a str, f64)> = weights.into_iter().collect();
        expanded.sort_by(|a, b| a.0.cmp(b.0));
        expanded
    }
}

/// Higher score first; record id breaks ties so output is deterministic.
fn compare_hits(a: &FullTextHit, b: &FullTextHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Every record, sorted by name in code-point order.
///
/// Case-sensitive: every uppercase ASCII letter sorts before every lowercase
/// one, so `["Zebra", "Apple", "mango"]` lists as Apple, Zebra, mango. Equal
/// names keep catalog order.
pub fn alphabetical(catalog: &Catalog) -> Vec<RecordId> {
    let mut ids: Vec<RecordId> = catalog.iter().map(|(id, _)| id).collect();
    ids.sort_by(|a, b| catalog[*a].name.cmp(&catalog[*b].name));
    ids
}
