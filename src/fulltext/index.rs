// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # Invariants
//!
//! 1. **POSTINGS_SORTED**: each posting list is sorted by `(id, field)`
//! 2. **NON_EMPTY**: every vocabulary term has at least one posting
//! 3. **POSTING_WELLFORMED**: every posting has a valid record id and field slot
//!    and a positive term frequency
//!
//! The vocabulary is a `BTreeMap` so prefix matches are a range scan.

use super::IndexedField;
use crate::catalog::Catalog;
use crate::types::RecordId;
use crate::utils::{normalize, split_terms, strip_diacritics};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// One term's occurrences in one field of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub id: RecordId,
    /// Slot of the field in [`FullTextIndex::fields`].
    pub field: usize,
    pub term_freq: u32,
}

/// Term → postings over a catalog's indexed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FullTextIndex {
    fields: Vec<IndexedField>,
    terms: BTreeMap<String, Vec<Posting>>,
    /// Token count per record per field slot.
    field_lengths: Vec<Vec<u32>>,
    /// Mean token count per field slot.
    avg_field_lengths: Vec<f64>,
}

/// Split text into normalized terms. Diacritics go first so that decomposed
/// text ("E\u{301}toile") is not split at its combining marks.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    split_terms(&strip_diacritics(text))
        .map(normalize)
        .filter(|term| !term.is_empty())
        .collect()
}

impl FullTextIndex {
    /// Tokenize `fields` of every record in the catalog.
    pub fn build(catalog: &Catalog, fields: &[IndexedField]) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
        let mut field_lengths = Vec::with_capacity(catalog.len());
        let mut totals = vec![0u64; fields.len()];

        for (id, record) in catalog.iter() {
            let mut lengths = Vec::with_capacity(fields.len());

            for (slot, field) in fields.iter().enumerate() {
                let tokens = tokenize(&field.text(record));
                lengths.push(tokens.len() as u32);
                totals[slot] += tokens.len() as u64;

                let mut counts: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *counts.entry(token).or_insert(0) += 1;
                }
                for (term, term_freq) in counts {
                    terms.entry(term).or_default().push(Posting {
                        id,
                        field: slot,
                        term_freq,
                    });
                }
            }

            field_lengths.push(lengths);
        }

        let doc_count = catalog.len().max(1) as f64;
        let avg_field_lengths = totals.iter().map(|&t| t as f64 / doc_count).collect();

        debug!(
            "built full-text index: {} records, {} terms, fields {:?}",
            catalog.len(),
            terms.len(),
            fields
        );

        Self {
            fields: fields.to_vec(),
            terms,
            field_lengths,
            avg_field_lengths,
        }
    }

    pub fn fields(&self) -> &[IndexedField] {
        &self.fields
    }

    /// Number of records indexed.
    pub fn doc_count(&self) -> usize {
        self.field_lengths.len()
    }

    /// Number of distinct terms.
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// All vocabulary terms in sorted order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// The vocabulary's copy of `term`, if indexed.
    pub fn term(&self, term: &str) -> Option<&str> {
        self.terms.get_key_value(term).map(|(key, _)| key.as_str())
    }

    /// Vocabulary terms starting with `prefix`, in sorted order.
    pub fn terms_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(term, _)| term.as_str())
            .take_while(|term| term.starts_with(prefix))
            .collect()
    }

    pub(crate) fn field_length(&self, id: RecordId, slot: usize) -> u32 {
        self.field_lengths
            .get(id.as_usize())
            .and_then(|lengths| lengths.get(slot))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn avg_field_length(&self, slot: usize) -> f64 {
        self.avg_field_lengths.get(slot).copied().unwrap_or(0.0)
    }
}
