// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The full-text engine expands each query term to every vocabulary term
//! within a length-dependent edit budget. Vocabularies here are small (one
//! catalog's names and summaries), so a bounded DP per candidate is enough.

mod levenshtein;

pub use levenshtein::*;
