// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! When are two words "the same"?
//!
//! At primary collation strength, case and accents don't count: "Étoile" and
//! "etoile" are one word. We get that answer by mapping each word to a
//! canonical form and comparing the forms for equality. The mapping is
//! pluggable through [`WordNormalizer`].
//!
//! Because similarity is equality of canonical forms, it is reflexive,
//! symmetric, and transitive for every normalizer.

use crate::utils::strip_diacritics;
use serde::{Deserialize, Serialize};

/// Maps a word to the canonical form used for comparison.
pub trait WordNormalizer {
    fn normalize(&self, word: &str) -> String;
}

impl<F> WordNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }
}

/// Collation strength, named after the `Intl.Collator` sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Case and diacritics ignored: "Étoile" ~ "etoile".
    #[default]
    Base,
    /// Case ignored, diacritics significant: "Cat" ~ "cat", "café" !~ "cafe".
    Accent,
    /// Case significant, diacritics ignored: "café" ~ "cafe", "Cat" !~ "cat".
    Case,
    /// Exact code-point equality.
    Variant,
}

impl WordNormalizer for Sensitivity {
    fn normalize(&self, word: &str) -> String {
        match self {
            Sensitivity::Base => strip_diacritics(word).to_lowercase(),
            Sensitivity::Accent => word.to_lowercase(),
            Sensitivity::Case => strip_diacritics(word),
            Sensitivity::Variant => word.to_string(),
        }
    }
}

/// Are `a` and `b` the same word under `normalizer`?
pub fn similar_with<N: WordNormalizer + ?Sized>(normalizer: &N, a: &str, b: &str) -> bool {
    normalizer.normalize(a) == normalizer.normalize(b)
}

/// Are `a` and `b` the same word at base sensitivity?
pub fn similar(a: &str, b: &str) -> bool {
    similar_with(&Sensitivity::Base, a, b)
}
