// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This is what makes "Café" and "cafe" the same word:
/// - "café" → "cafe"
/// - "ÉTOILE" → "etoile"
/// - "naïve" → "naive"
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
pub fn normalize(value: &str) -> String {
    strip_diacritics(value)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// NFD-decompose and drop combining marks, leaving case untouched.
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Split text into whitespace-delimited words. Runs of whitespace never
/// produce empty words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split text into index terms: runs of alphanumeric characters.
///
/// Punctuation and whitespace both separate terms, so "Turtle-Blocks!" yields
/// "Turtle" and "Blocks".
pub fn split_terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
}
