// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error kinds for loading and querying a catalog.
//!
//! None of these are fatal to a search session. A failed load leaves the
//! session in an "unavailable" state; a malformed record is skipped in lenient
//! mode; an empty query produces an empty result set.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The index could not be read or is not a JSON array.
    #[error("failed to load catalog index: {reason}")]
    IndexLoadFailure { reason: String },

    /// One entry of the index could not be decoded into a record.
    #[error("malformed record at position {position}: {reason}")]
    MalformedRecord { position: usize, reason: String },

    /// The query has no words to match against.
    #[error("empty query")]
    EmptyQuery,
}

impl SearchError {
    pub fn load_failure(reason: impl ToString) -> Self {
        SearchError::IndexLoadFailure {
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
