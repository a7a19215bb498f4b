// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how catalog records get their numbers.
//!
//! Each record is scored by counting word overlaps between the query and each
//! field, weighted by field: name (10) > tags (5) > summary (3) > description (2).
//! Ranking then sorts by that score, highest first.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_ranked, matching, rank_all, rank_all_with};
