// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `config.toml`: which engine runs, how it scores, how results look.
//!
//! Every table and key is optional. A missing file is the same as an empty
//! one, and an empty one is [`SearchConfig::default()`].
//!
//! ```toml
//! engine = "fulltext"
//! load_mode = "lenient"
//!
//! [rank.weights]
//! name = 10
//!
//! [fulltext]
//! fuzzy = 0.3
//! prefix = true
//!
//! [display]
//! theme = "dark"
//! limit = 20
//! ```

use crate::catalog::LoadMode;
use crate::fulltext::FullTextOptions;
use crate::query::QueryDecoding;
use crate::render::DisplayOptions;
use crate::scoring::RankWeights;
use crate::similarity::Sensitivity;
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which engine answers a non-empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Weighted whole-word overlap.
    #[default]
    Rank,
    /// BM25+ with typo tolerance.
    FullText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    pub weights: RankWeights,
    pub sensitivity: Sensitivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub decoding: QueryDecoding,
}

/// Everything a search session can be tuned with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub engine: EngineKind,
    pub load_mode: LoadMode,
    pub rank: RankOptions,
    pub fulltext: FullTextOptions,
    pub query: QueryOptions,
    pub display: DisplayOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `config.toml` in the platform config directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "sugarlabs", "activity-search")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load an explicit path (which must exist), else the default path if it
    /// exists, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
