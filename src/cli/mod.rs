// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the activity-search command-line interface.
//!
//! Three subcommands: `search` to query an `index.json`, `list` to print the
//! catalog alphabetically (what a blank store-page search shows), and `params`
//! to see how a page would read a query string.

pub mod display;

use activity_search::EngineKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "activity-search",
    about = "Search an activity catalog index",
    version
)]
pub struct Cli {
    /// Config file (default: config.toml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog records against a query
    Search {
        /// Path to index.json
        index: PathBuf,

        /// Search query
        query: String,

        /// Engine to use (overrides the config file)
        #[arg(short, long, value_enum)]
        engine: Option<EngineArg>,

        /// Maximum number of results to show (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every record by name
    List {
        /// Path to index.json
        index: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a URL query string and print it as JSON
    Params {
        /// Query string, e.g. "?q=paint&tag=art"
        query_string: String,

        /// Decode `+` and `%XX` escapes
        #[arg(long)]
        decode: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    Rank,
    Fulltext,
}

impl From<EngineArg> for EngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Rank => EngineKind::Rank,
            EngineArg::Fulltext => EngineKind::FullText,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed, colored terminal output
    Text,
    Json,
    /// Result cards as HTML
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "activity-search",
            "search",
            "index.json",
            "turtle art",
            "--engine",
            "fulltext",
            "--limit",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                query,
                engine,
                limit,
                format,
                ..
            } => {
                assert_eq!(query, "turtle art");
                assert_eq!(engine, Some(EngineArg::Fulltext));
                assert_eq!(limit, Some(3));
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "activity-search",
            "params",
            "?q=a",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
