// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde_json::json;
use std::path::Path;

use activity_search::render::NO_RESULTS_MESSAGE;
use activity_search::{
    alphabetical, parse_query_parameters_with, Catalog, QueryDecoding, RecordId, SearchConfig,
    SearchResults, SearchSession, SearchState,
};

mod cli;
use cli::display::{
    error_line, exec_label, rank_score, relevance_score, row, section_bot, section_top,
    tags_label, themed, truncate, BOLD, CYAN, GRAY,
};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", error_line(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config =
        SearchConfig::load_or_default(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Search {
            index,
            query,
            engine,
            limit,
            format,
        } => {
            if let Some(engine) = engine {
                config.engine = engine.into();
            }
            if limit.is_some() {
                config.display.limit = limit;
            }
            run_search(config, &index, &query, format)
        }
        Commands::List { index, format } => run_list(config, &index, format),
        Commands::Params {
            query_string,
            decode,
        } => {
            let decoding = if decode {
                QueryDecoding::Form
            } else {
                config.query.decoding
            };
            let params = parse_query_parameters_with(&query_string, decoding);
            println!("{}", serde_json::to_string_pretty(&params)?);
            Ok(())
        }
    }
}

fn load_catalog(config: &SearchConfig, path: &Path) -> Result<Catalog> {
    let report = Catalog::load(path, config.load_mode)
        .with_context(|| format!("cannot search {}", path.display()))?;
    for skipped in &report.skipped {
        debug!("skipped: {}", skipped);
    }
    Ok(report.catalog)
}

fn run_search(config: SearchConfig, index: &Path, query: &str, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(&config, index)?;
    let limit = config.display.limit.unwrap_or(usize::MAX);
    let session = SearchSession::with_catalog(config, catalog);
    let results = session.search_now(query)?;

    match format {
        OutputFormat::Html => {
            println!("{}", session.render_html(&SearchState::Ready(results)));
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = match &results {
                SearchResults::Ranked(ranked) => activity_search::matching(ranked)
                    .iter()
                    .take(limit)
                    .map(|r| {
                        json!({
                            "id": r.id,
                            "score": r.score,
                            "record": session.catalog().map(|c| &c[r.id]),
                        })
                    })
                    .collect(),
                SearchResults::FullText(hits) => hits
                    .iter()
                    .take(limit)
                    .map(|h| {
                        json!({
                            "id": h.id,
                            "score": h.score,
                            "terms": h.terms,
                            "stored": session.stored_fields(h),
                        })
                    })
                    .collect(),
                SearchResults::Alphabetical(ids) => ids
                    .iter()
                    .take(limit)
                    .map(|id| json!({ "id": id, "record": session.catalog().map(|c| &c[*id]) }))
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            let Some(catalog) = session.catalog() else {
                return Ok(());
            };
            section_top(&format!("{:?}", query));
            if results.is_empty() {
                row(&format!(" {}", themed(GRAY, &[], NO_RESULTS_MESSAGE)));
            }
            match &results {
                SearchResults::Ranked(ranked) => {
                    for r in activity_search::matching(ranked).iter().take(limit) {
                        row(&record_line(catalog, r.id, &rank_score(r.score)));
                    }
                }
                SearchResults::FullText(hits) => {
                    for h in hits.iter().take(limit) {
                        row(&record_line(catalog, h.id, &relevance_score(h.score)));
                    }
                }
                SearchResults::Alphabetical(ids) => {
                    for id in ids.iter().take(limit) {
                        row(&record_line(catalog, *id, ""));
                    }
                }
            }
            section_bot();
        }
    }
    Ok(())
}

fn run_list(config: SearchConfig, index: &Path, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(&config, index)?;
    let ids = alphabetical(&catalog);

    match format {
        OutputFormat::Json => {
            let names: Vec<&str> = ids.iter().map(|id| catalog[*id].name.as_str()).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Html => {
            let session = SearchSession::with_catalog(config, catalog);
            let state = SearchState::Ready(SearchResults::Alphabetical(ids));
            println!("{}", session.render_html(&state));
        }
        OutputFormat::Text => {
            section_top(&format!("{} activities", catalog.len()));
            for id in ids {
                row(&record_line(&catalog, id, ""));
            }
            section_bot();
        }
    }
    Ok(())
}

fn record_line(catalog: &Catalog, id: RecordId, score: &str) -> String {
    let record = &catalog[id];
    let exec = exec_label(record.exec_type.as_ref().map(|e| e.as_str()));
    format!(
        " {} {} {} {} {}",
        score,
        themed(CYAN, &[BOLD], &truncate(&record.name, 28)),
        exec,
        truncate(record.summary_text(), 24),
        tags_label(&record.tags)
    )
}
