//! Keyword ranking: weights, ordering, and the zero-score cutoff.

use super::common::{load_fixture, make_record, names, paint_write};
use activity_search::{
    matching, rank_all, rank_all_with, score, RankWeights, SearchConfig, SearchResults,
    SearchSession, Sensitivity,
};

#[test]
fn test_paint_write_scenario() {
    let catalog = paint_write();
    let results = rank_all(catalog.records(), "paint");

    assert_eq!(results.len(), 2);
    assert_eq!((results[0].id.get(), results[0].score), (0, 10));
    assert_eq!((results[1].id.get(), results[1].score), (1, 0));
    assert_eq!(matching(&results).len(), 1);
}

#[test]
fn test_fixture_name_beats_summary() {
    let catalog = load_fixture();
    let results = rank_all(catalog.records(), "paint");

    assert_eq!(results.len(), catalog.len());
    assert_eq!(results[0].score, 13);
    assert_eq!(catalog[results[0].id].name, "Paint");
    assert_eq!(results[1].score, 3);
    assert_eq!(catalog[results[1].id].name, "Write");
    assert!(results[2..].iter().all(|r| r.score == 0));
}

#[test]
fn test_tags_and_summary_combine() {
    let catalog = load_fixture();
    let results = SearchResults::Ranked(rank_all(catalog.records(), "art"));
    assert_eq!(names(&catalog, &results), vec!["Turtle Blocks", "Paint"]);

    if let SearchResults::Ranked(ranked) = &results {
        assert_eq!(ranked[0].score, 8);
        assert_eq!(ranked[1].score, 5);
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = load_fixture();
    let results = SearchResults::Ranked(rank_all(catalog.records(), "programming"));
    assert_eq!(names(&catalog, &results), vec!["Turtle Blocks", "Music Blocks"]);
}

#[test]
fn test_description_counts_two() {
    let catalog = load_fixture();
    let results = rank_all(catalog.records(), "blocks");
    let turtle = results.iter().find(|r| catalog[r.id].name == "Turtle Blocks").unwrap();
    let music = results.iter().find(|r| catalog[r.id].name == "Music Blocks").unwrap();
    assert_eq!(turtle.score, 12);
    assert_eq!(music.score, 10);
}

#[test]
fn test_accents_and_case_ignored_by_default() {
    let catalog = load_fixture();
    let results = rank_all(catalog.records(), "ETOILE");
    assert_eq!(catalog[results[0].id].name, "Étoile");
    assert_eq!(results[0].score, 10);
}

#[test]
fn test_accent_sensitivity_distinguishes_diacritics() {
    let catalog = load_fixture();
    let results = rank_all_with(
        catalog.records(),
        "etoile",
        &RankWeights::default(),
        &Sensitivity::Accent,
    );
    assert!(matching(&results).is_empty());
}

#[test]
fn test_custom_weights() {
    let weights = RankWeights {
        tag: 50,
        ..RankWeights::default()
    };
    let catalog = paint_write();
    let results = rank_all_with(catalog.records(), "office", &weights, &Sensitivity::Base);
    assert_eq!(results[0].score, 50);
    assert_eq!(results[0].id.get(), 1);
}

#[test]
fn test_repeated_words_count_each_pair() {
    let record = make_record("Memorize Memorize", "", &[]);
    assert_eq!(score(&record, "memorize"), 20);
    assert_eq!(score(&record, "memorize memorize"), 40);
}

#[test]
fn test_no_match_is_no_results() {
    let session = SearchSession::with_catalog(SearchConfig::default(), load_fixture());
    let results = session.search_now("spreadsheet").unwrap();
    assert!(results.is_empty());
    assert!(results.display_ids().is_empty());
}
