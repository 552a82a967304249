//!
//! The scored listing tests.
//!

use std::collections::BTreeMap;

use crate::aggregator::independent::IndependentAggregator;
use crate::aggregator::ranking::RankingAggregator;
use crate::model::benchmark_result::BenchmarkResult;
use crate::model::commit_data::AnnotatedCommitData;
use crate::model::commit_data::CommitData;
use crate::model::run::BenchmarkRun;

use super::annotate;
use super::Options;

fn entry(tag: &str, target: f64) -> CommitData {
    CommitData::new(
        format!("{tag}-hash"),
        format!("{tag} subject"),
        BenchmarkRun {
            tag: tag.to_owned(),
            experiment: "e".to_owned(),
            experiment_version: 1,
            machine: "m".to_owned(),
            benchmarks: BTreeMap::from([("b".to_owned(), BenchmarkResult::new(target))]),
            file_digest: String::new(),
        },
    )
}

fn tags(annotated: &[AnnotatedCommitData]) -> Vec<&str> {
    annotated
        .iter()
        .map(|entry| entry.data.run.tag.as_str())
        .collect()
}

#[test]
fn best_is_last() {
    let entries = vec![entry("a", 3.0), entry("b", 1.0), entry("c", 2.0)];

    let annotated = annotate(
        entries,
        None,
        &IndependentAggregator::mean(),
        &Options::default(),
    );

    assert_eq!(tags(annotated.as_slice()), vec!["a", "c", "b"]);
    let scores: Vec<f64> = annotated.iter().map(|entry| entry.score).collect();
    assert_eq!(scores, vec![3.0, 2.0, 1.0]);
}

#[test]
fn higher_is_better_sorts_ascending() {
    let entries = vec![entry("a", 3.0), entry("b", 1.0), entry("c", 2.0)];
    let aggregator = IndependentAggregator::mean().with_lower_is_better(false);

    let annotated = annotate(entries, None, &aggregator, &Options::default());

    assert_eq!(tags(annotated.as_slice()), vec!["b", "c", "a"]);
}

#[test]
fn commit_order_is_kept() {
    let entries = vec![entry("a", 3.0), entry("b", 1.0), entry("c", 2.0)];
    let options = Options {
        limit: None,
        commit_order: true,
    };

    let annotated = annotate(entries, None, &RankingAggregator, &options);

    assert_eq!(tags(annotated.as_slice()), vec!["a", "b", "c"]);
    let scores: Vec<f64> = annotated.iter().map(|entry| entry.score).collect();
    assert_eq!(scores, vec![2.0, 0.0, 1.0]);
}

#[test]
fn limit_pins_current_run() {
    let entries = vec![
        entry("a", 5.0),
        entry("b", 4.0),
        entry("current", 3.0),
        entry("d", 2.0),
        entry("e", 1.0),
    ];
    let options = Options {
        limit: Some(2),
        commit_order: false,
    };

    let annotated = annotate(
        entries,
        Some("current"),
        &IndependentAggregator::mean(),
        &options,
    );

    assert_eq!(tags(annotated.as_slice()), vec!["current", "d", "e"]);
}

#[test]
fn limit_without_pinning_needed() {
    let entries = vec![entry("a", 5.0), entry("b", 4.0), entry("current", 1.0)];
    let options = Options {
        limit: Some(2),
        commit_order: false,
    };

    let annotated = annotate(
        entries,
        Some("current"),
        &IndependentAggregator::mean(),
        &options,
    );

    assert_eq!(tags(annotated.as_slice()), vec!["b", "current"]);
}

#[test]
fn limit_larger_than_entries() {
    let entries = vec![entry("a", 5.0), entry("b", 4.0)];
    let options = Options {
        limit: Some(10),
        commit_order: true,
    };

    let annotated = annotate(entries, None, &IndependentAggregator::mean(), &options);

    assert_eq!(tags(annotated.as_slice()), vec!["a", "b"]);
}

#[test]
fn empty() {
    let annotated = annotate(
        vec![],
        None,
        &RankingAggregator,
        &Options {
            limit: Some(3),
            commit_order: false,
        },
    );

    assert!(annotated.is_empty());
}

#[test]
fn short_hash() {
    let annotated = AnnotatedCommitData::new(CommitData::current(entry("a", 1.0).run), 1.0);

    assert_eq!(annotated.short_hash(), "0000000000");
}
