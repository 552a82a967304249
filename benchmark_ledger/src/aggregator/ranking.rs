//!
//! The aggregator ranking runs against each other.
//!

use std::collections::BTreeSet;

use crate::model::run::Benchmarks;

use super::Aggregator;

///
/// The aggregator ranking runs against each other.
///
/// Only the benchmarks present in every run are considered. For each of them the runs are
/// ranked by target, starting from zero, and the score of a run is its mean rank.
///
#[derive(Debug, Default, Clone)]
pub struct RankingAggregator;

impl Aggregator for RankingAggregator {
    fn aggregate(&self, results: &[&Benchmarks]) -> Vec<f64> {
        let mut scores = vec![0.0; results.len()];

        let mut common: BTreeSet<&str> = match results.first() {
            Some(first) => first.keys().map(String::as_str).collect(),
            None => return scores,
        };
        for benchmarks in results.iter().skip(1) {
            common.retain(|name| benchmarks.contains_key(*name));
        }
        if common.is_empty() {
            return scores;
        }

        for name in common.iter() {
            let mut indexes: Vec<usize> = (0..results.len()).collect();
            indexes.sort_by(|left, right| {
                results[*left][*name]
                    .target
                    .total_cmp(&results[*right][*name].target)
            });
            for (rank, index) in indexes.into_iter().enumerate() {
                scores[index] += rank as f64;
            }
        }

        let count = common.len() as f64;
        for score in scores.iter_mut() {
            *score /= count;
        }
        scores
    }

    fn unit(&self) -> &str {
        "mean rank"
    }
}
