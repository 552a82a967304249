//!
//! The benchmark results aggregation.
//!

pub mod independent;
pub mod ranking;
pub mod reduction;
pub mod registry;

use crate::model::run::Benchmarks;

///
/// Reduces the benchmark results of several runs to one score per run.
///
pub trait Aggregator {
    ///
    /// Returns the score of every run, in the order of `results`.
    ///
    fn aggregate(&self, results: &[&Benchmarks]) -> Vec<f64>;

    ///
    /// Returns the unit of the scores.
    ///
    fn unit(&self) -> &str {
        "unit"
    }

    ///
    /// Whether lower scores are better.
    ///
    fn lower_is_better(&self) -> bool {
        true
    }
}
