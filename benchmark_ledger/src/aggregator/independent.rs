//!
//! The aggregator scoring every run on its own.
//!

use crate::model::run::Benchmarks;

use super::reduction::Reduction;
use super::Aggregator;

///
/// The per-run scoring function.
///
pub type ScoreFunction = Box<dyn Fn(&Benchmarks) -> f64>;

///
/// The aggregator scoring every run on its own, without looking at the other runs.
///
pub struct IndependentAggregator {
    /// The per-run scoring function.
    function: ScoreFunction,
    /// The unit of the scores.
    unit: String,
    /// Whether lower scores are better.
    lower_is_better: bool,
}

impl IndependentAggregator {
    /// The default unit.
    pub const DEFAULT_UNIT: &'static str = "unit";

    ///
    /// A shortcut constructor.
    ///
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Benchmarks) -> f64 + 'static,
    {
        Self {
            function: Box::new(function),
            unit: Self::DEFAULT_UNIT.to_owned(),
            lower_is_better: true,
        }
    }

    ///
    /// Creates the aggregator reducing the targets of every run.
    ///
    pub fn from_reduction(reduction: Reduction) -> Self {
        Self::new(move |benchmarks| {
            let targets: Vec<f64> = benchmarks.values().map(|result| result.target).collect();
            reduction.apply(targets.as_slice())
        })
    }

    ///
    /// Creates the aggregator scoring runs by the arithmetic mean of their targets.
    ///
    pub fn mean() -> Self {
        Self::from_reduction(Reduction::Mean)
    }

    ///
    /// Sets the unit of the scores.
    ///
    pub fn with_unit(mut self, unit: String) -> Self {
        self.unit = unit;
        self
    }

    ///
    /// Sets whether lower scores are better.
    ///
    pub fn with_lower_is_better(mut self, lower_is_better: bool) -> Self {
        self.lower_is_better = lower_is_better;
        self
    }
}

impl Aggregator for IndependentAggregator {
    fn aggregate(&self, results: &[&Benchmarks]) -> Vec<f64> {
        results
            .iter()
            .map(|benchmarks| (self.function)(*benchmarks))
            .collect()
    }

    fn unit(&self) -> &str {
        self.unit.as_str()
    }

    fn lower_is_better(&self) -> bool {
        self.lower_is_better
    }
}
