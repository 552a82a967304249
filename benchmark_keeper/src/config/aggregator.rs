//!
//! The aggregator declared in the repository configuration.
//!

///
/// The aggregator declared in the repository configuration.
///
/// Scores every run by reducing its benchmark targets.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregatorConfig {
    /// The reduction of benchmark targets.
    #[serde(default)]
    pub reduction: benchmark_ledger::Reduction,
    /// The unit of the scores.
    #[serde(default = "AggregatorConfig::default_unit")]
    pub unit: String,
    /// Whether lower scores are better.
    #[serde(default = "AggregatorConfig::default_lower_is_better")]
    pub lower_is_better: bool,
}

impl AggregatorConfig {
    ///
    /// Constructs the aggregator.
    ///
    pub fn build(&self) -> Box<dyn benchmark_ledger::Aggregator> {
        Box::new(
            benchmark_ledger::IndependentAggregator::from_reduction(self.reduction)
                .with_unit(self.unit.clone())
                .with_lower_is_better(self.lower_is_better),
        )
    }

    ///
    /// The unit of aggregators which do not specify one.
    ///
    fn default_unit() -> String {
        benchmark_ledger::IndependentAggregator::DEFAULT_UNIT.to_owned()
    }

    ///
    /// Lower scores are better unless specified otherwise.
    ///
    fn default_lower_is_better() -> bool {
        true
    }
}
