//!
//! The benchmark run.
//!

use std::collections::BTreeMap;

use super::benchmark_result::BenchmarkResult;

///
/// The benchmark results of one run, keyed by benchmark name.
///
pub type Benchmarks = BTreeMap<String, BenchmarkResult>;

///
/// The results of all benchmarks of one `(experiment, experiment_version)` execution.
///
/// The tag uniquely identifies the run, while the ledger deduplicates by [`Self::key`].
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkRun {
    /// The unique run identifier.
    pub tag: String,
    /// The experiment name.
    pub experiment: String,
    /// The experiment version.
    pub experiment_version: i64,
    /// The name of the machine the run was produced on.
    pub machine: String,
    /// The benchmark results.
    pub benchmarks: Benchmarks,
    /// The digest of the watched files, empty if change detection is disabled.
    #[serde(default)]
    pub file_digest: String,
}

impl BenchmarkRun {
    ///
    /// Creates a run with a freshly generated tag.
    ///
    pub fn new(
        experiment: String,
        experiment_version: i64,
        machine: String,
        benchmarks: Benchmarks,
        file_digest: String,
    ) -> Self {
        Self {
            tag: Self::generate_tag(),
            experiment,
            experiment_version,
            machine,
            benchmarks,
            file_digest,
        }
    }

    ///
    /// Returns the deduplication key.
    ///
    pub fn key(&self) -> (&str, i64) {
        (self.experiment.as_str(), self.experiment_version)
    }

    ///
    /// Whether the run belongs to the specified experiment version.
    ///
    pub fn matches(&self, experiment: &str, experiment_version: i64) -> bool {
        self.key() == (experiment, experiment_version)
    }

    ///
    /// Generates a new unique tag as 32 lowercase hex characters.
    ///
    fn generate_tag() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}
