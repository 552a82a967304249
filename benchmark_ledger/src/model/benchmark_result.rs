//!
//! The result of a single benchmark.
//!

use std::collections::BTreeMap;

///
/// The result of a single benchmark.
///
/// The `target` is measured in nanoseconds by convention.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    /// The measured value runs are compared by.
    pub target: f64,
    /// Free-form labels attached by the benchmark script.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Free-form metadata attached by the benchmark script.
    #[serde(default)]
    pub unstructured: BTreeMap<String, serde_json::Value>,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor for a result without labels or metadata.
    ///
    pub fn new(target: f64) -> Self {
        Self {
            target,
            labels: vec![],
            unstructured: BTreeMap::new(),
        }
    }
}
