//!
//! The benchmark experiment.
//!

///
/// The benchmark experiment.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Experiment {
    /// The experiment name.
    pub name: String,
    /// The experiment version. Runs of different versions are never compared.
    #[serde(default = "Experiment::default_version")]
    pub version: i64,
    /// The build script, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_script: Option<String>,
    /// The test script, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_script: Option<String>,
    /// The benchmark script, relative to the repository root.
    pub benchmark_script: String,
    /// The files whose changes trigger re-running the benchmarks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watch_files: Vec<String>,
}

impl Experiment {
    ///
    /// The version of experiments which do not specify one.
    ///
    fn default_version() -> i64 {
        1
    }
}
