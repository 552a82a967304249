//!
//! The persisted benchmark report.
//!

use itertools::Itertools;

use super::run::BenchmarkRun;

///
/// The persisted runs across all experiments and versions.
///
/// Contains at most one run for every `(experiment, experiment_version)` pair.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// The runs, most recently added first.
    pub runs: Vec<BenchmarkRun>,
}

impl Report {
    ///
    /// Returns the report with `run` prepended, dropping any older run sharing its key.
    ///
    pub fn with_run(self, run: BenchmarkRun) -> Self {
        let runs = std::iter::once(run)
            .chain(self.runs)
            .unique_by(|run| (run.experiment.clone(), run.experiment_version))
            .collect();
        Self { runs }
    }

    ///
    /// Finds the run of the specified experiment version.
    ///
    pub fn find(&self, experiment: &str, experiment_version: i64) -> Option<&BenchmarkRun> {
        self.runs
            .iter()
            .find(|run| run.matches(experiment, experiment_version))
    }

    ///
    /// Parses the report from its YAML representation.
    ///
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    ///
    /// Serializes the report into its YAML representation.
    ///
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::model::benchmark_result::BenchmarkResult;
    use crate::model::run::BenchmarkRun;

    use super::Report;

    fn run(tag: &str, experiment: &str, version: i64) -> BenchmarkRun {
        BenchmarkRun {
            tag: tag.to_owned(),
            experiment: experiment.to_owned(),
            experiment_version: version,
            machine: "MyMachine".to_owned(),
            benchmarks: BTreeMap::from([("b".to_owned(), BenchmarkResult::new(1.0))]),
            file_digest: String::new(),
        }
    }

    #[test]
    fn with_run_replaces_same_key() {
        let report = Report {
            runs: vec![run("old", "e", 1), run("other", "e", 2)],
        };

        let report = report.with_run(run("new", "e", 1));

        let tags: Vec<&str> = report.runs.iter().map(|run| run.tag.as_str()).collect();
        assert_eq!(tags, vec!["new", "other"]);
    }

    #[test]
    fn with_run_into_empty() {
        let report = Report::default().with_run(run("new", "e", 1));

        assert_eq!(report.runs.len(), 1);
        assert_eq!(report.find("e", 1).map(|run| run.tag.as_str()), Some("new"));
        assert_eq!(report.find("e", 2), None);
    }

    #[test]
    fn yaml_round_trip() {
        let mut unstructured = BTreeMap::new();
        unstructured.insert("iterations".to_owned(), serde_json::json!(1000));
        unstructured.insert("notes".to_owned(), serde_json::json!({ "warm": true }));
        let mut first = run("a", "e", 1);
        first.benchmarks.insert(
            "sort".to_owned(),
            BenchmarkResult {
                target: 12.5,
                labels: vec!["fast".to_owned(), "cpu".to_owned()],
                unstructured,
            },
        );
        first.file_digest = "ab".repeat(32);
        let report = Report {
            runs: vec![first, run("b", "f", 3)],
        };

        let text = report.to_yaml().expect("Serialization");
        let parsed = Report::from_yaml(text.as_str()).expect("Deserialization");

        assert_eq!(parsed, report);
    }

    #[test]
    fn yaml_field_names() {
        let text = r#"
runs:
- tag: 0123456789abcdef0123456789abcdef
  experiment: sorting
  experiment_version: 2
  machine: ci
  benchmarks:
    quicksort:
      target: 150.0
      labels: [small]
      unstructured:
        n: 10
  file_digest: ''
"#;

        let report = Report::from_yaml(text).expect("Deserialization");

        let run = report.find("sorting", 2).expect("Run exists");
        assert_eq!(run.machine, "ci");
        assert_eq!(run.benchmarks["quicksort"].target, 150.0);
        assert_eq!(run.benchmarks["quicksort"].labels, vec!["small".to_owned()]);
        assert_eq!(
            run.benchmarks["quicksort"].unstructured["n"],
            serde_json::json!(10)
        );
    }

    #[test]
    fn yaml_schema_violation() {
        let text = "runs:\n- tag: x\n  experiment: e\n";

        assert!(Report::from_yaml(text).is_err());
    }

    #[test]
    fn generated_tags_are_unique() {
        let first = BenchmarkRun::new(
            "e".to_owned(),
            1,
            "m".to_owned(),
            BTreeMap::new(),
            String::new(),
        );
        let second = BenchmarkRun::new(
            "e".to_owned(),
            1,
            "m".to_owned(),
            BTreeMap::new(),
            String::new(),
        );

        assert_eq!(first.tag.len(), 32);
        assert_ne!(first.tag, second.tag);
    }

    #[test]
    fn negative_experiment_version() {
        let text = r#"
runs:
- tag: fedcba9876543210fedcba9876543210
  experiment: sorting
  experiment_version: -1
  machine: ci
  benchmarks:
    quicksort:
      target: 150.0
"#;

        let report = Report::from_yaml(text).expect("Deserialization");

        assert_eq!(report.runs[0].experiment_version, -1);
        assert!(report.find("sorting", -1).is_some());
    }
}
