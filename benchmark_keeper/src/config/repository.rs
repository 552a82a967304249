//!
//! The repository configuration, tracked by version control.
//!

use std::collections::BTreeMap;
use std::collections::HashSet;

use super::aggregator::AggregatorConfig;
use super::experiment::Experiment;

///
/// The repository configuration, tracked by version control.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepositoryConfig {
    /// The experiments.
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    /// The custom aggregators by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aggregators: BTreeMap<String, AggregatorConfig>,
}

impl RepositoryConfig {
    ///
    /// Finds the experiment by name.
    ///
    pub fn experiment(&self, name: &str) -> Option<&Experiment> {
        self.experiments
            .iter()
            .find(|experiment| experiment.name == name)
    }

    ///
    /// Checks the invariants which are not expressed in the type system.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut names = HashSet::with_capacity(self.experiments.len());
        for experiment in self.experiments.iter() {
            if experiment.name.is_empty() {
                anyhow::bail!("An experiment has an empty `name` field");
            }
            if experiment.benchmark_script.is_empty() {
                anyhow::bail!(
                    "The `benchmark_script` field of experiment `{}` is empty",
                    experiment.name
                );
            }
            if !names.insert(experiment.name.as_str()) {
                anyhow::bail!("Experiment `{}` is declared more than once", experiment.name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use benchmark_ledger::Reduction;

    use super::RepositoryConfig;

    #[test]
    fn defaults() {
        let text = r#"
experiments:
- name: sorting
  benchmark_script: bench/run.sh
- name: parsing
  version: 3
  build_script: build.sh
  test_script: test.sh
  benchmark_script: bench/parse.sh
  watch_files: [src/parser.rs, src/lexer.rs]
aggregators:
  geomean:
    reduction: geometric-mean
    unit: ns
"#;

        let config: RepositoryConfig = serde_yaml::from_str(text).expect("Valid");
        config.validate().expect("Valid");

        let sorting = config.experiment("sorting").expect("Exists");
        assert_eq!(sorting.version, 1);
        assert_eq!(sorting.build_script, None);
        assert!(sorting.watch_files.is_empty());
        let parsing = config.experiment("parsing").expect("Exists");
        assert_eq!(parsing.version, 3);
        assert_eq!(parsing.watch_files.len(), 2);
        let geomean = &config.aggregators["geomean"];
        assert_eq!(geomean.reduction, Reduction::GeometricMean);
        assert!(geomean.lower_is_better);
        assert_eq!(geomean.build().unit(), "ns");
    }

    #[test]
    fn empty_document() {
        let config: RepositoryConfig = serde_yaml::from_str("experiments: []").expect("Valid");

        assert_eq!(config, RepositoryConfig::default());
    }

    #[test]
    fn duplicate_experiments() {
        let text = r#"
experiments:
- name: sorting
  benchmark_script: a.sh
- name: sorting
  benchmark_script: b.sh
"#;

        let config: RepositoryConfig = serde_yaml::from_str(text).expect("Valid");

        assert!(config.validate().is_err());
    }
}
