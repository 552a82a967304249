//!
//! The process-wide execution context.
//!

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use benchmark_ledger::AggregatorRegistry;
use benchmark_ledger::RunStore;

use crate::config;
use crate::config::experiment::Experiment;
use crate::config::local::LocalConfig;
use crate::config::repository::RepositoryConfig;
use crate::console::Console;

///
/// The process-wide execution context.
///
/// Built once at start-up and passed to every command.
///
#[derive(Debug)]
pub struct Context {
    /// The repository root.
    root: PathBuf,
    /// The tracked repository configuration.
    repository_config: RepositoryConfig,
    /// The machine-local configuration.
    local_config: LocalConfig,
    /// The console output.
    console: Console,
}

impl Context {
    /// The contents of the `.gitignore` file of the local directory.
    const LOCAL_GITIGNORE: &'static str = "*\n";

    ///
    /// Loads the configuration files of the repository, creating the missing ones.
    ///
    /// If no experiment is active, the first declared one is activated and persisted.
    ///
    pub fn load(root: PathBuf, console: Console) -> anyhow::Result<Self> {
        let tracked_directory = root.join(config::TRACKED_DIRECTORY);
        fs::create_dir_all(tracked_directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Directory {tracked_directory:?} creating: {error}")
        })?;
        let local_directory = root.join(config::LOCAL_DIRECTORY);
        fs::create_dir_all(local_directory.as_path())
            .map_err(|error| anyhow::anyhow!("Directory {local_directory:?} creating: {error}"))?;
        let gitignore_path = local_directory.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path.as_path(), Self::LOCAL_GITIGNORE)
                .map_err(|error| anyhow::anyhow!("File {gitignore_path:?} writing: {error}"))?;
        }

        let repository_config_path = tracked_directory.join(config::REPOSITORY_CONFIG_FILE);
        if !repository_config_path.exists() {
            config::write_yaml(repository_config_path.as_path(), &RepositoryConfig::default())?;
        }
        let repository_config: RepositoryConfig =
            config::read_yaml(repository_config_path.as_path())?;
        repository_config.validate().map_err(|error| {
            anyhow::anyhow!("Configuration file {repository_config_path:?} is invalid: {error}")
        })?;

        let local_config_path = local_directory.join(config::LOCAL_CONFIG_FILE);
        if !local_config_path.exists() {
            config::write_yaml(local_config_path.as_path(), &LocalConfig::default())?;
        }
        let local_config: LocalConfig = config::read_yaml(local_config_path.as_path())?;

        let mut context = Self {
            root,
            repository_config,
            local_config,
            console,
        };

        match context.local_config.active_experiment.as_deref() {
            None => {
                if let Some(first) = context.repository_config.experiments.first() {
                    let name = first.name.clone();
                    context
                        .console
                        .notice(format!("No active experiment. Activating `{name}`"));
                    context.local_config.active_experiment = Some(name);
                    context.write_local_config()?;
                }
            }
            Some(name) if context.repository_config.experiment(name).is_none() => {
                context.console.warning(format!(
                    "The active experiment `{name}` is not declared in {}",
                    config::REPOSITORY_CONFIG_FILE
                ));
            }
            Some(_) => {}
        }

        Ok(context)
    }

    ///
    /// Returns the repository root.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    ///
    /// Returns the console output.
    ///
    pub fn console(&self) -> &Console {
        &self.console
    }

    ///
    /// Returns the tracked repository configuration.
    ///
    pub fn repository_config(&self) -> &RepositoryConfig {
        &self.repository_config
    }

    ///
    /// Returns the name runs of this machine are recorded with.
    ///
    pub fn machine_name(&self) -> &str {
        self.local_config.machine_name.as_str()
    }

    ///
    /// Returns the name of the active experiment, if any.
    ///
    pub fn active_experiment_name(&self) -> Option<&str> {
        self.local_config.active_experiment.as_deref()
    }

    ///
    /// Returns the active experiment.
    ///
    pub fn active_experiment(&self) -> anyhow::Result<&Experiment> {
        let name = self.active_experiment_name().ok_or_else(|| {
            anyhow::anyhow!(
                "No active experiment. Declare one in {:?}",
                self.repository_config_path()
            )
        })?;
        self.repository_config.experiment(name).ok_or_else(|| {
            anyhow::anyhow!(
                "The active experiment `{name}` is not declared in {:?}",
                self.repository_config_path()
            )
        })
    }

    ///
    /// Activates the experiment and persists the choice.
    ///
    pub fn set_active_experiment(&mut self, name: String) -> anyhow::Result<()> {
        if self.repository_config.experiment(name.as_str()).is_none() {
            anyhow::bail!(
                "Unknown experiment `{name}`. Available experiments: {}",
                self.repository_config
                    .experiments
                    .iter()
                    .map(|experiment| experiment.name.as_str())
                    .collect::<Vec<&str>>()
                    .join(", ")
            );
        }
        self.local_config.active_experiment = Some(name);
        self.write_local_config()
    }

    ///
    /// Sets the machine name and persists it.
    ///
    pub fn set_machine_name(&mut self, name: String) -> anyhow::Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("The machine name must not be empty");
        }
        self.local_config.machine_name = name;
        self.write_local_config()
    }

    ///
    /// Returns the run store of the working tree report.
    ///
    pub fn store(&self) -> RunStore {
        RunStore::new(self.report_path())
    }

    ///
    /// Returns the aggregator presets, including the configured ones.
    ///
    pub fn aggregators(&self) -> AggregatorRegistry {
        let mut registry = AggregatorRegistry::default();
        for (name, aggregator) in self.repository_config.aggregators.iter() {
            let aggregator = aggregator.clone();
            registry.register(name.to_owned(), move || aggregator.build());
        }
        registry
    }

    ///
    /// Returns the report file path.
    ///
    pub fn report_path(&self) -> PathBuf {
        self.root
            .join(config::TRACKED_DIRECTORY)
            .join(config::REPORT_FILE)
    }

    ///
    /// Returns the report file path relative to the repository root, as version control
    /// addresses it.
    ///
    pub fn report_relative_path(&self) -> String {
        format!("{}/{}", config::TRACKED_DIRECTORY, config::REPORT_FILE)
    }

    ///
    /// Returns the repository configuration file path.
    ///
    pub fn repository_config_path(&self) -> PathBuf {
        self.root
            .join(config::TRACKED_DIRECTORY)
            .join(config::REPOSITORY_CONFIG_FILE)
    }

    ///
    /// Returns the path relative to the repository root resolved to an absolute one.
    ///
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    ///
    /// Writes the machine-local configuration.
    ///
    fn write_local_config(&self) -> anyhow::Result<()> {
        let path = self
            .root
            .join(config::LOCAL_DIRECTORY)
            .join(config::LOCAL_CONFIG_FILE);
        config::write_yaml(path.as_path(), &self.local_config)
    }
}
