//!
//! The benchmark keeper configuration files.
//!

pub mod aggregator;
pub mod experiment;
pub mod local;
pub mod repository;

use std::fs;
use std::path::Path;

/// The tracked directory, committed together with the sources.
pub const TRACKED_DIRECTORY: &str = ".benchk";

/// The local directory, ignored by version control.
pub const LOCAL_DIRECTORY: &str = ".benchk.local";

/// The report file name inside the tracked directory.
pub const REPORT_FILE: &str = "report.yml";

/// The repository configuration file name inside the tracked directory.
pub const REPOSITORY_CONFIG_FILE: &str = "repo_config.yml";

/// The local configuration file name inside the local directory.
pub const LOCAL_CONFIG_FILE: &str = "local_config.yml";

///
/// Reads a YAML configuration file.
///
pub fn read_yaml<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
    serde_yaml::from_str(text.as_str())
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))
}

///
/// Writes a YAML configuration file, replacing its contents.
///
pub fn write_yaml<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let text = serde_yaml::to_string(value)
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} serializing: {error}"))?;
    fs::write(path, text)
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} writing: {error}"))
}
