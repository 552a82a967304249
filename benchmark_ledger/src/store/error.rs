//!
//! The run store error.
//!

use std::path::PathBuf;

///
/// The run store error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no report at the requested location.
    #[error("Report file {path:?} is missing")]
    FileMissing {
        /// The report location.
        path: PathBuf,
    },
    /// The report cannot be parsed or violates the schema.
    #[error("Report file {path:?} is badly formatted: {error}. Fix or delete it to continue")]
    BadFormat {
        /// The underlying parsing error.
        error: serde_yaml::Error,
        /// The report location.
        path: PathBuf,
    },
    /// The report has no run for the requested experiment version.
    #[error("No run for experiment `{experiment}` version {experiment_version}")]
    RunMissing {
        /// The experiment name.
        experiment: String,
        /// The experiment version.
        experiment_version: i64,
    },
    /// The report file cannot be read.
    #[error("Reading report file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The report location.
        path: PathBuf,
    },
    /// The report file cannot be written.
    #[error("Writing report file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The report location.
        path: PathBuf,
    },
    /// The report cannot be serialized.
    #[error("Serializing report: {0}")]
    Serializing(serde_yaml::Error),
}

impl Error {
    ///
    /// Whether the error only means that the requested run is not available.
    ///
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::FileMissing { .. } | Self::RunMissing { .. })
    }
}
