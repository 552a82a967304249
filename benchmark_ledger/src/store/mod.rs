//!
//! The run store.
//!

pub mod error;


use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::model::report::Report;
use crate::model::run::BenchmarkRun;

use self::error::Error;

///
/// The run store, owning the report file of the working tree.
///
/// The read-modify-write cycle of [`Self::add_run`] is not guarded against other
/// processes. Two concurrent insertions may lose one of the runs.
///
#[derive(Debug, Clone)]
pub struct RunStore {
    /// The report file path.
    path: PathBuf,
}

impl RunStore {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    ///
    /// Returns the report file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Reads the report, creating an empty one if the file does not exist yet.
    ///
    pub fn read(&self) -> Result<Report, Error> {
        if !self.path.exists() {
            self.write(&Report::default())?;
        }

        let text = fs::read_to_string(self.path.as_path()).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                Error::FileMissing {
                    path: self.path.clone(),
                }
            } else {
                Error::Reading {
                    error,
                    path: self.path.clone(),
                }
            }
        })?;

        Report::from_yaml(text.as_str()).map_err(|error| Error::BadFormat {
            error,
            path: self.path.clone(),
        })
    }

    ///
    /// Replaces the report file contents.
    ///
    /// The report is written to a sibling temporary file first and then renamed over the
    /// report file, so readers never observe a partially written report.
    ///
    pub fn write(&self, report: &Report) -> Result<(), Error> {
        let text = report.to_yaml().map_err(Error::Serializing)?;

        let writing_error = |error| Error::Writing {
            error,
            path: self.path.clone(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(writing_error)?;
            }
        }

        let temporary_path = self.temporary_path();
        let result = Self::write_temporary(temporary_path.as_path(), text.as_bytes())
            .and_then(|()| fs::rename(temporary_path.as_path(), self.path.as_path()));
        if let Err(error) = result {
            let _ = fs::remove_file(temporary_path.as_path());
            return Err(writing_error(error));
        }
        Ok(())
    }

    ///
    /// Inserts the run, replacing any run of the same experiment version.
    ///
    /// A badly formatted report is never overwritten.
    ///
    pub fn add_run(&self, run: BenchmarkRun) -> Result<(), Error> {
        let report = self.read()?;
        self.write(&report.with_run(run))
    }

    ///
    /// Returns the run of the specified experiment version from the working tree report.
    ///
    pub fn get_current_run(
        &self,
        experiment: &str,
        experiment_version: i64,
    ) -> Result<BenchmarkRun, Error> {
        let report = self.read()?;
        find_run(&report, experiment, experiment_version)
    }

    ///
    /// Writes and flushes the temporary file.
    ///
    fn write_temporary(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    ///
    /// Returns the temporary file path used for atomic writes.
    ///
    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(file_name)
    }
}

///
/// Finds the run of the specified experiment version in the report.
///
pub fn find_run(
    report: &Report,
    experiment: &str,
    experiment_version: i64,
) -> Result<BenchmarkRun, Error> {
    report
        .find(experiment, experiment_version)
        .cloned()
        .ok_or_else(|| Error::RunMissing {
            experiment: experiment.to_owned(),
            experiment_version,
        })
}
