//!
//! The snapshot reconciler.
//!


use std::collections::HashSet;
use std::path::PathBuf;

use crate::history::Commit;
use crate::history::HistoryProvider;
use crate::model::commit_data::CommitData;
use crate::model::report::Report;
use crate::model::run::BenchmarkRun;
use crate::store::error::Error as StoreError;
use crate::store::find_run;
use crate::store::RunStore;

///
/// The chronological runs of one experiment version on one machine.
///
#[derive(Debug, Default)]
pub struct Timeline {
    /// The runs, oldest first, unique by tag.
    pub entries: Vec<CommitData>,
    /// The tag of the working tree run, if there is one.
    pub current_tag: Option<String>,
    /// The commits whose snapshot did not yield a run, with the reason.
    pub skipped: Vec<(Commit, SkipReason)>,
}

///
/// The reason a commit snapshot did not yield a run.
///
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The snapshot is missing, badly formatted, or has no run of the experiment version.
    #[error(transparent)]
    Snapshot(#[from] StoreError),
    /// The snapshot could not be retrieved from the history.
    #[error("Report snapshot {path:?} reading: {error:#}")]
    History {
        /// The underlying history error.
        error: anyhow::Error,
        /// The snapshot location.
        path: PathBuf,
    },
}

///
/// The snapshot reconciler.
///
/// Reconstructs the runs of an experiment version from the report snapshots of all commits
/// and the working tree report.
///
pub struct Reconciler<'a, H: HistoryProvider + ?Sized> {
    /// The repository history.
    history: &'a H,
    /// The working tree run store.
    store: &'a RunStore,
    /// The report path relative to the repository root.
    report_path: String,
}

impl<'a, H: HistoryProvider + ?Sized> Reconciler<'a, H> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(history: &'a H, store: &'a RunStore, report_path: String) -> Self {
        Self {
            history,
            store,
            report_path,
        }
    }

    ///
    /// Builds the timeline of the experiment version runs produced on the `machine`.
    ///
    /// Snapshots which are missing, badly formatted, or lack the experiment version are
    /// skipped. A badly formatted working tree report is an error.
    ///
    pub fn timeline(
        &self,
        experiment: &str,
        experiment_version: i64,
        machine: &str,
    ) -> anyhow::Result<Timeline> {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        for commit in self.history.list_commits()?.into_iter() {
            match self.snapshot_run(commit.hash.as_str(), experiment, experiment_version) {
                Ok(run) => entries.push(CommitData::new(commit.hash, commit.subject, run)),
                Err(error) => skipped.push((commit, error)),
            }
        }

        let mut current_tag = None;
        match self.store.get_current_run(experiment, experiment_version) {
            Ok(run) => {
                current_tag = Some(run.tag.clone());
                entries.insert(0, CommitData::current(run));
            }
            Err(error) if error.is_absent() => {}
            Err(error) => return Err(error.into()),
        }

        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .rev()
            .filter(|data| data.run.machine == machine)
            .filter(|data| seen.insert(data.run.tag.clone()))
            .collect();

        Ok(Timeline {
            entries,
            current_tag,
            skipped,
        })
    }

    ///
    /// Reads the experiment version run from the report snapshot of the commit.
    ///
    fn snapshot_run(
        &self,
        commit_hash: &str,
        experiment: &str,
        experiment_version: i64,
    ) -> Result<BenchmarkRun, SkipReason> {
        let path = PathBuf::from(format!("{commit_hash}:{}", self.report_path));
        let text = match self
            .history
            .read_file_at_ref(commit_hash, self.report_path.as_str())
        {
            Ok(Some(text)) => text,
            Ok(None) => return Err(StoreError::FileMissing { path }.into()),
            Err(error) => return Err(SkipReason::History { error, path }),
        };
        let report = Report::from_yaml(text.as_str())
            .map_err(|error| StoreError::BadFormat { error, path })?;
        Ok(find_run(&report, experiment, experiment_version)?)
    }
}
