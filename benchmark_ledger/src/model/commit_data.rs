//!
//! The runs as they existed at specific commits.
//!

use super::run::BenchmarkRun;

///
/// The run as it existed at a specific commit.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CommitData {
    /// The commit hash.
    pub commit_hash: String,
    /// The commit subject line.
    pub subject: String,
    /// The run recorded at the commit.
    pub run: BenchmarkRun,
}

impl CommitData {
    /// The commit hash of the uncommitted working tree state.
    pub const CURRENT_HASH: &'static str = "0000000000000000000000000000000000000000";

    /// The subject of the uncommitted working tree state.
    pub const CURRENT_SUBJECT: &'static str = "Current";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit_hash: String, subject: String, run: BenchmarkRun) -> Self {
        Self {
            commit_hash,
            subject,
            run,
        }
    }

    ///
    /// Wraps the run of the uncommitted working tree state.
    ///
    pub fn current(run: BenchmarkRun) -> Self {
        Self::new(
            Self::CURRENT_HASH.to_owned(),
            Self::CURRENT_SUBJECT.to_owned(),
            run,
        )
    }
}

///
/// The commit data annotated with its aggregated score.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCommitData {
    /// The commit data.
    pub data: CommitData,
    /// The aggregated score.
    pub score: f64,
}

impl AnnotatedCommitData {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(data: CommitData, score: f64) -> Self {
        Self { data, score }
    }

    ///
    /// Returns the short commit hash used for display.
    ///
    pub fn short_hash(&self) -> &str {
        let hash = self.data.commit_hash.as_str();
        hash.get(..10).unwrap_or(hash)
    }
}
