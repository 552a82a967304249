//!
//! The repository history access.
//!

///
/// A commit of the repository history.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The full commit hash.
    pub hash: String,
    /// The commit subject line.
    pub subject: String,
}

impl Commit {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(hash: String, subject: String) -> Self {
        Self { hash, subject }
    }
}

///
/// The version control primitives the snapshot reconciler relies on.
///
pub trait HistoryProvider {
    ///
    /// Lists the commits of the current branch, newest first.
    ///
    fn list_commits(&self) -> anyhow::Result<Vec<Commit>>;

    ///
    /// Reads the file at `path`, relative to the repository root, as of the `reference`.
    ///
    /// Returns `None` if the file does not exist at that reference.
    ///
    fn read_file_at_ref(&self, reference: &str, path: &str) -> anyhow::Result<Option<String>>;
}
