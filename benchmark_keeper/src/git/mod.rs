//!
//! The `git` command line client.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Output;

use benchmark_ledger::Commit;
use benchmark_ledger::HistoryProvider;

///
/// Adds files to the next commit.
///
pub trait Stager {
    ///
    /// Stages the file.
    ///
    fn stage(&self, path: &Path) -> anyhow::Result<()>;
}

///
/// The `git` command line client bound to a repository.
///
#[derive(Debug, Clone)]
pub struct Git {
    /// The `git` executable path.
    executable: PathBuf,
    /// The repository root.
    root: PathBuf,
}

impl Git {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "git";

    ///
    /// Finds the `git` executable and the root of the repository containing the current
    /// directory.
    ///
    pub fn discover() -> anyhow::Result<Self> {
        let directory = std::env::current_dir()
            .map_err(|error| anyhow::anyhow!("Current directory getting: {error}"))?;
        Self::open(directory.as_path())
    }

    ///
    /// Finds the `git` executable and the root of the repository containing the `directory`.
    ///
    pub fn open(directory: &Path) -> anyhow::Result<Self> {
        let executable = which::which(Self::DEFAULT_EXECUTABLE_NAME).map_err(|error| {
            anyhow::anyhow!(
                "The `{}` executable not found in ${{PATH}}: {error}",
                Self::DEFAULT_EXECUTABLE_NAME
            )
        })?;

        let output = Self::execute(
            executable.as_path(),
            Some(directory),
            &["rev-parse", "--show-toplevel"],
        )?;
        let root = String::from_utf8_lossy(output.stdout.as_slice())
            .trim()
            .to_owned();
        if root.is_empty() {
            anyhow::bail!("Not inside a git repository");
        }

        Ok(Self {
            executable,
            root: PathBuf::from(root),
        })
    }

    ///
    /// Returns the repository root.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    ///
    /// Commits the staged changes.
    ///
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    ///
    /// Runs the command in the repository root, failing on a non-zero exit status.
    ///
    fn run(&self, arguments: &[&str]) -> anyhow::Result<Output> {
        Self::execute(
            self.executable.as_path(),
            Some(self.root.as_path()),
            arguments,
        )
    }

    ///
    /// Runs the command, failing on a non-zero exit status.
    ///
    fn execute(
        executable: &Path,
        directory: Option<&Path>,
        arguments: &[&str],
    ) -> anyhow::Result<Output> {
        let output = Self::spawn(executable, directory, arguments)?;
        if !output.status.success() {
            anyhow::bail!(
                "`git {}` error: {}",
                arguments.join(" "),
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }
        Ok(output)
    }

    ///
    /// Runs the command and waits for its output, regardless of the exit status.
    ///
    fn spawn(
        executable: &Path,
        directory: Option<&Path>,
        arguments: &[&str],
    ) -> anyhow::Result<Output> {
        let mut command = std::process::Command::new(executable);
        if let Some(directory) = directory {
            command.arg("-C");
            command.arg(directory);
        }
        command.args(arguments);
        command.stdin(std::process::Stdio::null());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());

        command.output().map_err(|error| {
            anyhow::anyhow!("`git {}` subprocess error: {error:?}", arguments.join(" "))
        })
    }
}

impl Stager for Git {
    fn stage(&self, path: &Path) -> anyhow::Result<()> {
        let path = path.to_string_lossy();
        self.run(&["add", path.as_ref()])?;
        Ok(())
    }
}

impl HistoryProvider for Git {
    fn list_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let output = self.run(&["log", "--pretty=format:%H %s"])?;
        Ok(parse_log(
            String::from_utf8_lossy(output.stdout.as_slice()).as_ref(),
        ))
    }

    fn read_file_at_ref(&self, reference: &str, path: &str) -> anyhow::Result<Option<String>> {
        let object = format!("{reference}:{path}");
        let output = Self::spawn(
            self.executable.as_path(),
            Some(self.root.as_path()),
            &["show", object.as_str()],
        )?;
        if !output.status.success() {
            return Ok(None);
        }
        let text = String::from_utf8(output.stdout)
            .map_err(|error| anyhow::anyhow!("`git show {object}` output decoding: {error}"))?;
        Ok(Some(text))
    }
}

///
/// Parses the `git log --pretty=format:%H %s` output, newest commit first.
///
pub fn parse_log(text: &str) -> Vec<Commit> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(' ') {
            Some((hash, subject)) => Commit::new(hash.to_owned(), subject.to_owned()),
            None => Commit::new(line.to_owned(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use benchmark_ledger::HistoryProvider;

    use super::parse_log;
    use super::Git;
    use super::Stager;

    fn git(directory: &Path, arguments: &[&str]) {
        let status = std::process::Command::new("git")
            .arg("-C")
            .arg(directory)
            .args(arguments)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .expect("Spawned");
        assert!(status.success(), "`git {}` failed", arguments.join(" "));
    }

    #[test]
    fn repository_history() {
        if which::which(Git::DEFAULT_EXECUTABLE_NAME).is_err() {
            return;
        }
        let directory = tempfile::tempdir().expect("Always valid");
        git(directory.path(), &["init", "--quiet"]);
        git(directory.path(), &["config", "user.name", "Benchmark Keeper"]);
        git(directory.path(), &["config", "user.email", "keeper@localhost"]);
        git(directory.path(), &["config", "commit.gpgsign", "false"]);
        fs::create_dir_all(directory.path().join(".benchk")).expect("Always valid");
        fs::write(directory.path().join(".benchk/report.yml"), "runs: []\n").expect("Always valid");

        let repository = Git::open(directory.path()).expect("Repository");
        repository
            .stage(repository.root().join(".benchk/report.yml").as_path())
            .expect("Staged");
        repository.commit("Record the first run").expect("Committed");

        let commits = repository.list_commits().expect("History");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash.len(), 40);
        assert_eq!(commits[0].subject, "Record the first run");
        assert_eq!(
            repository
                .read_file_at_ref(commits[0].hash.as_str(), ".benchk/report.yml")
                .expect("Readable")
                .as_deref(),
            Some("runs: []\n")
        );
        assert_eq!(
            repository
                .read_file_at_ref(commits[0].hash.as_str(), ".benchk/absent.yml")
                .expect("Readable"),
            None
        );
    }

    #[test]
    fn log_lines() {
        let text = "1111111111111111111111111111111111111111 Speed up the parser\n\
                    2222222222222222222222222222222222222222 Initial commit\n";

        let commits = parse_log(text);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "1111111111111111111111111111111111111111");
        assert_eq!(commits[0].subject, "Speed up the parser");
        assert_eq!(commits[1].subject, "Initial commit");
    }

    #[test]
    fn empty_subject() {
        let commits = parse_log("3333333333333333333333333333333333333333\n\n");

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "");
    }

    #[test]
    fn empty_history() {
        assert!(parse_log("").is_empty());
    }
}
