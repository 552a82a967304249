//!
//! The experiment script runner.
//!

pub mod delimiter;
pub mod error;
pub mod output;

use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;

use benchmark_ledger::Benchmarks;

use crate::console::Console;

use self::delimiter::ScriptDelimiter;
use self::output::parse_benchmark_output;

///
/// Runs the experiment scripts from the repository root.
///
#[derive(Debug)]
pub struct ScriptRunner<'a> {
    /// The repository root, also the working directory of the scripts.
    root: &'a Path,
    /// The console output.
    console: &'a Console,
}

impl<'a> ScriptRunner<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: &'a Path, console: &'a Console) -> Self {
        Self { root, console }
    }

    ///
    /// Runs the build script, if there is one.
    ///
    pub fn run_build(&self, script: Option<&str>) -> anyhow::Result<()> {
        self.run_step(script, "build", "Build failed")
    }

    ///
    /// Runs the test script, if there is one.
    ///
    pub fn run_tests(&self, script: Option<&str>) -> anyhow::Result<()> {
        self.run_step(script, "test", "Tests failed")
    }

    ///
    /// Runs the benchmark script and parses the results it prints.
    ///
    pub fn run_benchmarks(&self, script: &str) -> anyhow::Result<Benchmarks> {
        let mut command = self.command(script);
        command.stdout(Stdio::piped());

        let output = {
            let _delimiter = ScriptDelimiter::new(self.console, script);
            command.output().map_err(|error| {
                anyhow::anyhow!("Benchmark script `{script}` subprocess error: {error}")
            })?
        };
        if !output.status.success() {
            anyhow::bail!(
                "Benchmark script `{script}` failed with {}",
                output.status
            );
        }

        Ok(parse_benchmark_output(script, output.stdout)?)
    }

    ///
    /// Runs the build or test script with the inherited standard streams.
    ///
    fn run_step(&self, script: Option<&str>, kind: &str, failure: &str) -> anyhow::Result<()> {
        let script = match script {
            Some(script) => script,
            None => {
                self.console
                    .status("Skipping", format!("no {kind} script found"));
                return Ok(());
            }
        };

        let status = {
            let _delimiter = ScriptDelimiter::new(self.console, script);
            self.command(script).status().map_err(|error| {
                anyhow::anyhow!("The {kind} script `{script}` subprocess error: {error}")
            })?
        };
        if !status.success() {
            anyhow::bail!("{failure}: `{script}` exited with {status}");
        }
        Ok(())
    }

    ///
    /// Prepares the command running the script from the repository root.
    ///
    fn command(&self, script: &str) -> std::process::Command {
        let path: PathBuf = self.root.join(script);
        let mut command = std::process::Command::new(path);
        command.current_dir(self.root);
        command.stdin(Stdio::inherit());
        command.stderr(Stdio::inherit());
        command
    }
}
