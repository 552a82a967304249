//!
//! The `benchmark` command.
//!

use std::path::PathBuf;

use benchmark_ledger::BenchmarkRun;

use crate::context::Context;
use crate::git::Stager;
use crate::script::ScriptRunner;

///
/// Builds, tests, and benchmarks the active experiment, then records and stages the run.
///
/// Tests and benchmarks are skipped if the watched files did not change since the
/// recorded run, unless `force` is set. With `dry`, the benchmarks are never run.
///
pub fn run(context: &Context, stager: &dyn Stager, dry: bool, force: bool) -> anyhow::Result<()> {
    let console = context.console();
    let experiment = context.active_experiment()?;
    let store = context.store();
    store.read()?;

    console.status(
        "Running",
        format!(
            "experiment `{}` version {}",
            experiment.name, experiment.version
        ),
    );
    let runner = ScriptRunner::new(context.root(), console);
    runner.run_build(experiment.build_script.as_deref())?;

    let mut file_digest = String::new();
    if !experiment.watch_files.is_empty() {
        let paths: Vec<PathBuf> = experiment
            .watch_files
            .iter()
            .map(|path| context.resolve(path))
            .collect();
        file_digest = benchmark_ledger::digest(paths.as_slice())?;
        console.verbose(format!("Watched files digest: {file_digest}"));

        match store.get_current_run(experiment.name.as_str(), experiment.version) {
            Ok(current) if !force && current.file_digest == file_digest => {
                console.status(
                    "Skipping",
                    "tests and benchmarks, since watched files are unchanged",
                );
                return super::stage_tracked_files(context, stager);
            }
            Ok(_) => {}
            Err(error) if error.is_absent() => {}
            Err(error) => return Err(error.into()),
        }
    }

    runner.run_tests(experiment.test_script.as_deref())?;

    if dry {
        console.status("Skipping", "benchmarks (dry run)");
        return Ok(());
    }

    let benchmarks = runner.run_benchmarks(experiment.benchmark_script.as_str())?;
    let count = benchmarks.len();
    let run = BenchmarkRun::new(
        experiment.name.clone(),
        experiment.version,
        context.machine_name().to_owned(),
        benchmarks,
        file_digest,
    );
    console.verbose(format!("Recording run {}", run.tag));
    store.add_run(run)?;
    console.status(
        "Finished",
        format!("{count} benchmark(s) recorded in {}", store.path().display()),
    );

    super::stage_tracked_files(context, stager)
}
