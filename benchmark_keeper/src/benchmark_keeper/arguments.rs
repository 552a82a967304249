//!
//! The benchmark keeper arguments.
//!

use std::num::NonZeroUsize;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark keeper arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints diagnostic messages, such as the reasons commits are skipped.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppresses the status messages. Errors are still printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark keeper commands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Builds, tests, and benchmarks the active experiment, and stages the results.
    Benchmark {
        /// Skips the benchmarks after building and testing.
        #[arg(short, long)]
        dry: bool,

        /// Runs the benchmarks even if the watched files have not changed.
        #[arg(short, long)]
        force: bool,
    },
    /// Lists the runs of the active experiment on this machine, best last.
    List {
        /// Limits the number of runs shown. The current run is always shown.
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,

        /// The aggregator scoring the runs.
        #[arg(short, long)]
        aggregator: Option<String>,

        /// Sorts the runs by commit order instead of score.
        #[arg(short, long)]
        commit_order: bool,
    },
    /// Stages the results and commits them.
    Commit {
        /// The commit message.
        message: String,
    },
    /// Lists the experiments, or activates the specified one.
    Experiment {
        /// The experiment to activate.
        name: Option<String>,
    },
    /// Prints the machine name, or sets it.
    Machine {
        /// The new machine name.
        name: Option<String>,
    },
    /// Lists the available aggregators.
    Aggregators,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;

    use super::Arguments;
    use super::Command;

    #[test]
    fn definition() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn list_flags() {
        let arguments =
            Arguments::try_parse_from(["benchmark-keeper", "list", "-l", "3", "-a", "ranking", "-c", "-v"])
                .expect("Valid");

        assert!(arguments.verbose);
        match arguments.command {
            Command::List {
                limit,
                aggregator,
                commit_order,
            } => {
                assert_eq!(limit.map(|limit| limit.get()), Some(3));
                assert_eq!(aggregator.as_deref(), Some("ranking"));
                assert!(commit_order);
            }
            command => panic!("Unexpected command {command:?}"),
        }
    }

    #[test]
    fn zero_limit_rejected() {
        assert!(Arguments::try_parse_from(["benchmark-keeper", "list", "-l", "0"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Arguments::try_parse_from(["benchmark-keeper", "-v", "-q", "aggregators"]).is_err());
    }
}
