//!
//! The benchmark keeper executable.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => error.exit(),
    };
    let console = benchmark_keeper::Console::new(arguments.verbose, arguments.quiet);

    let exit_code = match main_inner(arguments, console) {
        Ok(()) => benchmark_keeper::EXIT_CODE_SUCCESS,
        Err(error) => {
            console.error(format!("{error:#}"));
            benchmark_keeper::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments, console: benchmark_keeper::Console) -> anyhow::Result<()> {
    let git = benchmark_keeper::Git::discover()?;
    console.verbose(format!("Repository root: {}", git.root().display()));
    let mut context = benchmark_keeper::Context::load(git.root().to_owned(), console)?;

    match arguments.command {
        Command::Benchmark { dry, force } => {
            benchmark_keeper::commands::benchmark::run(&context, &git, dry, force)
        }
        Command::List {
            limit,
            aggregator,
            commit_order,
        } => benchmark_keeper::commands::list::run(
            &context,
            &git,
            limit,
            aggregator.as_deref(),
            commit_order,
        ),
        Command::Commit { message } => {
            benchmark_keeper::commands::commit::run(&context, &git, message.as_str())
        }
        Command::Experiment { name } => {
            benchmark_keeper::commands::experiment::run(&mut context, name)
        }
        Command::Machine { name } => benchmark_keeper::commands::machine::run(&mut context, name),
        Command::Aggregators => benchmark_keeper::commands::aggregators::run(&context),
    }
}
