//!
//! The `list` command.
//!

use std::num::NonZeroUsize;

use colored::Colorize;

use benchmark_ledger::AnnotatedCommitData;
use benchmark_ledger::HistoryProvider;
use benchmark_ledger::ListingOptions;
use benchmark_ledger::Reconciler;

use crate::context::Context;

///
/// Prints the scored runs of the active experiment on this machine, best last.
///
pub fn run(
    context: &Context,
    history: &dyn HistoryProvider,
    limit: Option<NonZeroUsize>,
    aggregator: Option<&str>,
    commit_order: bool,
) -> anyhow::Result<()> {
    let console = context.console();
    let experiment = context.active_experiment()?;
    let aggregator = context.aggregators().get_or_default(aggregator)?;
    let store = context.store();
    store.read()?;

    println!(
        "Comparing results for machine: {}\n",
        context.machine_name()
    );

    let reconciler = Reconciler::new(history, &store, context.report_relative_path());
    let timeline = reconciler.timeline(
        experiment.name.as_str(),
        experiment.version,
        context.machine_name(),
    )?;
    for (commit, reason) in timeline.skipped.iter() {
        console.verbose(format!("Skipped commit {}: {reason}", commit.hash));
    }

    if timeline.entries.is_empty() {
        println!(
            "No results found for experiment {} on machine {}",
            experiment.name,
            context.machine_name()
        );
        return Ok(());
    }

    let options = ListingOptions {
        limit: limit.map(NonZeroUsize::get),
        commit_order,
    };
    let annotated = benchmark_ledger::annotate(
        timeline.entries,
        timeline.current_tag.as_deref(),
        aggregator.as_ref(),
        &options,
    );
    let last = annotated.len().saturating_sub(1);
    for (index, entry) in annotated.iter().enumerate() {
        let is_current = timeline.current_tag.as_deref() == Some(entry.data.run.tag.as_str());
        println!(
            "{}",
            render_line(entry, aggregator.unit(), index == last, is_current)
        );
    }
    Ok(())
}

///
/// Renders one listing line.
///
pub fn render_line(
    entry: &AnnotatedCommitData,
    unit: &str,
    is_best: bool,
    is_current: bool,
) -> String {
    let mut line = format!(
        "{:012.2} [{unit}], {}, {}",
        entry.score,
        entry.short_hash(),
        entry.data.subject
    );
    if is_best {
        line.push_str(format!(" {}", "(best)".yellow()).as_str());
    }
    if is_current {
        line.push_str(format!(" {}", "(current)".yellow()).as_str());
    }
    line
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use benchmark_ledger::AnnotatedCommitData;
    use benchmark_ledger::BenchmarkRun;
    use benchmark_ledger::CommitData;

    use super::render_line;

    fn entry(hash: &str, subject: &str, score: f64) -> AnnotatedCommitData {
        let run = BenchmarkRun::new(
            "sorting".to_owned(),
            1,
            "MyMachine".to_owned(),
            BTreeMap::new(),
            String::new(),
        );
        AnnotatedCommitData::new(
            CommitData::new(hash.to_owned(), subject.to_owned(), run),
            score,
        )
    }

    #[test]
    fn plain() {
        colored::control::set_override(false);
        let entry = entry(
            "0123456789abcdef0123456789abcdef01234567",
            "Speed up",
            7.5,
        );

        assert_eq!(
            render_line(&entry, "unit", false, false),
            "000000007.50 [unit], 0123456789, Speed up"
        );
    }

    #[test]
    fn best_and_current() {
        colored::control::set_override(false);
        let entry = entry(CommitData::CURRENT_HASH, CommitData::CURRENT_SUBJECT, 1.0);

        assert_eq!(
            render_line(&entry, "mean rank", true, true),
            "000000001.00 [mean rank], 0000000000, Current (best) (current)"
        );
    }
}
