//!
//! The scored listing of runs.
//!

#[cfg(test)]
mod tests;

use crate::aggregator::Aggregator;
use crate::model::commit_data::AnnotatedCommitData;
use crate::model::commit_data::CommitData;
use crate::model::run::Benchmarks;

///
/// The listing options.
///
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// The number of trailing entries to keep.
    pub limit: Option<usize>,
    /// Whether to keep the chronological order instead of sorting by score.
    pub commit_order: bool,
}

///
/// Scores the chronological entries and orders them for display.
///
/// Unless the chronological order is requested, the best entry is the last one.
/// The entry of the `current_tag` run is always kept, even if it falls outside the limit.
///
pub fn annotate(
    entries: Vec<CommitData>,
    current_tag: Option<&str>,
    aggregator: &dyn Aggregator,
    options: &Options,
) -> Vec<AnnotatedCommitData> {
    let scores = {
        let results: Vec<&Benchmarks> = entries.iter().map(|data| &data.run.benchmarks).collect();
        aggregator.aggregate(results.as_slice())
    };

    let mut annotated: Vec<AnnotatedCommitData> = entries
        .into_iter()
        .zip(scores)
        .map(|(data, score)| AnnotatedCommitData::new(data, score))
        .collect();

    if !options.commit_order {
        if aggregator.lower_is_better() {
            annotated.sort_by(|left, right| right.score.total_cmp(&left.score));
        } else {
            annotated.sort_by(|left, right| left.score.total_cmp(&right.score));
        }
    }

    if let Some(limit) = options.limit {
        let window = annotated.split_off(annotated.len().saturating_sub(limit));
        let pinned = current_tag.and_then(|tag| {
            annotated
                .into_iter()
                .find(|entry| entry.data.run.tag == tag)
        });
        annotated = pinned.into_iter().chain(window).collect();
    }

    annotated
}
