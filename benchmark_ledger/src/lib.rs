//!
//! The benchmark ledger library.
//!
//! Keeps the runs of benchmark experiments in a report file tracked by version control,
//! reconstructs their history from the report snapshots of past commits, and scores them
//! against each other.
//!

pub mod aggregator;
pub mod digest;
pub mod history;
pub mod listing;
pub mod model;
pub mod reconciler;
pub mod store;

pub use self::aggregator::independent::IndependentAggregator;
pub use self::aggregator::ranking::RankingAggregator;
pub use self::aggregator::reduction::Reduction;
pub use self::aggregator::registry::Registry as AggregatorRegistry;
pub use self::aggregator::Aggregator;
pub use self::digest::digest;
pub use self::history::Commit;
pub use self::history::HistoryProvider;
pub use self::listing::annotate;
pub use self::listing::Options as ListingOptions;
pub use self::model::benchmark_result::BenchmarkResult;
pub use self::model::commit_data::AnnotatedCommitData;
pub use self::model::commit_data::CommitData;
pub use self::model::report::Report;
pub use self::model::run::BenchmarkRun;
pub use self::model::run::Benchmarks;
pub use self::reconciler::Reconciler;
pub use self::reconciler::SkipReason;
pub use self::reconciler::Timeline;
pub use self::store::error::Error as StoreError;
pub use self::store::RunStore;
