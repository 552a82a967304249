//!
//! The benchmark ledger data model.
//!

pub mod benchmark_result;
pub mod commit_data;
pub mod report;
pub mod run;
