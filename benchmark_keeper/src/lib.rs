//!
//! The benchmark keeper library.
//!

pub mod commands;
pub mod config;
pub mod console;
pub mod context;
pub mod git;
pub mod script;

pub use self::config::experiment::Experiment;
pub use self::config::local::LocalConfig;
pub use self::config::repository::RepositoryConfig;
pub use self::console::Console;
pub use self::context::Context;
pub use self::git::Git;
pub use self::git::Stager;
pub use self::script::error::BenchmarkOutputError;
pub use self::script::ScriptRunner;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
