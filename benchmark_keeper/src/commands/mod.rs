//!
//! The benchmark keeper commands.
//!

pub mod aggregators;
pub mod benchmark;
pub mod commit;
pub mod experiment;
pub mod list;
pub mod machine;

use crate::context::Context;
use crate::git::Stager;

///
/// Stages the report and the repository configuration.
///
pub fn stage_tracked_files(context: &Context, stager: &dyn Stager) -> anyhow::Result<()> {
    for path in [context.report_path(), context.repository_config_path()] {
        context.console().status("Staging", path.display());
        stager.stage(path.as_path())?;
    }
    Ok(())
}
