//!
//! The `commit` command.
//!

use crate::context::Context;
use crate::git::Git;

///
/// Stages the report and the repository configuration, and commits them.
///
pub fn run(context: &Context, git: &Git, message: &str) -> anyhow::Result<()> {
    super::stage_tracked_files(context, git)?;
    context.console().status("Committing", message);
    git.commit(message)
}
