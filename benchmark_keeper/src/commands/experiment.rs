//!
//! The `experiment` command.
//!

use colored::Colorize;

use crate::context::Context;

///
/// Lists the experiments, or activates one if `name` is given.
///
pub fn run(context: &mut Context, name: Option<String>) -> anyhow::Result<()> {
    if let Some(name) = name {
        context.set_active_experiment(name)?;
        if let Some(name) = context.active_experiment_name() {
            context
                .console()
                .status("Activated", format!("experiment `{name}`"));
        }
        return Ok(());
    }

    let experiments = &context.repository_config().experiments;
    if experiments.is_empty() {
        println!(
            "No experiments declared in {}",
            context.repository_config_path().display()
        );
        return Ok(());
    }
    for experiment in experiments.iter() {
        let line = format!("{} (version {})", experiment.name, experiment.version);
        if context.active_experiment_name() == Some(experiment.name.as_str()) {
            println!("* {}", line.bright_green().bold());
        } else {
            println!("  {line}");
        }
    }
    Ok(())
}
