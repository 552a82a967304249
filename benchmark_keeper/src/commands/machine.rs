//!
//! The `machine` command.
//!

use crate::context::Context;

///
/// Prints the machine name, or sets it if `name` is given.
///
pub fn run(context: &mut Context, name: Option<String>) -> anyhow::Result<()> {
    match name {
        Some(name) => {
            context.set_machine_name(name)?;
            context
                .console()
                .status("Updated", format!("machine name `{}`", context.machine_name()));
        }
        None => println!("{}", context.machine_name()),
    }
    Ok(())
}
