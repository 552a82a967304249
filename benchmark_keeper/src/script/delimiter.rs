//!
//! The script output delimiter.
//!

use crate::console::Console;

///
/// Delimits the output of a script while alive.
///
pub struct ScriptDelimiter<'a> {
    /// The console output.
    console: &'a Console,
}

impl<'a> ScriptDelimiter<'a> {
    ///
    /// Prints the opening delimiter.
    ///
    pub fn new(console: &'a Console, script: &str) -> Self {
        console.delimiter(format!("Running {script}"));
        Self { console }
    }
}

impl Drop for ScriptDelimiter<'_> {
    fn drop(&mut self) {
        self.console.delimiter("Done");
    }
}
