//!
//! The console output.
//!

use std::fmt::Display;

use colored::Colorize;

///
/// The console output, honoring the verbosity flags.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Console {
    /// Whether the diagnostic messages are printed.
    verbose: bool,
    /// Whether the status messages are suppressed.
    quiet: bool,
}

impl Console {
    /// The width the status verbs are right-aligned to.
    const STATUS_WIDTH: usize = 12;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    ///
    /// Prints a status line with a highlighted verb.
    ///
    pub fn status(&self, verb: &str, message: impl Display) {
        if self.quiet {
            return;
        }
        println!(
            "{} {message}",
            format!("{verb:>width$}", width = Self::STATUS_WIDTH)
                .bright_green()
                .bold()
        );
    }

    ///
    /// Prints a plain informational line.
    ///
    pub fn notice(&self, message: impl Display) {
        if self.quiet {
            return;
        }
        println!("{message}");
    }

    ///
    /// Prints a diagnostic line if verbose output is enabled.
    ///
    pub fn verbose(&self, message: impl Display) {
        if !self.verbose || self.quiet {
            return;
        }
        println!("{}", message.to_string().dimmed());
    }

    ///
    /// Prints a warning line.
    ///
    pub fn warning(&self, message: impl Display) {
        if self.quiet {
            return;
        }
        println!(
            "{} {message}",
            format!("{:>width$}", "Warning", width = Self::STATUS_WIDTH)
                .bright_yellow()
                .bold()
        );
    }

    ///
    /// Prints an error line. Errors are never suppressed.
    ///
    pub fn error(&self, message: impl Display) {
        eprintln!("{} {message}", "error:".bright_red().bold());
    }

    ///
    /// Prints a script output delimiter line.
    ///
    pub fn delimiter(&self, message: impl Display) {
        if self.quiet {
            return;
        }
        println!("{}", format!("--- {message}").yellow());
    }
}
