//! Terminal reporting
//!
//! Status lines go to stdout; WARN/ERROR diagnostics go to stderr with
//! colored tags. Progress bars are hidden in quiet mode.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal output settings shared by all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    pub quiet: bool,
    pub verbose: bool,
}

impl Console {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Print a status line unless quiet.
    pub fn say(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    /// Print a per-item detail line in verbose mode.
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose && !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    /// Print a warning diagnostic to stderr. Not silenced by quiet mode.
    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "WARN:".yellow().bold(), message.as_ref());
    }

    /// Print an error diagnostic to stderr. Not silenced by quiet mode.
    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "ERROR:".red().bold(), message.as_ref());
    }

    /// Print a supplementary diagnostic line to stderr.
    pub fn note(&self, message: impl AsRef<str>) {
        eprintln!("{}", message.as_ref());
    }

    /// A progress bar over `len` items, hidden in quiet mode.
    pub fn progress(&self, len: u64) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template("[{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_progress_is_hidden() {
        let console = Console::new(true, false);
        assert!(console.progress(10).is_hidden());
    }

    #[test]
    fn test_default_progress_has_length() {
        let console = Console::new(false, false);
        let bar = console.progress(3);
        assert_eq!(bar.length(), Some(3));
    }
}
