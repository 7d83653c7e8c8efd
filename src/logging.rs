//! Status output shared by the gh-utils programs

use colored::*;

/// Logger for workflow steps with consistent formatting
///
/// Every line is prefixed with the logger's label (usually the program
/// name) in cyan/bold, so output from the three programs is easy to tell
/// apart when they are chained in a script.
///
/// ## Example
///
/// ```rust,no_run
/// use gh_utils::Logger;
///
/// let logger = Logger::new("ghcrar");
/// logger.info("Remote origin exists.");
/// logger.success("Added remote: git@github.com:octocat/hello.git");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    label: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Logger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn info(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} | {}", self.label.cyan().bold(), msg.red());
    }

    /// Announce a step that dry-run mode is reporting instead of (or before) running
    pub fn dry_run(&self, msg: &str) {
        println!(
            "{} | {} {}",
            self.label.cyan().bold(),
            "[dry-run]".magenta(),
            msg
        );
    }
}
