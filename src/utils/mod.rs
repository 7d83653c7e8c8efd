//! Utility modules for common functionality

pub mod exit_codes;
pub mod quoting;

// Re-export commonly used functions
pub use exit_codes::{exit_code_for_error, get_exit_code_description, process_exit_code};
pub use quoting::{quote_arg, render_command};
