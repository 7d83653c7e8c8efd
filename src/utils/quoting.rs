//! Shell quoting for printing planned commands

use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_@%+=:,./-]").expect("static regex is valid"));

/// Quote a single argument so it can be pasted into a POSIX shell.
///
/// Arguments made only of safe characters are returned unchanged. Everything
/// else is wrapped in single quotes, with embedded single quotes written as
/// `'"'"'`.
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if !UNSAFE_CHARS.is_match(arg) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

/// Render a program and its arguments as one shell-quoted, space-joined line
pub fn render_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    std::iter::once(quote_arg(program))
        .chain(args.iter().map(|arg| quote_arg(arg.as_ref())))
        .collect::<Vec<_>>()
        .join(" ")
}
